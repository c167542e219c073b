//! Property-based tests for the statevector engine.
//!
//! Checks the algebraic identities of the gate set (self-inverse gates,
//! norm preservation) and the invariants of the rendered output.

use alsvin_circuit::{Circuit, Gate, QubitId};
use alsvin_sim::{NEGLIGIBLE, Statevector};
use proptest::prelude::*;

/// Generate one gate valid for a register of `num_qubits` (>= 2) qubits.
fn arb_gate(num_qubits: u32) -> impl Strategy<Value = Gate> {
    let q = 0..num_qubits;
    prop_oneof![
        q.clone().prop_map(|q| Gate::H { qubit: QubitId(q) }),
        q.clone().prop_map(|q| Gate::X { qubit: QubitId(q) }),
        q.clone().prop_map(|q| Gate::Y { qubit: QubitId(q) }),
        q.clone().prop_map(|q| Gate::Z { qubit: QubitId(q) }),
        (0..num_qubits, 0..num_qubits - 1).prop_map(|(c, t)| {
            // Skip the control index so control != target always holds.
            let t = if t >= c { t + 1 } else { t };
            Gate::Cnot {
                control: QubitId(c),
                target: QubitId(t),
            }
        }),
    ]
}

/// A register size and a gate sequence valid for it.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate(num_qubits), 0..=12).prop_map(move |gates| {
            let mut circuit = Circuit::new(num_qubits);
            for gate in gates {
                circuit.push(gate).expect("generated gate must be valid");
            }
            circuit
        })
    })
}

/// Prepare a state by running a random prefix circuit.
fn state_from(circuit: &Circuit) -> Statevector {
    Statevector::run(circuit).expect("valid circuit must simulate")
}

fn states_close(a: &Statevector, b: &Statevector) -> bool {
    a.amplitudes()
        .iter()
        .zip(b.amplitudes())
        .all(|(x, y)| (x - y).norm() < 1e-9)
}

proptest! {
    #[test]
    fn initial_state_is_all_zero_basis(num_qubits in 1_u32..=10) {
        let sv = Statevector::new(num_qubits).unwrap();
        prop_assert_eq!(sv.amplitudes().len(), 1 << num_qubits);
        prop_assert!((sv.amplitudes()[0].norm() - 1.0).abs() < 1e-12);
        prop_assert!(sv.amplitudes()[1..].iter().all(|a| a.norm() == 0.0));
    }

    #[test]
    fn self_inverse_gates_cancel(circuit in arb_circuit(), q in 0_u32..2) {
        let original = state_from(&circuit);
        for gate in [
            Gate::H { qubit: QubitId(q) },
            Gate::X { qubit: QubitId(q) },
            Gate::Z { qubit: QubitId(q) },
            Gate::Cnot { control: QubitId(q), target: QubitId(1 - q.min(1)) },
        ] {
            let mut sv = original.clone();
            sv.apply(&gate).unwrap();
            sv.apply(&gate).unwrap();
            prop_assert!(states_close(&sv, &original), "{gate} applied twice is not identity");
        }
    }

    #[test]
    fn unitary_sequences_preserve_norm(circuit in arb_circuit()) {
        let sv = state_from(&circuit);
        prop_assert!((sv.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rendered_entries_respect_threshold_and_width(circuit in arb_circuit()) {
        let sv = state_from(&circuit);
        let width = sv.num_qubits() as usize;
        for (label, amp) in sv.nonzero_amplitudes() {
            prop_assert_eq!(label.len(), width);
            prop_assert!(label.chars().all(|c| c == '0' || c == '1'));
            prop_assert!(amp.norm() > NEGLIGIBLE);
        }
    }

    #[test]
    fn gate_order_is_significant_for_noncommuting_pairs(q in 0_u32..3) {
        // H then X differs from X then H on the same qubit.
        let mut hx = Statevector::new(3).unwrap();
        hx.apply(&Gate::H { qubit: QubitId(q) }).unwrap();
        hx.apply(&Gate::X { qubit: QubitId(q) }).unwrap();

        let mut xh = Statevector::new(3).unwrap();
        xh.apply(&Gate::X { qubit: QubitId(q) }).unwrap();
        xh.apply(&Gate::H { qubit: QubitId(q) }).unwrap();

        prop_assert!(!states_close(&hx, &xh));
    }
}
