//! Statevector simulation engine.
//!
//! An n-qubit state is a dense vector of `2^n` complex amplitudes. Gates are
//! applied by index arithmetic: a gate on qubit `q` pairs every index with
//! the qubit-`q` bit clear against the same index with that bit set, and
//! mixes or permutes the paired amplitudes. No gate matrices are built.

use num_complex::Complex64;
use tracing::{debug, instrument};

use alsvin_circuit::{Circuit, Gate, QubitId};

use crate::error::{SimError, SimResult};

/// Largest register the engine will allocate.
///
/// 24 qubits is 2^24 amplitudes at 16 bytes each, 256 MiB. Anything larger
/// is a memory-exhaustion hazard for a request-serving process.
pub const MAX_QUBITS: u32 = 24;

/// Amplitudes with magnitude at or below this are treated as zero when
/// listing nonzero basis states. Display rounding is separate; internal
/// arithmetic always keeps full f64 precision.
pub const NEGLIGIBLE: f64 = 1e-12;

/// A statevector representing a quantum state.
///
/// Owned exclusively by one in-flight simulation; nothing is shared or
/// retained across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: u32,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    ///
    /// `num_qubits == 0` yields the degenerate length-1 vector `[1]`.
    pub fn new(num_qubits: u32) -> SimResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(SimError::InvalidSize {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Run a whole circuit: initialize, apply every gate in order, normalize.
    ///
    /// Fails on the first invalid gate without producing a partial result.
    #[instrument(skip(circuit), fields(num_qubits = circuit.num_qubits(), num_gates = circuit.gates().len()))]
    pub fn run(circuit: &Circuit) -> SimResult<Self> {
        let mut state = Self::new(circuit.num_qubits())?;
        for gate in circuit.gates() {
            state.apply(gate)?;
        }
        state.normalize();
        debug!("simulation complete");
        Ok(state)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a gate to the state, validating its qubit indices first.
    pub fn apply(&mut self, gate: &Gate) -> SimResult<()> {
        match *gate {
            Gate::H { qubit } => {
                let q = self.checked(gate, qubit)?;
                self.apply_h(q);
            }
            Gate::X { qubit } => {
                let q = self.checked(gate, qubit)?;
                self.apply_x(q);
            }
            Gate::Y { qubit } => {
                let q = self.checked(gate, qubit)?;
                self.apply_y(q);
            }
            Gate::Z { qubit } => {
                let q = self.checked(gate, qubit)?;
                self.apply_z(q);
            }
            Gate::Cnot { control, target } => {
                let c = self.checked(gate, control)?;
                let t = self.checked(gate, target)?;
                if c == t {
                    return Err(SimError::InvalidGate {
                        gate: "CNOT",
                        reason: format!("control and target must differ, both are {control}"),
                    });
                }
                self.apply_cnot(c, t);
            }
        }
        Ok(())
    }

    fn checked(&self, gate: &Gate, qubit: QubitId) -> SimResult<usize> {
        if qubit.0 >= self.num_qubits {
            return Err(SimError::IndexOutOfRange {
                gate: gate.name(),
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(qubit.0 as usize)
    }

    // =========================================================================
    // Gate kernels
    //
    // Each kernel iterates only over indices with the target bit clear and
    // updates both members of the (bit clear, bit set) pair from values
    // captured before either write. Reading back an already-written pair
    // member would corrupt the transform.
    // =========================================================================

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    // Swapping the (target bit clear, target bit set) halves of every
    // control=1 row visits each pair exactly once, so no snapshot copy of
    // the vector is needed.
    fn apply_cnot(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Normalization and rendering
    // =========================================================================

    /// Euclidean norm: square root of the summed squared magnitudes.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Rescale so the norm is 1. An identically-zero vector is left
    /// unchanged rather than divided by zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            return;
        }
        for amp in &mut self.amplitudes {
            *amp /= norm;
        }
    }

    /// Binary label of a basis state, zero-padded to width n, most
    /// significant qubit first. Width 0 is the empty string.
    pub fn basis_label(&self, index: usize) -> String {
        if self.num_qubits == 0 {
            return String::new();
        }
        format!("{:0width$b}", index, width = self.num_qubits as usize)
    }

    /// Lazily list the basis states whose amplitude is non-negligible.
    ///
    /// The iterator borrows the state and can be restarted by calling this
    /// again; nothing is precomputed.
    pub fn nonzero_amplitudes(&self) -> impl Iterator<Item = (String, Complex64)> + '_ {
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(_, amp)| amp.norm() > NEGLIGIBLE)
            .map(|(i, amp)| (self.basis_label(i), *amp))
    }

    /// Render the nonzero amplitudes as `"<label>: <amplitude>"` lines with
    /// four decimal places, for the wire format.
    pub fn format_entries(&self) -> Vec<String> {
        self.nonzero_amplitudes()
            .map(|(label, amp)| format!("{label}: {}", format_amplitude(amp)))
            .collect()
    }
}

/// Four-decimal rendering of one amplitude. A purely real value prints as a
/// bare real; otherwise both components are printed as `re+imi` / `re-imi`.
fn format_amplitude(amp: Complex64) -> String {
    if amp.im.abs() <= NEGLIGIBLE {
        format!("{:.4}", amp.re)
    } else if amp.re.abs() <= NEGLIGIBLE {
        format!("{:.4}i", amp.im)
    } else if amp.im < 0.0 {
        format!("{:.4}-{:.4}i", amp.re, -amp.im)
    } else {
        format!("{:.4}+{:.4}i", amp.re, amp.im)
    }
}
