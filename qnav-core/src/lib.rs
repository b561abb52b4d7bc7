//! # ⚛️ qnav-core — State-Vector Simulator
//!
//! Simulação de registros quânticos pequenos por vetor de estado: 2^n
//! amplitudes complexas, portas aplicadas no lugar e medição com colapso.
//!
//! ## Computational Complexity
//!
//! **Memória, O(2^n):**
//! - 16 bytes por amplitude; n = 20 ocupa ~16 MiB
//! - `InvalidDimension` acima do máximo configurado, antes de alocar
//!
//! **Portas, O(2^n) cada:**
//! - Hadamard aloca um vetor novo (leitura do anterior, escrita no novo)
//! - Pauli-X, fase e CNOT operam no lugar
//!
//! **Medição, O(2^n):**
//! - Caminhada pela probabilidade acumulada + colapso + renormalização
//!
//! ## Portas Suportadas
//!
//! | Porta | Método | Efeito |
//! |-------|--------|--------|
//! | H | `apply_hadamard` | superposição |
//! | X | `apply_pauli_x` | NOT quântico |
//! | P(θ) | `apply_phase` | e^(iθ) no bit 1 |
//! | CNOT | `apply_controlled_not` | X no alvo se controle = 1 |
//! | Oráculo | `apply_phase_oracle` | −1 nos índices marcados |
//!
//! ## Exemplo
//!
//! ```
//! use qnav_core::QuantumState;
//!
//! let mut state = QuantumState::new(2)?;
//! state.apply_hadamard(0)?;
//! state.apply_hadamard(1)?;
//! state.apply_controlled_not(0, 1)?;
//!
//! for p in state.probabilities() {
//!     assert!((p - 0.25).abs() < 1e-9);
//! }
//! # Ok::<(), qnav_core::QuantumError>(())
//! ```

pub mod amplitude;
pub mod error;
pub mod state;

pub use amplitude::{phase_factor, qubit_bit, ComplexAmplitude};
pub use error::{QuantumError, QuantumResult};
pub use state::{
    validate_dimension, QuantumState, HARD_MAX_QUBITS, MAX_QUBITS, NORM_TOLERANCE,
};
