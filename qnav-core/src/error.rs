//! Tipos de erro para qnav-core

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer no simulador e nos algoritmos
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Invalid dimension: {requested} qubits requested, supported range is 1..={maximum}")]
    InvalidDimension { requested: usize, maximum: usize },

    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("Controlled gate needs distinct qubits, got control = target = {0}")]
    ControlEqualsTarget(usize),

    #[error("Search requested with an empty target set")]
    EmptyTargetSet,

    #[error("Target index {index} outside the search space of {dimension} states")]
    TargetOutOfRange { index: usize, dimension: usize },

    #[error("Degenerate state: renormalization denominator {0:e}")]
    DegenerateState(f64),

    #[error("Malformed parameters: {0}")]
    MalformedParameters(String),
}
