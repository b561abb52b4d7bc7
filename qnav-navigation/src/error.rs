//! Erros de navegação

use qnav_core::QuantumError;
use thiserror::Error;

pub type NavigationResult<T> = Result<T, NavigationError>;

/// Erros do motor de navegação
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavigationError {
    /// Falha do simulador ou de um algoritmo
    #[error("Quantum error: {0}")]
    Quantum(#[from] QuantumError),

    /// Seleção pedida sobre uma lista vazia
    #[error("No candidates to select from")]
    NoCandidates,

    /// Configuração inválida
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Falha ao ler ou interpretar a configuração
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),
}
