//! Registros de resultado dos algoritmos

use serde::{Deserialize, Serialize};

/// Resultado da busca por amplificação de amplitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Índice de maior probabilidade (empate → menor índice)
    pub state_index: usize,
    /// Probabilidade desse índice
    pub probability: f64,
    /// Rodadas de amplificação executadas
    pub iterations: usize,
    /// Massa total de probabilidade sobre os alvos
    pub success_probability: f64,
}

/// Resultado da otimização variacional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationalResult {
    /// Menor valor esperado encontrado (+∞ sem iterações)
    pub energy: f64,
    /// Parâmetros ativos quando o melhor valor foi visto
    pub parameters: Vec<f64>,
    /// Iterações executadas
    pub iterations: usize,
    /// Quantas vezes o incumbente melhorou
    pub improvements: usize,
}

/// Resultado do recozimento simulado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnealResult {
    /// Melhor estado (bit-string como inteiro)
    pub state: usize,
    /// Custo do melhor estado
    pub cost: f64,
    /// Passos executados
    pub steps: usize,
    /// Movimentos aceitos
    pub accepted_moves: usize,
}
