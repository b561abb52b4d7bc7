//! Tipos de domínio e registros de resultado da navegação
//!
//! O motor não conhece rotas, perigos ou previsões concretas; ele só lê
//! pontuação, posição ou peso pelos traits abaixo e devolve referências para
//! a fatia do chamador.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ponto no plano
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distância euclidiana
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Velocidade no plano
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

impl Velocity {
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    /// Ângulo de direção, atan2(vy, vx)
    pub fn heading(&self) -> f64 {
        self.vy.atan2(self.vx)
    }
}

/// Candidato com pontuação (maior é melhor)
pub trait Scored {
    fn score(&self) -> f64;
}

/// Objeto com posição no plano
pub trait Positioned {
    fn position(&self) -> Point;
}

/// Previsão com peso de probabilidade
pub trait Weighted {
    fn probability(&self) -> f64;
}

impl Positioned for Point {
    fn position(&self) -> Point {
        *self
    }
}

impl Weighted for TrajectoryPrediction {
    fn probability(&self) -> f64 {
        self.probability
    }
}

/// Estimativa de redução de custo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReduction {
    /// Menor valor esperado encontrado
    pub energy: f64,
    /// (1 − energia) · 100
    pub reduction_percent: f64,
    /// Parâmetros do ansatz no melhor valor
    pub parameters: Vec<f64>,
}

/// Relatório de desvio de perigos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvoidanceReport {
    /// Estado de desvio escolhido (um bit por ajuste)
    pub state: usize,
    /// Penalidade de proximidade desse estado
    pub cost: f64,
    /// max(0, 100 − custo · 10)
    pub safety_improvement: f64,
}

/// Uma previsão de trajetória
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPrediction {
    /// Índice na distribuição de fase
    pub index: usize,
    pub probability: f64,
    /// índice / tamanho · 2π
    pub phase: f64,
    /// Segundos à frente
    pub time_offset: f64,
}

/// Previsão de ambiente por superposição
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentForecast {
    pub num_qubits: usize,
    /// Distribuição exata do circuito
    pub probabilities: Vec<f64>,
    /// Contagens amostradas, chaveadas pelo rótulo binário (qubit 0 à direita)
    pub counts: BTreeMap<String, usize>,
    pub shots: usize,
}

impl EnvironmentForecast {
    /// Frequência observada de um rótulo
    pub fn frequency(&self, label: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(label).copied().unwrap_or(0) as f64 / self.shots as f64
    }
}
