//! Configuração do motor de navegação (navigation.toml)
//!
//! Todas as constantes numéricas do motor vivem aqui, com os valores padrão
//! abaixo. Campos omitidos no TOML assumem o padrão.
//!
//! ```toml
//! score_threshold = 0.8
//! avoidance_steps = 250
//! seed = 42
//!
//! [annealing]
//! tunneling_decay = 0.5
//! ```

use crate::error::{NavigationError, NavigationResult};
use qnav_algorithms::AnnealSchedule;
use qnav_core::{HARD_MAX_QUBITS, MAX_QUBITS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuração do [`NavigationEngine`](crate::NavigationEngine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Pontuação mínima para um candidato virar alvo da busca
    pub score_threshold: f64,
    /// Qubits da tabela de custo variacional
    pub cost_qubits: usize,
    /// Iterações da otimização variacional
    pub cost_iterations: usize,
    /// Passo de perturbação da otimização variacional
    pub learning_rate: f64,
    /// Bits do estado de desvio
    pub avoidance_qubits: usize,
    /// Passos de recozimento
    pub avoidance_steps: usize,
    /// Raio de segurança em torno de cada perigo
    pub safety_radius: f64,
    /// Multiplicador da penalidade de proximidade
    pub proximity_penalty: f64,
    /// Deslocamento aplicado por bit do estado de desvio
    pub adjustment_step: f64,
    /// Bits de precisão da estimação de fase
    pub prediction_qubits: usize,
    /// Quantas previsões de trajetória retornar
    pub prediction_count: usize,
    /// Segundos por índice de fase
    pub seconds_per_index: f64,
    /// Amostras da previsão de ambiente
    pub environment_shots: usize,
    /// Máximo de qubits aceito pelos algoritmos
    pub max_qubits: usize,
    /// Seed opcional; sem ela o gerador vem da entropia do sistema
    pub seed: Option<u64>,
    /// Cronograma do recozimento
    pub annealing: AnnealSchedule,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.75,
            cost_qubits: 6,
            cost_iterations: 30,
            learning_rate: 0.1,
            avoidance_qubits: 8,
            avoidance_steps: 100,
            safety_radius: 0.2,
            proximity_penalty: 10.0,
            adjustment_step: 0.1,
            prediction_qubits: 6,
            prediction_count: 10,
            seconds_per_index: 10.0,
            environment_shots: 1024,
            max_qubits: MAX_QUBITS,
            seed: None,
            annealing: AnnealSchedule::default(),
        }
    }
}

impl NavigationConfig {
    /// Lê configuração de uma string TOML e valida
    pub fn from_toml_str(content: &str) -> NavigationResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| NavigationError::ConfigLoad(format!("Failed to parse navigation config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Lê configuração de um arquivo TOML e valida
    pub fn from_file(path: &Path) -> NavigationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavigationError::ConfigLoad(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serializa para TOML
    pub fn to_toml_string(&self) -> NavigationResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NavigationError::ConfigLoad(format!("Failed to serialize navigation config: {e}")))
    }

    /// Rejeita valores sem sentido
    pub fn validate(&self) -> NavigationResult<()> {
        if self.max_qubits == 0 || self.max_qubits > HARD_MAX_QUBITS {
            return Err(invalid(format!(
                "max_qubits must be in 1..={HARD_MAX_QUBITS}, got {}",
                self.max_qubits
            )));
        }

        for (name, qubits) in [
            ("cost_qubits", self.cost_qubits),
            ("avoidance_qubits", self.avoidance_qubits),
            ("prediction_qubits", self.prediction_qubits),
        ] {
            if qubits == 0 || qubits > self.max_qubits {
                return Err(invalid(format!(
                    "{name} must be in 1..={}, got {qubits}",
                    self.max_qubits
                )));
            }
        }

        if !self.score_threshold.is_finite() {
            return Err(invalid(format!("score_threshold must be finite, got {}", self.score_threshold)));
        }

        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("safety_radius", self.safety_radius),
            ("proximity_penalty", self.proximity_penalty),
            ("adjustment_step", self.adjustment_step),
            ("seconds_per_index", self.seconds_per_index),
            ("annealing.fluctuation_weight", self.annealing.fluctuation_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be finite and non-negative, got {value}")));
            }
        }

        for (name, value) in [
            ("annealing.tunneling_decay", self.annealing.tunneling_decay),
            ("annealing.temperature_floor", self.annealing.temperature_floor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be finite and positive, got {value}")));
            }
        }

        if self.cost_iterations == 0 {
            return Err(invalid("cost_iterations must be at least 1".into()));
        }
        if self.prediction_count == 0 {
            return Err(invalid("prediction_count must be at least 1".into()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> NavigationError {
    NavigationError::InvalidConfiguration(message)
}
