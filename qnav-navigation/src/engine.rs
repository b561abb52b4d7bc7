//! Motor de navegação
//!
//! Fachada que traduz problemas de navegação para os algoritmos de
//! [`qnav_algorithms`]:
//!
//! | Operação | Algoritmo |
//! |----------|-----------|
//! | `select_best_candidate` | amplificação de amplitude |
//! | `estimate_cost_reduction` | otimização variacional |
//! | `score_avoidance` | recozimento com tunelamento |
//! | `predict_next_states` | estimação de fase |
//! | `forecast_environment` | circuito de superposição + amostragem |
//! | `collapse_environment` | escolha ponderada |
//!
//! Cada chamada cria instâncias novas dos algoritmos; o motor guarda apenas a
//! configuração e o gerador aleatório.

use crate::config::NavigationConfig;
use crate::domain::{
    AvoidanceReport, CostReduction, EnvironmentForecast, Point, Positioned, Scored,
    TrajectoryPrediction, Velocity, Weighted,
};
use crate::error::{NavigationError, NavigationResult};
use qnav_algorithms::{ranked, Annealer, AmplitudeSearch, PhaseEstimator, VariationalOptimizer};
use qnav_core::QuantumState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

/// Tabela de custo sobre `dimension` índices: (i mod 10)/10 + 0.5·sin(0.1·i)
pub fn cost_table(dimension: usize) -> Vec<f64> {
    (0..dimension)
        .map(|i| {
            let complexity = (i % 10) as f64 / 10.0;
            let penalty = (i as f64 * 0.1).sin() * 0.5;
            complexity + penalty
        })
        .collect()
}

/// Penalidade de proximidade de um estado de desvio.
///
/// Cada bit `b` do estado desloca a posição em `+step` (bit 1) ou `−step`
/// (bit 0) nos dois eixos; todo perigo a menos de `radius` da posição
/// deslocada soma `(radius − dist) · penalty`.
pub fn proximity_cost<H: Positioned>(
    hazards: &[H],
    position: Point,
    state: usize,
    config: &NavigationConfig,
) -> f64 {
    let mut cost = 0.0;
    for bit in 0..config.avoidance_qubits {
        let adjustment = if (state >> bit) & 1 == 1 {
            config.adjustment_step
        } else {
            -config.adjustment_step
        };
        let shifted = Point::new(position.x + adjustment, position.y + adjustment);

        for hazard in hazards {
            let dist = shifted.distance(&hazard.position());
            if dist < config.safety_radius {
                cost += (config.safety_radius - dist) * config.proximity_penalty;
            }
        }
    }
    cost
}

/// Motor de navegação
#[derive(Debug, Clone)]
pub struct NavigationEngine<R: Rng = StdRng> {
    config: NavigationConfig,
    rng: R,
}

impl NavigationEngine<StdRng> {
    /// Cria motor; usa `config.seed` se presente, senão entropia do sistema
    pub fn new(config: NavigationConfig) -> NavigationResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Cria motor determinístico
    pub fn seeded(mut config: NavigationConfig, seed: u64) -> NavigationResult<Self> {
        config.seed = Some(seed);
        Self::new(config)
    }
}

impl Default for NavigationEngine<StdRng> {
    fn default() -> Self {
        Self {
            config: NavigationConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> NavigationEngine<R> {
    /// Cria motor com gerador injetado
    pub fn with_rng(config: NavigationConfig, rng: R) -> NavigationResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Configuração em uso
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Escolhe o melhor candidato por amplificação de amplitude.
    ///
    /// Alvos são os índices com pontuação ≥ `score_threshold`; sem nenhum, o
    /// índice 0. Com um único candidato não há busca.
    pub fn select_best_candidate<'a, C: Scored>(&mut self, candidates: &'a [C]) -> NavigationResult<&'a C> {
        let first = candidates.first().ok_or(NavigationError::NoCandidates)?;
        let len = candidates.len();
        if len == 1 {
            return Ok(first);
        }

        let num_qubits = len.next_power_of_two().trailing_zeros() as usize;
        let mut targets: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.score() >= self.config.score_threshold)
            .map(|(i, _)| i)
            .collect();
        if targets.is_empty() {
            tracing::debug!(threshold = self.config.score_threshold, "no candidate qualifies, falling back to index 0");
            targets.push(0);
        }

        let mut search = AmplitudeSearch::with_max_qubits(num_qubits, targets, self.config.max_qubits)?;
        let result = search.search()?;

        tracing::info!(
            "amplitude search selected state {} with {:.1}% probability",
            result.state_index,
            result.probability * 100.0
        );
        tracing::info!(
            "search speedup: {} rounds vs {} classical checks",
            result.iterations,
            len
        );

        Ok(&candidates[result.state_index % len])
    }

    /// Estima a redução de custo de uma rota por otimização variacional
    pub fn estimate_cost_reduction(&mut self, waypoint_count: usize) -> NavigationResult<CostReduction> {
        let num_qubits = self.config.cost_qubits;
        let weights = cost_table(1usize << num_qubits);

        let mut optimizer =
            VariationalOptimizer::with_max_qubits(num_qubits, self.config.max_qubits, &mut self.rng)?
                .with_learning_rate(self.config.learning_rate);
        let result = optimizer.optimize(&weights, self.config.cost_iterations)?;

        let reduction_percent = (1.0 - result.energy) * 100.0;
        tracing::info!(
            "variational optimization over {} waypoints found minimum energy {:.4}",
            waypoint_count,
            result.energy
        );

        Ok(CostReduction {
            energy: result.energy,
            reduction_percent,
            parameters: result.parameters,
        })
    }

    /// Pontua o desvio de perigos a partir de `position` por recozimento
    pub fn score_avoidance<H: Positioned>(
        &mut self,
        hazards: &[H],
        position: Point,
    ) -> NavigationResult<AvoidanceReport> {
        let config = &self.config;
        let mut annealer =
            Annealer::with_max_qubits(config.avoidance_qubits, config.max_qubits, &mut self.rng)?
                .with_schedule(config.annealing);
        let result = annealer.anneal(
            |state| proximity_cost(hazards, position, state, config),
            config.avoidance_steps,
        );

        let safety_improvement = (100.0 - result.cost * 10.0).max(0.0);
        tracing::info!(
            "annealing around {} hazards found state {} with cost {:.4}",
            hazards.len(),
            result.state,
            result.cost
        );

        Ok(AvoidanceReport {
            state: result.state,
            cost: result.cost,
            safety_improvement,
        })
    }

    /// Prevê os próximos estados de trajetória por estimação de fase
    pub fn predict_next_states(&mut self, velocity: Velocity) -> NavigationResult<Vec<TrajectoryPrediction>> {
        let heading = velocity.heading();
        let mut estimator = PhaseEstimator::with_max_qubits(self.config.prediction_qubits, self.config.max_qubits)?;
        let probabilities = estimator.estimate(heading)?;
        let len = probabilities.len() as f64;

        let predictions: Vec<TrajectoryPrediction> = ranked(&probabilities, self.config.prediction_count)
            .into_iter()
            .map(|(index, probability)| TrajectoryPrediction {
                index,
                probability,
                phase: index as f64 / len * TAU,
                time_offset: index as f64 * self.config.seconds_per_index,
            })
            .collect();

        tracing::info!(
            "phase estimation of heading {:.4} complete: {} predictions generated",
            heading,
            predictions.len()
        );
        Ok(predictions)
    }

    /// Prevê o ambiente com o circuito de superposição.
    ///
    /// H em todos os qubits, fase `q·π/n` no qubit `q` e cadeia de CNOTs
    /// `q → q+1`; retorna a distribuição exata e `environment_shots`
    /// amostras.
    pub fn forecast_environment(&mut self, num_qubits: usize) -> NavigationResult<EnvironmentForecast> {
        let mut state = QuantumState::with_max_qubits(num_qubits, self.config.max_qubits)?;
        state.apply_hadamard_all()?;
        for q in 0..num_qubits {
            state.apply_phase(q, q as f64 * PI / num_qubits as f64)?;
        }
        for q in 0..num_qubits.saturating_sub(1) {
            state.apply_controlled_not(q, q + 1)?;
        }

        let shots = self.config.environment_shots;
        let counts = state
            .sample_counts(shots, &mut self.rng)
            .into_iter()
            .map(|(index, count)| (state.basis_label(index), count))
            .collect();

        tracing::info!("environment forecast sampled: {} qubits, {} shots", num_qubits, shots);
        Ok(EnvironmentForecast {
            num_qubits,
            probabilities: state.probabilities(),
            counts,
            shots,
        })
    }

    /// Colapsa uma lista de previsões em uma, ponderada pela probabilidade.
    ///
    /// Pesos negativos contam como 0. Retorna `None` para lista vazia ou peso
    /// total não positivo.
    pub fn collapse_environment<'a, P: Weighted>(&mut self, predictions: &'a [P]) -> Option<&'a P> {
        let weight = |p: &P| p.probability().max(0.0);
        let total: f64 = predictions.iter().map(weight).sum();
        if !(total > 0.0 && total.is_finite()) {
            return None;
        }

        let draw = self.rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        for prediction in predictions {
            cumulative += weight(prediction);
            if draw < cumulative {
                tracing::debug!(draw, total, "environment collapsed");
                return Some(prediction);
            }
        }

        predictions.iter().rev().find(|p| weight(*p) > 0.0)
    }
}
