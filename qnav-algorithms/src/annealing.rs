//! Recozimento simulado com saltos de "tunelamento"
//!
//! Busca estocástica sobre bit-strings de n bits. A temperatura cai
//! linearmente de 1 a 0; a probabilidade de tunelamento decai como
//! `exp(−passo / (decay · passos))`. Um passo de tunelamento inverte entre 1
//! e n bits (sorteados com repetição); um passo comum inverte um bit.
//!
//! Ordem dos sorteios por passo: tunelamento, contagem de bits (só se
//! tunelando), um sorteio por bit invertido, aceitação. O sorteio de
//! aceitação é sempre consumido, mesmo quando a melhora é certa.

use crate::result::AnnealResult;
use qnav_core::{validate_dimension, QuantumResult, MAX_QUBITS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parâmetros do cronograma de recozimento
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealSchedule {
    /// Fração dos passos que define a escala de decaimento do tunelamento
    pub tunneling_decay: f64,
    /// Somado à temperatura no denominador de Metropolis
    pub temperature_floor: f64,
    /// Peso do termo de flutuação somado à probabilidade de aceitação
    pub fluctuation_weight: f64,
}

impl Default for AnnealSchedule {
    fn default() -> Self {
        Self {
            tunneling_decay: 0.3,
            temperature_floor: 0.01,
            fluctuation_weight: 0.5,
        }
    }
}

impl AnnealSchedule {
    /// Temperatura no passo `step` de `steps`
    pub fn temperature(&self, step: usize, steps: usize) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        1.0 - step as f64 / steps as f64
    }

    /// Probabilidade de tunelamento no passo `step` de `steps`
    pub fn tunneling_probability(&self, step: usize, steps: usize) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        (-(step as f64) / (self.tunneling_decay * steps as f64)).exp()
    }

    /// Probabilidade de aceitar uma variação de custo `delta` à temperatura `t`
    pub fn acceptance_probability(&self, delta: f64, temperature: f64) -> f64 {
        if delta < 0.0 {
            return 1.0;
        }
        (-delta / (temperature + self.temperature_floor)).exp() + self.fluctuation_weight * temperature
    }
}

/// Probabilidade de aceitação com o cronograma padrão.
///
/// Vale 1 para `delta < 0`; caso contrário `exp(−Δ/(T+0.01)) + 0.5·T`, que
/// pode passar de 1 (qualquer sorteio em [0,1) aceita).
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    AnnealSchedule::default().acceptance_probability(delta, temperature)
}

/// Recozedor sobre 2^n estados
#[derive(Debug, Clone)]
pub struct Annealer<R: Rng = StdRng> {
    num_qubits: usize,
    dimension: usize,
    schedule: AnnealSchedule,
    rng: R,
}

impl Annealer<StdRng> {
    /// Cria recozedor com gerador semeado pela entropia do sistema
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_rng(num_qubits, StdRng::from_entropy())
    }

    /// Cria recozedor determinístico
    pub fn seeded(num_qubits: usize, seed: u64) -> QuantumResult<Self> {
        Self::with_rng(num_qubits, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Annealer<R> {
    /// Cria recozedor com gerador injetado
    pub fn with_rng(num_qubits: usize, rng: R) -> QuantumResult<Self> {
        Self::with_max_qubits(num_qubits, MAX_QUBITS, rng)
    }

    /// Cria recozedor validando contra um máximo de qubits do chamador
    pub fn with_max_qubits(num_qubits: usize, max_qubits: usize, rng: R) -> QuantumResult<Self> {
        let dimension = validate_dimension(num_qubits, max_qubits)?;
        Ok(Self {
            num_qubits,
            dimension,
            schedule: AnnealSchedule::default(),
            rng,
        })
    }

    /// Substitui o cronograma
    pub fn with_schedule(mut self, schedule: AnnealSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Número de bits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Cronograma em uso
    pub fn schedule(&self) -> &AnnealSchedule {
        &self.schedule
    }

    fn propose(&mut self, current: usize, tunneling: f64) -> usize {
        let draw: f64 = self.rng.r#gen();
        let flips = if draw < tunneling {
            self.rng.gen_range(1..=self.num_qubits)
        } else {
            1
        };

        let mut candidate = current;
        for _ in 0..flips {
            candidate ^= 1 << self.rng.gen_range(0..self.num_qubits);
        }
        candidate
    }

    /// Minimiza `cost` sobre os 2^n estados.
    ///
    /// O melhor estado só é atualizado em movimentos aceitos. Com zero passos
    /// retorna o estado inicial sorteado.
    pub fn anneal<F>(&mut self, mut cost: F, steps: usize) -> AnnealResult
    where
        F: FnMut(usize) -> f64,
    {
        let mut current = self.rng.gen_range(0..self.dimension);
        let mut current_cost = cost(current);
        let mut best = current;
        let mut best_cost = current_cost;
        let mut accepted_moves = 0;

        for step in 0..steps {
            let temperature = self.schedule.temperature(step, steps);
            let tunneling = self.schedule.tunneling_probability(step, steps);

            let candidate = self.propose(current, tunneling);
            let candidate_cost = cost(candidate);
            let delta = candidate_cost - current_cost;

            let draw: f64 = self.rng.r#gen();
            if draw < self.schedule.acceptance_probability(delta, temperature) {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current;
                    best_cost = current_cost;
                    tracing::trace!(step, state = best, cost = best_cost, "annealing best improved");
                }
            }
        }

        tracing::debug!(
            num_qubits = self.num_qubits,
            steps,
            state = best,
            cost = best_cost,
            accepted_moves,
            "annealing finished"
        );

        AnnealResult {
            state: best,
            cost: best_cost,
            steps,
            accepted_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qnav_core::QuantumError;

    #[test]
    fn test_schedule_defaults() {
        let schedule = AnnealSchedule::default();
        assert_eq!(schedule.tunneling_decay, 0.3);
        assert_eq!(schedule.temperature_floor, 0.01);
        assert_eq!(schedule.fluctuation_weight, 0.5);
    }

    #[test]
    fn test_temperature_and_tunneling_curves() {
        let schedule = AnnealSchedule::default();
        assert_eq!(schedule.temperature(0, 100), 1.0);
        assert!((schedule.temperature(50, 100) - 0.5).abs() < 1e-12);
        assert_eq!(schedule.tunneling_probability(0, 100), 1.0);
        let late = schedule.tunneling_probability(90, 100);
        assert!((late - (-3.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_improvement_is_certain() {
        assert_eq!(acceptance_probability(-5.0, 0.0), 1.0);
        assert_eq!(acceptance_probability(-1e-9, 0.7), 1.0);
    }

    #[test]
    fn test_acceptance_can_exceed_one() {
        let p = acceptance_probability(0.0, 1.0);
        assert!((p - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_cold_uphill_vanishes() {
        assert!(acceptance_probability(10.0, 0.0) < 1e-12);
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            Annealer::seeded(0, 1),
            Err(QuantumError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_zero_steps_returns_initial() {
        let mut annealer = Annealer::seeded(4, 11).unwrap();
        let result = annealer.anneal(|s| s as f64, 0);
        assert_eq!(result.steps, 0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.cost, result.state as f64);
        assert!(result.state < 16);
    }

    #[test]
    fn test_finds_minimum_of_small_landscape() {
        let mut annealer = Annealer::seeded(4, 3).unwrap();
        let target = 0b0110usize;
        let result = annealer.anneal(|s| (s ^ target).count_ones() as f64, 500);
        assert_eq!(result.state, target);
        assert_eq!(result.cost, 0.0);
    }
}
