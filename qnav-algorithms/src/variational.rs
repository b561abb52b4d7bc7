//! Otimizador variacional (estilo VQE)
//!
//! Ansatz em três camadas: fase por qubit, cadeia de CNOTs entre vizinhos e
//! nova fase por qubit, consumindo `2·n` parâmetros. A otimização é uma busca
//! local aleatória: a cada iteração um estado novo recebe o ansatz, o valor
//! esperado é comparado com o incumbente e todos os parâmetros recebem uma
//! perturbação uniforme em `[-lr/2, lr/2)`. Não há garantia de convergência.

use crate::result::VariationalResult;
use qnav_core::{QuantumError, QuantumResult, QuantumState, MAX_QUBITS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Passo de perturbação padrão
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Otimizador variacional sobre n qubits
#[derive(Debug, Clone)]
pub struct VariationalOptimizer<R: Rng = StdRng> {
    state: QuantumState,
    max_qubits: usize,
    learning_rate: f64,
    rng: R,
}

impl VariationalOptimizer<StdRng> {
    /// Cria otimizador com gerador semeado pela entropia do sistema
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_rng(num_qubits, StdRng::from_entropy())
    }

    /// Cria otimizador determinístico
    pub fn seeded(num_qubits: usize, seed: u64) -> QuantumResult<Self> {
        Self::with_rng(num_qubits, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VariationalOptimizer<R> {
    /// Cria otimizador com gerador injetado
    pub fn with_rng(num_qubits: usize, rng: R) -> QuantumResult<Self> {
        Self::with_max_qubits(num_qubits, MAX_QUBITS, rng)
    }

    /// Cria otimizador validando contra um máximo de qubits do chamador
    pub fn with_max_qubits(num_qubits: usize, max_qubits: usize, rng: R) -> QuantumResult<Self> {
        Ok(Self {
            state: QuantumState::with_max_qubits(num_qubits, max_qubits)?,
            max_qubits,
            learning_rate: DEFAULT_LEARNING_RATE,
            rng,
        })
    }

    /// Define o passo de perturbação
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Parâmetros consumidos pelo ansatz: 2·n
    pub fn parameter_count(&self) -> usize {
        2 * self.num_qubits()
    }

    /// Passo de perturbação atual
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Estado atual
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Aplica o ansatz ao estado atual.
    ///
    /// Entradas ausentes valem 0; entradas não finitas são rejeitadas com
    /// [`QuantumError::MalformedParameters`].
    pub fn ansatz(&mut self, parameters: &[f64]) -> QuantumResult<()> {
        if let Some((i, value)) = parameters.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(QuantumError::MalformedParameters(format!(
                "parameter {i} is {value}"
            )));
        }

        let n = self.num_qubits();
        if parameters.len() < self.parameter_count() {
            tracing::trace!(
                given = parameters.len(),
                expected = self.parameter_count(),
                "zero-padding ansatz parameters"
            );
        }
        let param = |i: usize| parameters.get(i).copied().unwrap_or(0.0);

        for q in 0..n {
            self.state.apply_phase(q, param(q))?;
        }
        for q in 0..n.saturating_sub(1) {
            self.state.apply_controlled_not(q, q + 1)?;
        }
        for q in 0..n {
            self.state.apply_phase(q, param(n + q))?;
        }
        Ok(())
    }

    /// Valor esperado Σ pᵢ·wᵢ; pesos ausentes valem 0
    pub fn expectation_value(&self, cost_weights: &[f64]) -> f64 {
        self.state
            .probabilities()
            .iter()
            .zip(cost_weights)
            .map(|(p, w)| p * w)
            .sum()
    }

    /// Busca local aleatória pelo menor valor esperado.
    ///
    /// Cada iteração parte de um estado |0…0⟩ novo. Sem iterações, a energia
    /// é `+∞` e os parâmetros são os iniciais.
    pub fn optimize(&mut self, cost_weights: &[f64], iterations: usize) -> QuantumResult<VariationalResult> {
        let n = self.num_qubits();
        let mut parameters: Vec<f64> = (0..self.parameter_count())
            .map(|_| self.rng.gen_range(0.0..TAU))
            .collect();

        let mut best_energy = f64::INFINITY;
        let mut best_parameters = parameters.clone();
        let mut improvements = 0;

        for iteration in 0..iterations {
            self.state = QuantumState::with_max_qubits(n, self.max_qubits)?;
            self.ansatz(&parameters)?;
            let energy = self.expectation_value(cost_weights);

            if energy < best_energy {
                best_energy = energy;
                best_parameters.clone_from(&parameters);
                improvements += 1;
                tracing::trace!(iteration, energy, "variational incumbent improved");
            }

            for p in parameters.iter_mut() {
                let step: f64 = self.rng.r#gen();
                *p += (step - 0.5) * self.learning_rate;
            }
        }

        tracing::debug!(
            num_qubits = n,
            iterations,
            energy = best_energy,
            improvements,
            "variational optimization finished"
        );

        Ok(VariationalResult {
            energy: best_energy,
            parameters: best_parameters,
            iterations,
            improvements,
        })
    }
}
