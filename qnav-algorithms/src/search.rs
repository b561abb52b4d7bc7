//! Busca por amplificação de amplitude (estilo Grover)
//!
//! Oráculo e difusão atuam direto sobre o vetor de estado: o oráculo nega as
//! amplitudes-alvo e a difusão é H⊗ⁿ · (fase −1 fora de |0…0⟩) · H⊗ⁿ, ou seja,
//! a reflexão 2|s⟩⟨s| − I em torno da superposição uniforme.

use crate::result::SearchResult;
use qnav_core::{validate_dimension, QuantumError, QuantumResult, QuantumState, MAX_QUBITS};
use std::collections::BTreeSet;
use std::f64::consts::FRAC_PI_4;

/// Rodadas de amplificação: ⌊π/4 · √(2^n)⌋, com √(2^n) = 2^(n/2).
///
/// Satura em `usize::MAX` para n grande.
pub fn amplification_rounds(num_qubits: usize) -> usize {
    let sqrt_dim = (num_qubits as f64 / 2.0).exp2();
    (FRAC_PI_4 * sqrt_dim).floor() as usize
}

/// Busca de índices marcados por amplificação de amplitude
#[derive(Debug, Clone)]
pub struct AmplitudeSearch {
    state: QuantumState,
    targets: BTreeSet<usize>,
    rounds: usize,
    max_qubits: usize,
}

impl AmplitudeSearch {
    /// Cria busca sobre 2^n estados com o conjunto de alvos dado
    pub fn new<I>(num_qubits: usize, targets: I) -> QuantumResult<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        Self::with_max_qubits(num_qubits, targets, MAX_QUBITS)
    }

    /// Como [`AmplitudeSearch::new`], com máximo de qubits do chamador
    pub fn with_max_qubits<I>(num_qubits: usize, targets: I, max_qubits: usize) -> QuantumResult<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let dimension = validate_dimension(num_qubits, max_qubits)?;
        let targets: BTreeSet<usize> = targets.into_iter().collect();

        if targets.is_empty() {
            return Err(QuantumError::EmptyTargetSet);
        }
        if let Some(&index) = targets.iter().find(|&&t| t >= dimension) {
            return Err(QuantumError::TargetOutOfRange { index, dimension });
        }

        Ok(Self {
            state: QuantumState::with_max_qubits(num_qubits, max_qubits)?,
            targets,
            rounds: amplification_rounds(num_qubits),
            max_qubits,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Rodadas que `search` executará
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Alvos, em ordem crescente
    pub fn targets(&self) -> &BTreeSet<usize> {
        &self.targets
    }

    /// Estado após a última busca
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    fn oracle(&mut self) {
        let targets = &self.targets;
        self.state.apply_phase_oracle(|i| targets.contains(&i));
    }

    fn diffusion(&mut self) -> QuantumResult<()> {
        self.state.apply_hadamard_all()?;
        self.state.apply_phase_oracle(|i| i != 0);
        self.state.apply_hadamard_all()
    }

    /// Executa a busca e retorna o índice mais provável
    pub fn search(&mut self) -> QuantumResult<SearchResult> {
        self.state = QuantumState::with_max_qubits(self.num_qubits(), self.max_qubits)?;
        self.state.apply_hadamard_all()?;

        for _ in 0..self.rounds {
            self.oracle();
            self.diffusion()?;
        }

        let probabilities = self.state.probabilities();
        let (state_index, probability) = probabilities
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, p)| {
                if p > best.1 { (i, p) } else { best }
            });
        let success_probability = self.targets.iter().map(|&t| probabilities[t]).sum();

        tracing::debug!(
            num_qubits = self.num_qubits(),
            rounds = self.rounds,
            state_index,
            probability,
            "amplitude search finished"
        );

        Ok(SearchResult {
            state_index,
            probability,
            iterations: self.rounds,
            success_probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_formula() {
        assert_eq!(amplification_rounds(1), 1); // π/4·√2 ≈ 1.11
        assert_eq!(amplification_rounds(2), 1); // π/4·2 ≈ 1.57
        assert_eq!(amplification_rounds(3), 2); // π/4·√8 ≈ 2.22
        assert_eq!(amplification_rounds(4), 3); // π/4·4 ≈ 3.14
        assert_eq!(amplification_rounds(6), 6); // π/4·8 ≈ 6.28
    }

    #[test]
    fn test_rounds_for_wide_registers_do_not_overflow() {
        assert_eq!(amplification_rounds(20), 804); // π/4·1024 ≈ 804.2
        assert_eq!(amplification_rounds(64), (FRAC_PI_4 * 2f64.powi(32)).floor() as usize);
        assert_eq!(amplification_rounds(200), usize::MAX);
    }

    #[test]
    fn test_empty_targets_rejected() {
        let err = AmplitudeSearch::new(3, Vec::new()).unwrap_err();
        assert_eq!(err, QuantumError::EmptyTargetSet);
    }

    #[test]
    fn test_target_out_of_range() {
        let err = AmplitudeSearch::new(2, [1, 4]).unwrap_err();
        assert_eq!(err, QuantumError::TargetOutOfRange { index: 4, dimension: 4 });
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            AmplitudeSearch::new(0, [0]),
            Err(QuantumError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_duplicate_targets_collapse() {
        let search = AmplitudeSearch::new(3, [5, 5, 1]).unwrap();
        assert_eq!(search.targets().len(), 2);
    }

    #[test]
    fn test_two_qubit_single_target_is_exact() {
        // N = 4, uma rodada leva toda a amplitude ao alvo
        let mut search = AmplitudeSearch::new(2, [2]).unwrap();
        let result = search.search().unwrap();
        assert_eq!(result.state_index, 2);
        assert!((result.probability - 1.0).abs() < 1e-9);
    }
}
