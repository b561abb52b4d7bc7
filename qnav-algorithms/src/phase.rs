//! Estimação de fase
//!
//! Modelo simplificado: cada qubit de contagem `q` recebe uma rotação de fase
//! `θ · 2^q` (potência controlada do unitário), seguida de uma aproximação da
//! QFT inversa. A aproximação é fixa e reproduzida exatamente; não é a QFT
//! inversa de livro-texto (não há troca de qubits e as correções de fase são
//! aplicadas sem controle).

use qnav_core::{QuantumResult, QuantumState, MAX_QUBITS};
use std::cmp::Ordering;
use std::f64::consts::PI;

/// Estimador de fase com `num_qubits` bits de precisão
#[derive(Debug, Clone)]
pub struct PhaseEstimator {
    state: QuantumState,
    max_qubits: usize,
}

impl PhaseEstimator {
    /// Cria estimador com n bits de precisão
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_max_qubits(num_qubits, MAX_QUBITS)
    }

    /// Como [`PhaseEstimator::new`], com máximo de qubits do chamador
    pub fn with_max_qubits(num_qubits: usize, max_qubits: usize) -> QuantumResult<Self> {
        Ok(Self {
            state: QuantumState::with_max_qubits(num_qubits, max_qubits)?,
            max_qubits,
        })
    }

    /// Bits de precisão
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Estado após a última estimação
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Estima a fase de um unitário de fase `angle` (radianos).
    ///
    /// Retorna a distribuição completa; índices de alta probabilidade são as
    /// estimativas prováveis.
    pub fn estimate(&mut self, angle: f64) -> QuantumResult<Vec<f64>> {
        let n = self.num_qubits();
        self.state = QuantumState::with_max_qubits(n, self.max_qubits)?;

        self.state.apply_hadamard_all()?;
        for q in 0..n {
            let power = (1u64 << q) as f64;
            self.state.apply_phase(q, angle * power)?;
        }
        self.inverse_transform()?;

        tracing::debug!(num_qubits = n, angle, "phase estimation finished");
        Ok(self.state.probabilities())
    }

    fn inverse_transform(&mut self) -> QuantumResult<()> {
        for q in (0..self.num_qubits()).rev() {
            self.state.apply_hadamard(q)?;
            for k in 0..q {
                let distance = (q - k) as i32;
                self.state.apply_phase(k, -PI / 2f64.powi(distance))?;
            }
        }
        Ok(())
    }
}

/// Os `k` índices mais prováveis, em ordem decrescente de probabilidade.
///
/// Empates ficam com o menor índice primeiro.
pub fn ranked(probabilities: &[f64], k: usize) -> Vec<(usize, f64)> {
    let mut indexed: Vec<(usize, f64)> = probabilities.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(&b.0)));
    indexed.truncate(k);
    indexed
}
