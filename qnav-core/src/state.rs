//! Vetor de estado quântico
//!
//! Um registro de n qubits tem 2^n estados da base; o vetor guarda uma
//! amplitude por estado, indexada por um inteiro cujo bit `k` é o qubit `k`.
//! Toda operação pública preserva Σ|aᵢ|² = 1 dentro de [`NORM_TOLERANCE`].

use crate::amplitude::{phase_factor, qubit_bit, ComplexAmplitude, ONE, ZERO};
use crate::error::{QuantumError, QuantumResult};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Máximo padrão de qubits (2^20 amplitudes, ~16 MiB)
pub const MAX_QUBITS: usize = 20;

/// Teto absoluto aceito por [`QuantumState::with_max_qubits`]
pub const HARD_MAX_QUBITS: usize = 30;

/// Tolerância de normalização
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Abaixo disso a renormalização é considerada degenerada
const DEGENERATE_NORM: f64 = 1e-12;

/// Valida um número de qubits contra um máximo configurado.
///
/// O máximo é limitado a [`HARD_MAX_QUBITS`].
pub fn validate_dimension(num_qubits: usize, maximum: usize) -> QuantumResult<usize> {
    let maximum = maximum.min(HARD_MAX_QUBITS);
    if num_qubits < 1 || num_qubits > maximum {
        return Err(QuantumError::InvalidDimension {
            requested: num_qubits,
            maximum,
        });
    }
    Ok(1usize << num_qubits)
}

/// Estado quântico de n qubits (serializável só para saída)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuantumState {
    num_qubits: usize,
    amplitudes: Vec<ComplexAmplitude>,
}

impl QuantumState {
    /// Cria estado |0…0⟩ com até [`MAX_QUBITS`] qubits
    pub fn new(num_qubits: usize) -> QuantumResult<Self> {
        Self::with_max_qubits(num_qubits, MAX_QUBITS)
    }

    /// Cria estado |0…0⟩ validando contra um máximo do chamador
    pub fn with_max_qubits(num_qubits: usize, maximum: usize) -> QuantumResult<Self> {
        let dim = validate_dimension(num_qubits, maximum)?;
        let mut amplitudes = vec![ZERO; dim];
        amplitudes[0] = ONE;
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço: 2^n
    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes, em ordem de índice
    pub fn amplitudes(&self) -> &[ComplexAmplitude] {
        &self.amplitudes
    }

    /// Probabilidade |aᵢ|² de cada estado da base
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Soma das probabilidades (≈ 1.0)
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probabilidade marginal do qubit estar em |1⟩
    pub fn probability_of_one(&self, qubit: usize) -> QuantumResult<f64> {
        self.check_qubit(qubit)?;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| qubit_bit(*i, qubit))
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// Rótulo ket do índice, qubit 0 à direita
    pub fn basis_label(&self, index: usize) -> String {
        (0..self.num_qubits)
            .rev()
            .map(|q| if qubit_bit(index, q) { '1' } else { '0' })
            .collect()
    }

    /// Volta para |0…0⟩
    pub fn reset(&mut self) {
        self.amplitudes.iter_mut().for_each(|a| *a = ZERO);
        self.amplitudes[0] = ONE;
    }

    /// Renormaliza para norma 1
    pub fn normalize(&mut self) -> QuantumResult<()> {
        let total = self.total_probability();
        if total < DEGENERATE_NORM {
            return Err(QuantumError::DegenerateState(total));
        }
        let inv_norm = 1.0 / total.sqrt();
        self.amplitudes.iter_mut().for_each(|a| *a = a.scale(inv_norm));
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Portas
    // =========================================================================

    /// Hadamard: |0⟩ → (|0⟩+|1⟩)/√2, |1⟩ → (|0⟩−|1⟩)/√2.
    ///
    /// Lê o vetor anterior e escreve um novo; nenhum par usa valor já alterado.
    pub fn apply_hadamard(&mut self, qubit: usize) -> QuantumResult<()> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        let mut next = vec![ZERO; self.dimension()];

        for i in (0..self.dimension()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let (a, b) = (self.amplitudes[i], self.amplitudes[j]);
            next[i] = (a + b).scale(FRAC_1_SQRT_2);
            next[j] = (a - b).scale(FRAC_1_SQRT_2);
        }

        self.amplitudes = next;
        Ok(())
    }

    /// Hadamard em todos os qubits
    pub fn apply_hadamard_all(&mut self) -> QuantumResult<()> {
        for q in 0..self.num_qubits {
            self.apply_hadamard(q)?;
        }
        Ok(())
    }

    /// Pauli-X: troca os pares que diferem só no bit do qubit
    pub fn apply_pauli_x(&mut self, qubit: usize) -> QuantumResult<()> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        for i in 0..self.dimension() {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
        Ok(())
    }

    /// Fase: multiplica por e^(iθ) onde o bit do qubit é 1
    pub fn apply_phase(&mut self, qubit: usize, angle: f64) -> QuantumResult<()> {
        self.check_qubit(qubit)?;
        let factor = phase_factor(angle);
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if qubit_bit(i, qubit) {
                *amp *= factor;
            }
        }
        Ok(())
    }

    /// CNOT: com o controle em 1, troca com o índice de alvo invertido.
    ///
    /// Cada par é trocado uma única vez (só quando `i < flipped`).
    pub fn apply_controlled_not(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QuantumError::ControlEqualsTarget(control));
        }

        let target_mask = 1usize << target;
        for i in 0..self.dimension() {
            if qubit_bit(i, control) {
                let flipped = i ^ target_mask;
                if i < flipped {
                    self.amplitudes.swap(i, flipped);
                }
            }
        }
        Ok(())
    }

    /// Oráculo de fase: nega a amplitude de todo índice marcado.
    ///
    /// Diagonal com entradas ±1, portanto unitária.
    pub fn apply_phase_oracle<F>(&mut self, marked: F)
    where
        F: Fn(usize) -> bool,
    {
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if marked(i) {
                *amp = -*amp;
            }
        }
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Sorteia um índice da base pela distribuição atual, sem colapso.
    ///
    /// Caminha a probabilidade acumulada até `u <= acumulado`. Se o
    /// arredondamento deixar `u` acima do total, devolve o último índice com
    /// probabilidade não nula.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let draw: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        let mut last_nonzero = 0;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 0.0 {
                last_nonzero = i;
            }
            cumulative += p;
            if draw <= cumulative && p > 0.0 {
                return i;
            }
        }

        last_nonzero
    }

    /// Histograma de `shots` amostras independentes
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            *counts.entry(self.sample(rng)).or_insert(0) += 1;
        }
        counts
    }

    /// Mede um qubit, colapsando e renormalizando o estado.
    ///
    /// Retorna o bit observado (0 ou 1).
    pub fn measure<R: Rng + ?Sized>(&mut self, qubit: usize, rng: &mut R) -> QuantumResult<u8> {
        self.check_qubit(qubit)?;

        let sampled = self.sample(rng);
        let outcome = qubit_bit(sampled, qubit);

        let mut collapsed = vec![ZERO; self.dimension()];
        let mut norm = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if qubit_bit(i, qubit) == outcome {
                collapsed[i] = *amp;
                norm += amp.norm_sqr();
            }
        }

        if norm < DEGENERATE_NORM {
            return Err(QuantumError::DegenerateState(norm));
        }

        let inv_norm = 1.0 / norm.sqrt();
        collapsed.iter_mut().for_each(|a| *a = a.scale(inv_norm));
        self.amplitudes = collapsed;

        tracing::trace!(qubit, outcome, sampled, "measured qubit");
        Ok(outcome as u8)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "QuantumState ({} qubits, dim={}):",
            self.num_qubits,
            self.dimension()
        )?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob > DEGENERATE_NORM {
                writeln!(
                    f,
                    "  |{}⟩  amplitude: {:.4}{:+.4}i  probability: {:.4}",
                    self.basis_label(i),
                    amp.re,
                    amp.im,
                    prob
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_state() {
        let sv = QuantumState::new(2).unwrap();
        assert_eq!(sv.dimension(), 4);
        assert_eq!(sv.amplitudes()[0], ONE);
        for i in 1..4 {
            assert_eq!(sv.amplitudes()[i], ZERO);
        }
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            QuantumState::new(0),
            Err(QuantumError::InvalidDimension { requested: 0, maximum: MAX_QUBITS })
        );
        assert!(matches!(
            QuantumState::new(MAX_QUBITS + 1),
            Err(QuantumError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_caller_maximum_is_clamped() {
        let err = QuantumState::with_max_qubits(31, 64).unwrap_err();
        assert_eq!(
            err,
            QuantumError::InvalidDimension { requested: 31, maximum: HARD_MAX_QUBITS }
        );
        assert!(QuantumState::with_max_qubits(4, 4).is_ok());
        assert!(QuantumState::with_max_qubits(5, 4).is_err());
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut sv = QuantumState::new(2).unwrap();
        assert_eq!(
            sv.apply_hadamard(2),
            Err(QuantumError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
        );
        assert!(sv.apply_phase(5, 1.0).is_err());
        assert!(sv.apply_controlled_not(0, 3).is_err());
    }

    #[test]
    fn test_cnot_same_qubit() {
        let mut sv = QuantumState::new(2).unwrap();
        assert_eq!(
            sv.apply_controlled_not(1, 1),
            Err(QuantumError::ControlEqualsTarget(1))
        );
    }

    #[test]
    fn test_basis_label() {
        let sv = QuantumState::new(3).unwrap();
        assert_eq!(sv.basis_label(0), "000");
        assert_eq!(sv.basis_label(1), "001");
        assert_eq!(sv.basis_label(5), "101");
        assert_eq!(sv.basis_label(7), "111");
    }

    #[test]
    fn test_pauli_x_flips_zero() {
        let mut sv = QuantumState::new(1).unwrap();
        sv.apply_pauli_x(0).unwrap();
        assert_eq!(sv.probabilities(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_phase_leaves_zero_bit_untouched() {
        let mut sv = QuantumState::new(1).unwrap();
        sv.apply_phase(0, 1.234).unwrap();
        assert_eq!(sv.amplitudes()[0], ONE);

        sv.apply_pauli_x(0).unwrap();
        sv.apply_phase(0, std::f64::consts::PI).unwrap();
        assert!((sv.amplitudes()[1].re + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probability_of_one() {
        let mut sv = QuantumState::new(2).unwrap();
        sv.apply_hadamard(1).unwrap();
        assert!((sv.probability_of_one(1).unwrap() - 0.5).abs() < 1e-12);
        assert!(sv.probability_of_one(0).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degenerate() {
        let mut sv = QuantumState::new(1).unwrap();
        sv.amplitudes[0] = ZERO;
        assert!(matches!(sv.normalize(), Err(QuantumError::DegenerateState(_))));
    }

    #[test]
    fn test_measure_degenerate_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sv = QuantumState::new(2).unwrap();
        sv.amplitudes.iter_mut().for_each(|a| *a = ZERO);

        assert_eq!(sv.measure(1, &mut rng), Err(QuantumError::DegenerateState(0.0)));
    }

    #[test]
    fn test_reset() {
        let mut sv = QuantumState::new(2).unwrap();
        sv.apply_hadamard_all().unwrap();
        sv.reset();
        assert_eq!(sv.probabilities(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sample_basis_state_is_certain() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sv = QuantumState::new(3).unwrap();
        sv.apply_pauli_x(0).unwrap();
        sv.apply_pauli_x(2).unwrap();
        for _ in 0..32 {
            assert_eq!(sv.sample(&mut rng), 5);
        }
    }

    #[test]
    fn test_serialize_to_json() {
        let sv = QuantumState::new(1).unwrap();
        let value = serde_json::to_value(&sv).unwrap();
        assert_eq!(value["num_qubits"], 1);
        assert_eq!(value["amplitudes"][0], serde_json::json!([1.0, 0.0]));
    }

    #[test]
    fn test_display_lists_nonzero_states() {
        let mut sv = QuantumState::new(2).unwrap();
        sv.apply_hadamard(0).unwrap();
        let text = sv.to_string();
        assert!(text.contains("|00⟩"));
        assert!(text.contains("|01⟩"));
        assert!(!text.contains("|11⟩"));
    }
}
