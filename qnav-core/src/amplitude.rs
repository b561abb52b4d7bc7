//! Amplitudes complexas
//!
//! Cada estado da base carrega uma amplitude `re + i·im`; a probabilidade de
//! observação é `|a|² = re² + im²` (`norm_sqr`). A aritmética vem de
//! `num-complex`, aqui só ficam as constantes e fatores de fase usados pelas
//! portas.

use num_complex::Complex64;

/// Amplitude de um estado da base
pub type ComplexAmplitude = Complex64;

/// Amplitude nula
pub const ZERO: ComplexAmplitude = ComplexAmplitude::new(0.0, 0.0);

/// Amplitude unitária (estado |0…0⟩ na construção)
pub const ONE: ComplexAmplitude = ComplexAmplitude::new(1.0, 0.0);

/// Fator de fase: e^(iθ) = cos(θ) + i·sin(θ)
#[inline]
pub fn phase_factor(angle: f64) -> ComplexAmplitude {
    ComplexAmplitude::new(angle.cos(), angle.sin())
}

/// Verifica se o qubit `qubit` está em 1 no índice `index` (qubit 0 = LSB)
#[inline(always)]
pub fn qubit_bit(index: usize, qubit: usize) -> bool {
    (index >> qubit) & 1 == 1
}
