//! # 🧭 qnav-algorithms — Quantum-Inspired Optimizers
//!
//! Quatro algoritmos sobre o simulador de [`qnav_core`]:
//!
//! | Algoritmo | Tipo | Uso |
//! |-----------|------|-----|
//! | Amplificação de amplitude | [`AmplitudeSearch`] | encontrar índices marcados |
//! | Estimação de fase | [`PhaseEstimator`] | distribuição sobre estimativas de um ângulo |
//! | Otimização variacional | [`VariationalOptimizer`] | minimizar Σ pᵢ·wᵢ |
//! | Recozimento com tunelamento | [`Annealer`] | minimizar custo sobre bit-strings |
//!
//! ## Computational Complexity
//!
//! - Busca: O(√N) rodadas × O(N log N) por rodada (difusão usa H⊗ⁿ)
//! - Estimação de fase: O(n² · N)
//! - Variacional: O(iterações × n · N)
//! - Recozimento: O(passos × n), sem vetor de estado
//!
//! ## Aleatoriedade
//!
//! Otimizador variacional e recozedor recebem o gerador por injeção
//! (`with_rng`), ou `seeded(n, seed)` para execuções reprodutíveis.
//!
//! ## Exemplo
//!
//! ```
//! use qnav_algorithms::AmplitudeSearch;
//!
//! let mut search = AmplitudeSearch::new(3, [5])?;
//! let result = search.search()?;
//! assert_eq!(result.state_index, 5);
//! # Ok::<(), qnav_core::QuantumError>(())
//! ```

pub mod annealing;
pub mod phase;
pub mod result;
pub mod search;
pub mod variational;

pub use annealing::{acceptance_probability, AnnealSchedule, Annealer};
pub use phase::{ranked, PhaseEstimator};
pub use result::{AnnealResult, SearchResult, VariationalResult};
pub use search::{amplification_rounds, AmplitudeSearch};
pub use variational::{VariationalOptimizer, DEFAULT_LEARNING_RATE};
