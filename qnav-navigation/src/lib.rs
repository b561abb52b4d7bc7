//! # 🛰️ qnav-navigation — Navigation Engine
//!
//! Fachada que aplica os algoritmos quânticos simulados a problemas de
//! navegação: seleção de rota, estimativa de economia, desvio de perigos,
//! previsão de trajetória e previsão de ambiente.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          NavigationEngine                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  NavigationConfig (TOML) + RNG            │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  AmplitudeSearch · VariationalOptimizer   │  │
//! │  │  Annealer · PhaseEstimator                │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QuantumState (qnav-core)                 │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qnav_navigation::{NavigationConfig, NavigationEngine, Scored};
//!
//! struct Route(f64);
//!
//! impl Scored for Route {
//!     fn score(&self) -> f64 {
//!         self.0
//!     }
//! }
//!
//! let mut engine = NavigationEngine::seeded(NavigationConfig::default(), 42)?;
//! let routes = [Route(0.2), Route(0.95), Route(0.4), Route(0.1)];
//! let best = engine.select_best_candidate(&routes)?;
//! assert_eq!(best.0, 0.95);
//! # Ok::<(), qnav_navigation::NavigationError>(())
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::NavigationConfig;
pub use domain::{
    AvoidanceReport, CostReduction, EnvironmentForecast, Point, Positioned, Scored,
    TrajectoryPrediction, Velocity, Weighted,
};
pub use engine::{cost_table, proximity_cost, NavigationEngine};
pub use error::{NavigationError, NavigationResult};
