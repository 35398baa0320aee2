//! Studio Core - film studio simulation engine
//!
//! Runs a film studio year by year: productions accumulate scores from
//! their cast and crews, wrap into released films, compete for awards and
//! earn revenue and fans. The rules themselves live in `studio-logic`;
//! this crate supplies the randomness, the session and the logging.
//!
//! # Architecture
//!
//! - **Generation**: talent pools, starting crews, names and titles
//! - **Systems**: yearly scoring and the year pass
//! - **Engine**: owns a `GameState`, a seeded RNG and the config
//!
//! # Example
//!
//! ```rust,no_run
//! use studio_core::prelude::*;
//!
//! let mut engine = StudioEngine::new(StudioConfig::default().with_seed(42)).unwrap();
//!
//! for _ in 0..10 {
//!     let summary = engine.advance_year();
//!     println!("{}: net {}", summary.year, summary.net());
//! }
//! ```

pub mod config;
pub mod engine;
pub mod generation;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::StudioConfig;
    pub use crate::engine::{SharedStudio, StudioEngine};
    pub use crate::systems::{advance_year, YearOutcome};
    pub use studio_logic::actions::{FundsPolicy, ProductionRequest};
    pub use studio_logic::crew::{CrewAttribute, CrewKind};
    pub use studio_logic::error::StudioError;
    pub use studio_logic::state::{GameState, YearSummary};
    pub use studio_logic::tables::{Genre, ProjectSize};
}
