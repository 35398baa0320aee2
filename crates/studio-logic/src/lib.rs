//! Pure rules for the film studio simulation.
//!
//! This crate contains all game logic that is independent of randomness,
//! logging, or any runtime. Functions take plain data and return results,
//! so everything here is unit-testable and deterministic. The engine in
//! `studio-core` supplies the random draws and owns the session.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Validated studio actions: greenlight, hire, upgrade, assign crews |
//! | [`awards`] | Final score, revenue, fanbase gain, yearly award evaluation |
//! | [`costs`] | Production budgets, crew upgrade and maintenance costs |
//! | [`crew`] | Studio-owned crews, upgrades, per-production assignments |
//! | [`error`] | Rejection reasons for studio actions |
//! | [`ids`] | Typed ids and the id sequence |
//! | [`production`] | Active productions, score accumulators, released films |
//! | [`state`] | Game snapshot and yearly summary |
//! | [`tables`] | Genre weights, project sizes, award categories, distributors |
//! | [`talent`] | Actors and co-producers |

pub mod actions;
pub mod awards;
pub mod costs;
pub mod crew;
pub mod error;
pub mod ids;
pub mod production;
pub mod state;
pub mod tables;
pub mod talent;
