//! Systems - rules that move a studio through time

mod scoring;
mod year;

pub use scoring::*;
pub use year::*;
