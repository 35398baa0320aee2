//! Generation - procedural creation of talent, crews, titles and new studios

mod crew;
mod names;
mod studio;
mod talent;

pub use crew::*;
pub use names::*;
pub use studio::*;
pub use talent::*;
