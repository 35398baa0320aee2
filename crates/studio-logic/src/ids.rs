//! Typed identifiers and the id sequence that hands them out.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Identity of an actor in the freelance pool.
    ActorId,
    "actor"
);
id_type!(
    /// Identity of a co-producer in the freelance pool.
    CoproducerId,
    "coproducer"
);
id_type!(
    /// Identity of a studio-owned crew.
    CrewId,
    "crew"
);
id_type!(
    /// Identity of a production, kept by the completed film.
    ProductionId,
    "project"
);
id_type!(
    /// Identity of a catalog distributor.
    DistributorId,
    "dist"
);

/// Monotonic id source shared by every record kind in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Start handing out ids from `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Take the next id, typed for the caller.
    pub fn next<T: From<u32>>(&mut self) -> T {
        let raw = self.next;
        self.next += 1;
        T::from(raw)
    }

    /// The id that will be handed out next.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_never_repeats_across_kinds() {
        let mut ids = IdSequence::default();
        let a: ActorId = ids.next();
        let c: CrewId = ids.next();
        let p: ProductionId = ids.next();
        assert_eq!(a.0, 1);
        assert_eq!(c.0, 2);
        assert_eq!(p.0, 3);
        assert_eq!(ids.peek(), 4);
    }

    #[test]
    fn test_display_uses_kind_prefix() {
        assert_eq!(CrewId(7).to_string(), "crew-7");
        assert_eq!(ProductionId(12).to_string(), "project-12");
    }
}
