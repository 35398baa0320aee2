//! Starting crew roster

use studio_logic::crew::{CrewKind, FixedCrew};
use studio_logic::ids::IdSequence;

/// Attributes of the crews a new studio starts with
pub const STARTING_CREW_ATTRIBUTE: u8 = 1;

/// One level-1 crew per discipline
pub fn generate_starting_crews(ids: &mut IdSequence) -> Vec<FixedCrew> {
    CrewKind::ALL
        .iter()
        .map(|&kind| {
            FixedCrew::new(
                ids.next(),
                format!("{} Crew A", kind.label()),
                kind,
                STARTING_CREW_ATTRIBUTE,
                STARTING_CREW_ATTRIBUTE,
            )
        })
        .collect()
}
