//! Studio-owned crews and their upgrades.
//!
//! Crews belong to the studio, not to a production. Productions hold crew
//! ids, so an upgrade written back to the roster is seen by every
//! production that references the crew.

use serde::{Deserialize, Serialize};

use crate::ids::CrewId;
use crate::talent::ATTRIBUTE_MAX;

/// Highest level a crew can be upgraded to through the studio.
pub const MAX_CREW_LEVEL: u8 = 5;

/// Crew discipline. Each feeds one score dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewKind {
    Filming,
    Art,
    Editing,
}

impl CrewKind {
    pub const ALL: [CrewKind; 3] = [CrewKind::Filming, CrewKind::Art, CrewKind::Editing];

    pub fn label(self) -> &'static str {
        match self {
            CrewKind::Filming => "Filming",
            CrewKind::Art => "Art",
            CrewKind::Editing => "Editing",
        }
    }

    /// Display names of the (primary, secondary) attributes.
    pub fn attribute_labels(self) -> (&'static str, &'static str) {
        match self {
            CrewKind::Filming => ("Cinematography", "Sound"),
            CrewKind::Art => ("Costume", "Set Design"),
            CrewKind::Editing => ("Editing", "VFX"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewAttribute {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAttributes {
    pub primary: u8,
    pub secondary: u8,
}

impl CrewAttributes {
    pub fn get(&self, attribute: CrewAttribute) -> u8 {
        match attribute {
            CrewAttribute::Primary => self.primary,
            CrewAttribute::Secondary => self.secondary,
        }
    }

    pub fn total(&self) -> u32 {
        self.primary as u32 + self.secondary as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCrew {
    pub id: CrewId,
    pub name: String,
    pub kind: CrewKind,
    /// Always ≥ 1.
    pub level: u8,
    pub attributes: CrewAttributes,
}

impl FixedCrew {
    pub fn new(id: CrewId, name: impl Into<String>, kind: CrewKind, primary: u8, secondary: u8) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            level: 1,
            attributes: CrewAttributes { primary, secondary },
        }
    }

    pub fn is_maxed(&self, attribute: CrewAttribute) -> bool {
        self.attributes.get(attribute) >= ATTRIBUTE_MAX
    }
}

/// Return an upgraded copy of `crew`: level + 1 and the chosen attribute
/// raised by one, capped at 10. The other attribute is untouched.
pub fn upgrade_crew_attribute(crew: &FixedCrew, attribute: CrewAttribute) -> FixedCrew {
    let bump = |value: u8| value.saturating_add(1).min(ATTRIBUTE_MAX).max(value);
    let mut attributes = crew.attributes;
    match attribute {
        CrewAttribute::Primary => attributes.primary = bump(attributes.primary),
        CrewAttribute::Secondary => attributes.secondary = bump(attributes.secondary),
    }
    FixedCrew {
        level: crew.level.saturating_add(1),
        attributes,
        ..crew.clone()
    }
}

/// Crew ids assigned to a production, one list per discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAssignments {
    pub filming: Vec<CrewId>,
    pub art: Vec<CrewId>,
    pub editing: Vec<CrewId>,
}

impl CrewAssignments {
    pub fn of(&self, kind: CrewKind) -> &[CrewId] {
        match kind {
            CrewKind::Filming => &self.filming,
            CrewKind::Art => &self.art,
            CrewKind::Editing => &self.editing,
        }
    }

    pub fn of_mut(&mut self, kind: CrewKind) -> &mut Vec<CrewId> {
        match kind {
            CrewKind::Filming => &mut self.filming,
            CrewKind::Art => &mut self.art,
            CrewKind::Editing => &mut self.editing,
        }
    }

    pub fn contains(&self, id: CrewId) -> bool {
        CrewKind::ALL.iter().any(|&kind| self.of(kind).contains(&id))
    }

    /// Default staffing: the first owned crew of each discipline, if any.
    pub fn first_of_each(owned: &[FixedCrew]) -> Self {
        let first = |kind: CrewKind| -> Vec<CrewId> {
            owned
                .iter()
                .filter(|c| c.kind == kind)
                .take(1)
                .map(|c| c.id)
                .collect()
        };
        Self {
            filming: first(CrewKind::Filming),
            art: first(CrewKind::Art),
            editing: first(CrewKind::Editing),
        }
    }
}

/// Sum of primary + secondary over the listed crews.
///
/// Ids that don't resolve to an owned crew, or resolve to a crew of another
/// discipline, contribute nothing.
pub fn crew_strength(owned: &[FixedCrew], assigned: &[CrewId], kind: CrewKind) -> u32 {
    assigned
        .iter()
        .filter_map(|id| owned.iter().find(|c| c.id == *id))
        .filter(|c| c.kind == kind)
        .map(|c| c.attributes.total())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew(id: u32, kind: CrewKind, primary: u8, secondary: u8) -> FixedCrew {
        FixedCrew::new(CrewId(id), format!("Crew {}", id), kind, primary, secondary)
    }

    #[test]
    fn test_upgrade_raises_level_and_attribute() {
        let c = crew(1, CrewKind::Art, 4, 6);
        let up = upgrade_crew_attribute(&c, CrewAttribute::Secondary);
        assert_eq!(up.level, 2);
        assert_eq!(up.attributes.primary, 4);
        assert_eq!(up.attributes.secondary, 7);
        // input crew untouched
        assert_eq!(c.level, 1);
        assert_eq!(c.attributes.secondary, 6);
    }

    #[test]
    fn test_upgrade_clamps_at_ten_but_still_levels() {
        let c = crew(1, CrewKind::Filming, 10, 3);
        let up = upgrade_crew_attribute(&c, CrewAttribute::Primary);
        assert_eq!(up.attributes.primary, 10);
        assert_eq!(up.attributes.secondary, 3);
        assert_eq!(up.level, 2);
    }

    #[test]
    fn test_first_of_each_picks_earliest_per_kind() {
        let owned = vec![
            crew(1, CrewKind::Filming, 1, 1),
            crew(2, CrewKind::Filming, 1, 1),
            crew(3, CrewKind::Editing, 1, 1),
        ];
        let a = CrewAssignments::first_of_each(&owned);
        assert_eq!(a.filming, vec![CrewId(1)]);
        assert!(a.art.is_empty());
        assert_eq!(a.editing, vec![CrewId(3)]);
    }

    #[test]
    fn test_strength_ignores_unknown_and_mismatched_crews() {
        let owned = vec![crew(1, CrewKind::Art, 2, 3), crew(2, CrewKind::Filming, 5, 5)];
        assert_eq!(crew_strength(&owned, &[CrewId(1)], CrewKind::Art), 5);
        assert_eq!(crew_strength(&owned, &[CrewId(1), CrewId(2), CrewId(99)], CrewKind::Art), 5);
        assert_eq!(crew_strength(&owned, &[], CrewKind::Editing), 0);
    }
}
