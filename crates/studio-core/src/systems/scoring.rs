//! Scoring system - yearly score increments for a production

use rand::Rng;
use studio_logic::crew::{crew_strength, CrewKind, FixedCrew};
use studio_logic::production::{FilmProject, Scores};

/// Each dimension is scaled by an independent draw from this range
pub const SCORE_JITTER: std::ops::Range<f64> = 0.8..1.2;

/// Compute one year of score increments for a production.
///
/// Crews are resolved against the studio's roster, so an upgrade made since
/// the production started counts. Draws happen in dimension order: acting,
/// script, filming, art, editing.
pub fn yearly_score_increase(
    project: &FilmProject,
    owned_crews: &[FixedCrew],
    rng: &mut impl Rng,
) -> Scores {
    let lead = &project.lead_actor;
    let support = &project.supporting_actor;
    let cast = (lead.star_power() + support.star_power()) as f64 / 2.0;
    let craft = project.coproducer.craft() as f64;
    let crews = |kind: CrewKind| {
        crew_strength(owned_crews, project.assigned_crews.of(kind), kind) as f64
    };

    let acting = cast * rng.gen_range(SCORE_JITTER);
    let script = craft * rng.gen_range(SCORE_JITTER);
    let filming = crews(CrewKind::Filming) * rng.gen_range(SCORE_JITTER);
    let art = crews(CrewKind::Art) * rng.gen_range(SCORE_JITTER);
    let editing = crews(CrewKind::Editing) * rng.gen_range(SCORE_JITTER);

    Scores {
        acting,
        script,
        filming,
        art,
        editing,
    }
}
