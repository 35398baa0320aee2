//! Completion & award evaluation.
//!
//! When a production wraps, its accumulated scores become a final score
//! (0–100) weighted by genre. Released films earn revenue and fans, and the
//! year's cohort of releases competes for eleven awards.
//!
//! # Final score
//!
//! Each dimension is normalized with `min(100, raw × 2)`, weighted by the
//! genre table and rounded:
//!
//! ```
//! use studio_logic::awards::final_score;
//! use studio_logic::production::Scores;
//! use studio_logic::tables::Genre;
//!
//! let maxed = Scores { acting: 50.0, script: 50.0, filming: 50.0, art: 50.0, editing: 50.0 };
//! assert_eq!(final_score(&maxed, Genre::Action), 100);
//! ```
//!
//! # Awards
//!
//! Every category ranks the cohort by its key and hands the award to the
//! top film if it clears the category threshold. Ties go to the film that
//! appears first in the cohort.

use crate::ids::ProductionId;
use crate::production::{CompletedFilm, FilmProject, Scores};
use crate::tables::{AwardCategory, AwardKey, Genre};

/// Final score at which revenue is neither boosted nor cut.
pub const REVENUE_NEUTRAL_SCORE: f64 = 50.0;

/// Fans per full point of final score above 50.
pub const FANS_PER_QUALITY_POINT: f64 = 1_000.0;

/// Fans per award won.
pub const FANS_PER_AWARD: f64 = 5_000.0;

/// Every this many fans adds 1.0× to revenue.
pub const FANS_PER_REVENUE_MULTIPLE: f64 = 1_000_000.0;

fn normalize(raw: f64) -> f64 {
    (raw * 2.0).clamp(0.0, 100.0)
}

/// Genre-weighted final score in [0, 100].
pub fn final_score(scores: &Scores, genre: Genre) -> u8 {
    let w = genre.weights();
    let weighted = normalize(scores.acting) * w.acting
        + normalize(scores.script) * w.script
        + normalize(scores.filming) * w.filming
        + normalize(scores.art) * w.art
        + normalize(scores.editing) * w.editing;
    weighted.round().clamp(0.0, 100.0) as u8
}

/// Freeze a wrapped production into a film with its final score. Awards and
/// revenue are filled in by the year pass.
pub fn complete_project(project: &FilmProject, current_year: u32) -> CompletedFilm {
    CompletedFilm {
        id: project.id,
        title: project.title.clone(),
        genre: project.genre,
        size: project.size,
        year_completed: current_year,
        final_score: final_score(&project.scores, project.genre),
        scores: project.scores,
        awards: Vec::new(),
        revenue: 0,
        coproducer: project.coproducer.clone(),
        lead_actor: project.lead_actor.clone(),
        supporting_actor: project.supporting_actor.clone(),
        distributor: project.distributor.clone(),
    }
}

/// Box office for a film given the fanbase at release.
///
/// Distributor deals are recorded on the film but do not change revenue.
pub fn calculate_revenue(film: &CompletedFilm, fanbase: u64) -> i64 {
    let base = film.size.base_revenue() as f64;
    let quality = film.final_score as f64 / REVENUE_NEUTRAL_SCORE;
    let fans = 1.0 + fanbase as f64 / FANS_PER_REVENUE_MULTIPLE;
    (base * quality * fans).round() as i64
}

/// Fans a release brings in. Quality below 50 adds nothing, never subtracts.
pub fn calculate_fanbase_increase(film: &CompletedFilm) -> u64 {
    let quality = (film.final_score as f64 - REVENUE_NEUTRAL_SCORE).max(0.0) * FANS_PER_QUALITY_POINT;
    let awards = film.awards.len() as f64 * FANS_PER_AWARD;
    ((quality + awards) * film.size.fanbase_multiplier()).round() as u64
}

/// The value a category ranks films by.
pub fn award_key(film: &CompletedFilm, key: AwardKey) -> f64 {
    match key {
        AwardKey::FinalScore => film.final_score as f64,
        AwardKey::ScriptScore => film.scores.script,
        AwardKey::Direction => film.coproducer.direction as f64,
        AwardKey::LeadTalent => film.lead_actor.talent as f64,
        AwardKey::SupportingTalent => film.supporting_actor.talent as f64,
        AwardKey::FilmingScore => film.scores.filming,
        AwardKey::ArtScore => film.scores.art,
        AwardKey::EditingScore => film.scores.editing,
    }
}

/// The winner of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardWinner {
    pub category: AwardCategory,
    pub film: ProductionId,
}

/// Evaluate all categories over a cohort of films released the same year.
///
/// Winners come back in category order. Categories whose top film misses
/// the threshold are skipped.
pub fn determine_awards(cohort: &[CompletedFilm]) -> Vec<AwardWinner> {
    AwardCategory::ALL
        .iter()
        .filter_map(|&category| {
            let key = category.key();
            let top = cohort.iter().fold(None::<&CompletedFilm>, |best, film| match best {
                Some(b) if award_key(film, key) <= award_key(b, key) => Some(b),
                _ => Some(film),
            })?;
            (award_key(top, key) >= category.threshold()).then_some(AwardWinner {
                category,
                film: top.id,
            })
        })
        .collect()
}
