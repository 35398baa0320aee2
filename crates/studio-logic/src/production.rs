//! Productions in progress and the films they become.

use serde::{Deserialize, Serialize};

use crate::crew::{CrewAssignments, FixedCrew};
use crate::ids::ProductionId;
use crate::tables::{AwardCategory, Distributor, Genre, ProjectSize};
use crate::talent::{Actor, Coproducer};

/// The five score dimensions. Used both for running totals and for the
/// increments a year adds to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub acting: f64,
    pub script: f64,
    pub filming: f64,
    pub art: f64,
    pub editing: f64,
}

impl Scores {
    /// Add a year's increments. Negative increments are ignored so totals
    /// never go down.
    pub fn accumulate(&self, delta: &Scores) -> Scores {
        Scores {
            acting: self.acting + delta.acting.max(0.0),
            script: self.script + delta.script.max(0.0),
            filming: self.filming + delta.filming.max(0.0),
            art: self.art + delta.art.max(0.0),
            editing: self.editing + delta.editing.max(0.0),
        }
    }

    /// True when every dimension of `self` is ≥ the same dimension of `other`.
    pub fn dominates(&self, other: &Scores) -> bool {
        self.acting >= other.acting
            && self.script >= other.script
            && self.filming >= other.filming
            && self.art >= other.art
            && self.editing >= other.editing
    }
}

/// An active production, accumulating scores until it is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmProject {
    pub id: ProductionId,
    pub title: String,
    pub genre: Genre,
    pub size: ProjectSize,
    pub year_started: u32,
    pub years_remaining: u32,
    pub coproducer: Coproducer,
    pub lead_actor: Actor,
    pub supporting_actor: Actor,
    pub assigned_crews: CrewAssignments,
    pub scores: Scores,
    pub distributor: Option<Distributor>,
    pub is_complete: bool,
}

/// Everything needed to build a production, minus the crews.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub title: String,
    pub genre: Genre,
    pub size: ProjectSize,
    pub coproducer: Coproducer,
    pub lead_actor: Actor,
    pub supporting_actor: Actor,
    pub distributor: Option<Distributor>,
}

/// Build a fresh production staffed with the first owned crew of each
/// discipline. No validation; see [`crate::actions::start_production`].
pub fn create_project(
    id: ProductionId,
    draft: ProjectDraft,
    current_year: u32,
    owned_crews: &[FixedCrew],
) -> FilmProject {
    FilmProject {
        id,
        title: draft.title,
        genre: draft.genre,
        size: draft.size,
        year_started: current_year,
        years_remaining: draft.size.years(),
        coproducer: draft.coproducer,
        lead_actor: draft.lead_actor,
        supporting_actor: draft.supporting_actor,
        assigned_crews: CrewAssignments::first_of_each(owned_crews),
        scores: Scores::default(),
        distributor: draft.distributor,
        is_complete: false,
    }
}

/// One year of production: apply the increments and count down.
///
/// The project completes the year its counter would reach zero.
pub fn advance_project(project: &FilmProject, delta: &Scores) -> FilmProject {
    FilmProject {
        years_remaining: project.years_remaining.saturating_sub(1),
        scores: project.scores.accumulate(delta),
        is_complete: project.years_remaining <= 1,
        ..project.clone()
    }
}

/// An award won by a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub category: AwardCategory,
    pub year: u32,
}

/// A released film. Frozen at release: talent records are copies, so the
/// freelance pool can move on without touching history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedFilm {
    pub id: ProductionId,
    pub title: String,
    pub genre: Genre,
    pub size: ProjectSize,
    pub year_completed: u32,
    /// 0–100
    pub final_score: u8,
    pub scores: Scores,
    pub awards: Vec<Award>,
    pub revenue: i64,
    pub coproducer: Coproducer,
    pub lead_actor: Actor,
    pub supporting_actor: Actor,
    pub distributor: Option<Distributor>,
}
