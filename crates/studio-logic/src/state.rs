//! The game snapshot and the per-year report.

use serde::{Deserialize, Serialize};

use crate::crew::{CrewKind, FixedCrew};
use crate::ids::{ActorId, CoproducerId, CrewId, DistributorId, IdSequence, ProductionId};
use crate::production::{Award, CompletedFilm, FilmProject};
use crate::tables::Distributor;
use crate::talent::{Actor, Coproducer};

/// Aggregate root of a game. Transitions return a new `GameState`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub year: u32,
    /// Signed: spending and maintenance may push the studio into debt.
    pub money: i64,
    pub fanbase: u64,
    pub active_projects: Vec<FilmProject>,
    pub completed_films: Vec<CompletedFilm>,
    /// In acquisition order.
    pub owned_crews: Vec<FixedCrew>,
    pub available_actors: Vec<Actor>,
    pub available_coproducers: Vec<Coproducer>,
    pub available_distributors: Vec<Distributor>,
    pub total_awards: u32,
    pub history: Vec<YearSummary>,
    pub ids: IdSequence,
}

impl GameState {
    /// A studio with no crews, talent or distributors yet.
    pub fn empty(year: u32, money: i64) -> Self {
        Self {
            year,
            money,
            fanbase: 0,
            active_projects: Vec::new(),
            completed_films: Vec::new(),
            owned_crews: Vec::new(),
            available_actors: Vec::new(),
            available_coproducers: Vec::new(),
            available_distributors: Vec::new(),
            total_awards: 0,
            history: Vec::new(),
            ids: IdSequence::default(),
        }
    }

    pub fn crew(&self, id: CrewId) -> Option<&FixedCrew> {
        self.owned_crews.iter().find(|c| c.id == id)
    }

    pub fn crews_of(&self, kind: CrewKind) -> impl Iterator<Item = &FixedCrew> {
        self.owned_crews.iter().filter(move |c| c.kind == kind)
    }

    pub fn project(&self, id: ProductionId) -> Option<&FilmProject> {
        self.active_projects.iter().find(|p| p.id == id)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.available_actors.iter().find(|a| a.id == id)
    }

    pub fn coproducer(&self, id: CoproducerId) -> Option<&Coproducer> {
        self.available_coproducers.iter().find(|c| c.id == id)
    }

    pub fn distributor(&self, id: DistributorId) -> Option<&Distributor> {
        self.available_distributors.iter().find(|d| d.id == id)
    }

    /// Distributors the current fanbase has unlocked.
    pub fn unlocked_distributors(&self) -> impl Iterator<Item = &Distributor> {
        let fanbase = self.fanbase;
        self.available_distributors
            .iter()
            .filter(move |d| d.is_unlocked(fanbase))
    }

    /// Mark the cast of released films available again, for whoever is
    /// still listed in the freelance pools.
    pub fn release_cast(&mut self, films: &[CompletedFilm]) {
        for film in films {
            for actor in self.available_actors.iter_mut() {
                if actor.id == film.lead_actor.id || actor.id == film.supporting_actor.id {
                    actor.is_available = true;
                }
            }
            for coproducer in self.available_coproducers.iter_mut() {
                if coproducer.id == film.coproducer.id {
                    coproducer.is_available = true;
                }
            }
        }
    }
}

/// What happened in one simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub films_released: Vec<CompletedFilm>,
    pub awards_won: Vec<Award>,
    pub revenue: i64,
    /// Crew maintenance charged this year.
    pub expenses: i64,
}

impl YearSummary {
    pub fn net(&self) -> i64 {
        self.revenue - self.expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{start_production, FundsPolicy, ProductionRequest};
    use crate::awards::complete_project;
    use crate::tables::{Genre, ProjectSize};

    fn studio() -> GameState {
        let mut state = GameState::empty(2025, 10_000_000);
        state.ids = IdSequence::starting_at(50);
        state.available_actors = (1..4)
            .map(|id| Actor {
                id: ActorId(id),
                name: format!("Actor {}", id),
                fame: 4,
                talent: 6,
                salary: 1_000_000,
                is_available: true,
            })
            .collect();
        state.available_coproducers = vec![Coproducer {
            id: CoproducerId(10),
            name: "Co".into(),
            script: 5,
            direction: 5,
            salary: 1_000_000,
            is_available: true,
        }];
        state
    }

    #[test]
    fn test_release_cast_returns_booked_talent() {
        let request = ProductionRequest {
            title: "Shadows of Destiny".into(),
            genre: Genre::Horror,
            size: ProjectSize::Indie,
            coproducer: CoproducerId(10),
            lead_actor: ActorId(1),
            supporting_actor: ActorId(2),
            distributor: None,
        };
        let (mut state, id) =
            start_production(&studio(), &request, FundsPolicy::Strict).unwrap();
        assert!(!state.actor(ActorId(1)).unwrap().is_available);
        assert!(!state.actor(ActorId(2)).unwrap().is_available);
        assert!(!state.coproducer(CoproducerId(10)).unwrap().is_available);

        let film = complete_project(state.project(id).unwrap(), 2025);
        state.release_cast(&[film]);

        assert!(state.actor(ActorId(1)).unwrap().is_available);
        assert!(state.actor(ActorId(2)).unwrap().is_available);
        assert!(state.coproducer(CoproducerId(10)).unwrap().is_available);
    }

    #[test]
    fn test_release_cast_ignores_talent_not_in_film() {
        let mut state = studio();
        state.available_actors[2].is_available = false;
        state.release_cast(&[]);
        assert!(!state.actor(ActorId(3)).unwrap().is_available);
    }

    #[test]
    fn test_year_summary_net() {
        let summary = YearSummary {
            year: 2025,
            films_released: Vec::new(),
            awards_won: Vec::new(),
            revenue: 1_200_000,
            expenses: 300_000,
        };
        assert_eq!(summary.net(), 900_000);
    }
}
