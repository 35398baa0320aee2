//! Studio engine - main entry point for playing a session
//!
//! The engine owns the game state, the random source and the config. Every
//! mutation goes through `&mut self`, so turns are applied one at a time;
//! [`SharedStudio`] adds a lock for hosts that share a session across
//! threads.

use std::sync::{Mutex, PoisonError};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use studio_logic::actions::{self, ProductionRequest};
use studio_logic::costs::{crew_upgrade_cost, production_total_cost, total_maintenance_cost};
use studio_logic::crew::{CrewAttribute, CrewKind, MAX_CREW_LEVEL};
use studio_logic::error::StudioError;
use studio_logic::ids::{CrewId, ProductionId};
use studio_logic::state::{GameState, YearSummary};

use crate::config::{validate_config, ConfigError, StudioConfig};
use crate::generation::{generate_film_title, generate_studio};
use crate::systems::advance_year;

/// One game session
pub struct StudioEngine {
    state: GameState,
    config: StudioConfig,
    rng: StdRng,
}

impl StudioEngine {
    /// Start a new game from a config
    pub fn new(config: StudioConfig) -> Result<Self, ConfigError> {
        if let Some(error) = validate_config(&config).into_iter().next() {
            return Err(error);
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = generate_studio(&config, &mut rng);
        info!(
            "New studio in {} with {} (seed {:?})",
            state.year, state.money, config.seed
        );
        Ok(Self { state, config, rng })
    }

    /// Resume from an existing state with the caller's random source.
    ///
    /// `config.seed` is not consulted here: reseeding from it would replay
    /// the draws of the opening year.
    pub fn from_state(state: GameState, config: StudioConfig, rng: StdRng) -> Self {
        Self { state, config, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn year(&self) -> u32 {
        self.state.year
    }

    pub fn money(&self) -> i64 {
        self.state.money
    }

    pub fn fanbase(&self) -> u64 {
        self.state.fanbase
    }

    /// Apply an action result, logging rejections.
    fn commit<T>(
        &mut self,
        action: &str,
        result: Result<(GameState, T), StudioError>,
    ) -> Result<T, StudioError> {
        match result {
            Ok((next, value)) => {
                self.state = next;
                Ok(value)
            }
            Err(e) => {
                warn!("{} rejected: {}", action, e);
                Err(e)
            }
        }
    }

    /// Greenlight a production
    pub fn start_production(
        &mut self,
        request: &ProductionRequest,
    ) -> Result<ProductionId, StudioError> {
        let result = actions::start_production(&self.state, request, self.config.funds_policy);
        let id = self.commit("Start production", result)?;
        info!(
            "Started {} \"{}\" ({} {}), {} left",
            id,
            request.title,
            request.size.label(),
            request.genre.label(),
            self.state.money
        );
        Ok(id)
    }

    /// Pay for one attribute point on an owned crew
    pub fn upgrade_crew(
        &mut self,
        crew_id: CrewId,
        attribute: CrewAttribute,
    ) -> Result<(), StudioError> {
        let result =
            actions::upgrade_crew(&self.state, crew_id, attribute, self.config.funds_policy)
                .map(|next| (next, ()));
        self.commit("Crew upgrade", result)?;
        if let Some(crew) = self.state.crew(crew_id) {
            info!("Upgraded {} to level {}", crew.name, crew.level);
        }
        Ok(())
    }

    /// Hire a new crew
    pub fn hire_crew(&mut self, kind: CrewKind) -> Result<CrewId, StudioError> {
        let result = actions::hire_crew(&self.state, kind, self.config.funds_policy);
        let id = self.commit("Hire crew", result)?;
        info!("Hired {} crew {}", kind.label(), id);
        Ok(id)
    }

    pub fn assign_crew(
        &mut self,
        project_id: ProductionId,
        crew_id: CrewId,
    ) -> Result<(), StudioError> {
        let result = actions::assign_crew(&self.state, project_id, crew_id).map(|next| (next, ()));
        self.commit("Crew assignment", result)
    }

    pub fn unassign_crew(
        &mut self,
        project_id: ProductionId,
        crew_id: CrewId,
    ) -> Result<(), StudioError> {
        let result =
            actions::unassign_crew(&self.state, project_id, crew_id).map(|next| (next, ()));
        self.commit("Crew unassignment", result)
    }

    /// Play one year and return its report
    pub fn advance_year(&mut self) -> YearSummary {
        let outcome = advance_year(&self.state, &mut self.rng);
        self.state = outcome.state;
        let summary = outcome.summary;

        info!(
            "Year {} done: {} released, {} awards, revenue {}, expenses {}",
            summary.year,
            summary.films_released.len(),
            summary.awards_won.len(),
            summary.revenue,
            summary.expenses
        );
        if self.state.money < 0 {
            warn!("Studio is in debt: {}", self.state.money);
        }
        summary
    }

    /// Suggest a title for a new production
    pub fn suggest_title(&mut self) -> String {
        generate_film_title(&mut self.rng)
    }

    /// What a production request would cost, distributor deal included.
    /// Fails on ids that don't resolve; affordability is not checked.
    pub fn production_cost(&self, request: &ProductionRequest) -> Result<i64, StudioError> {
        let state = &self.state;
        let unknown = |what: String| StudioError::InvalidAssignment(format!("unknown {}", what));
        let coproducer = state
            .coproducer(request.coproducer)
            .ok_or_else(|| unknown(request.coproducer.to_string()))?;
        let lead = state
            .actor(request.lead_actor)
            .ok_or_else(|| unknown(request.lead_actor.to_string()))?;
        let supporting = state
            .actor(request.supporting_actor)
            .ok_or_else(|| unknown(request.supporting_actor.to_string()))?;
        let distributor = match request.distributor {
            Some(id) => Some(state.distributor(id).ok_or_else(|| unknown(id.to_string()))?),
            None => None,
        };
        Ok(production_total_cost(
            request.size,
            coproducer,
            lead,
            supporting,
            distributor,
        ))
    }

    /// Crew upkeep the next year will charge
    pub fn maintenance_preview(&self) -> i64 {
        total_maintenance_cost(&self.state.owned_crews)
    }

    /// Price of the next upgrade for a crew, `None` if unknown or maxed
    pub fn upgrade_preview(&self, crew_id: CrewId) -> Option<i64> {
        self.state
            .crew(crew_id)
            .filter(|c| c.level < MAX_CREW_LEVEL)
            .map(|c| crew_upgrade_cost(c.level))
    }
}

/// Thread-safe engine handle
pub struct SharedStudio {
    inner: Mutex<StudioEngine>,
}

impl SharedStudio {
    pub fn new(engine: StudioEngine) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    /// Run a closure against the engine under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut StudioEngine) -> R) -> R {
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut engine)
    }

    pub fn advance_year(&self) -> YearSummary {
        self.with(|engine| engine.advance_year())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> GameState {
        self.with(|engine| engine.state().clone())
    }

    pub fn into_inner(self) -> StudioEngine {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_logic::actions::FundsPolicy;
    use studio_logic::tables::{Genre, ProjectSize};

    fn engine(seed: u64) -> StudioEngine {
        StudioEngine::new(StudioConfig::default().with_seed(seed)).unwrap()
    }

    fn request(engine: &StudioEngine, size: ProjectSize) -> ProductionRequest {
        let state = engine.state();
        ProductionRequest {
            title: "Whispers in Time".into(),
            genre: Genre::Thriller,
            size,
            coproducer: state.available_coproducers[0].id,
            lead_actor: state.available_actors[0].id,
            supporting_actor: state.available_actors[1].id,
            distributor: None,
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = engine(1);
        assert_eq!(engine.year(), 2025);
        assert_eq!(engine.money(), 10_000_000);
        assert_eq!(engine.fanbase(), 0);
        assert_eq!(engine.maintenance_preview(), 300_000);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StudioConfig {
            initial_actors: 0,
            ..Default::default()
        };
        assert!(matches!(
            StudioEngine::new(config),
            Err(ConfigError::TooFewActors(0))
        ));
    }

    #[test]
    fn test_start_production_charges_preview_cost() {
        let mut engine = engine(2);
        let req = request(&engine, ProjectSize::Indie);
        let cost = engine.production_cost(&req).unwrap();
        let id = engine.start_production(&req).unwrap();
        assert_eq!(engine.money(), 10_000_000 - cost);
        assert!(engine.state().project(id).is_some());
    }

    #[test]
    fn test_strict_policy_rejects_and_keeps_state() {
        let mut engine = engine(3);
        let req = request(&engine, ProjectSize::Large);
        let before = engine.state().clone();
        let err = engine.start_production(&req).unwrap_err();
        assert!(matches!(err, StudioError::InsufficientFunds { .. }));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_allow_debt_policy() {
        let config = StudioConfig {
            funds_policy: FundsPolicy::AllowDebt,
            seed: Some(4),
            ..Default::default()
        };
        let mut engine = StudioEngine::new(config).unwrap();
        let req = request(&engine, ProjectSize::Large);
        engine.start_production(&req).unwrap();
        assert!(engine.money() < 0);
    }

    #[test]
    fn test_upgrade_preview_and_upgrade() {
        let mut engine = engine(5);
        let crew = engine.state().owned_crews[0].id;
        assert_eq!(engine.upgrade_preview(crew), Some(1_000_000));
        engine.upgrade_crew(crew, CrewAttribute::Primary).unwrap();
        assert_eq!(engine.upgrade_preview(crew), Some(2_000_000));
        assert_eq!(engine.money(), 9_000_000);
        assert_eq!(engine.maintenance_preview(), 400_000);
        assert_eq!(engine.upgrade_preview(CrewId(9_999)), None);
    }

    #[test]
    fn test_advance_year() {
        let mut engine = engine(6);
        let summary = engine.advance_year();
        assert_eq!(summary.year, 2025);
        assert_eq!(engine.year(), 2026);
        assert_eq!(engine.money(), 10_000_000 - 300_000);
    }

    #[test]
    fn test_same_seed_same_session() {
        let play = |seed: u64| {
            let mut engine = engine(seed);
            let req = request(&engine, ProjectSize::Indie);
            engine.start_production(&req).unwrap();
            for _ in 0..3 {
                engine.advance_year();
            }
            engine.state().clone()
        };
        assert_eq!(play(7), play(7));
    }

    #[test]
    fn test_from_state_uses_supplied_rng() {
        let mut original = engine(9);
        let req = request(&original, ProjectSize::Small);
        original.start_production(&req).unwrap();
        original.advance_year();
        let saved = original.state().clone();

        let mut resumed = StudioEngine::from_state(
            saved.clone(),
            StudioConfig::default().with_seed(9),
            StdRng::seed_from_u64(500),
        );
        let summary = resumed.advance_year();

        let expected = advance_year(&saved, &mut StdRng::seed_from_u64(500));
        assert_eq!(summary, expected.summary);
        assert_eq!(resumed.state(), &expected.state);
        assert_eq!(resumed.year(), 2027);
    }

    #[test]
    fn test_shared_studio() {
        let shared = SharedStudio::new(engine(8));
        std::thread::scope(|s| {
            s.spawn(|| shared.advance_year());
        });
        assert_eq!(shared.snapshot().year, 2026);
        let engine = shared.into_inner();
        assert_eq!(engine.state().history.len(), 1);
    }
}
