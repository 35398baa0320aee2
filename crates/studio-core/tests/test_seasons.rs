//! Integration tests for multi-year play.
//!
//! Exercises: generate_studio → start_production → advance_year × N,
//! both directly with fixed random sources and through the engine.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use studio_core::config::StudioConfig;
use studio_core::engine::StudioEngine;
use studio_core::generation::generate_studio;
use studio_core::systems::{advance_year, ACTOR_POOL_CAP, COPRODUCER_POOL_CAP};
use studio_logic::actions::{start_production, FundsPolicy, ProductionRequest};
use studio_logic::state::GameState;
use studio_logic::tables::{Genre, ProjectSize};

// ── Helpers ────────────────────────────────────────────────────────────

fn request(state: &GameState, size: ProjectSize, genre: Genre) -> Option<ProductionRequest> {
    let mut actors = state.available_actors.iter().filter(|a| a.is_available);
    let lead = actors.next()?;
    let supporting = actors.next()?;
    let coproducer = state.available_coproducers.iter().find(|c| c.is_available)?;
    Some(ProductionRequest {
        title: "Rise of the Empire".into(),
        genre,
        size,
        coproducer: coproducer.id,
        lead_actor: lead.id,
        supporting_actor: supporting.id,
        distributor: None,
    })
}

// ── Tests ──────────────────────────────────────────────────────────────

#[test]
fn bottom_of_range_draws_give_exact_totals() {
    // Every draw is the lowest value: attributes 1, jitter 0.8
    let mut rng = StepRng::new(0, 0);
    let state = generate_studio(&StudioConfig::default(), &mut rng);
    assert!(state.available_actors.iter().all(|a| a.salary == 160_000));

    let req = request(&state, ProjectSize::Small, Genre::Comedy).unwrap();
    let (state, id) = start_production(&state, &req, FundsPolicy::Strict).unwrap();
    assert_eq!(state.money, 10_000_000 - 1_480_000);

    let year_one = advance_year(&state, &mut rng);
    let scores = year_one.state.project(id).unwrap().scores;
    assert!((scores.acting - 1.6).abs() < 1e-9);
    assert!((scores.editing - 1.6).abs() < 1e-9);

    let year_two = advance_year(&year_one.state, &mut rng);
    let film = &year_two.summary.films_released[0];
    assert_eq!(film.final_score, 6);
    assert_eq!(film.revenue, 120_000);
    assert!(film.awards.is_empty());
    assert_eq!(year_two.state.fanbase, 0);
    assert_eq!(year_two.state.money, 10_000_000 - 1_480_000 - 600_000 + 120_000);
}

#[test]
fn long_season_keeps_invariants() {
    let config = StudioConfig {
        funds_policy: FundsPolicy::AllowDebt,
        seed: Some(2025),
        ..Default::default()
    };
    let mut engine = StudioEngine::new(config).unwrap();
    let sizes = [ProjectSize::Indie, ProjectSize::Small, ProjectSize::Medium];

    for year in 0..12 {
        let size = sizes[year % sizes.len()];
        if let Some(req) = request(engine.state(), size, Genre::ALL[year % 8]) {
            engine.start_production(&req).unwrap();
        }
        let before: Vec<_> = engine
            .state()
            .active_projects
            .iter()
            .map(|p| (p.id, p.scores, p.years_remaining))
            .collect();
        let fanbase = engine.fanbase();
        let summary = engine.advance_year();

        let state = engine.state();
        for (id, scores, years) in before {
            match state.project(id) {
                Some(p) => {
                    assert!(p.scores.dominates(&scores));
                    assert_eq!(p.years_remaining, years - 1);
                }
                None => assert!(summary.films_released.iter().any(|f| f.id == id)),
            }
        }
        assert!(summary.films_released.iter().all(|f| f.final_score <= 100));
        assert!(state.fanbase >= fanbase);
        assert!(state.available_actors.len() <= ACTOR_POOL_CAP);
        assert!(state.available_coproducers.len() <= COPRODUCER_POOL_CAP);
    }

    let state = engine.state();
    assert_eq!(state.history.len(), 12);
    let awards: usize = state.history.iter().map(|h| h.awards_won.len()).sum();
    assert_eq!(state.total_awards as usize, awards);
    let released: usize = state.history.iter().map(|h| h.films_released.len()).sum();
    assert_eq!(state.completed_films.len(), released);
}

#[test]
fn seeded_sessions_replay_exactly() {
    let play = || {
        let mut rng = StdRng::seed_from_u64(77);
        let mut state = generate_studio(&StudioConfig::default(), &mut rng);
        for _ in 0..6 {
            if let Some(req) = request(&state, ProjectSize::Indie, Genre::Horror) {
                if let Ok((next, _)) = start_production(&state, &req, FundsPolicy::Strict) {
                    state = next;
                }
            }
            state = advance_year(&state, &mut rng).state;
        }
        state
    };
    assert_eq!(play(), play());
}
