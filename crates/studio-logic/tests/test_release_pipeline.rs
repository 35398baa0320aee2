//! Integration tests for the production pipeline.
//!
//! Exercises: ProductionRequest → start_production → advance_project
//! → complete_project → determine_awards → revenue & fanbase
//!
//! All tests are pure logic. Score increments are fixed by hand.

use studio_logic::actions::{
    assign_crew, hire_crew, start_production, unassign_crew, upgrade_crew, FundsPolicy,
    ProductionRequest,
};
use studio_logic::awards::{
    calculate_fanbase_increase, calculate_revenue, complete_project, determine_awards,
};
use studio_logic::costs::total_maintenance_cost;
use studio_logic::crew::{crew_strength, CrewAttribute, CrewKind, FixedCrew};
use studio_logic::error::StudioError;
use studio_logic::ids::{ActorId, CoproducerId};
use studio_logic::production::{advance_project, Award, Scores};
use studio_logic::state::GameState;
use studio_logic::tables::{distributor_catalog, AwardCategory, Genre, ProjectSize};
use studio_logic::talent::{Actor, Coproducer};

// ── Helpers ────────────────────────────────────────────────────────────

fn actor(id: ActorId, fame: u8, talent: u8) -> Actor {
    Actor {
        id,
        name: format!("Actor {}", id),
        fame,
        talent,
        salary: (fame as i64 + talent as i64) * 100_000,
        is_available: true,
    }
}

fn coproducer(id: CoproducerId, script: u8, direction: u8) -> Coproducer {
    Coproducer {
        id,
        name: format!("Producer {}", id),
        script,
        direction,
        salary: (script as i64 + direction as i64) * 100_000,
        is_available: true,
    }
}

/// A studio with three starting crews, four actors and two co-producers.
fn studio(money: i64) -> GameState {
    let mut state = GameState::empty(2025, money);
    for kind in CrewKind::ALL {
        let id = state.ids.next();
        state
            .owned_crews
            .push(FixedCrew::new(id, format!("{} Crew A", kind.label()), kind, 1, 1));
    }
    for (fame, talent) in [(8, 9), (6, 7), (3, 4), (2, 2)] {
        let id = state.ids.next();
        state.available_actors.push(actor(id, fame, talent));
    }
    for (script, direction) in [(9, 8), (2, 3)] {
        let id = state.ids.next();
        state.available_coproducers.push(coproducer(id, script, direction));
    }
    state.available_distributors = distributor_catalog();
    state
}

fn request(
    state: &GameState,
    size: ProjectSize,
    cast: (usize, usize),
    producer: usize,
) -> ProductionRequest {
    ProductionRequest {
        title: format!("{} feature", size.label()),
        genre: Genre::Drama,
        size,
        coproducer: state.available_coproducers[producer].id,
        lead_actor: state.available_actors[cast.0].id,
        supporting_actor: state.available_actors[cast.1].id,
        distributor: None,
    }
}

fn uniform(v: f64) -> Scores {
    Scores {
        acting: v,
        script: v,
        filming: v,
        art: v,
        editing: v,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[test]
fn production_runs_from_greenlight_to_release() {
    let state = studio(10_000_000);
    let req = request(&state, ProjectSize::Small, (0, 1), 0);
    let (state, id) = start_production(&state, &req, FundsPolicy::Strict).unwrap();

    // 1M base + 1.7M + 1.3M + 1.7M
    assert_eq!(state.money, 10_000_000 - 5_700_000);
    let project = state.project(id).unwrap().clone();
    assert_eq!(project.assigned_crews.filming.len(), 1);
    assert!(!state.actor(req.lead_actor).unwrap().is_available);

    let year_one = advance_project(&project, &uniform(12.0));
    assert!(!year_one.is_complete);
    let year_two = advance_project(&year_one, &uniform(12.0));
    assert!(year_two.is_complete);

    let film = complete_project(&year_two, 2026);
    // 24 raw → 48 normalized in every dimension
    assert_eq!(film.final_score, 48);
    assert_eq!(calculate_revenue(&film, 0), 960_000);
    assert_eq!(calculate_fanbase_increase(&film), 0);
}

#[test]
fn awarded_cohort_feeds_fanbase() {
    let state = studio(10_000_000);
    let (state, first) = start_production(
        &state,
        &request(&state, ProjectSize::Indie, (0, 1), 0),
        FundsPolicy::Strict,
    )
    .unwrap();
    let (state, second) = start_production(
        &state,
        &request(&state, ProjectSize::Indie, (2, 3), 1),
        FundsPolicy::Strict,
    )
    .unwrap();

    let strong = complete_project(
        &advance_project(state.project(first).unwrap(), &uniform(40.0)),
        2025,
    );
    let weak = complete_project(
        &advance_project(state.project(second).unwrap(), &uniform(5.0)),
        2025,
    );
    assert_eq!(strong.final_score, 80);
    assert_eq!(weak.final_score, 10);

    let winners = determine_awards(&[weak.clone(), strong.clone()]);
    assert!(winners.iter().all(|w| w.film == first));
    assert!(winners.iter().any(|w| w.category == AwardCategory::BestFilm));
    assert!(winners.iter().any(|w| w.category == AwardCategory::BestLeadActor));

    let mut strong = strong;
    strong.awards = winners
        .iter()
        .map(|w| Award {
            category: w.category,
            year: 2025,
        })
        .collect();
    let gain = calculate_fanbase_increase(&strong);
    let expected = ((30_000.0 + strong.awards.len() as f64 * 5_000.0) * 0.5).round() as u64;
    assert_eq!(gain, expected);
}

#[test]
fn crew_roster_changes_reach_productions() {
    let state = studio(20_000_000);
    let (state, project) = start_production(
        &state,
        &request(&state, ProjectSize::Medium, (2, 3), 1),
        FundsPolicy::AllowDebt,
    )
    .unwrap();

    let (state, hired) = hire_crew(&state, CrewKind::Art, FundsPolicy::AllowDebt).unwrap();
    assert_eq!(state.crew(hired).unwrap().name, "Art Crew B");
    let state = assign_crew(&state, project, hired).unwrap();

    let assigned = state.project(project).unwrap().assigned_crews.art.clone();
    assert_eq!(crew_strength(&state.owned_crews, &assigned, CrewKind::Art), 2 + 6);

    let state =
        upgrade_crew(&state, hired, CrewAttribute::Secondary, FundsPolicy::AllowDebt).unwrap();
    assert_eq!(crew_strength(&state.owned_crews, &assigned, CrewKind::Art), 2 + 7);
    // 3 level-1 crews + one level-2
    assert_eq!(total_maintenance_cost(&state.owned_crews), 500_000);

    let state = unassign_crew(&state, project, hired).unwrap();
    let err = unassign_crew(&state, project, state.owned_crews[1].id).unwrap_err();
    assert!(matches!(err, StudioError::InvalidAssignment(_)));
}

#[test]
fn strict_studio_cannot_overspend() {
    let state = studio(1_000_000);
    let err = hire_crew(&state, CrewKind::Filming, FundsPolicy::Strict).unwrap_err();
    assert_eq!(
        err,
        StudioError::InsufficientFunds {
            needed: 3_000_000,
            available: 1_000_000
        }
    );
    let (debt, _) = hire_crew(&state, CrewKind::Filming, FundsPolicy::AllowDebt).unwrap();
    assert_eq!(debt.money, -2_000_000);
}
