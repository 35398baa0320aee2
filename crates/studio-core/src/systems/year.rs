//! Year system - advances the whole studio by one simulated year

use log::debug;
use rand::Rng;
use studio_logic::awards::{
    calculate_fanbase_increase, calculate_revenue, complete_project, determine_awards,
};
use studio_logic::costs::total_maintenance_cost;
use studio_logic::production::{advance_project, Award, CompletedFilm, FilmProject};
use studio_logic::state::{GameState, YearSummary};

use super::scoring::yearly_score_increase;
use crate::generation::{generate_actors, generate_coproducers};

/// Actors that enter the freelance pool each year
pub const ACTORS_PER_YEAR: usize = 3;
/// Largest the actor pool gets; the oldest entries drop off first
pub const ACTOR_POOL_CAP: usize = 10;
/// Co-producers that enter the freelance pool each year
pub const COPRODUCERS_PER_YEAR: usize = 2;
/// Largest the co-producer pool gets
pub const COPRODUCER_POOL_CAP: usize = 6;

/// The next state plus the report for the year just played
#[derive(Debug, Clone)]
pub struct YearOutcome {
    pub state: GameState,
    pub summary: YearSummary,
}

/// Keep only the newest `cap` entries.
fn keep_last<T>(mut pool: Vec<T>, cap: usize) -> Vec<T> {
    let excess = pool.len().saturating_sub(cap);
    pool.drain(..excess);
    pool
}

/// Play one year: pay crew upkeep, progress every production, release the
/// ones that wrap, hand out awards, collect revenue and fans, and refresh
/// the talent pools. Never fails; money may go negative.
pub fn advance_year(state: &GameState, rng: &mut impl Rng) -> YearOutcome {
    let year = state.year;
    let expenses = total_maintenance_cost(&state.owned_crews);
    let mut money = state.money - expenses;
    let mut fanbase = state.fanbase;

    let mut released: Vec<CompletedFilm> = Vec::new();
    let mut ongoing: Vec<FilmProject> = Vec::new();
    for project in &state.active_projects {
        let delta = yearly_score_increase(project, &state.owned_crews, rng);
        let advanced = advance_project(project, &delta);
        if advanced.is_complete {
            released.push(complete_project(&advanced, year));
        } else {
            ongoing.push(advanced);
        }
    }

    let winners = determine_awards(&released);
    let mut awards_won: Vec<Award> = Vec::new();
    for film in released.iter_mut() {
        for winner in winners.iter().filter(|w| w.film == film.id) {
            let award = Award {
                category: winner.category,
                year,
            };
            film.awards.push(award);
            awards_won.push(award);
        }
        film.revenue = calculate_revenue(film, fanbase);
        money += film.revenue;
        fanbase += calculate_fanbase_increase(film);
        debug!(
            "Released \"{}\" ({}): score {}, {} awards, revenue {}",
            film.title,
            film.id,
            film.final_score,
            film.awards.len(),
            film.revenue
        );
    }

    let mut next = state.clone();

    let mut actors: Vec<_> = next
        .available_actors
        .into_iter()
        .filter(|a| a.is_available)
        .collect();
    actors.extend(generate_actors(ACTORS_PER_YEAR, &mut next.ids, rng));
    next.available_actors = keep_last(actors, ACTOR_POOL_CAP);

    let mut coproducers: Vec<_> = next
        .available_coproducers
        .into_iter()
        .filter(|c| c.is_available)
        .collect();
    coproducers.extend(generate_coproducers(COPRODUCERS_PER_YEAR, &mut next.ids, rng));
    next.available_coproducers = keep_last(coproducers, COPRODUCER_POOL_CAP);

    next.release_cast(&released);

    let summary = YearSummary {
        year,
        films_released: released.clone(),
        awards_won,
        revenue: released.iter().map(|f| f.revenue).sum(),
        expenses,
    };

    next.year = year + 1;
    next.money = money;
    next.fanbase = fanbase;
    next.active_projects = ongoing;
    next.completed_films.extend(released);
    next.total_awards += summary.awards_won.len() as u32;
    next.history.push(summary.clone());

    YearOutcome {
        state: next,
        summary,
    }
}
