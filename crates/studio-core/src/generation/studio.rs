//! New game generation

use rand::Rng;
use studio_logic::state::GameState;
use studio_logic::tables::distributor_catalog;

use super::crew::generate_starting_crews;
use super::talent::{generate_actors, generate_coproducers};
use crate::config::StudioConfig;

/// Build the opening state: money, starting crews, the freelance pools and
/// the distributor catalog.
pub fn generate_studio(config: &StudioConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState::empty(config.starting_year, config.starting_money);

    state.owned_crews = generate_starting_crews(&mut state.ids);
    state.available_actors = generate_actors(config.initial_actors as usize, &mut state.ids, rng);
    state.available_coproducers =
        generate_coproducers(config.initial_coproducers as usize, &mut state.ids, rng);
    state.available_distributors = distributor_catalog();

    state
}
