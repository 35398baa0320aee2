//! Freelance talent generation

use rand::Rng;
use studio_logic::ids::IdSequence;
use studio_logic::talent::{salary_for, Actor, Coproducer, ATTRIBUTE_MAX, ATTRIBUTE_MIN};

use super::names::generate_name;

/// Salary jitter range applied at hiring time
const SALARY_JITTER: std::ops::Range<f64> = 0.8..1.2;

fn roll_attribute(rng: &mut impl Rng) -> u8 {
    rng.gen_range(ATTRIBUTE_MIN..=ATTRIBUTE_MAX)
}

/// Generate a batch of available actors
pub fn generate_actors(count: usize, ids: &mut IdSequence, rng: &mut impl Rng) -> Vec<Actor> {
    (0..count)
        .map(|_| {
            let fame = roll_attribute(rng);
            let talent = roll_attribute(rng);
            Actor {
                id: ids.next(),
                name: generate_name(rng),
                fame,
                talent,
                salary: salary_for(fame, talent, rng.gen_range(SALARY_JITTER)),
                is_available: true,
            }
        })
        .collect()
}

/// Generate a batch of available co-producers
pub fn generate_coproducers(
    count: usize,
    ids: &mut IdSequence,
    rng: &mut impl Rng,
) -> Vec<Coproducer> {
    (0..count)
        .map(|_| {
            let script = roll_attribute(rng);
            let direction = roll_attribute(rng);
            Coproducer {
                id: ids.next(),
                name: generate_name(rng),
                script,
                direction,
                salary: salary_for(script, direction, rng.gen_range(SALARY_JITTER)),
                is_available: true,
            }
        })
        .collect()
}
