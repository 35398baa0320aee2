//! Name and title generation utilities

use rand::Rng;

/// Generate a random "Given Family" name
pub fn generate_name(rng: &mut impl Rng) -> String {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];

    format!("{} {}", given, family)
}

/// Generate a random film title
pub fn generate_film_title(rng: &mut impl Rng) -> String {
    let prefix = TITLE_PREFIXES[rng.gen_range(0..TITLE_PREFIXES.len())];
    let suffix = TITLE_SUFFIXES[rng.gen_range(0..TITLE_SUFFIXES.len())];

    format!("{} {}", prefix, suffix)
}

static GIVEN_NAMES: &[&str] = &[
    "Lucas",
    "Marina",
    "Pedro",
    "Ana",
    "Carlos",
    "Julia",
    "Rafael",
    "Beatriz",
    "Fernando",
    "Camila",
    "Gabriel",
    "Larissa",
    "Thiago",
    "Amanda",
    "Bruno",
    "Isabella",
    "Diego",
    "Leticia",
    "Matheus",
    "Natalia",
];

static FAMILY_NAMES: &[&str] = &[
    "Silva",
    "Santos",
    "Oliveira",
    "Souza",
    "Rodrigues",
    "Ferreira",
    "Almeida",
    "Nascimento",
    "Lima",
    "Araujo",
    "Pereira",
    "Costa",
    "Carvalho",
    "Gomes",
    "Martins",
    "Rocha",
    "Ribeiro",
    "Barbosa",
    "Castro",
    "Monteiro",
];

static TITLE_PREFIXES: &[&str] = &[
    "The Last",
    "The Shadow of the",
    "Beyond the",
    "The Secret of the",
    "On the Trail of the",
    "The Awakening of the",
    "The Journey of the",
    "The Mystery of the",
    "Under the Sky of the",
    "The Revenge of the",
];

static TITLE_SUFFIXES: &[&str] = &[
    "Horizon",
    "Destiny",
    "Past",
    "Silence",
    "Time",
    "Heart",
    "Dream",
    "Empire",
    "Ocean",
    "Fire",
];
