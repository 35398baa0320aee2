//! Studio Headless Simulation Harness
//!
//! Checks the studio rules and plays whole seasons across many seeds.
//! Runs entirely in-process: no UI, no persistence.
//!
//! Usage:
//!   cargo run -p studio-simtest
//!   cargo run -p studio-simtest -- --verbose
//!   cargo run -p studio-simtest -- --seed 7 --years 30 --json
//!   cargo run -p studio-simtest -- --config my_studio.json

use serde::Serialize;
use studio_core::config::{validate_config, StudioConfig};
use studio_core::engine::StudioEngine;
use studio_core::systems::{ACTOR_POOL_CAP, COPRODUCER_POOL_CAP};
use studio_logic::actions::{FundsPolicy, ProductionRequest};
use studio_logic::awards::{calculate_revenue, complete_project, determine_awards, final_score};
use studio_logic::costs::{crew_upgrade_cost, total_maintenance_cost};
use studio_logic::crew::{upgrade_crew_attribute, CrewAttribute, CrewKind, FixedCrew};
use studio_logic::ids::{ActorId, CoproducerId, CrewId, ProductionId};
use studio_logic::production::{advance_project, create_project, ProjectDraft, Scores};
use studio_logic::state::GameState;
use studio_logic::tables::{AwardCategory, Genre, ProjectSize};
use studio_logic::talent::{Actor, Coproducer};

// ── Default config (same JSON a host would ship) ────────────────────────
const CONFIG_JSON: &str = include_str!("../../../data/studio_config.json");

/// Seeds swept when no `--seed` is given
const SWEEP_SEEDS: u64 = 20;
const DEFAULT_YEARS: u32 = 15;

// ── Test harness ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    json: bool,
    config: Option<String>,
    seed: Option<u64>,
    years: u32,
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_options() -> Result<Options, String> {
    let args: Vec<String> = std::env::args().collect();
    let seed = match flag_value(&args, "--seed") {
        Some(s) => Some(s.parse().map_err(|_| format!("bad --seed: {}", s))?),
        None => None,
    };
    let years = match flag_value(&args, "--years") {
        Some(s) => s.parse().map_err(|_| format!("bad --years: {}", s))?,
        None => DEFAULT_YEARS,
    };
    Ok(Options {
        verbose: args.iter().any(|a| a == "--verbose"),
        json: args.iter().any(|a| a == "--json"),
        config: flag_value(&args, "--config"),
        seed,
        years,
    })
}

fn main() {
    let options = match parse_options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let verbose = options.verbose && !options.json;
    if !options.json {
        println!("=== Studio Simulation Harness ===\n");
    }

    let mut results = Vec::new();

    // 1. Config parsing & validation
    let (config, config_results) = validate_configuration(&options, verbose);
    results.extend(config_results);

    // 2. Reference tables
    results.extend(validate_tables(verbose));

    // 3. Costs & crews
    results.extend(validate_costs(verbose));

    // 4. Final score & revenue
    results.extend(validate_scoring(verbose));

    // 5. Awards
    results.extend(validate_awards(verbose));

    // 6. Season sweep
    if let Some(config) = config {
        results.extend(validate_seasons(&config, &options, verbose));
    }

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    if options.json {
        match serde_json::to_string_pretty(&results) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("JSON output failed: {}", e),
        }
    } else {
        println!();
        for r in &results {
            let icon = if r.passed { "✓" } else { "✗" };
            if !r.passed || verbose {
                println!("  {} {}: {}", icon, r.name, r.detail);
            }
        }
        println!(
            "\n=== RESULT: {}/{} passed, {} failed ===",
            passed, total, failed
        );
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn section(title: &str, verbose: bool) {
    if verbose {
        println!("--- {} ---", title);
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

fn actor(id: u32, fame: u8, talent: u8) -> Actor {
    Actor {
        id: ActorId(id),
        name: format!("Actor {}", id),
        fame,
        talent,
        salary: 0,
        is_available: false,
    }
}

fn draft(genre: Genre, size: ProjectSize, direction: u8, talent: u8) -> ProjectDraft {
    ProjectDraft {
        title: "Harness Feature".into(),
        genre,
        size,
        coproducer: Coproducer {
            id: CoproducerId(1),
            name: "Producer".into(),
            script: 5,
            direction,
            salary: 0,
            is_available: false,
        },
        lead_actor: actor(2, 5, talent),
        supporting_actor: actor(3, 5, talent),
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

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_configuration(
    options: &Options,
    verbose: bool,
) -> (Option<StudioConfig>, Vec<TestResult>) {
    section("Configuration", verbose);
    let mut results = Vec::new();

    let bundled = StudioConfig::from_json(CONFIG_JSON);
    results.push(TestResult {
        name: "config_bundled_matches_default".into(),
        passed: bundled.as_ref().is_ok_and(|c| *c == StudioConfig::default()),
        detail: match &bundled {
            Ok(_) => "bundled config parses to the defaults".into(),
            Err(e) => e.to_string(),
        },
    });

    let loaded = match &options.config {
        Some(path) => StudioConfig::load(path),
        None => Ok(StudioConfig::default()),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "config_load".into(),
                passed: false,
                detail: e.to_string(),
            });
            return (None, results);
        }
    };

    let errors = validate_config(&config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "start {} with {}, policy {:?}",
                config.starting_year, config.starting_money, config.funds_policy
            )
        } else {
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    let config = errors.is_empty().then_some(config);
    (config, results)
}

// ── 2. Reference Tables ─────────────────────────────────────────────────

fn validate_tables(verbose: bool) -> Vec<TestResult> {
    section("Reference Tables", verbose);
    let mut results = Vec::new();

    let bad: Vec<_> = Genre::ALL
        .iter()
        .filter(|g| (g.weights().sum() - 1.0).abs() > 1e-9)
        .collect();
    results.push(TestResult {
        name: "genre_weights_sum_to_one".into(),
        passed: bad.is_empty(),
        detail: format!("{} genres, {} off", Genre::ALL.len(), bad.len()),
    });

    let years: Vec<u32> = ProjectSize::ALL.iter().map(|s| s.years()).collect();
    results.push(TestResult {
        name: "size_years".into(),
        passed: years == vec![1, 2, 3, 4],
        detail: format!("{:?}", years),
    });

    results.push(TestResult {
        name: "award_categories".into(),
        passed: AwardCategory::ALL.len() == 11,
        detail: format!("{} categories", AwardCategory::ALL.len()),
    });

    if verbose {
        for category in AwardCategory::ALL {
            println!(
                "    {:24} {:?} ≥ {}",
                category.label(),
                category.key(),
                category.threshold()
            );
        }
    }

    results
}

// ── 3. Costs & Crews ────────────────────────────────────────────────────

fn validate_costs(verbose: bool) -> Vec<TestResult> {
    section("Costs & Crews", verbose);
    let mut results = Vec::new();

    let crews: Vec<FixedCrew> = CrewKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| FixedCrew::new(CrewId(i as u32 + 1), kind.label(), kind, 1, 1))
        .collect();
    let upkeep = total_maintenance_cost(&crews);
    results.push(TestResult {
        name: "maintenance_three_level_one".into(),
        passed: upkeep == 300_000,
        detail: format!("upkeep {}", upkeep),
    });

    let upgraded = upgrade_crew_attribute(&crews[0], CrewAttribute::Primary);
    results.push(TestResult {
        name: "upgrade_cost_scales_with_level".into(),
        passed: crew_upgrade_cost(crews[0].level) == 1_000_000
            && crew_upgrade_cost(upgraded.level) == 2_000_000,
        detail: format!(
            "level {} → {}, next upgrade {}",
            crews[0].level,
            upgraded.level,
            crew_upgrade_cost(upgraded.level)
        ),
    });

    let maxed = FixedCrew::new(CrewId(9), "Maxed", CrewKind::Art, 10, 4);
    let bumped = upgrade_crew_attribute(&maxed, CrewAttribute::Primary);
    results.push(TestResult {
        name: "upgrade_clamps_at_ten".into(),
        passed: bumped.attributes.primary == 10 && bumped.level == 2,
        detail: format!(
            "primary {}, level {}",
            bumped.attributes.primary, bumped.level
        ),
    });

    results
}

// ── 4. Final Score & Revenue ────────────────────────────────────────────

fn validate_scoring(verbose: bool) -> Vec<TestResult> {
    section("Final Score & Revenue", verbose);
    let mut results = Vec::new();

    let mut out_of_range = 0;
    for genre in Genre::ALL {
        for raw in [0.0, 0.5, 7.3, 25.0, 49.9, 50.0, 120.0, 1e6] {
            if final_score(&uniform(raw), genre) > 100 {
                out_of_range += 1;
            }
        }
    }
    results.push(TestResult {
        name: "final_score_bounds".into(),
        passed: out_of_range == 0,
        detail: format!("{} scores above 100", out_of_range),
    });

    let top = final_score(&uniform(50.0), Genre::Action);
    results.push(TestResult {
        name: "final_score_maxed_action".into(),
        passed: top == 100,
        detail: format!("action at 100 normalized → {}", top),
    });

    let mut project = create_project(
        ProductionId(1),
        draft(Genre::Drama, ProjectSize::Indie, 1, 1),
        2025,
        &[],
    );
    project.scores = uniform(25.0);
    let film = complete_project(&project, 2025);
    let revenue = calculate_revenue(&film, 0);
    results.push(TestResult {
        name: "revenue_neutral_indie".into(),
        passed: film.final_score == 50 && revenue == 1_000_000,
        detail: format!("final {}, revenue {}", film.final_score, revenue),
    });

    let small = create_project(
        ProductionId(2),
        draft(Genre::Comedy, ProjectSize::Small, 1, 1),
        2025,
        &[],
    );
    let once = advance_project(&small, &uniform(1.0));
    let twice = advance_project(&once, &uniform(1.0));
    results.push(TestResult {
        name: "small_completes_in_two".into(),
        passed: !once.is_complete && twice.is_complete,
        detail: format!(
            "after 1: complete={}, after 2: complete={}",
            once.is_complete, twice.is_complete
        ),
    });

    results
}

// ── 5. Awards ───────────────────────────────────────────────────────────

fn validate_awards(verbose: bool) -> Vec<TestResult> {
    section("Awards", verbose);
    let mut results = Vec::new();

    let mut project = create_project(
        ProductionId(1),
        draft(Genre::Romance, ProjectSize::Medium, 7, 7),
        2025,
        &[],
    );
    project.scores = Scores {
        acting: 50.0,
        script: 15.0,
        filming: 15.0,
        art: 12.0,
        editing: 15.0,
    };
    let mut film = complete_project(&project, 2025);
    film.final_score = film.final_score.max(70);
    let winners = determine_awards(std::slice::from_ref(&film));
    results.push(TestResult {
        name: "threshold_film_sweeps".into(),
        passed: winners.len() == 11,
        detail: format!("{} of 11 awards", winners.len()),
    });

    let mut rival = film.clone();
    rival.id = ProductionId(2);
    let cohort = vec![film, rival];
    let first = determine_awards(&cohort);
    let second = determine_awards(&cohort);
    results.push(TestResult {
        name: "awards_deterministic".into(),
        passed: first == second && first.iter().all(|w| w.film == ProductionId(1)),
        detail: "tied cohort goes to the first film every time".into(),
    });

    results
}

// ── 6. Season Sweep ─────────────────────────────────────────────────────

/// Greenlight the cheapest affordable production the pools allow.
fn autopilot_request(state: &GameState, year: u32) -> Option<ProductionRequest> {
    let mut actors: Vec<&Actor> = state
        .available_actors
        .iter()
        .filter(|a| a.is_available)
        .collect();
    actors.sort_by_key(|a| a.salary);
    let coproducer = state
        .available_coproducers
        .iter()
        .filter(|c| c.is_available)
        .min_by_key(|c| c.salary)?;
    let size = if year % 3 == 0 {
        ProjectSize::Small
    } else {
        ProjectSize::Indie
    };
    Some(ProductionRequest {
        title: format!("Feature {}", year),
        genre: Genre::ALL[year as usize % Genre::ALL.len()],
        size,
        coproducer: coproducer.id,
        lead_actor: actors.first()?.id,
        supporting_actor: actors.get(1)?.id,
        distributor: None,
    })
}

#[derive(Default)]
struct SeasonTally {
    violations: Vec<String>,
    released: usize,
    awards: usize,
    final_money: i64,
    final_fanbase: u64,
}

fn play_season(
    config: &StudioConfig,
    seed: u64,
    years: u32,
) -> Result<(SeasonTally, GameState), String> {
    let mut engine =
        StudioEngine::new(config.clone().with_seed(seed)).map_err(|e| e.to_string())?;
    let mut tally = SeasonTally::default();

    for year in 0..years {
        if let Some(req) = autopilot_request(engine.state(), year) {
            // A strict studio is turned down when funds run short
            let _ = engine.start_production(&req);
        }

        let before = engine.state().clone();
        let summary = engine.advance_year();
        let after = engine.state();

        for project in &before.active_projects {
            match after.project(project.id) {
                Some(p) if !p.scores.dominates(&project.scores) => tally
                    .violations
                    .push(format!("{}: scores went down on {}", summary.year, p.id)),
                Some(_) => {}
                None => {
                    if !summary.films_released.iter().any(|f| f.id == project.id) {
                        tally
                            .violations
                            .push(format!("{}: {} vanished", summary.year, project.id));
                    }
                }
            }
        }
        for film in &summary.films_released {
            let started = before
                .active_projects
                .iter()
                .find(|p| p.id == film.id)
                .map_or(film.year_completed, |p| p.year_started);
            let expected_years = film.year_completed + 1 - started;
            if film.final_score > 100 || expected_years != film.size.years() {
                tally.violations.push(format!(
                    "{}: {} released after {} years, score {}",
                    summary.year, film.id, expected_years, film.final_score
                ));
            }
        }
        let expected_money = before.money - summary.expenses + summary.revenue;
        if after.money != expected_money {
            tally.violations.push(format!(
                "{}: money {} expected {}",
                summary.year, after.money, expected_money
            ));
        }
        if summary.expenses != total_maintenance_cost(&before.owned_crews) {
            tally
                .violations
                .push(format!("{}: upkeep mismatch", summary.year));
        }
        if after.fanbase < before.fanbase {
            tally
                .violations
                .push(format!("{}: fanbase shrank", summary.year));
        }
        if after.available_actors.len() > ACTOR_POOL_CAP
            || after.available_coproducers.len() > COPRODUCER_POOL_CAP
        {
            tally
                .violations
                .push(format!("{}: talent pool over cap", summary.year));
        }

        tally.released += summary.films_released.len();
        tally.awards += summary.awards_won.len();
    }

    let state = engine.state().clone();
    tally.final_money = state.money;
    tally.final_fanbase = state.fanbase;
    if state.total_awards as usize != tally.awards {
        tally.violations.push("award total mismatch".into());
    }
    Ok((tally, state))
}

fn validate_seasons(config: &StudioConfig, options: &Options, verbose: bool) -> Vec<TestResult> {
    section("Season Sweep", verbose);
    let mut results = Vec::new();

    let seeds: Vec<u64> = match options.seed {
        Some(seed) => vec![seed],
        None => (0..SWEEP_SEEDS).collect(),
    };

    let mut violations = Vec::new();
    let mut released = 0;
    let mut awards = 0;
    for &seed in &seeds {
        match play_season(config, seed, options.years) {
            Ok((tally, _)) => {
                if verbose {
                    println!(
                        "    seed {:3}: {} films, {} awards, money {}, fans {}",
                        seed, tally.released, tally.awards, tally.final_money, tally.final_fanbase
                    );
                }
                released += tally.released;
                awards += tally.awards;
                violations.extend(
                    tally
                        .violations
                        .into_iter()
                        .map(|v| format!("seed {}: {}", seed, v)),
                );
            }
            Err(e) => violations.push(format!("seed {}: {}", seed, e)),
        }
    }

    results.push(TestResult {
        name: "season_invariants".into(),
        passed: violations.is_empty(),
        detail: if violations.is_empty() {
            format!(
                "{} seeds × {} years, {} films, {} awards",
                seeds.len(),
                options.years,
                released,
                awards
            )
        } else {
            violations.iter().take(5).cloned().collect::<Vec<_>>().join("; ")
        },
    });

    let seed = seeds.first().copied().unwrap_or(0);
    let replay = play_season(config, seed, options.years)
        .and_then(|(_, a)| play_season(config, seed, options.years).map(|(_, b)| a == b));
    results.push(TestResult {
        name: "season_replays_with_seed".into(),
        passed: replay == Ok(true),
        detail: format!("seed {} replayed", seed),
    });

    let debt_config = StudioConfig {
        funds_policy: FundsPolicy::AllowDebt,
        ..config.clone()
    };
    let debt = play_season(&debt_config, seed, options.years);
    results.push(TestResult {
        name: "season_allow_debt".into(),
        passed: debt.as_ref().is_ok_and(|(t, _)| t.violations.is_empty()),
        detail: match &debt {
            Ok((t, _)) => format!("ended with {}", t.final_money),
            Err(e) => e.clone(),
        },
    });

    results
}
