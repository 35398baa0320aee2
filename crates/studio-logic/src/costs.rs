//! Cost model: production budgets, crew upgrades and upkeep.
//!
//! Costs never fail and never check affordability. Whether the studio may
//! go into debt is decided by the caller (see [`crate::actions::FundsPolicy`]).

use crate::crew::FixedCrew;
use crate::tables::{Distributor, ProjectSize};
use crate::talent::{Actor, Coproducer};

/// Upgrade price per current crew level.
pub const CREW_UPGRADE_UNIT: i64 = 1_000_000;

/// Yearly upkeep per crew level.
pub const CREW_MAINTENANCE_UNIT: i64 = 100_000;

/// Price of hiring a new crew of any discipline.
pub const NEW_CREW_COST: i64 = 3_000_000;

/// Size base cost plus the three salaries. Distributor fees are separate.
pub fn production_cost(
    size: ProjectSize,
    coproducer: &Coproducer,
    lead_actor: &Actor,
    supporting_actor: &Actor,
) -> i64 {
    size.base_cost() + coproducer.salary + lead_actor.salary + supporting_actor.salary
}

/// Everything paid up front when a production starts.
pub fn production_total_cost(
    size: ProjectSize,
    coproducer: &Coproducer,
    lead_actor: &Actor,
    supporting_actor: &Actor,
    distributor: Option<&Distributor>,
) -> i64 {
    production_cost(size, coproducer, lead_actor, supporting_actor)
        + distributor.map_or(0, |d| d.cost)
}

pub fn crew_upgrade_cost(current_level: u8) -> i64 {
    current_level as i64 * CREW_UPGRADE_UNIT
}

pub fn crew_maintenance_cost(crew: &FixedCrew) -> i64 {
    crew.level as i64 * CREW_MAINTENANCE_UNIT
}

/// Upkeep over every owned crew, assigned or idle.
pub fn total_maintenance_cost(crews: &[FixedCrew]) -> i64 {
    crews.iter().map(crew_maintenance_cost).sum()
}
