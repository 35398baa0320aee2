//! Player actions between years: greenlighting productions, hiring and
//! upgrading crews, and moving crews between productions.
//!
//! Every action validates against the current [`GameState`] and either
//! returns a new state or a [`StudioError`] explaining the rejection. The
//! input state is never modified.

use serde::{Deserialize, Serialize};

use crate::costs::{crew_upgrade_cost, production_total_cost, NEW_CREW_COST};
use crate::crew::{upgrade_crew_attribute, CrewAttribute, CrewKind, FixedCrew, MAX_CREW_LEVEL};
use crate::error::StudioError;
use crate::ids::{ActorId, CoproducerId, CrewId, DistributorId, ProductionId};
use crate::production::{create_project, ProjectDraft};
use crate::state::GameState;
use crate::tables::{Genre, ProjectSize};

/// Attributes a freshly hired crew starts with.
pub const HIRED_CREW_ATTRIBUTE: u8 = 3;

/// Whether purchases may push money below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundsPolicy {
    /// Reject purchases the studio can't cover.
    #[default]
    Strict,
    /// Allow any purchase; money may go negative.
    AllowDebt,
}

impl FundsPolicy {
    pub fn check(self, cost: i64, money: i64) -> Result<(), StudioError> {
        match self {
            FundsPolicy::Strict if cost > money => Err(StudioError::InsufficientFunds {
                needed: cost,
                available: money,
            }),
            _ => Ok(()),
        }
    }
}

/// Choices made in the "new production" wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    pub title: String,
    pub genre: Genre,
    pub size: ProjectSize,
    pub coproducer: CoproducerId,
    pub lead_actor: ActorId,
    pub supporting_actor: ActorId,
    #[serde(default)]
    pub distributor: Option<DistributorId>,
}

/// Greenlight a production: pay its budget, cast the talent and staff it
/// with the first owned crew of each discipline.
pub fn start_production(
    state: &GameState,
    request: &ProductionRequest,
    policy: FundsPolicy,
) -> Result<(GameState, ProductionId), StudioError> {
    if request.lead_actor == request.supporting_actor {
        return Err(StudioError::InvalidAssignment(format!(
            "{} cannot play both lead and supporting roles",
            request.lead_actor
        )));
    }

    let coproducer = state
        .coproducer(request.coproducer)
        .filter(|c| c.is_available)
        .ok_or_else(|| {
            StudioError::InvalidAssignment(format!("{} is not available", request.coproducer))
        })?;
    let lead = state
        .actor(request.lead_actor)
        .filter(|a| a.is_available)
        .ok_or_else(|| {
            StudioError::InvalidAssignment(format!("{} is not available", request.lead_actor))
        })?;
    let supporting = state
        .actor(request.supporting_actor)
        .filter(|a| a.is_available)
        .ok_or_else(|| {
            StudioError::InvalidAssignment(format!(
                "{} is not available",
                request.supporting_actor
            ))
        })?;

    let distributor = match request.distributor {
        Some(id) => {
            let d = state.distributor(id).ok_or_else(|| {
                StudioError::InvalidAssignment(format!("unknown distributor {}", id))
            })?;
            if !d.is_unlocked(state.fanbase) {
                return Err(StudioError::DistributorLocked {
                    distributor: id,
                    required_fanbase: d.unlock_fanbase,
                });
            }
            Some(d.clone())
        }
        None => None,
    };

    let cost = production_total_cost(
        request.size,
        coproducer,
        lead,
        supporting,
        distributor.as_ref(),
    );
    policy.check(cost, state.money)?;

    let draft = ProjectDraft {
        title: request.title.clone(),
        genre: request.genre,
        size: request.size,
        coproducer: coproducer.clone(),
        lead_actor: lead.clone(),
        supporting_actor: supporting.clone(),
        distributor,
    };

    let mut next = state.clone();
    let id: ProductionId = next.ids.next();
    let mut project = create_project(id, draft, next.year, &next.owned_crews);
    project.coproducer.is_available = false;
    project.lead_actor.is_available = false;
    project.supporting_actor.is_available = false;

    for actor in next.available_actors.iter_mut() {
        if actor.id == request.lead_actor || actor.id == request.supporting_actor {
            actor.is_available = false;
        }
    }
    for coproducer in next.available_coproducers.iter_mut() {
        if coproducer.id == request.coproducer {
            coproducer.is_available = false;
        }
    }
    next.money -= cost;
    next.active_projects.push(project);
    Ok((next, id))
}

/// Pay for a crew upgrade and write the upgraded crew back to the roster.
/// Productions that reference the crew see the new attributes next year.
pub fn upgrade_crew(
    state: &GameState,
    crew_id: CrewId,
    attribute: CrewAttribute,
    policy: FundsPolicy,
) -> Result<GameState, StudioError> {
    let crew = state
        .crew(crew_id)
        .ok_or_else(|| StudioError::InvalidAssignment(format!("unknown crew {}", crew_id)))?;
    if crew.level >= MAX_CREW_LEVEL {
        return Err(StudioError::UpgradeUnavailable(format!(
            "{} is already level {}",
            crew.name, crew.level
        )));
    }
    if crew.is_maxed(attribute) {
        return Err(StudioError::UpgradeUnavailable(format!(
            "{} {:?} is already maxed",
            crew.name, attribute
        )));
    }
    let cost = crew_upgrade_cost(crew.level);
    policy.check(cost, state.money)?;

    let upgraded = upgrade_crew_attribute(crew, attribute);
    let mut next = state.clone();
    if let Some(slot) = next.owned_crews.iter_mut().find(|c| c.id == crew_id) {
        *slot = upgraded;
    }
    next.money -= cost;
    Ok(next)
}

/// Spreadsheet-style suffix: 0 → "A", 25 → "Z", 26 → "AA".
fn crew_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Hire a new level-1 crew of the given discipline.
pub fn hire_crew(
    state: &GameState,
    kind: CrewKind,
    policy: FundsPolicy,
) -> Result<(GameState, CrewId), StudioError> {
    policy.check(NEW_CREW_COST, state.money)?;

    let mut next = state.clone();
    let existing = next.crews_of(kind).count();
    let id: CrewId = next.ids.next();
    next.owned_crews.push(FixedCrew::new(
        id,
        format!("{} Crew {}", kind.label(), crew_letter(existing)),
        kind,
        HIRED_CREW_ATTRIBUTE,
        HIRED_CREW_ATTRIBUTE,
    ));
    next.money -= NEW_CREW_COST;
    Ok((next, id))
}

/// Add an owned crew to a production's slot for its discipline.
/// Assigning a crew that is already on the production is a no-op.
pub fn assign_crew(
    state: &GameState,
    project_id: ProductionId,
    crew_id: CrewId,
) -> Result<GameState, StudioError> {
    let crew = state
        .crew(crew_id)
        .ok_or_else(|| StudioError::InvalidAssignment(format!("unknown crew {}", crew_id)))?;
    let kind = crew.kind;
    if state.project(project_id).is_none() {
        return Err(StudioError::InvalidAssignment(format!(
            "no active production {}",
            project_id
        )));
    }

    let mut next = state.clone();
    if let Some(project) = next.active_projects.iter_mut().find(|p| p.id == project_id) {
        let slot = project.assigned_crews.of_mut(kind);
        if !slot.contains(&crew_id) {
            slot.push(crew_id);
        }
    }
    Ok(next)
}

/// Take a crew off a production. The last crew of a discipline stays.
pub fn unassign_crew(
    state: &GameState,
    project_id: ProductionId,
    crew_id: CrewId,
) -> Result<GameState, StudioError> {
    let project = state.project(project_id).ok_or_else(|| {
        StudioError::InvalidAssignment(format!("no active production {}", project_id))
    })?;
    let kind = CrewKind::ALL
        .into_iter()
        .find(|&k| project.assigned_crews.of(k).contains(&crew_id))
        .ok_or_else(|| {
            StudioError::InvalidAssignment(format!("{} is not on {}", crew_id, project_id))
        })?;
    if project.assigned_crews.of(kind).len() <= 1 {
        return Err(StudioError::InvalidAssignment(format!(
            "{} is the last {} crew on {}",
            crew_id,
            kind.label(),
            project_id
        )));
    }

    let mut next = state.clone();
    if let Some(project) = next.active_projects.iter_mut().find(|p| p.id == project_id) {
        project.assigned_crews.of_mut(kind).retain(|id| *id != crew_id);
    }
    Ok(next)
}
