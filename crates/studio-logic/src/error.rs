//! Errors returned by studio actions.

use crate::ids::DistributorId;

/// Why a studio action was rejected. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    /// The purchase costs more than the studio has.
    InsufficientFunds { needed: i64, available: i64 },
    /// Unknown id, wrong crew discipline, talent already cast, or removing
    /// the last crew of a discipline.
    InvalidAssignment(String),
    /// The fanbase has not reached the distributor's tier yet.
    DistributorLocked {
        distributor: DistributorId,
        required_fanbase: u64,
    },
    /// The crew is at max level or the attribute is already at 10.
    UpgradeUnavailable(String),
}

impl std::fmt::Display for StudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioError::InsufficientFunds { needed, available } => {
                write!(f, "Insufficient funds: need {}, have {}", needed, available)
            }
            StudioError::InvalidAssignment(reason) => write!(f, "Invalid assignment: {}", reason),
            StudioError::DistributorLocked {
                distributor,
                required_fanbase,
            } => write!(
                f,
                "Distributor {} is locked until the fanbase reaches {}",
                distributor, required_fanbase
            ),
            StudioError::UpgradeUnavailable(reason) => write!(f, "Upgrade unavailable: {}", reason),
        }
    }
}

impl std::error::Error for StudioError {}
