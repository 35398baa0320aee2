//! Freelance talent: actors and co-producers hired per production.

use serde::{Deserialize, Serialize};

use crate::ids::{ActorId, CoproducerId};

/// Lowest and highest value a talent attribute can take.
pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 10;

/// Salary paid per attribute point before jitter.
pub const SALARY_PER_POINT: i64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    /// 1–10
    pub fame: u8,
    /// 1–10
    pub talent: u8,
    pub salary: i64,
    pub is_available: bool,
}

impl Actor {
    /// Fame plus talent, the basis of both salary and acting score.
    pub fn star_power(&self) -> u32 {
        self.fame as u32 + self.talent as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coproducer {
    pub id: CoproducerId,
    pub name: String,
    /// 1–10
    pub script: u8,
    /// 1–10
    pub direction: u8,
    pub salary: i64,
    pub is_available: bool,
}

impl Coproducer {
    pub fn craft(&self) -> u32 {
        self.script as u32 + self.direction as u32
    }
}

/// Salary for a pair of attributes, scaled by a market jitter factor.
///
/// Rounded to whole dollars.
pub fn salary_for(first: u8, second: u8, jitter: f64) -> i64 {
    let base = (first as i64 + second as i64) * SALARY_PER_POINT;
    (base as f64 * jitter).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_scales_with_attributes() {
        assert_eq!(salary_for(5, 5, 1.0), 1_000_000);
        assert_eq!(salary_for(10, 10, 1.2), 2_400_000);
        assert_eq!(salary_for(1, 1, 0.8), 160_000);
    }

    #[test]
    fn test_star_power_adds_fame_and_talent() {
        let actor = Actor {
            id: ActorId(1),
            name: "Ana Costa".into(),
            fame: 3,
            talent: 9,
            salary: 0,
            is_available: true,
        };
        assert_eq!(actor.star_power(), 12);
    }
}
