//! Reference tables: genre weights, project sizes, award categories and
//! the distributor catalog.
//!
//! Pure data. Every tunable number the rules depend on lives here or in
//! [`crate::costs`].

use serde::{Deserialize, Serialize};

use crate::ids::DistributorId;

// ── Genres ─────────────────────────────────────────────────────────────

/// Film genre. Decides how the five score dimensions are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Romance,
    Thriller,
    Documentary,
}

/// Per-genre weight of each score dimension. Weights sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreWeights {
    pub acting: f64,
    pub script: f64,
    pub filming: f64,
    pub art: f64,
    pub editing: f64,
}

impl GenreWeights {
    pub fn sum(&self) -> f64 {
        self.acting + self.script + self.filming + self.art + self.editing
    }
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::SciFi,
        Genre::Romance,
        Genre::Thriller,
        Genre::Documentary,
    ];

    pub fn weights(self) -> GenreWeights {
        let (acting, script, filming, art, editing) = match self {
            Genre::Action => (0.20, 0.15, 0.10, 0.25, 0.30),
            Genre::Comedy => (0.25, 0.30, 0.15, 0.10, 0.20),
            Genre::Drama => (0.30, 0.20, 0.25, 0.15, 0.10),
            Genre::Horror => (0.15, 0.10, 0.20, 0.30, 0.25),
            Genre::SciFi => (0.15, 0.15, 0.25, 0.20, 0.25),
            Genre::Romance => (0.25, 0.20, 0.15, 0.25, 0.15),
            Genre::Thriller => (0.20, 0.25, 0.20, 0.15, 0.20),
            Genre::Documentary => (0.10, 0.25, 0.30, 0.20, 0.15),
        };
        GenreWeights {
            acting,
            script,
            filming,
            art,
            editing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::SciFi => "Science Fiction",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
            Genre::Documentary => "Documentary",
        }
    }
}

// ── Project sizes ──────────────────────────────────────────────────────

/// Production scale: duration, budget and box-office ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSize {
    Indie,
    Small,
    Medium,
    Large,
}

impl ProjectSize {
    pub const ALL: [ProjectSize; 4] = [
        ProjectSize::Indie,
        ProjectSize::Small,
        ProjectSize::Medium,
        ProjectSize::Large,
    ];

    /// Years of production before release.
    pub fn years(self) -> u32 {
        match self {
            ProjectSize::Indie => 1,
            ProjectSize::Small => 2,
            ProjectSize::Medium => 3,
            ProjectSize::Large => 4,
        }
    }

    /// Flat cost before talent salaries.
    pub fn base_cost(self) -> i64 {
        match self {
            ProjectSize::Indie => 100_000,
            ProjectSize::Small => 1_000_000,
            ProjectSize::Medium => 10_000_000,
            ProjectSize::Large => 100_000_000,
        }
    }

    /// Revenue at a final score of 50 with no fans.
    pub fn base_revenue(self) -> i64 {
        match self {
            ProjectSize::Indie => 1_000_000,
            ProjectSize::Small => 1_000_000,
            ProjectSize::Medium => 10_000_000,
            ProjectSize::Large => 100_000_000,
        }
    }

    /// Scales the fanbase a release brings in.
    pub fn fanbase_multiplier(self) -> f64 {
        match self {
            ProjectSize::Indie => 0.5,
            ProjectSize::Small => 1.0,
            ProjectSize::Medium => 2.0,
            ProjectSize::Large => 4.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectSize::Indie => "Indie",
            ProjectSize::Small => "Small",
            ProjectSize::Medium => "Medium",
            ProjectSize::Large => "Large",
        }
    }
}

// ── Awards ─────────────────────────────────────────────────────────────

/// The eleven yearly award categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardCategory {
    BestFilm,
    BestScript,
    BestDirection,
    BestLeadActor,
    BestSupportingActor,
    BestCinematography,
    BestSound,
    BestCostume,
    BestProductionDesign,
    BestEditing,
    BestVfx,
}

/// Which value of a completed film a category ranks the cohort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardKey {
    FinalScore,
    ScriptScore,
    Direction,
    LeadTalent,
    SupportingTalent,
    FilmingScore,
    ArtScore,
    EditingScore,
}

impl AwardCategory {
    /// All categories in evaluation order.
    pub const ALL: [AwardCategory; 11] = [
        AwardCategory::BestFilm,
        AwardCategory::BestScript,
        AwardCategory::BestDirection,
        AwardCategory::BestLeadActor,
        AwardCategory::BestSupportingActor,
        AwardCategory::BestCinematography,
        AwardCategory::BestSound,
        AwardCategory::BestCostume,
        AwardCategory::BestProductionDesign,
        AwardCategory::BestEditing,
        AwardCategory::BestVfx,
    ];

    pub fn key(self) -> AwardKey {
        match self {
            AwardCategory::BestFilm => AwardKey::FinalScore,
            AwardCategory::BestScript => AwardKey::ScriptScore,
            AwardCategory::BestDirection => AwardKey::Direction,
            AwardCategory::BestLeadActor => AwardKey::LeadTalent,
            AwardCategory::BestSupportingActor => AwardKey::SupportingTalent,
            AwardCategory::BestCinematography | AwardCategory::BestSound => AwardKey::FilmingScore,
            AwardCategory::BestCostume | AwardCategory::BestProductionDesign => AwardKey::ArtScore,
            AwardCategory::BestEditing | AwardCategory::BestVfx => AwardKey::EditingScore,
        }
    }

    /// Minimum key value the top film needs to take the award.
    pub fn threshold(self) -> f64 {
        match self {
            AwardCategory::BestFilm => 70.0,
            AwardCategory::BestScript => 15.0,
            AwardCategory::BestDirection => 7.0,
            AwardCategory::BestLeadActor => 7.0,
            AwardCategory::BestSupportingActor => 7.0,
            AwardCategory::BestCinematography => 15.0,
            AwardCategory::BestSound => 12.0,
            AwardCategory::BestCostume => 12.0,
            AwardCategory::BestProductionDesign => 10.0,
            AwardCategory::BestEditing => 12.0,
            AwardCategory::BestVfx => 15.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AwardCategory::BestFilm => "Best Film",
            AwardCategory::BestScript => "Best Script",
            AwardCategory::BestDirection => "Best Direction",
            AwardCategory::BestLeadActor => "Best Lead Actor",
            AwardCategory::BestSupportingActor => "Best Supporting Actor",
            AwardCategory::BestCinematography => "Best Cinematography",
            AwardCategory::BestSound => "Best Sound",
            AwardCategory::BestCostume => "Best Costume Design",
            AwardCategory::BestProductionDesign => "Best Production Design",
            AwardCategory::BestEditing => "Best Editing",
            AwardCategory::BestVfx => "Best Visual Effects",
        }
    }
}

// ── Distributors ───────────────────────────────────────────────────────

/// Catalog entry for a distribution deal, picked when a production starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: DistributorId,
    pub name: String,
    /// Box-office multiplier the deal advertises.
    pub revenue_multiplier: f64,
    /// Final score the deal asks for.
    pub min_quality: u8,
    /// One-time cost paid at production start.
    pub cost: i64,
    /// Fanbase the studio needs before the deal is offered.
    pub unlock_fanbase: u64,
}

impl Distributor {
    pub fn is_unlocked(&self, fanbase: u64) -> bool {
        fanbase >= self.unlock_fanbase
    }
}

/// Fanbase at which the first distributor deals open up.
pub const DISTRIBUTOR_UNLOCK_FANBASE: u64 = 10_000;

/// The starting distributor catalog, cheapest first.
pub fn distributor_catalog() -> Vec<Distributor> {
    vec![
        Distributor {
            id: DistributorId(1),
            name: "Indie Films Collective".to_string(),
            revenue_multiplier: 1.2,
            min_quality: 40,
            cost: 500_000,
            unlock_fanbase: DISTRIBUTOR_UNLOCK_FANBASE,
        },
        Distributor {
            id: DistributorId(2),
            name: "National Pictures".to_string(),
            revenue_multiplier: 1.5,
            min_quality: 60,
            cost: 2_000_000,
            unlock_fanbase: 50_000,
        },
        Distributor {
            id: DistributorId(3),
            name: "Global Entertainment".to_string(),
            revenue_multiplier: 2.0,
            min_quality: 75,
            cost: 5_000_000,
            unlock_fanbase: 200_000,
        },
        Distributor {
            id: DistributorId(4),
            name: "Mega Studios International".to_string(),
            revenue_multiplier: 3.0,
            min_quality: 85,
            cost: 15_000_000,
            unlock_fanbase: 1_000_000,
        },
    ]
}
