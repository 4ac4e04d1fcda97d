use serde::{Deserialize, Serialize};

use super::super::profiles::{ProfileTable, RecommendationProfile};

const ADVANCED_FLOOR: u32 = 12;
const INTERMEDIATE_FLOOR: u32 = 8;

/// Coarse banding of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn for_score(total_score: u32) -> Self {
        if total_score >= ADVANCED_FLOOR {
            Level::Advanced
        } else if total_score >= INTERMEDIATE_FLOOR {
            Level::Intermediate
        } else {
            Level::Beginner
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

/// Selected profile together with the score it was chosen for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub profile: RecommendationProfile,
    pub score: u32,
    pub level: Level,
}

impl Recommendation {
    pub fn title(&self) -> &str {
        &self.profile.title
    }
}

pub(crate) fn recommend(
    profiles: &ProfileTable,
    dominant_trait: &str,
    total_score: u32,
) -> Recommendation {
    Recommendation {
        profile: profiles.profile_for(dominant_trait).clone(),
        score: total_score,
        level: Level::for_score(total_score),
    }
}
