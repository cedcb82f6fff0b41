//! Score predictions made by community members before a fixture is played.

use crate::models::fixture::{FixtureId, Score};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PredictionId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: PredictionId,
    pub fixture_id: FixtureId,
    pub user: String,
    pub score: Score,
    /// None until the fixture has a result.
    pub points: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(fixture_id: FixtureId, user: impl Into<String>, score: Score) -> Self {
        Self {
            id: Uuid::new_v4(),
            fixture_id,
            user: user.into(),
            score,
            points: None,
            created_at: Utc::now(),
        }
    }
}

/// One user's line in the prediction leaderboard.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PredictionStanding {
    pub user: String,
    pub points: u32,
    /// Predictions that hit the exact score.
    pub exact_scores: u32,
    /// Predictions that have been scored so far.
    pub scored: u32,
}
