//! Fixture (scheduled match between two teams) and its score.

use crate::models::error::TournamentError;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Highest score accepted from a report or prediction.
pub const MAX_SCORE: u32 = 999;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    Completed,
}

/// Result of a fixture from the home side's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Goals scored by each side.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Validate a score as it arrives from a caller: each side in `0..=MAX_SCORE`.
    pub fn from_reported(home: i64, away: i64) -> Result<Self, TournamentError> {
        if home < 0 || away < 0 {
            return Err(TournamentError::NegativeScore { home, away });
        }
        let max = i64::from(MAX_SCORE);
        if home > max || away > max {
            return Err(TournamentError::ScoreOutOfRange { home, away });
        }
        match (u32::try_from(home), u32::try_from(away)) {
            (Ok(h), Ok(a)) => Ok(Self::new(h, a)),
            _ => Err(TournamentError::ScoreOutOfRange { home, away }),
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home.cmp(&self.away) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

/// A pairing scheduled in a given round. Home/away is labelling only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    /// 1-based round (matchday) number.
    pub round: u32,
    pub home: TeamId,
    pub away: TeamId,
    pub status: FixtureStatus,
    /// None until a result is reported.
    pub score: Option<Score>,
    pub reported_at: Option<DateTime<Utc>>,
}

impl Fixture {
    pub fn new(round: u32, home: TeamId, away: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            home,
            away,
            status: FixtureStatus::Scheduled,
            score: None,
            reported_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    /// The score if this fixture counts towards standings (completed and scored).
    pub fn result(&self) -> Option<Score> {
        if self.is_completed() {
            self.score
        } else {
            None
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// Mark completed with the given score. Overwrites an earlier result.
    pub fn record(&mut self, score: Score, at: DateTime<Utc>) {
        self.score = Some(score);
        self.status = FixtureStatus::Completed;
        self.reported_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_scores_are_rejected() {
        assert_eq!(
            Score::from_reported(-1, 2),
            Err(TournamentError::NegativeScore { home: -1, away: 2 })
        );
        assert!(matches!(
            Score::from_reported(1, i64::MAX),
            Err(TournamentError::ScoreOutOfRange { .. })
        ));
        assert_eq!(Score::from_reported(3, 0), Ok(Score::new(3, 0)));
    }

    #[test]
    fn scores_above_the_cap_are_rejected() {
        assert_eq!(
            Score::from_reported(4_000_000_000, 0),
            Err(TournamentError::ScoreOutOfRange { home: 4_000_000_000, away: 0 })
        );
        assert_eq!(
            Score::from_reported(0, i64::from(MAX_SCORE) + 1),
            Err(TournamentError::ScoreOutOfRange { home: 0, away: 1000 })
        );
        assert_eq!(
            Score::from_reported(i64::from(MAX_SCORE), 0),
            Ok(Score::new(MAX_SCORE, 0))
        );
    }

    #[test]
    fn unreported_fixture_has_no_result() {
        let mut f = Fixture::new(1, Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(f.result(), None);

        // A score without the completed flag still does not count.
        f.score = Some(Score::new(1, 0));
        assert_eq!(f.result(), None);

        f.record(Score::new(2, 2), Utc::now());
        assert_eq!(f.result(), Some(Score::new(2, 2)));
        assert_eq!(f.result().map(|s| s.outcome()), Some(Outcome::Draw));
    }
}
