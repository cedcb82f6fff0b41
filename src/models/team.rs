//! Team data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures, standings and lookups).
pub type TeamId = Uuid;

/// A team registered in a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Optional abbreviation used in compact tables.
    pub short_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with the given name.
    pub fn new(name: impl Into<String>, short_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short_name: short_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            created_at: Utc::now(),
        }
    }
}
