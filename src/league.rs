//! In-memory league store: tournaments keyed by slug.

use crate::logic::refresh_standings;
use crate::models::{NewTournament, StandingsRow, Tournament, TournamentError};
use std::collections::HashMap;

/// All tournaments of the league. The web server shares one behind an async `RwLock`; every
/// mutation runs under the write lock, so readers never see a half-rebuilt standings table.
#[derive(Debug, Default)]
pub struct League {
    tournaments: HashMap<String, Tournament>,
}

fn valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tournament. Name and slug are required; slugs are unique.
    pub fn create_tournament(
        &mut self,
        new: NewTournament,
    ) -> Result<&Tournament, TournamentError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let slug = new.slug.trim();
        if !valid_slug(slug) {
            return Err(TournamentError::InvalidSlug(slug.to_string()));
        }
        if self.tournaments.contains_key(slug) {
            return Err(TournamentError::DuplicateSlug(slug.to_string()));
        }

        let mut tournament = Tournament::new(slug, name);
        tournament.season = new.season.filter(|s| !s.trim().is_empty());
        tournament.description = new.description.filter(|s| !s.trim().is_empty());
        log::info!("Created tournament {} ({})", tournament.slug, tournament.name);

        let slug = tournament.slug.clone();
        self.tournaments.insert(slug.clone(), tournament);
        self.get(&slug)
    }

    /// Insert an already built tournament (e.g. seeded data), replacing one with the same slug.
    pub fn insert(&mut self, tournament: Tournament) {
        self.tournaments.insert(tournament.slug.clone(), tournament);
    }

    pub fn get(&self, slug: &str) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .get(slug)
            .ok_or_else(|| TournamentError::TournamentNotFound(slug.to_string()))
    }

    pub fn get_mut(&mut self, slug: &str) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .get_mut(slug)
            .ok_or_else(|| TournamentError::TournamentNotFound(slug.to_string()))
    }

    /// All tournaments, oldest first.
    pub fn list(&self) -> Vec<&Tournament> {
        let mut all: Vec<&Tournament> = self.tournaments.values().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.slug.cmp(&b.slug)));
        all
    }

    /// Rebuild a tournament's standings. An unknown slug is `TournamentNotFound`; a tournament
    /// without completed fixtures gets all-zero rows.
    pub fn recalculate(&mut self, slug: &str) -> Result<&[StandingsRow], TournamentError> {
        let tournament = self.get_mut(slug)?;
        refresh_standings(tournament)?;
        Ok(tournament.standings.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_tournament(name: &str, slug: &str) -> NewTournament {
        NewTournament {
            name: name.to_string(),
            slug: slug.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn create_requires_name_and_valid_unique_slug() {
        let mut league = League::new();
        assert_eq!(
            league.create_tournament(new_tournament("", "s1")).err(),
            Some(TournamentError::EmptyName)
        );
        assert_eq!(
            league.create_tournament(new_tournament("Season", "bad slug")).err(),
            Some(TournamentError::InvalidSlug("bad slug".to_string()))
        );
        league.create_tournament(new_tournament("Season", "s1")).unwrap();
        assert_eq!(
            league.create_tournament(new_tournament("Other", "s1")).err(),
            Some(TournamentError::DuplicateSlug("s1".to_string()))
        );
        assert_eq!(league.list().len(), 1);
    }

    #[test]
    fn recalculate_unknown_slug_is_not_found() {
        let mut league = League::new();
        assert_eq!(
            league.recalculate("nope").err(),
            Some(TournamentError::TournamentNotFound("nope".to_string()))
        );
    }
}
