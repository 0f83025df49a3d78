use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::LeagueSettings;
use crate::errors::LeagueError;
use crate::rating::RatingValue;
use crate::schedule::{self, Pairing};

/// Player state for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub base_rating: RatingValue,
    pub final_rating: RatingValue,
    pub rating_change: RatingValue,
    pub matches_won: u32,
    pub games_won: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, base_rating: RatingValue) -> Self {
        Self {
            name: name.into(),
            base_rating,
            final_rating: base_rating,
            rating_change: 0,
            matches_won: 0,
            games_won: 0,
        }
    }

    pub fn adjust_rating(&mut self, points: RatingValue) {
        self.final_rating += points;
        self.rating_change += points;
    }

    /// Matches won, then games won
    pub fn record(&self) -> (u32, u32) {
        (self.matches_won, self.games_won)
    }
}

/// A seeded group. Players are kept in seed order (A, B, C, ...), fixed once at
/// construction by base rating and never re-sorted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub group_number: u32,
    players: Vec<Player>,
}

impl Group {
    pub fn new(
        group_number: u32,
        entries: Vec<(String, RatingValue)>,
        settings: &LeagueSettings,
    ) -> Result<Self, LeagueError> {
        validate_size(entries.len(), settings)?;
        validate_entries(&entries, settings)?;

        let mut players: Vec<Player> = entries
            .into_iter()
            .map(|(name, rating)| Player::new(name, rating))
            .collect();
        // stable: equal ratings keep entry order
        players.sort_by(|a, b| b.base_rating.cmp(&a.base_rating));

        Ok(Self {
            group_number,
            players,
        })
    }

    pub fn name(&self) -> String {
        format!("Group {}", self.group_number)
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn schedule(&self) -> Result<Vec<Pairing>, LeagueError> {
        schedule::schedule_for(self.size())
    }

    pub fn player(&self, seed: char) -> Result<&Player, LeagueError> {
        let index = schedule::seed_index(seed)?;
        self.players.get(index).ok_or(LeagueError::UnknownSeed(seed))
    }

    /// Both players of a pairing, mutably
    pub fn pair_mut(
        &mut self,
        pairing: Pairing,
    ) -> Result<(&mut Player, &mut Player), LeagueError> {
        let first = self.checked_index(pairing.first)?;
        let second = self.checked_index(pairing.second)?;
        if first == second {
            return Err(LeagueError::UnknownSeed(pairing.second));
        }

        if first < second {
            let (head, tail) = self.players.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.players.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }

    fn checked_index(&self, seed: char) -> Result<usize, LeagueError> {
        let index = schedule::seed_index(seed)?;
        if index < self.players.len() {
            Ok(index)
        } else {
            Err(LeagueError::UnknownSeed(seed))
        }
    }
}

fn validate_size(size: usize, settings: &LeagueSettings) -> Result<(), LeagueError> {
    if size < settings.min_group_size || size > settings.max_group_size {
        return Err(LeagueError::UnsupportedGroupSize(size));
    }
    schedule::match_count(size).map(|_| ())
}

fn validate_entries(
    entries: &[(String, RatingValue)],
    settings: &LeagueSettings,
) -> Result<(), LeagueError> {
    let mut seen = HashSet::new();
    for (name, rating) in entries {
        settings.check_rating(name, *rating)?;
        if !seen.insert(name.as_str()) {
            return Err(LeagueError::DuplicatePlayer(name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(ratings: &[(&str, RatingValue)]) -> Vec<(String, RatingValue)> {
        ratings.iter().map(|(n, r)| (n.to_string(), *r)).collect()
    }

    #[test]
    fn seeds_by_rating_descending() {
        let settings = LeagueSettings::default();
        let group = Group::new(
            1,
            entries(&[("Cho", 1400), ("Ann", 1600), ("Dee", 1300), ("Bo", 1500)]),
            &settings,
        )
        .unwrap();

        let names: Vec<&str> = group.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bo", "Cho", "Dee"]);
        assert_eq!(group.player('C').unwrap().name, "Cho");
    }

    #[test]
    fn equal_ratings_keep_entry_order() {
        let settings = LeagueSettings::default();
        let group = Group::new(
            2,
            entries(&[("First", 1500), ("Second", 1500), ("Third", 1700)]),
            &settings,
        )
        .unwrap();

        let names: Vec<&str> = group.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Third", "First", "Second"]);
    }

    #[test]
    fn rejects_bad_sizes() {
        let settings = LeagueSettings::default();
        let two = entries(&[("A", 1), ("B", 2)]);
        assert_eq!(
            Group::new(1, two, &settings),
            Err(LeagueError::UnsupportedGroupSize(2))
        );

        let eight: Vec<(String, RatingValue)> =
            (0..8).map(|i| (format!("P{i}"), 1000 + i)).collect();
        assert_eq!(
            Group::new(1, eight, &settings),
            Err(LeagueError::UnsupportedGroupSize(8))
        );
    }

    #[test]
    fn rejects_bad_ratings_and_duplicates() {
        let settings = LeagueSettings::default();
        assert!(matches!(
            Group::new(1, entries(&[("A", -5), ("B", 10), ("C", 20)]), &settings),
            Err(LeagueError::InvalidRating { rating: -5, .. })
        ));
        assert!(matches!(
            Group::new(1, entries(&[("A", 10_000), ("B", 10), ("C", 20)]), &settings),
            Err(LeagueError::InvalidRating { rating: 10_000, .. })
        ));
        assert_eq!(
            Group::new(1, entries(&[("A", 1), ("B", 2), ("A", 3)]), &settings),
            Err(LeagueError::DuplicatePlayer("A".to_string()))
        );
    }

    #[test]
    fn pair_mut_returns_players_in_pairing_order() {
        let settings = LeagueSettings::default();
        let mut group =
            Group::new(1, entries(&[("A", 1600), ("B", 1500), ("C", 1400)]), &settings).unwrap();

        let (first, second) = group.pair_mut(Pairing { first: 'C', second: 'A' }).unwrap();
        assert_eq!((first.name.as_str(), second.name.as_str()), ("C", "A"));

        assert_eq!(
            group.pair_mut(Pairing { first: 'A', second: 'D' }).unwrap_err(),
            LeagueError::UnknownSeed('D')
        );
    }
}
