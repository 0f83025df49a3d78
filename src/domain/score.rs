use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LeagueError;

/// Games won by each side of a scheduled pairing, first-listed seed first.
/// `0:0` is an unplayed match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub first: u32,
    pub second: u32,
}

/// Most games either side can take in one match
pub const MAX_GAMES: u32 = 99;

/// Which side of a pairing took the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl MatchScore {
    pub const VOID: MatchScore = MatchScore { first: 0, second: 0 };

    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    pub fn is_void(&self) -> bool {
        self.first == 0 && self.second == 0
    }

    /// Side with strictly more games; `None` for void or level scores
    pub fn winner(&self) -> Option<Side> {
        if self.first > self.second {
            Some(Side::First)
        } else if self.second > self.first {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        self.first <= MAX_GAMES && self.second <= MAX_GAMES
    }

    pub fn flipped(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl FromStr for MatchScore {
    type Err = LeagueError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::VOID);
        }

        let (first, second) = trimmed
            .split_once(':')
            .ok_or_else(|| malformed(input))?;
        Ok(Self {
            first: parse_games(first, input)?,
            second: parse_games(second, input)?,
        })
    }
}

fn parse_games(part: &str, input: &str) -> Result<u32, LeagueError> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed(input));
    }
    let games: u32 = part.parse().map_err(|_| malformed(input))?;
    if games > MAX_GAMES {
        return Err(malformed(input));
    }
    Ok(games)
}

fn malformed(input: &str) -> LeagueError {
    LeagueError::MalformedMatchResult(input.to_string())
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

/// Parse a whole group's results in schedule order
pub fn parse_results(raw: &[String]) -> Result<Vec<MatchScore>, LeagueError> {
    raw.iter().map(|r| r.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scores() {
        assert_eq!("3:2".parse(), Ok(MatchScore::new(3, 2)));
        assert_eq!(" 1 : 3 ".parse(), Ok(MatchScore::new(1, 3)));
        assert_eq!("11:9".parse(), Ok(MatchScore::new(11, 9)));
    }

    #[test]
    fn blank_and_zero_are_void() {
        assert!("".parse::<MatchScore>().unwrap().is_void());
        assert!("   ".parse::<MatchScore>().unwrap().is_void());
        assert!("0:0".parse::<MatchScore>().unwrap().is_void());
        assert!(!"0:3".parse::<MatchScore>().unwrap().is_void());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["3", "3-2", "a:b", "-1:3", "3:", ":2", "3:2:1", "+3:2"] {
            assert_eq!(
                bad.parse::<MatchScore>(),
                Err(LeagueError::MalformedMatchResult(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn oversized_game_counts_are_rejected() {
        assert_eq!("99:0".parse(), Ok(MatchScore::new(99, 0)));
        for bad in ["100:0", "4000000000:0", "0:99999999999"] {
            assert_eq!(
                bad.parse::<MatchScore>(),
                Err(LeagueError::MalformedMatchResult(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn winner_needs_strictly_more_games() {
        assert_eq!(MatchScore::new(3, 1).winner(), Some(Side::First));
        assert_eq!(MatchScore::new(2, 3).winner(), Some(Side::Second));
        assert_eq!(MatchScore::new(2, 2).winner(), None);
        assert_eq!(MatchScore::VOID.winner(), None);
    }

    #[test]
    fn parse_results_stops_at_first_bad_entry() {
        let raw = vec!["3:0".to_string(), "".to_string(), "x".to_string()];
        assert_eq!(
            parse_results(&raw),
            Err(LeagueError::MalformedMatchResult("x".to_string()))
        );
    }
}
