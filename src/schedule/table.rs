use std::fmt;

use crate::errors::LeagueError;

pub const SEED_LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

const SIZE_3: &[&str] = &["A:C", "B:C", "A:B"];
const SIZE_4: &[&str] = &["B:D", "A:C", "B:C", "A:D", "C:D", "A:B"];
const SIZE_5: &[&str] = &[
    "A:D", "B:C", "B:E", "C:D", "A:E", "B:D", "A:C", "D:E", "C:E", "A:B",
];
const SIZE_6: &[&str] = &[
    "A:D", "B:C", "E:F", "A:E", "B:D", "C:F", "B:F", "D:E", "A:C", "A:F", "B:E", "C:D", "C:E",
    "D:F", "A:B",
];
const SIZE_7: &[&str] = &[
    "A:F", "B:E", "C:D", "B:G", "C:F", "D:E", "A:E", "B:D", "C:G", "A:C", "D:F", "E:G", "F:G",
    "A:D", "B:C", "A:B", "E:F", "D:G", "A:G", "B:F", "C:E",
];

/// One scheduled match between two seeds; the first-listed seed is always the higher one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub first: char,
    pub second: char,
}

impl Pairing {
    fn from_label(label: &str) -> Self {
        let bytes = label.as_bytes();
        Self {
            first: bytes[0] as char,
            second: bytes[2] as char,
        }
    }

    /// Whether this pairing is the match between `a` and `b`, in either order
    pub fn involves(&self, a: char, b: char) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

/// Fixed round-robin order for a group of `size` players
pub fn schedule_for(size: usize) -> Result<Vec<Pairing>, LeagueError> {
    let labels = labels_for(size)?;
    Ok(labels.iter().map(|label| Pairing::from_label(label)).collect())
}

fn labels_for(size: usize) -> Result<&'static [&'static str], LeagueError> {
    match size {
        3 => Ok(SIZE_3),
        4 => Ok(SIZE_4),
        5 => Ok(SIZE_5),
        6 => Ok(SIZE_6),
        7 => Ok(SIZE_7),
        _ => Err(LeagueError::UnsupportedGroupSize(size)),
    }
}

pub fn seed_index(letter: char) -> Result<usize, LeagueError> {
    SEED_LETTERS
        .iter()
        .position(|&l| l == letter)
        .ok_or(LeagueError::UnknownSeed(letter))
}

pub fn seed_letter(index: usize) -> Option<char> {
    SEED_LETTERS.get(index).copied()
}

pub fn match_count(size: usize) -> Result<usize, LeagueError> {
    labels_for(size).map(|labels| labels.len())
}

/// Position of the match between two seeds within the schedule
pub fn find_pairing(schedule: &[Pairing], a: char, b: char) -> Option<usize> {
    schedule.iter().position(|p| p.involves(a, b))
}
