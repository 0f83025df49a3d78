use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LeagueError;
use crate::rating::RatingValue;

/// Raw session file, as collected by whoever typed the results in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    pub name: String,
    pub groups: Vec<GroupEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    pub players: Vec<PlayerEntry>,
    /// One entry per scheduled match, e.g. "3:2"; blank for unplayed
    #[serde(default)]
    pub results: Vec<String>,
}

/// A player as entered. Returning players may omit the rating and are
/// seeded from the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    #[serde(default)]
    pub rating: Option<RatingValue>,
}

/// League date parsed from a session name like "09-10-23" or "09-10-23 Tryouts"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionName {
    pub date: NaiveDate,
    pub label: String,
    pub is_tryouts: bool,
}

impl SessionName {
    pub fn parse(name: &str, tryout_marker: &str) -> Result<Self, LeagueError> {
        let is_tryouts = name.to_lowercase().contains(&tryout_marker.to_lowercase());
        let elements = split_name(name);

        // tryout sessions carry one trailing word after the date
        let date_parts = if is_tryouts {
            &elements[..elements.len().saturating_sub(1)]
        } else {
            &elements[..]
        };

        let [month, day, year] = date_parts else {
            return Err(malformed(name));
        };
        let year = year.get(..2).ok_or_else(|| malformed(name))?;
        let date = parse_date(month, day, year).ok_or_else(|| malformed(name))?;

        Ok(Self {
            date,
            label: format!("{}/{}/{}", month, day, year),
            is_tryouts,
        })
    }

    /// Key under which prize points are recorded
    pub fn league_date(&self) -> String {
        self.date.format("%m-%d-%y").to_string()
    }
}

fn split_name(name: &str) -> Vec<String> {
    name.trim()
        .trim_end_matches(".xlsx")
        .split(|c: char| c == '/' || c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

fn malformed(name: &str) -> LeagueError {
    LeagueError::MalformedSessionName(name.to_string())
}
