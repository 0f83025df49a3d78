use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: i64,
    pub name: String,
    pub rating: i32,
    pub updated_at: Option<NaiveDateTime>,
}

// DTOs for aggregate queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizePointTotals {
    pub name: String,
    pub earned: i64,
    pub used: i64,
    pub remaining: i64,
}
