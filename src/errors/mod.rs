use thiserror::Error;

/// Failures of the league core: validation at ingestion and table lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("Unsupported group size: {0} (groups hold 3 to 7 players)")]
    UnsupportedGroupSize(usize),

    #[error("Malformed match result: {0:?} (expected e.g. 3:2, or blank for unplayed)")]
    MalformedMatchResult(String),

    #[error("Prize-point rank overflow: ranks {rank}..{} exceed a table of {table_len}", .rank + .width)]
    RankOverflow {
        rank: usize,
        width: usize,
        table_len: usize,
    },

    #[error("Unsupported prize-point tier: {0}")]
    UnsupportedTier(u32),

    #[error("Invalid rating {rating} for {name}")]
    InvalidRating { name: String, rating: i32 },

    #[error("Player entered twice in one group: {0}")]
    DuplicatePlayer(String),

    #[error("Expected {expected} match results, got {actual}")]
    ResultCountMismatch { expected: usize, actual: usize },

    #[error("Unknown seed letter: {0}")]
    UnknownSeed(char),

    #[error("No rating given and no roster entry for {0}")]
    UnknownPlayer(String),

    #[error("Malformed session name: {0:?} (expected MM-DD-YY or 'MM-DD-YY Tryouts')")]
    MalformedSessionName(String),
}

/// Add context to store errors
pub fn store_context(operation: &str, key: &str) -> String {
    format!("Failed to {} for: {}", operation, key)
}

/// Add context to session file errors
pub fn session_context(operation: &str, path: &std::path::Path) -> String {
    format!("Failed to {} session file: {}", operation, path.display())
}
