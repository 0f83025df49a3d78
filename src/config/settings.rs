use crate::errors::LeagueError;

pub struct LeagueSettings {
    pub min_group_size: usize,
    pub max_group_size: usize,
    pub max_groups: Option<usize>,
    pub max_rating: i32,
    pub winner_mark: &'static str,
    pub tryout_marker: &'static str,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            max_group_size: 7,
            max_groups: None,
            max_rating: 10_000,
            winner_mark: "**",
            tryout_marker: "tryout",
        }
    }
}

impl LeagueSettings {
    /// Ratings live in `0..max_rating`
    pub fn check_rating(&self, name: &str, rating: i32) -> Result<(), LeagueError> {
        if rating < 0 || rating >= self.max_rating {
            return Err(LeagueError::InvalidRating {
                name: name.to_string(),
                rating,
            });
        }
        Ok(())
    }
}

/// Prize points per finishing position, by league tier
pub struct PrizePointSettings {
    pub top_tier: Vec<u32>,
    pub upper_tiers: Vec<u32>,
    pub lower_tiers: Vec<u32>,
}

impl Default for PrizePointSettings {
    fn default() -> Self {
        Self {
            top_tier: vec![10, 8, 6, 4, 2, 2, 2],
            upper_tiers: vec![8, 6, 4, 3, 2, 1, 1],
            lower_tiers: vec![2, 2, 2, 2, 2, 2, 2],
        }
    }
}

impl PrizePointSettings {
    /// Tier 1 is the top table, tiers 2-3 share one, everything below shares the flat one
    pub fn table_for(&self, tier: u32) -> Result<&[u32], LeagueError> {
        match tier {
            0 => Err(LeagueError::UnsupportedTier(tier)),
            1 => Ok(&self.top_tier),
            2 | 3 => Ok(&self.upper_tiers),
            _ => Ok(&self.lower_tiers),
        }
    }
}

pub struct StoreSettings {
    pub database_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: std::env::var("LEAGUE_DATABASE_PATH")
                .unwrap_or_else(|_| "league.db".to_string()),
        }
    }
}

pub struct AppConfig {
    pub league: LeagueSettings,
    pub prize_points: PrizePointSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            league: LeagueSettings::default(),
            prize_points: PrizePointSettings::default(),
            store: StoreSettings::default(),
        }
    }
}
