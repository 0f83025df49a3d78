pub mod settings;

pub use settings::{AppConfig, LeagueSettings, PrizePointSettings, StoreSettings};
