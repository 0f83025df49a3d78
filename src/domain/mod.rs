pub mod ledger;
pub mod models;
pub mod score;
pub mod session;

pub use ledger::{apply_match, head_to_head, MatchLedger, MatchRecord};
pub use models::{Group, Player};
pub use score::{parse_results, MatchScore, Side};
pub use session::{GroupEntry, PlayerEntry, SessionInput, SessionName};
