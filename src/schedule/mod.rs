pub mod layout;
pub mod table;

pub use layout::{row_layout, MatchRow};
pub use table::{
    find_pairing, match_count, schedule_for, seed_index, seed_letter, Pairing, SEED_LETTERS,
};
