pub mod report;
pub mod session;

pub use report::{GroupReport, PlayerReport, SessionReport};
pub use session::SessionService;
