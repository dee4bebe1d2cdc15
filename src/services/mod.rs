pub mod briefing;

pub use briefing::{BriefingClient, BriefingRequest, BriefingStatus};
