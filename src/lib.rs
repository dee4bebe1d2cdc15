pub mod ai;
pub mod config;
pub mod error;
pub mod logger;
pub mod services;
pub mod strategist;

#[cfg(test)]
mod test_support;

pub use ai::local::select_response;
pub use config::Config;
pub use strategist::{Consultation, Source, Strategist, StrategyBackend};
