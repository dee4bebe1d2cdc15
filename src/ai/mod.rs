pub mod gemini;
pub mod local;

pub use gemini::GeminiClient;
pub use local::{select_response, ResponseCatalog, Topic};
