pub mod gemini_client;
pub mod prompt;
pub mod text_extractor;

pub use gemini_client::*;
pub use prompt::*;
pub use text_extractor::*;
