pub mod language;
pub mod types;

pub use language::{Language, SUPPORTED_LANGUAGES, find_language, is_supported};
pub use types::*;
