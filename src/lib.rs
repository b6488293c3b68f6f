pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod input;
pub mod llm;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use generator::workflow::launch;
