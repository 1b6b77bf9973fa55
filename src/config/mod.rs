pub mod settings;

pub use settings::{AzureOpenAIConfig, ServerConfig, Settings};
