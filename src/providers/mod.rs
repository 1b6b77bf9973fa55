pub mod azure;

#[allow(unused_imports)]
pub use azure::AzureOpenAIProvider;
