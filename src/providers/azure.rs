pub mod client;
pub mod types;

pub use client::AzureOpenAIProvider;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ErrorDetail, ErrorResponse,
    ResponseMessage,
};
