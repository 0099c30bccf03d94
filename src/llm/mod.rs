//! Chat completion client used to phrase bartender answers.

pub mod chat_completion;

pub use chat_completion::{ChatCompleter, ChatMessage, ChatRole, OpenAiChatClient};
