//! Fixed four-message conversation sent to the chat model.

use crate::llm::ChatMessage;

/// Persona given to the chat model.
pub const BARTENDER_PERSONA: &str = concat!(
    "You are a helpful and friendly virtual bartender. ",
    "Be informative, concise, and conversational."
);

/// Follow-up request closing every conversation.
pub const FOLLOW_UP_REQUEST: &str =
    "Can you explain how to make it and offer any tips or variations?";

/// Build the system, user, assistant, user message sequence for one question.
#[must_use]
pub fn compose_messages(user_message: &str, formatted_recipe: &str) -> [ChatMessage; 4] {
    [
        ChatMessage::system(BARTENDER_PERSONA),
        ChatMessage::user(format!("The user asked: {user_message}")),
        ChatMessage::assistant(format!(
            "Here's a drink recipe you can use:\n\n{formatted_recipe}"
        )),
        ChatMessage::user(FOLLOW_UP_REQUEST),
    ]
}
