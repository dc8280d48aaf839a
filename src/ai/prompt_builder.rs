//! System instruction templates for leaf and combine summarization.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::SummaryMode;

/// Markdown layout every summary must follow.
const OUTPUT_STRUCTURE: &str = "### Subject: [Concise and descriptive subject line]

**Key Discussion Points:**
- [Bulleted list of the most important topics discussed]
- [Each point should be clear and concise]

**Action Items:**
1. [Numbered list of specific tasks assigned]
2. [Include who is responsible if mentioned]

**Next Steps:**
- [Bulleted list of future plans or upcoming meetings]

Directly output the formatted summary without any introductions, conversational text, or explanations.";

#[must_use]
pub fn system_instruction(instruction: &str, mode: SummaryMode) -> String {
    match mode {
        SummaryMode::Leaf => format!(
            "You are a professional meeting assistant. Your task is to summarize the provided text \
             based on the user's prompt: \"{instruction}\". The final output must be formatted as a \
             professional email summary. Follow this structure exactly, using Markdown for \
             formatting:\n\n{OUTPUT_STRUCTURE}"
        ),
        SummaryMode::Combine => format!(
            "You are a master synthesizer. Your task is to combine multiple summary fragments into a \
             single, final, professionally formatted meeting summary. The user's original prompt \
             was: \"{instruction}\". Use the fragments to construct a coherent summary. The final \
             output must follow this structure exactly, using Markdown for formatting:\n\n\
             {OUTPUT_STRUCTURE}"
        ),
    }
}

#[must_use]
pub fn user_content(text: &str, instruction: &str) -> String {
    format!("Original Prompt: \"{instruction}\"\n\nText to process:\n\"{text}\"")
}

/// System + user chat messages for one completion call.
#[must_use]
pub fn build_messages(system: &str, user: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(user.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
