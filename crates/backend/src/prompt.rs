//! Prompt construction for the two operations
//!
//! Pure string assembly, separated from the handlers so the exact wire
//! content sent to the completion API can be tested without a server.

use common::ChatMessage;

/// Build the single system message for `/summarize`: a fixed instruction
/// followed by one bulleted line per input message, in input order.
pub fn summarize_messages(messages: &[String]) -> Vec<ChatMessage> {
    let bullets = messages
        .iter()
        .map(|m| format!("- {}", m))
        .collect::<Vec<_>>()
        .join("\n");

    vec![ChatMessage {
        role: "system".to_string(),
        content: format!(
            "You are a helpful assistant. Summarize the following conversation briefly:\n\n{}",
            bullets
        ),
    }]
}

/// Build the system + user messages for `/answer`: the history rendered as a
/// 1-based numbered list, a blank line, then "Question: " and the question.
pub fn answer_messages(history: &[String], question: &str) -> Vec<ChatMessage> {
    let history_block = history
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}", i + 1, m))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        ChatMessage {
            role: "system".to_string(),
            content: "You are an expert assistant. Use the chat history below to answer the question."
                .to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: format!("{}\n\nQuestion: {}", history_block, question),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_summarize_prompt_bullets_in_order() {
        let messages = summarize_messages(&strings(&["first", "second", "third"]));

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "system");
        assert_eq!(
            messages[0].content,
            "You are a helpful assistant. Summarize the following conversation briefly:\n\n\
             - first\n- second\n- third"
        );
    }

    #[test]
    fn test_summarize_prompt_empty_list_has_no_bullets() {
        let messages = summarize_messages(&[]);

        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].content,
            "You are a helpful assistant. Summarize the following conversation briefly:\n\n"
        );
        assert!(!messages[0].content.contains("- "));
    }

    #[test]
    fn test_answer_history_is_one_indexed() {
        let messages = answer_messages(&strings(&["alice: hi", "bob: hello"]), "who spoke first?");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(
            messages[0].content,
            "You are an expert assistant. Use the chat history below to answer the question."
        );
        assert_eq!(messages[1].role, "user");
        assert_eq!(
            messages[1].content,
            "1. alice: hi\n2. bob: hello\n\nQuestion: who spoke first?"
        );
    }

    #[test]
    fn test_answer_with_empty_history_keeps_question_suffix() {
        let messages = answer_messages(&[], "what now?");

        assert_eq!(messages[1].content, "\n\nQuestion: what now?");
    }
}
