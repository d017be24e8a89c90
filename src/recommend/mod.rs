use crate::book::Book;
use crate::config::RecommendConfig;
use crate::error::{BookhoundError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Ask the chat-completion API for recommendations based on the completed
/// list. Non-200 responses surface as a typed HTTP error so the caller can
/// decide whether to report or abort.
pub async fn recommend(
    completed: &[Book],
    api_key: &str,
    config: &RecommendConfig,
) -> Result<String> {
    tracing::debug!(books = completed.len(), model = %config.model, "requesting recommendations");

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| BookhoundError::Recommend(format!("Failed to create HTTP client: {}", e)))?;

    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![Message {
            role: "system".to_string(),
            content: build_prompt(completed),
        }],
    };

    let response = client
        .post(&config.api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .map_err(|e| BookhoundError::Recommend(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(BookhoundError::RecommendStatus { status, body });
    }

    let body = response
        .text()
        .await
        .map_err(|e| BookhoundError::Recommend(format!("Failed to read response: {}", e)))?;

    parse_chat_response(&body)
}

/// One numbered line per book, then the ask.
fn build_prompt(completed: &[Book]) -> String {
    let lines = completed
        .iter()
        .enumerate()
        .map(|(i, book)| {
            format!(
                "{}. {} by {}, score: {}",
                i + 1,
                book.title(),
                book.authors().join(", "),
                book.score()
                    .map_or_else(|| "unrated".to_string(), |s| s.to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Here's a list of books I've read along with the scores I gave them \
         on a scale of 1 to 10:\n{}\n\
         Would you give me some recommendations based on my list?",
        lines
    )
}

fn parse_chat_response(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| BookhoundError::Recommend(format!("Failed to parse response: {}", e)))?;

    response
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .ok_or_else(|| BookhoundError::Recommend("No response content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(json: &str) -> Book {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_prompt_numbers_books() {
        let books = vec![
            book(r#"{"title": "Dune", "authors": ["Frank Herbert"], "score": 9}"#),
            book(r#"{"title": "Ubik", "authors": ["Philip K. Dick"]}"#),
        ];
        let prompt = build_prompt(&books);
        assert!(prompt.contains("1. Dune by Frank Herbert, score: 9"));
        assert!(prompt.contains("2. Ubik by Philip K. Dick, score: unrated"));
        assert!(prompt.ends_with("Would you give me some recommendations based on my list?"));
    }

    #[test]
    fn test_build_prompt_empty_list_is_still_well_formed() {
        let prompt = build_prompt(&[]);
        assert!(prompt.starts_with("Here's a list of books"));
        assert!(prompt.contains("recommendations"));
    }

    #[test]
    fn test_parse_chat_response_extracts_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Try Hyperion."}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        }"#;
        assert_eq!(parse_chat_response(body).unwrap(), "Try Hyperion.");
    }

    #[test]
    fn test_parse_chat_response_without_choices() {
        assert!(parse_chat_response(r#"{"choices": []}"#).is_err());
        assert!(parse_chat_response("not json").is_err());
    }
}
