//! Wire schema for the `generateContent` endpoint.
//!
//! Conversation turns travel as `contents` entries with the endpoint's two
//! roles (`user`/`model`); the persona instruction travels in its own
//! `system_instruction` field and is rebuilt from the active category on
//! every request.

use serde::{Deserialize, Serialize};

use homeroom_core::{CompletionRequest, Role};

use crate::error::{ClientError, Result};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Map a request onto the endpoint's schema.
pub fn encode_request(request: &CompletionRequest) -> GenerateContentRequest {
    let contents = request
        .turns
        .iter()
        .map(|message| Content {
            role: wire_role(message.role).to_string(),
            parts: vec![Part {
                text: message.content.clone(),
            }],
        })
        .collect();

    let system_instruction = if request.system_instruction.is_empty() {
        None
    } else {
        Some(Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: request.system_instruction.clone(),
            }],
        })
    };

    GenerateContentRequest {
        contents,
        system_instruction,
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "model",
        // System turns never reach the turn list; see CompletionRequest.
        Role::System => "user",
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Pull the reply text out of `candidates[0].content.parts[0].text`.
///
/// A response without that field, or with empty text, violated the
/// expected shape and is a `Parse` failure — never retried, never appended.
pub fn extract_reply(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ClientError::Parse("response carried no reply text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeroom_core::Message;

    #[test]
    fn turns_map_to_the_endpoint_roles() {
        let request = CompletionRequest::new("gemini-2.0-flash")
            .with_system_instruction("persona")
            .with_turns(vec![
                Message::user("아이디어가 있어요"),
                Message::assistant("말해보세요"),
            ]);

        let wire = encode_request(&request);
        assert_eq!(wire.contents[0].role, "user");
        assert_eq!(wire.contents[1].role, "model");
        assert_eq!(
            wire.system_instruction.as_ref().unwrap().parts[0].text,
            "persona"
        );
    }

    #[test]
    fn empty_instruction_is_omitted_from_the_body() {
        let request = CompletionRequest::new("gemini-2.0-flash").with_turn(Message::user("hi"));
        let wire = encode_request(&request);
        assert!(wire.system_instruction.is_none());
        let body = serde_json::to_value(&wire).unwrap();
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn reply_text_is_extracted_from_the_first_candidate() {
        let body = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "좋습니다." } ] } },
                { "content": { "parts": [ { "text": "버려지는 후보" } ] } }
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(extract_reply(response).unwrap(), "좋습니다.");
    }

    #[test]
    fn missing_reply_field_is_a_parse_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert!(matches!(
            extract_reply(response).unwrap_err(),
            ClientError::Parse(_)
        ));
    }

    #[test]
    fn blank_reply_text_is_a_parse_error() {
        let body = serde_json::json!({
            "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            extract_reply(response).unwrap_err(),
            ClientError::Parse(_)
        ));
    }
}
