//! Property-based tests for the Gemini translation layer
//!
//! - Every conversation turn becomes exactly one `contents` entry, in order
//! - Assistant turns are sent with the `model` role
//! - The system prompt travels separately and never as a turn
//! - The first text part of the first candidate is the reply
//! - Responses without text are rejected

use super::gemini::{GeminiResponse, GeminiService};
use super::types::{LlmMessage, LlmRequest, MessageRole};
use super::LlmErrorKind;
use proptest::prelude::*;
use serde_json::json;

fn arb_message() -> impl Strategy<Value = LlmMessage> {
    (any::<bool>(), "[a-zA-Z0-9 _.!?,$]{1,80}").prop_map(|(is_user, text)| {
        if is_user {
            LlmMessage::user(text)
        } else {
            LlmMessage::assistant(text)
        }
    })
}

fn arb_request() -> impl Strategy<Value = LlmRequest> {
    (
        proptest::collection::vec(arb_message(), 1..12),
        proptest::option::of("[a-zA-Z ]{1,60}"),
    )
        .prop_map(|(messages, system)| LlmRequest {
            system,
            messages,
            temperature: Some(0.7),
        })
}

proptest! {
    #[test]
    fn prop_turns_preserved_in_order(request in arb_request()) {
        let value = serde_json::to_value(GeminiService::translate_request(&request)).unwrap();
        let contents = value["contents"].as_array().unwrap();

        prop_assert_eq!(contents.len(), request.messages.len());
        for (wire, msg) in contents.iter().zip(&request.messages) {
            let role = match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            prop_assert_eq!(wire["role"].as_str(), Some(role));
            prop_assert_eq!(wire["parts"][0]["text"].as_str(), Some(msg.text.as_str()));
        }
    }

    #[test]
    fn prop_system_prompt_kept_out_of_turns(request in arb_request()) {
        let value = serde_json::to_value(GeminiService::translate_request(&request)).unwrap();

        match &request.system {
            Some(system) => {
                prop_assert_eq!(
                    value["systemInstruction"]["parts"][0]["text"].as_str(),
                    Some(system.as_str())
                );
            }
            None => prop_assert!(value.get("systemInstruction").is_none()),
        }
    }

    #[test]
    fn prop_first_part_is_reply(texts in proptest::collection::vec("[a-zA-Z0-9 .!?]{0,40}", 1..4)) {
        let parts: Vec<_> = texts.iter().map(|t| json!({ "text": t })).collect();
        let resp: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": parts } }]
        }))
        .unwrap();

        let normalized = GeminiService::normalize_response(resp).unwrap();
        prop_assert_eq!(normalized.text, texts[0].clone());
    }

    #[test]
    fn prop_missing_text_rejected(candidates in 0usize..3) {
        let body: Vec<_> = (0..candidates).map(|_| json!({ "finishReason": "SAFETY" })).collect();
        let resp: GeminiResponse = serde_json::from_value(json!({ "candidates": body })).unwrap();

        let err = GeminiService::normalize_response(resp).unwrap_err();
        prop_assert_eq!(err.kind, LlmErrorKind::InvalidResponse);
    }
}
