use std::time::Duration;

use chrono::{TimeDelta, Utc};
use folio_types::{
    ChatRequest, ChatResponse, DeliveryStatus, Message, SelectedTextChatRequest, Sender, Thread,
};

#[test]
fn new_thread_starts_empty_with_matching_timestamps() {
    let thread = Thread::new();
    assert!(thread.messages.is_empty());
    assert_eq!(thread.created_at, thread.last_activity);
    assert!(!thread.thread_id.is_empty());
}

#[test]
fn touch_advances_last_activity() {
    let mut thread = Thread::new();
    let before = thread.last_activity;
    thread.touch();
    assert!(thread.last_activity >= before);
}

#[test]
fn expiry_compares_against_last_activity() {
    let mut thread = Thread::new();
    thread.last_activity = Utc::now() - TimeDelta::hours(25);
    assert!(thread.is_expired(Duration::from_millis(86_400_000)));

    thread.last_activity = Utc::now();
    assert!(!thread.is_expired(Duration::from_millis(86_400_000)));
}

#[test]
fn user_message_starts_sent_ai_starts_delivered() {
    let user = Message::user("t1", "hello");
    assert_eq!(user.sender, Sender::User);
    assert_eq!(user.status, DeliveryStatus::Sent);
    assert_eq!(user.thread_id, "t1");

    let ai = Message::ai("t1", "hi there");
    assert_eq!(ai.sender, Sender::Ai);
    assert_eq!(ai.status, DeliveryStatus::Delivered);
}

#[test]
fn sender_and_status_serialize_lowercase() {
    let message = Message::user("t1", "hello");
    let json = serde_json::to_string(&message).unwrap();
    assert!(json.contains("\"sender\":\"user\""));
    assert!(json.contains("\"status\":\"sent\""));
}

#[test]
fn new_conversation_request_omits_thread_id_key() {
    let request = ChatRequest::new("hello");
    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("thread_id"));

    let request = ChatRequest::new("hello").with_thread_id("t1");
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"thread_id\":\"t1\""));
}

#[test]
fn selected_text_request_carries_excerpt() {
    let request = SelectedTextChatRequest::new("why?", "an excerpt").with_thread_id("t1");
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"selected_text\":\"an excerpt\""));
    assert!(json.contains("\"thread_id\":\"t1\""));
}

#[test]
fn response_parses_with_and_without_sources() {
    let json = r#"{"answer":"42","thread_id":"t1"}"#;
    let response: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.answer, "42");
    assert!(response.sources.is_none());

    let json = r#"{
        "answer": "42",
        "thread_id": "t1",
        "sources": [{"text": "chapter 3", "score": 0.92, "metadata": {"page": 41}}]
    }"#;
    let response: ChatResponse = serde_json::from_str(json).unwrap();
    let sources = response.sources.unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].metadata["page"], 41);
}

#[test]
fn thread_round_trips_through_json() {
    let mut thread = Thread::new();
    let id = thread.thread_id.clone();
    thread.messages.push(Message::user(&id, "hello"));
    thread.messages.push(Message::ai(&id, "hi"));

    let json = serde_json::to_string(&thread).unwrap();
    let parsed: Thread = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, thread);
}
