// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Brume agent framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! chat vocabulary used throughout the Brume workspace. All adapter plugins
//! implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::BrumeError;
pub use types::{
    AdapterType, ChatMessage, ChatRequest, ChatResponse, ChatRole, HealthStatus, StreamPull,
};

// Re-export adapter traits at crate root.
pub use traits::{ChatProvider, ChatStream, PluginAdapter};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn brume_error_has_all_variants() {
        let _config = BrumeError::Config("test".into());
        let _provider = BrumeError::Provider {
            message: "test".into(),
            source: None,
        };
        let _no_choices = BrumeError::NoChoices;
        let _not_found = BrumeError::AdapterNotFound {
            adapter_type: "Provider".into(),
            name: "test".into(),
        };
        let _internal = BrumeError::Internal("test".into());
    }

    #[test]
    fn no_choices_is_distinct_from_provider_error() {
        let no_choices = BrumeError::NoChoices;
        assert!(matches!(no_choices, BrumeError::NoChoices));
        assert_eq!(
            no_choices.to_string(),
            "completion response contained no choices"
        );
    }

    #[test]
    fn adapter_type_round_trips() {
        let variants = [
            AdapterType::Channel,
            AdapterType::Provider,
            AdapterType::Storage,
        ];

        for variant in &variants {
            let s = variant.to_string();
            let parsed = AdapterType::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn chat_role_serializes_as_bare_lowercase_label() {
        assert_eq!(ChatRole::System.to_string(), "system");
        assert_eq!(ChatRole::User.to_string(), "user");
        assert_eq!(ChatRole::Assistant.to_string(), "assistant");

        let json = serde_json::to_value(ChatRole::Assistant).unwrap();
        assert_eq!(json, "assistant");
    }

    #[test]
    fn chat_role_parses_lowercase_labels() {
        assert_eq!(ChatRole::from_str("system").unwrap(), ChatRole::System);
        assert_eq!(ChatRole::from_str("user").unwrap(), ChatRole::User);
        assert_eq!(
            ChatRole::from_str("assistant").unwrap(),
            ChatRole::Assistant
        );
        assert!(ChatRole::from_str("tool").is_err());
    }

    #[test]
    fn chat_message_constructors_set_role() {
        assert_eq!(ChatMessage::system("a").role, ChatRole::System);
        assert_eq!(ChatMessage::user("b").role, ChatRole::User);
        assert_eq!(ChatMessage::assistant("c").role, ChatRole::Assistant);
        assert_eq!(ChatMessage::user("hello").content, "hello");
    }

    #[test]
    fn chat_request_preserves_message_order() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("you are terse"),
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
            ChatMessage::user("bye"),
        ]);
        let roles: Vec<ChatRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::System,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User
            ]
        );
    }

    #[test]
    fn stream_pull_variants() {
        let delta = StreamPull::Delta(ChatMessage::assistant("hi"));
        assert_ne!(delta, StreamPull::Empty);
        assert_ne!(delta, StreamPull::Done);
        assert_ne!(StreamPull::Empty, StreamPull::Done);
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compile-time check that the trait surface is reachable through the
        // public API.
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_chat_provider<T: ChatProvider>() {}
        fn _assert_chat_stream<T: ChatStream>() {}
    }
}
