// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! vLLM provider adapter for the Brume agent framework.
//!
//! This crate implements [`ChatProvider`] for vLLM and other inference
//! servers exposing an OpenAI-compatible HTTP API, providing both single-shot
//! completion and streaming responses pulled through a [`ChatStream`] cursor.

pub mod client;
pub mod sse;
pub mod stream;
pub mod types;

use std::str::FromStr;
use std::sync::OnceLock;

use async_trait::async_trait;
use tracing::{debug, info};

use brume_config::BrumeConfig;
use brume_core::error::BrumeError;
use brume_core::traits::{ChatProvider, ChatStream, PluginAdapter};
use brume_core::types::{
    AdapterType, ChatMessage, ChatRequest, ChatResponse, ChatRole, HealthStatus,
};
use brume_plugin::{PluginFactory, PluginManifest, PluginRegistry};

use crate::client::VllmClient;
use crate::stream::VllmChatStream;
use crate::types::{ChatCompletionRequest, WireMessage};

/// vLLM provider implementing [`ChatProvider`].
///
/// Holds the endpoint configuration and lazily builds the HTTP transport on
/// first use. The configuration is immutable after construction; the derived
/// transport handle is memoized and reused for all subsequent calls.
pub struct VllmProvider {
    /// Base URL of the vLLM server, e.g. "http://localhost:8000".
    /// Must NOT include "/v1" (it is appended internally).
    base_url: String,

    /// Model identifier understood by the server, e.g. "mistral".
    model: String,

    /// API key forwarded as a Bearer token; vLLM commonly uses a dummy key.
    api_key: String,

    /// Lazily constructed transport; once set, it is used directly.
    client: OnceLock<VllmClient>,
}

impl VllmProvider {
    /// Creates a provider from explicit endpoint settings.
    ///
    /// No validation or I/O happens here; the first call that needs the
    /// transport rejects an empty base URL or model identifier.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: OnceLock::new(),
        }
    }

    /// Creates a provider from the `[vllm]` section of the given configuration.
    pub fn from_config(config: &BrumeConfig) -> Self {
        info!(
            base_url = config.vllm.base_url,
            model = config.vllm.model,
            "vLLM provider initialized"
        );
        Self::new(
            &config.vllm.base_url,
            &config.vllm.model,
            &config.vllm.api_key,
        )
    }

    /// Constructs or returns the underlying HTTP transport.
    ///
    /// Validates required settings before the first build; after that the
    /// memoized handle is returned without re-validation.
    fn transport(&self) -> Result<&VllmClient, BrumeError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        if self.base_url.trim().is_empty() {
            return Err(BrumeError::Config("vllm.base_url is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(BrumeError::Config("vllm.model is empty".to_string()));
        }

        let built = VllmClient::new(&self.base_url, &self.api_key)?;
        Ok(self.client.get_or_init(|| built))
    }

    /// Converts a [`ChatRequest`] to the wire-format completion request,
    /// preserving message order.
    fn to_completion_request(&self, request: &ChatRequest, stream: bool) -> ChatCompletionRequest {
        let messages: Vec<WireMessage> = request
            .messages
            .iter()
            .map(|m| WireMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            stream,
        }
    }
}

#[async_trait]
impl PluginAdapter for VllmProvider {
    fn name(&self) -> &str {
        "vllm"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, BrumeError> {
        // Constructing the transport exercises the configuration without
        // consuming tokens on a real completion call.
        match self.transport() {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }

    async fn shutdown(&self) -> Result<(), BrumeError> {
        debug!("vLLM provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl ChatProvider for VllmProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, BrumeError> {
        let client = self.transport()?;
        let api_request = self.to_completion_request(&request, false);
        let response = client.complete_chat(&api_request).await?;

        // Only the first choice is authoritative.
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(BrumeError::NoChoices)?;

        // The reply slot is assistant-by-contract; an exotic label from the
        // server maps there too.
        let role = ChatRole::from_str(&choice.message.role).unwrap_or(ChatRole::Assistant);

        Ok(ChatResponse {
            message: ChatMessage {
                role,
                content: choice.message.content,
            },
        })
    }

    async fn chat_stream(
        &self,
        request: ChatRequest,
    ) -> Result<Box<dyn ChatStream>, BrumeError> {
        let client = self.transport()?;
        let api_request = self.to_completion_request(&request, true);
        let chunks = client.stream_chat(&api_request).await?;

        Ok(Box::new(VllmChatStream::new(chunks)))
    }
}

/// Factory that builds a [`VllmProvider`] from a `[vllm]`-shaped config value.
pub struct VllmFactory;

impl PluginFactory for VllmFactory {
    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    fn create(&self, config: &serde_json::Value) -> Result<Box<dyn PluginAdapter>, BrumeError> {
        let settings: brume_config::model::VllmConfig = serde_json::from_value(config.clone())
            .map_err(|e| BrumeError::Config(format!("invalid vllm provider config: {e}")))?;
        Ok(Box::new(VllmProvider::new(
            settings.base_url,
            settings.model,
            settings.api_key,
        )))
    }
}

/// Returns the plugin manifest for this provider.
pub fn manifest() -> PluginManifest {
    PluginManifest {
        name: "vllm".to_string(),
        version: "0.1.0".to_string(),
        description: "vLLM OpenAI-compatible LLM provider".to_string(),
        adapter_type: AdapterType::Provider,
        author: Some("Brume Contributors".to_string()),
        capabilities: vec!["chat".to_string(), "streaming".to_string()],
        min_brume_version: Some("0.1.0".to_string()),
        config_keys: vec!["vllm.base_url".to_string(), "vllm.model".to_string()],
    }
}

/// Registers the vLLM provider in the given plugin registry.
pub fn register(registry: &mut PluginRegistry) {
    registry.register(manifest(), Some(Box::new(VllmFactory)));
}
