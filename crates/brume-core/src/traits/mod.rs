// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Brume plugin architecture.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod chat;

// Re-export all traits at the traits module level for convenience.
pub use adapter::PluginAdapter;
pub use chat::{ChatProvider, ChatStream};
