//! # ZapAgent Relay
//!
//! A minimal HTTP relay for the ZapAgent professional-reply generator: it
//! accepts a customer message plus tone/category hints, composes a system
//! prompt, forwards the conversation to the OpenRouter chat-completion API,
//! and returns the generated text as `{"resposta": ...}`.
//!
//! The crate is a library plus a `server` binary. All state is built once at
//! startup ([`config::RelayConfig`]) and injected into the handlers; each
//! request is an independent, stateless transform.

pub mod config;
pub mod error;
pub mod llms;
pub mod prompt;
pub mod server;
pub mod types;

pub use config::RelayConfig;
pub use error::RelayError;
pub use llms::{ChatMessage, CompletionProvider};
pub use server::{app_router, AppState};

/// Crate version, surfaced in startup logs.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
