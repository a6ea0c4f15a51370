//! Service integrations that consume a screening outcome.
//!
//! This module contains the collaborators the engine feeds:
//! - Letter rendering (e.g., Markdown)
//! - Document export (e.g., the local filesystem)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod export;
pub mod letter;
