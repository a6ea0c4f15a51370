//! Core components, types, and utilities for endoscopy-triage.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The question catalogues, with each indicator's tier.
//! - Patient facing copy (labels, advice, reasons).
//! - Common types and result handling.

pub mod catalog;
pub mod config;
pub mod copy;
pub mod types;
