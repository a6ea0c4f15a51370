//! User interaction for endoscopy-triage.
//!
//! This module provides the presentation side of the tool:
//! - Collecting and validating answers (files or an interactive prompt)
//! - Rendering outcomes as text or JSON
//! - Running one screening end to end, letter export included

pub mod form;
pub mod present;
pub mod report;
