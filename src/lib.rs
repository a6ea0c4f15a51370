//! Library root for `endoscopy-triage`.
//!
//! Endoscopy-triage is a self-assessment questionnaire for gastrointestinal
//! symptoms and risk factors. It:
//! - Collects yes/no answers and optional respondent details
//! - Classifies the respondent with a fixed tier precedence
//! - Shows a recommendation and the reasons behind it
//! - Exports a printable letter
//!
//! The decision engine is a pure function; the letter renderer and the export
//! sink sit behind traits so other implementations can be swapped in.

pub mod base;
pub mod engine;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;
