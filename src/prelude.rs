pub use crate::base::{
    config::Config,
    types::{Err, Evaluation, Locale, Outcome, Res, Variant, Verdict, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
