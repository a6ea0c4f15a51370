//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::PathBuf, sync::Arc};

use serde::Deserialize;

use super::types::{Locale, Res, UnknownAgePolicy, Variant};

/// Default age from which routine screening is recommended.
fn default_screening_age_threshold() -> u8 {
    45
}

/// Default institution printed on the letter header.
fn default_institution_name() -> String {
    "Endoscopy Self-Screening".to_string()
}

/// Default directory exported letters are written to.
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Configuration for the endoscopy-triage application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { inner: Arc::new(ConfigInner::default()) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Language of questions, results and letters (`LOCALE`).
    #[serde(default)]
    pub locale: Locale,
    /// Questionnaire to present (`VARIANT`).
    #[serde(default)]
    pub variant: Variant,
    /// Age from which routine screening is recommended (`SCREENING_AGE_THRESHOLD`).
    #[serde(default = "default_screening_age_threshold")]
    pub screening_age_threshold: u8,
    /// How a missing age is treated by the fallback rule (`UNKNOWN_AGE_POLICY`).
    #[serde(default)]
    pub unknown_age_policy: UnknownAgePolicy,
    /// Institution name on the letter header (`INSTITUTION_NAME`).
    #[serde(default = "default_institution_name")]
    pub institution_name: String,
    /// Institution address on the letter header, one line per row (`INSTITUTION_ADDRESS`).
    #[serde(default)]
    pub institution_address: String,
    /// Optional logo shown on the letter header (`LOGO_PATH`).
    #[serde(default)]
    pub logo_path: Option<PathBuf>,
    /// Directory exported letters are written to (`OUTPUT_DIR`).
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            variant: Variant::default(),
            screening_age_threshold: default_screening_age_threshold(),
            unknown_age_policy: UnknownAgePolicy::default(),
            institution_name: default_institution_name(),
            institution_address: String::new(),
            logo_path: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("ENDOSCOPY_TRIAGE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        if self.screening_age_threshold < 1 || self.screening_age_threshold > 120 {
            return Err(anyhow::anyhow!("Screening age threshold must be between 1 and 120."));
        }

        if self.institution_name.trim().is_empty() {
            return Err(anyhow::anyhow!("Institution name must not be empty."));
        }

        Ok(())
    }

    /// A copy of this configuration with command line overrides applied.
    pub fn with_overrides(&self, locale: Option<Locale>, variant: Option<Variant>) -> Self {
        let mut inner = (*self.inner).clone();

        if let Some(locale) = locale {
            inner.locale = locale;
        }

        if let Some(variant) = variant {
            inner.variant = variant;
        }

        Self { inner: Arc::new(inner) }
    }

    /// Institution address split into printable lines.
    pub fn address_lines(&self) -> Vec<&str> {
        self.institution_address.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
    }
}
