//! Loading service configuration (generator knobs + extra catalog chapters) from TOML.
//!
//! See `AppConfig` and `GeneratorSettings` for the expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::domain::ChapterContent;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub generator: GeneratorSettings,
  #[serde(default)]
  pub chapters: Vec<ChapterCfg>,
}

/// Extra chapter accepted in TOML configuration. Merged into the catalog at startup.
#[derive(Clone, Debug, Deserialize)]
pub struct ChapterCfg {
  pub subject: String,
  pub grade: String,
  pub chapter: String,
  #[serde(flatten)]
  pub content: ChapterContent,
}

/// Knobs for question generation and practice sessions.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
  /// Fixed RNG seed; OS entropy when absent.
  pub seed: Option<u64>,
  pub default_syllabus: String,
  /// Questions appended each time a session runs low.
  pub more_batch_size: usize,
  /// Refill once the current question is this close to the end.
  pub refill_threshold: usize,
  /// Upper bound for one batch request.
  pub max_batch: usize,
}

impl Default for GeneratorSettings {
  fn default() -> Self {
    Self {
      seed: None,
      default_syllabus: "2025".into(),
      more_batch_size: 5,
      refill_threshold: 3,
      max_batch: 100,
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Merge configured chapters into `catalog`. Configured entries replace built-ins.
  pub fn apply_chapters(&self, catalog: &mut Catalog) {
    for c in &self.chapters {
      if c.subject.is_empty() || c.grade.is_empty() || c.chapter.is_empty() {
        error!(target: "mcq", subject = %c.subject, grade = %c.grade, chapter = %c.chapter, "Skipping configured chapter: empty key.");
        continue;
      }
      let replaced = catalog.insert(&c.subject, &c.grade, &c.chapter, c.content.clone());
      info!(target: "mcq", subject = %c.subject, grade = %c.grade, chapter = %c.chapter, replaced, "Configured chapter loaded");
    }
  }
}

/// Attempt to load `AppConfig` from MCQ_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("MCQ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match AppConfig::from_toml_str(&s) {
      Ok(cfg) => {
        info!(target: "mcq_practice_backend", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "mcq_practice_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "mcq_practice_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
