//! Domain models: difficulty tiers, question types, chapter content, and the generated MCQ.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty tier. Drives template selection, time limit and marks.
///
/// Deserialization is lenient: anything that is not a known tier becomes `Easy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
  #[default]
  Easy,
  Medium,
  Hard,
  Impossible,
}

impl Difficulty {
  pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Impossible];

  /// Strict parse; `None` for unknown tiers.
  pub fn parse(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "easy" => Some(Difficulty::Easy),
      "medium" => Some(Difficulty::Medium),
      "hard" => Some(Difficulty::Hard),
      "impossible" => Some(Difficulty::Impossible),
      _ => None,
    }
  }

  /// Lenient parse; unknown strings fall back to `Easy`.
  pub fn parse_lenient(s: &str) -> Self {
    Self::parse(s).unwrap_or_default()
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
      Difficulty::Impossible => "impossible",
    }
  }

  /// Seconds allowed per question.
  pub fn time_limit(self) -> u32 {
    match self {
      Difficulty::Easy => 30,
      Difficulty::Medium => 45,
      Difficulty::Hard => 60,
      Difficulty::Impossible => 90,
    }
  }

  pub fn marks(self) -> u32 {
    match self {
      Difficulty::Easy => 1,
      Difficulty::Medium => 2,
      Difficulty::Hard => 3,
      Difficulty::Impossible => 5,
    }
  }

  /// Size of the initial practice batch.
  pub fn recommended_count(self) -> usize {
    match self {
      Difficulty::Easy => 20,
      Difficulty::Medium => 15,
      Difficulty::Hard => 10,
      Difficulty::Impossible => 5,
    }
  }

  /// Question types a tier may draw from.
  pub fn question_types(self) -> &'static [QuestionType] {
    use QuestionType::*;
    match self {
      Difficulty::Easy => &[Conceptual, Numerical],
      Difficulty::Medium => &[Application, Numerical, Conceptual],
      Difficulty::Hard => &[Analytical, Application, Numerical],
      Difficulty::Impossible => &[Analytical, Application],
    }
  }
}

impl From<String> for Difficulty {
  fn from(s: String) -> Self {
    Difficulty::parse_lenient(&s)
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
  Conceptual,
  Numerical,
  Application,
  Analytical,
}

impl QuestionType {
  pub const ALL: [QuestionType; 4] =
    [QuestionType::Conceptual, QuestionType::Numerical, QuestionType::Application, QuestionType::Analytical];
}

/// Reference content for one chapter. Immutable once the catalog is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterContent {
  #[serde(default)] pub topics: Vec<String>,
  #[serde(default)] pub concepts: Vec<String>,
  #[serde(default)] pub formulas: Vec<String>,
  #[serde(default)] pub examples: Vec<String>,
  #[serde(default, rename = "keyPoints", alias = "key_points")] pub key_points: Vec<String>,
}

/// What the caller asks the generator for. Identifiers are opaque strings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GenerateParams {
  pub grade: String,
  pub subject: String,
  pub chapter: String,
  #[serde(default)]
  pub difficulty: Difficulty,
  pub syllabus: String,
}

/// A generated multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
  pub id: String,
  pub question: String,
  pub options: Vec<String>,
  /// Index into `options`.
  pub correct: usize,
  pub explanation: String,
  pub difficulty: Difficulty,
  pub subject: String,
  pub chapter: String,
  pub grade: String,
  pub syllabus: String,
  pub topic: String,
  pub question_type: QuestionType,
  /// Seconds.
  pub time_limit: u32,
  pub marks: u32,
}
