//! Helpers over question lists: filtering, ordering, totals and statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, McqQuestion, QuestionType};

/// Partial match criteria; unset fields match anything.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
  #[serde(default)] pub difficulty: Option<Difficulty>,
  #[serde(default)] pub subject: Option<String>,
  #[serde(default)] pub chapter: Option<String>,
  #[serde(default)] pub grade: Option<String>,
  #[serde(default)] pub syllabus: Option<String>,
  #[serde(default)] pub topic: Option<String>,
  #[serde(default)] pub question_type: Option<QuestionType>,
}

impl QuestionFilter {
  pub fn matches(&self, q: &McqQuestion) -> bool {
    fn eq<T: PartialEq>(want: &Option<T>, got: &T) -> bool {
      want.as_ref().map_or(true, |w| w == got)
    }
    eq(&self.difficulty, &q.difficulty)
      && eq(&self.subject, &q.subject)
      && eq(&self.chapter, &q.chapter)
      && eq(&self.grade, &q.grade)
      && eq(&self.syllabus, &q.syllabus)
      && eq(&self.topic, &q.topic)
      && eq(&self.question_type, &q.question_type)
  }
}

pub fn filter<'a>(questions: &'a [McqQuestion], criteria: &QuestionFilter) -> Vec<&'a McqQuestion> {
  questions.iter().filter(|q| criteria.matches(q)).collect()
}

/// Stable sort, easy first.
pub fn sort_by_difficulty(questions: &mut [McqQuestion]) {
  questions.sort_by_key(|q| q.difficulty);
}

pub fn total_time(questions: &[McqQuestion]) -> u32 {
  questions.iter().map(|q| q.time_limit).sum()
}

pub fn total_marks(questions: &[McqQuestion]) -> u32 {
  questions.iter().map(|q| q.marks).sum()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStats {
  pub total: usize,
  pub by_difficulty: BTreeMap<&'static str, usize>,
  pub by_type: BTreeMap<&'static str, usize>,
  pub total_time: u32,
  pub total_marks: u32,
}

pub fn question_stats(questions: &[McqQuestion]) -> QuestionStats {
  // Every bucket is reported, zero or not.
  let mut by_difficulty: BTreeMap<&'static str, usize> = Difficulty::ALL.iter().map(|d| (d.as_str(), 0)).collect();
  let mut by_type: BTreeMap<&'static str, usize> = QuestionType::ALL.iter().map(|t| (type_key(*t), 0)).collect();

  for q in questions {
    *by_difficulty.entry(q.difficulty.as_str()).or_default() += 1;
    *by_type.entry(type_key(q.question_type)).or_default() += 1;
  }

  QuestionStats {
    total: questions.len(),
    by_difficulty,
    by_type,
    total_time: total_time(questions),
    total_marks: total_marks(questions),
  }
}

fn type_key(t: QuestionType) -> &'static str {
  match t {
    QuestionType::Conceptual => "conceptual",
    QuestionType::Numerical => "numerical",
    QuestionType::Application => "application",
    QuestionType::Analytical => "analytical",
  }
}
