//! Practice sessions: an endless queue of generated questions with running score.
//!
//! A session starts with the difficulty's recommended batch, refills itself when
//! the learner gets close to the end, and produces a results summary when finished.

use serde::Serialize;

use crate::config::GeneratorSettings;
use crate::domain::{Difficulty, GenerateParams, McqQuestion};
use crate::error::PracticeError;
use crate::generator::McqGenerator;
use crate::random::RandomSource;
use crate::stats::{question_stats, QuestionStats};
use crate::util::percentage;

#[derive(Debug, Clone)]
pub struct PracticeSession {
  pub id: String,
  pub params: GenerateParams,
  questions: Vec<McqQuestion>,
  current: usize,
  answered: bool,
  score: usize,
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
  pub question_id: String,
  pub correct: bool,
  /// `None` when the timer ran out.
  pub selected: Option<usize>,
  pub correct_index: usize,
  pub explanation: String,
  pub score: usize,
  pub attempted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
  pub session_id: String,
  pub score: usize,
  pub total: usize,
  pub incorrect: usize,
  pub percentage: u32,
  pub grade: &'static str,
  pub message: &'static str,
  pub difficulty: Difficulty,
  pub subject: String,
  pub chapter: String,
  pub stats: QuestionStats,
}

impl PracticeSession {
  pub fn start<R: RandomSource>(id: String, params: GenerateParams, generator: &mut McqGenerator<R>) -> Self {
    let count = params.difficulty.recommended_count();
    let questions = generator.generate_many(&params, count);
    Self { id, params, questions, current: 0, answered: false, score: 0 }
  }

  pub fn current(&self) -> &McqQuestion {
    &self.questions[self.current]
  }

  /// Zero-based position of the current question.
  pub fn position(&self) -> usize {
    self.current
  }

  /// Questions generated so far (including ones not yet shown).
  pub fn queued(&self) -> usize {
    self.questions.len()
  }

  pub fn score(&self) -> usize {
    self.score
  }

  /// Questions shown so far, the current one included.
  pub fn attempted(&self) -> usize {
    self.current + 1
  }

  /// Answer the current question. `None` records a timeout (counted as incorrect).
  pub fn answer(&mut self, option: Option<usize>) -> Result<AnswerOutcome, PracticeError> {
    let q = &self.questions[self.current];
    if self.answered {
      return Err(PracticeError::AlreadyAnswered(q.id.clone()));
    }
    if let Some(o) = option {
      if o >= q.options.len() {
        return Err(PracticeError::OptionOutOfRange { option: o, len: q.options.len() });
      }
    }

    let correct = option == Some(q.correct);
    let outcome = AnswerOutcome {
      question_id: q.id.clone(),
      correct,
      selected: option,
      correct_index: q.correct,
      explanation: q.explanation.clone(),
      score: self.score + usize::from(correct),
      attempted: self.attempted(),
    };
    self.answered = true;
    if correct {
      self.score += 1;
    }
    Ok(outcome)
  }

  /// True when the queue is close enough to its end that `next` should top it up first.
  pub fn needs_refill(&self, settings: &GeneratorSettings) -> bool {
    self.current + settings.refill_threshold.max(1) >= self.questions.len()
  }

  pub fn push_questions(&mut self, more: Vec<McqQuestion>) {
    self.questions.extend(more);
  }

  /// Move to the next queued question. Returns false, leaving the session
  /// untouched, when nothing is queued after the current one.
  /// Unanswered questions are skipped and count as incorrect.
  pub fn step(&mut self) -> bool {
    if self.current + 1 >= self.questions.len() {
      return false;
    }
    self.current += 1;
    self.answered = false;
    true
  }

  pub fn summary(&self) -> ResultSummary {
    let total = self.attempted();
    let pct = percentage(self.score, total);
    let (grade, message) = letter_grade(pct);
    ResultSummary {
      session_id: self.id.clone(),
      score: self.score,
      total,
      incorrect: total - self.score,
      percentage: pct,
      grade,
      message,
      difficulty: self.params.difficulty,
      subject: self.params.subject.clone(),
      chapter: self.params.chapter.clone(),
      stats: question_stats(&self.questions[..total]),
    }
  }
}

/// Letter grade and encouragement for a percentage.
pub fn letter_grade(percentage: u32) -> (&'static str, &'static str) {
  match percentage {
    90..=u32::MAX => ("A+", "Excellent!"),
    80..=89 => ("A", "Great job!"),
    70..=79 => ("B", "Good work!"),
    60..=69 => ("C", "Keep trying!"),
    50..=59 => ("D", "Need improvement!"),
    _ => ("F", "Keep practicing!"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::{std_source, ScriptedSource};
  use crate::seeds::seed_catalog;
  use std::sync::Arc;

  fn params(difficulty: Difficulty) -> GenerateParams {
    GenerateParams {
      grade: "ssc1".into(),
      subject: "mathematics".into(),
      chapter: "Polynomials".into(),
      difficulty,
      syllabus: "2025".into(),
    }
  }

  fn generator() -> McqGenerator<rand::rngs::StdRng> {
    McqGenerator::new(Arc::new(seed_catalog()), std_source(Some(11)))
  }

  /// Same sequence the service runs for `next`: top up, then step.
  fn advance<R: RandomSource>(s: &mut PracticeSession, g: &mut McqGenerator<R>, settings: &GeneratorSettings) {
    if s.needs_refill(settings) {
      let more = g.generate_many(&s.params, settings.more_batch_size.max(1));
      s.push_questions(more);
    }
    assert!(s.step());
  }

  #[test]
  fn step_stops_at_end_of_queue() {
    let mut g = generator();
    let mut s = PracticeSession::start("s".into(), params(Difficulty::Impossible), &mut g);
    for _ in 0..4 {
      assert!(s.step());
    }
    assert_eq!(s.position(), 4);
    assert!(!s.step());
    assert_eq!(s.position(), 4);
    assert!(s.needs_refill(&GeneratorSettings::default()));
  }

  #[test]
  fn starts_with_recommended_batch() {
    let mut g = generator();
    for (d, n) in [(Difficulty::Easy, 20), (Difficulty::Medium, 15), (Difficulty::Hard, 10), (Difficulty::Impossible, 5)] {
      let s = PracticeSession::start("s".into(), params(d), &mut g);
      assert_eq!(s.queued(), n);
      assert_eq!(s.position(), 0);
    }
  }

  #[test]
  fn scoring_and_double_answer() {
    let mut g = generator();
    let mut s = PracticeSession::start("s".into(), params(Difficulty::Hard), &mut g);
    let right = s.current().correct;
    let out = s.answer(Some(right)).unwrap();
    assert!(out.correct);
    assert_eq!(out.score, 1);
    assert_eq!(s.score(), 1);
    assert_eq!(s.answer(Some(right)), Err(PracticeError::AlreadyAnswered(s.current().id.clone())));
  }

  #[test]
  fn wrong_timeout_and_out_of_range() {
    let mut g = generator();
    let settings = GeneratorSettings::default();
    let mut s = PracticeSession::start("s".into(), params(Difficulty::Easy), &mut g);

    let wrong = (s.current().correct + 1) % 4;
    assert!(!s.answer(Some(wrong)).unwrap().correct);

    advance(&mut s, &mut g, &settings);
    assert_eq!(s.answer(Some(4)), Err(PracticeError::OptionOutOfRange { option: 4, len: 4 }));
    let timeout = s.answer(None).unwrap();
    assert!(!timeout.correct);
    assert_eq!(timeout.selected, None);
    assert_eq!(timeout.attempted, 2);
    assert_eq!(s.score(), 0);
  }

  #[test]
  fn refills_near_the_end() {
    let mut g = generator();
    let settings = GeneratorSettings::default();
    let mut s = PracticeSession::start("s".into(), params(Difficulty::Impossible), &mut g);
    assert_eq!(s.queued(), 5);
    // positions 0 and 1 are far enough from the end (0+3 < 5, 1+3 < 5)
    advance(&mut s, &mut g, &settings);
    advance(&mut s, &mut g, &settings);
    assert_eq!(s.queued(), 5);
    // at position 2, 2+3 >= 5 triggers a refill of 5
    advance(&mut s, &mut g, &settings);
    assert_eq!(s.queued(), 10);
    assert_eq!(s.position(), 3);
    for _ in 0..50 {
      advance(&mut s, &mut g, &settings);
    }
    assert_eq!(s.position(), 53);
    assert!(s.queued() > 53);
  }

  #[test]
  fn zero_threshold_config_still_never_runs_out() {
    let mut g = generator();
    let settings = GeneratorSettings { refill_threshold: 0, more_batch_size: 0, ..Default::default() };
    let mut s = PracticeSession::start("s".into(), params(Difficulty::Impossible), &mut g);
    for _ in 0..20 {
      advance(&mut s, &mut g, &settings);
    }
    assert_eq!(s.position(), 20);
  }

  #[test]
  fn summary_counts_only_presented_questions() {
    let mut g = McqGenerator::new(Arc::new(seed_catalog()), ScriptedSource::default());
    let settings = GeneratorSettings::default();
    let mut s = PracticeSession::start("abc".into(), params(Difficulty::Medium), &mut g);
    // Scripted zeros: correct index is always 0.
    s.answer(Some(0)).unwrap();
    advance(&mut s, &mut g, &settings);
    s.answer(Some(0)).unwrap();
    advance(&mut s, &mut g, &settings);
    s.answer(Some(2)).unwrap();

    let r = s.summary();
    assert_eq!(r.session_id, "abc");
    assert_eq!((r.score, r.total, r.incorrect), (2, 3, 1));
    assert_eq!(r.percentage, 67);
    assert_eq!((r.grade, r.message), ("C", "Keep trying!"));
    assert_eq!(r.stats.total, 3);
    assert_eq!(r.stats.total_marks, 6);
    assert_eq!(r.stats.by_difficulty["medium"], 3);
  }

  #[test]
  fn grade_boundaries() {
    assert_eq!(letter_grade(100).0, "A+");
    assert_eq!(letter_grade(90).0, "A+");
    assert_eq!(letter_grade(89).0, "A");
    assert_eq!(letter_grade(70).0, "B");
    assert_eq!(letter_grade(60).0, "C");
    assert_eq!(letter_grade(50), ("D", "Need improvement!"));
    assert_eq!(letter_grade(49), ("F", "Keep practicing!"));
    assert_eq!(letter_grade(0).0, "F");
  }
}
