//! MCQ generation engine.
//!
//! Each call resolves chapter content from the catalog and, on a hit, draws a
//! question type, a topic and a literal question string, then builds four
//! placeholder options and a random correct index. A catalog miss yields a
//! fixed fallback question instead of an error.
//!
//! Options are the literal strings "Option A".."Option D". They carry no
//! content; real distractor generation does not exist yet.

use std::sync::Arc;

use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Lookup};
use crate::domain::{ChapterContent, Difficulty, GenerateParams, McqQuestion, QuestionType};
use crate::random::RandomSource;
use crate::templates::{self, GENERIC_TEMPLATE};
use crate::util::fill_template;

const PLACEHOLDER_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];
const FALLBACK_OPTIONS: [&str; 4] = ["Concept A", "Concept B", "Concept C", "Concept D"];
const FALLBACK_TEMPLATE: &str = "What is a key concept in {chapter}?";
const FALLBACK_EXPLANATION: &str = "This is a fundamental concept in the chapter.";
const EXPLANATION_TEMPLATE: &str = "The correct answer is \"{answer}\". This is based on the fundamental principles covered in this chapter. The concept involves understanding the key relationships and applying the appropriate formulas or reasoning methods.";

/// Generates questions against a shared catalog. Owns its counter and random source,
/// so ids are unique per instance only.
pub struct McqGenerator<R: RandomSource = StdRng> {
  catalog: Arc<Catalog>,
  rng: R,
  counter: u64,
}

impl<R: RandomSource> McqGenerator<R> {
  pub fn new(catalog: Arc<Catalog>, rng: R) -> Self {
    Self { catalog, rng, counter: 0 }
  }

  /// Number of `generate_one` calls so far (fallbacks included).
  pub fn generated(&self) -> u64 {
    self.counter
  }

  pub fn generate_one(&mut self, params: &GenerateParams) -> McqQuestion {
    self.counter += 1;
    let seq = self.counter;

    // Cheap Arc clone so the borrowed content does not pin `self`.
    let catalog = Arc::clone(&self.catalog);
    match catalog.lookup(&params.subject, &params.grade, &params.chapter) {
      Lookup::Found(content) => self.from_content(params, content, seq),
      Lookup::Missing => {
        warn!(target: "mcq", subject = %params.subject, grade = %params.grade, chapter = %params.chapter, seq, "Catalog miss; serving fallback question");
        fallback_question(params, seq)
      }
    }
  }

  /// `count` independent questions. Duplicate text across the batch is expected.
  pub fn generate_many(&mut self, params: &GenerateParams, count: usize) -> Vec<McqQuestion> {
    (0..count).map(|_| self.generate_one(params)).collect()
  }

  #[allow(dead_code)]
  pub fn available_chapters(&self, subject: &str, grade: &str) -> Vec<String> {
    self.catalog.chapters(subject, grade)
  }

  #[allow(dead_code)]
  pub fn chapter_topics(&self, subject: &str, grade: &str, chapter: &str) -> Vec<String> {
    self.catalog.topics(subject, grade, chapter)
  }

  fn from_content(&mut self, params: &GenerateParams, content: &ChapterContent, seq: u64) -> McqQuestion {
    let difficulty = params.difficulty;
    let question_type = self.pick_question_type(difficulty);
    let topic = self.pick(&content.topics).cloned().unwrap_or_else(|| "General".to_string());

    let question = match templates::bucket(&params.subject, difficulty) {
      Some(bucket) => bucket[self.rng.pick_index(bucket.len())].to_string(),
      None => fill_template(GENERIC_TEMPLATE, &[("topic", &topic)]),
    };

    let mut options: Vec<String> = PLACEHOLDER_OPTIONS.iter().map(|s| s.to_string()).collect();
    self.rng.shuffle(&mut options);
    let correct = self.rng.pick_index(options.len());
    let explanation = fill_template(EXPLANATION_TEMPLATE, &[("answer", &options[correct])]);

    let id = format!("{}_{}_{}_{}_{}", params.subject, params.grade, params.chapter, difficulty, seq);
    debug!(target: "mcq", %id, ?question_type, %topic, "Generated question");

    McqQuestion {
      id,
      question,
      options,
      correct,
      explanation,
      difficulty,
      subject: params.subject.clone(),
      chapter: params.chapter.clone(),
      grade: params.grade.clone(),
      syllabus: params.syllabus.clone(),
      topic,
      question_type,
      time_limit: difficulty.time_limit(),
      marks: difficulty.marks(),
    }
  }

  fn pick_question_type(&mut self, difficulty: Difficulty) -> QuestionType {
    let types = difficulty.question_types();
    types[self.rng.pick_index(types.len())]
  }

  fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
      None
    } else {
      Some(&items[self.rng.pick_index(items.len())])
    }
  }
}

/// Recommended initial batch size for a difficulty string; unknown strings count as easy.
pub fn recommended_count(difficulty: &str) -> usize {
  Difficulty::parse_lenient(difficulty).recommended_count()
}

fn fallback_question(params: &GenerateParams, seq: u64) -> McqQuestion {
  McqQuestion {
    id: format!("fallback_{}", seq),
    question: fill_template(FALLBACK_TEMPLATE, &[("chapter", &params.chapter)]),
    options: FALLBACK_OPTIONS.iter().map(|s| s.to_string()).collect(),
    correct: 0,
    explanation: FALLBACK_EXPLANATION.to_string(),
    difficulty: params.difficulty,
    subject: params.subject.clone(),
    chapter: params.chapter.clone(),
    grade: params.grade.clone(),
    syllabus: params.syllabus.clone(),
    topic: "General".to_string(),
    question_type: QuestionType::Conceptual,
    time_limit: Difficulty::Easy.time_limit(),
    marks: Difficulty::Easy.marks(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::random::{std_source, ScriptedSource};
  use crate::seeds::seed_catalog;
  use std::collections::HashSet;

  fn params(subject: &str, grade: &str, chapter: &str, difficulty: Difficulty) -> GenerateParams {
    GenerateParams {
      grade: grade.into(),
      subject: subject.into(),
      chapter: chapter.into(),
      difficulty,
      syllabus: "2025".into(),
    }
  }

  fn seeded() -> McqGenerator<StdRng> {
    McqGenerator::new(Arc::new(seed_catalog()), std_source(Some(2025)))
  }

  #[test]
  fn easy_real_numbers_uses_easy_math_bucket() {
    let mut g = seeded();
    let easy = templates::bucket("mathematics", Difficulty::Easy).unwrap();
    for _ in 0..50 {
      let q = g.generate_one(&params("mathematics", "ssc1", "Real Numbers", Difficulty::Easy));
      assert!(easy.contains(&q.question.as_str()), "unexpected text {}", q.question);
      assert_eq!(q.marks, 1);
      assert_eq!(q.time_limit, 30);
      assert_eq!(q.options.len(), 4);
      let opts: HashSet<&str> = q.options.iter().map(String::as_str).collect();
      let want: HashSet<&str> = PLACEHOLDER_OPTIONS.iter().copied().collect();
      assert_eq!(opts, want);
      assert!(matches!(q.question_type, QuestionType::Conceptual | QuestionType::Numerical));
    }
  }

  #[test]
  fn missing_chapter_returns_fallback() {
    let mut g = seeded();
    let q = g.generate_one(&params("mathematics", "ssc1", "Nonexistent Chapter", Difficulty::Hard));
    assert_eq!(q.question, "What is a key concept in Nonexistent Chapter?");
    assert_eq!(q.correct, 0);
    assert_eq!(q.options.len(), 4);
    assert_eq!(q.difficulty, Difficulty::Hard);
    assert_eq!(q.chapter, "Nonexistent Chapter");
    assert_eq!((q.time_limit, q.marks), (30, 1));
    assert_eq!(q.id, "fallback_1");
  }

  #[test]
  fn missing_subject_or_grade_also_falls_back() {
    let mut g = seeded();
    for (s, gr, c) in [("history", "ssc1", "Mughals"), ("physics", "grade7", "Light")] {
      let q = g.generate_one(&params(s, gr, c, Difficulty::Medium));
      assert!(q.question.contains(c));
      assert_eq!(q.correct, 0);
    }
  }

  #[test]
  fn time_and_marks_follow_difficulty() {
    let mut g = seeded();
    for (d, want) in Difficulty::ALL.iter().zip([(30, 1), (45, 2), (60, 3), (90, 5)]) {
      let q = g.generate_one(&params("physics", "ssc1", "Electricity", *d));
      assert_eq!((q.time_limit, q.marks), want, "{d}");
      assert!(d.question_types().contains(&q.question_type));
    }
  }

  #[test]
  fn correct_index_is_always_valid() {
    let mut g = seeded();
    let qs = g.generate_many(&params("biology", "hsc2", "Molecular Biology", Difficulty::Impossible), 200);
    assert!(qs.iter().all(|q| q.options.len() == 4 && q.correct < q.options.len()));
    let seen: HashSet<usize> = qs.iter().map(|q| q.correct).collect();
    assert_eq!(seen.len(), 4);
  }

  #[test]
  fn generate_many_returns_exact_count_with_unique_ids() {
    let mut g = seeded();
    let p = params("chemistry", "ssc2", "Carbon and its Compounds", Difficulty::Medium);
    assert!(g.generate_many(&p, 0).is_empty());
    let qs = g.generate_many(&p, 17);
    assert_eq!(qs.len(), 17);
    let ids: HashSet<&str> = qs.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), 17);
    assert_eq!(g.generated(), 17);
    assert_eq!(qs[0].id, "chemistry_ssc2_Carbon and its Compounds_medium_1");
  }

  #[test]
  fn scripted_draws_give_exact_output() {
    // type=1 (numerical), topic=2, question=3, shuffle i=3..1 => [0,2,0], correct=1
    let rng = ScriptedSource::new([1, 2, 3, 0, 2, 0, 1]);
    let mut g = McqGenerator::new(Arc::new(seed_catalog()), rng);
    let q = g.generate_one(&params("mathematics", "ssc1", "Real Numbers", Difficulty::Easy));
    assert_eq!(q.question_type, QuestionType::Numerical);
    assert_eq!(q.topic, "Real Number System");
    assert_eq!(q.question, "Find the HCF of 12 and 18.");
    assert_eq!(q.options, vec!["Option B", "Option D", "Option C", "Option A"]);
    assert_eq!(q.correct, 1);
    assert!(q.explanation.starts_with("The correct answer is \"Option D\"."));
    assert_eq!(q.id, "mathematics_ssc1_Real Numbers_easy_1");
  }

  #[test]
  fn configured_subject_without_bucket_uses_generic_text() {
    let mut cat = seed_catalog();
    cat.insert(
      "geography",
      "ssc1",
      "Maps",
      ChapterContent { topics: vec!["Latitude".into()], ..Default::default() },
    );
    let mut g = McqGenerator::new(Arc::new(cat), ScriptedSource::default());
    let q = g.generate_one(&params("geography", "ssc1", "Maps", Difficulty::Easy));
    assert_eq!(q.question, "What is the main concept of Latitude?");
    assert_eq!(q.topic, "Latitude");
  }

  #[test]
  fn same_seed_same_questions() {
    let p = params("physics", "hsc1", "Waves", Difficulty::Hard);
    let a = seeded().generate_many(&p, 10);
    let b = seeded().generate_many(&p, 10);
    assert_eq!(a, b);
  }

  #[test]
  fn chapters_and_topics_pass_through() {
    let g = seeded();
    let mut ch = g.available_chapters("mathematics", "hsc1");
    ch.sort();
    assert_eq!(ch, vec!["Limits and Derivatives", "Trigonometric Functions"]);
    assert!(g.available_chapters("mathematics", "phd").is_empty());
    assert_eq!(g.chapter_topics("physics", "hsc2", "Modern Physics").len(), 3);
  }

  #[test]
  fn recommended_counts() {
    assert_eq!(recommended_count("easy"), 20);
    assert_eq!(recommended_count("medium"), 15);
    assert_eq!(recommended_count("hard"), 10);
    assert_eq!(recommended_count("impossible"), 5);
    assert_eq!(recommended_count("whatever"), 20);
  }
}
