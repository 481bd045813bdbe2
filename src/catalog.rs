//! Content catalog: subject → grade → chapter → `ChapterContent`.
//!
//! Built once at startup (built-in seeds plus optional configured chapters)
//! and read-only afterwards. Shared as `Arc<Catalog>`.

use std::collections::{BTreeMap, HashMap};

use crate::domain::ChapterContent;

/// Result of a catalog lookup. A miss is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
  Found(&'a ChapterContent),
  Missing,
}

type Chapters = BTreeMap<String, ChapterContent>;

#[derive(Debug, Default, Clone)]
pub struct Catalog {
  subjects: HashMap<String, HashMap<String, Chapters>>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or replace a chapter. Returns true if an existing entry was replaced.
  pub(crate) fn insert(&mut self, subject: &str, grade: &str, chapter: &str, content: ChapterContent) -> bool {
    self.subjects
      .entry(subject.to_string())
      .or_default()
      .entry(grade.to_string())
      .or_default()
      .insert(chapter.to_string(), content)
      .is_some()
  }

  pub fn lookup(&self, subject: &str, grade: &str, chapter: &str) -> Lookup<'_> {
    match self.subjects.get(subject).and_then(|g| g.get(grade)).and_then(|c| c.get(chapter)) {
      Some(content) => Lookup::Found(content),
      None => Lookup::Missing,
    }
  }

  /// Chapter names for a subject/grade; empty when the pair is unknown.
  pub fn chapters(&self, subject: &str, grade: &str) -> Vec<String> {
    self.subjects
      .get(subject)
      .and_then(|g| g.get(grade))
      .map(|c| c.keys().cloned().collect())
      .unwrap_or_default()
  }

  pub fn topics(&self, subject: &str, grade: &str, chapter: &str) -> Vec<String> {
    match self.lookup(subject, grade, chapter) {
      Lookup::Found(content) => content.topics.clone(),
      Lookup::Missing => Vec::new(),
    }
  }

  pub fn subjects(&self) -> Vec<String> {
    let mut out: Vec<String> = self.subjects.keys().cloned().collect();
    out.sort();
    out
  }

  pub fn grades(&self, subject: &str) -> Vec<String> {
    let mut out: Vec<String> = self.subjects.get(subject).map(|g| g.keys().cloned().collect()).unwrap_or_default();
    out.sort();
    out
  }

  /// Total number of chapters across all subjects and grades.
  pub fn len(&self) -> usize {
    self.subjects.values().flat_map(|g| g.values()).map(|c| c.len()).sum()
  }

  #[allow(dead_code)]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
