//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! Each function maps one request onto `AppState` and shapes the reply DTO.

use tracing::{debug, info, instrument};

use crate::domain::{Difficulty, McqQuestion};
use crate::error::PracticeError;
use crate::generator::recommended_count;
use crate::protocol::{BatchIn, ChaptersOut, GenerateIn, HealthOut, RecommendedOut, SessionOut, StatsOut, TopicsOut};
use crate::session::{AnswerOutcome, ResultSummary};
use crate::state::AppState;
use crate::stats::{filter, question_stats, sort_by_difficulty, QuestionFilter};

#[instrument(level = "info", skip(state, req), fields(subject = %req.subject, grade = %req.grade, chapter = %req.chapter))]
pub async fn generate_question(state: &AppState, req: GenerateIn) -> McqQuestion {
  let params = req.into_params(&state.settings.default_syllabus);
  let q = state.generate_one(&params).await;
  debug!(target: "mcq", id = %q.id, "Question generated");
  q
}

#[instrument(level = "info", skip(state, req), fields(subject = %req.params.subject, count = ?req.count))]
pub async fn generate_batch(state: &AppState, req: BatchIn) -> Result<Vec<McqQuestion>, PracticeError> {
  let params = req.params.into_params(&state.settings.default_syllabus);
  let count = req.count.unwrap_or_else(|| params.difficulty.recommended_count());
  let qs = state.generate_many(&params, count).await?;
  info!(target: "mcq", subject = %params.subject, chapter = %params.chapter, count = qs.len(), "Batch generated");
  Ok(qs)
}

pub async fn chapters(state: &AppState, subject: &str, grade: &str) -> ChaptersOut {
  let chapters = state.available_chapters(subject, grade);
  ChaptersOut { subject: subject.to_string(), grade: grade.to_string(), chapters }
}

pub async fn topics(state: &AppState, subject: &str, grade: &str, chapter: &str) -> TopicsOut {
  TopicsOut { topics: state.chapter_topics(subject, grade, chapter) }
}

/// Missing difficulty counts as easy, like any unrecognized one.
pub fn recommended(difficulty: Option<&str>) -> RecommendedOut {
  let raw = difficulty.unwrap_or_default();
  RecommendedOut { difficulty: Difficulty::parse_lenient(raw), count: recommended_count(raw) }
}

pub async fn health(state: &AppState) -> HealthOut {
  HealthOut { ok: true, sessions: state.session_count().await, generated: state.generated().await }
}

pub fn stats(questions: Vec<McqQuestion>, criteria: &QuestionFilter) -> StatsOut {
  let mut matched: Vec<McqQuestion> = filter(&questions, criteria).into_iter().cloned().collect();
  sort_by_difficulty(&mut matched);
  StatsOut { stats: question_stats(&matched), questions: matched }
}

#[instrument(level = "info", skip(state, req), fields(subject = %req.subject, chapter = %req.chapter, difficulty = %req.difficulty))]
pub async fn start_session(state: &AppState, req: GenerateIn) -> SessionOut {
  let params = req.into_params(&state.settings.default_syllabus);
  let session = state.start_session(params).await;
  SessionOut::from_session(&session)
}

pub async fn current(state: &AppState, session_id: &str) -> Result<SessionOut, PracticeError> {
  let (q, position, score) = state.current_question(session_id).await?;
  Ok(SessionOut::new(session_id, &q, position, score))
}

#[instrument(level = "info", skip(state), fields(%session_id))]
pub async fn answer(state: &AppState, session_id: &str, option: Option<usize>) -> Result<AnswerOutcome, PracticeError> {
  let out = state.answer(session_id, option).await?;
  info!(target: "mcq", session = %session_id, question = %out.question_id, correct = out.correct, score = out.score, "Answer evaluated");
  Ok(out)
}

pub async fn next(state: &AppState, session_id: &str) -> Result<SessionOut, PracticeError> {
  let (q, position, score) = state.advance(session_id).await?;
  Ok(SessionOut::new(session_id, &q, position, score))
}

pub async fn finish(state: &AppState, session_id: &str) -> Result<ResultSummary, PracticeError> {
  state.finish(session_id).await
}
