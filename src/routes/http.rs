//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::error::PracticeError;
use crate::logic;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse { Json(logic::health(&state).await) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_chapters(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ChaptersQuery>,
) -> impl IntoResponse {
  Json(logic::chapters(&state, &q.subject, &q.grade).await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_topics(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TopicsQuery>,
) -> impl IntoResponse {
  Json(logic::topics(&state, &q.subject, &q.grade, &q.chapter).await)
}

#[instrument(level = "info")]
pub async fn http_get_recommended(Query(q): Query<RecommendedQuery>) -> impl IntoResponse {
  Json(logic::recommended(q.difficulty.as_deref()))
}

#[instrument(level = "info", skip(state, body), fields(subject = %body.subject, chapter = %body.chapter))]
pub async fn http_post_mcq(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateIn>,
) -> impl IntoResponse {
  let q = logic::generate_question(&state, body).await;
  info!(target: "mcq", id = %q.id, "HTTP question served");
  Json(q)
}

#[instrument(level = "info", skip(state, body), fields(subject = %body.params.subject, count = ?body.count))]
pub async fn http_post_batch(
  State(state): State<Arc<AppState>>,
  Json(body): Json<BatchIn>,
) -> Result<impl IntoResponse, PracticeError> {
  let qs = logic::generate_batch(&state, body).await?;
  Ok(Json(qs))
}

#[instrument(level = "info", skip(body), fields(questions = body.questions.len()))]
pub async fn http_post_stats(Json(body): Json<StatsIn>) -> impl IntoResponse {
  Json(logic::stats(body.questions, &body.filter))
}

#[instrument(level = "info", skip(state, body), fields(subject = %body.subject, chapter = %body.chapter, difficulty = %body.difficulty))]
pub async fn http_post_session(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GenerateIn>,
) -> impl IntoResponse {
  let out = logic::start_session(&state, body).await;
  info!(target: "mcq", session = %out.session_id, "HTTP session started");
  Json(out)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_session(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, PracticeError> {
  Ok(Json(logic::current(&state, &id).await?))
}

#[instrument(level = "info", skip(state, body), fields(option = ?body.option))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<AnswerIn>,
) -> Result<impl IntoResponse, PracticeError> {
  Ok(Json(logic::answer(&state, &id, body.option).await?))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_next(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, PracticeError> {
  Ok(Json(logic::next(&state, &id).await?))
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_finish(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, PracticeError> {
  let summary = logic::finish(&state, &id).await?;
  info!(target: "mcq", session = %id, percentage = summary.percentage, grade = summary.grade, "HTTP results served");
  Ok(Json(summary))
}
