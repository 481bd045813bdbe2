//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::PracticeError;
use crate::logic;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "mcq_practice_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "mcq_practice_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply = reply_to_text(&txt, &state).await;
        if let Err(e) = socket.send(Message::Text(reply)).await {
          error!(target: "mcq_practice_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "mcq_practice_backend", "WebSocket disconnected");
}

/// Parse, dispatch, serialize. Always produces exactly one JSON reply.
async fn reply_to_text(txt: &str, state: &AppState) -> String {
  let reply_msg = match serde_json::from_str::<ClientWsMessage>(txt) {
    Ok(incoming) => {
      debug!(target: "mcq_practice_backend", raw = %trunc_for_log(txt, 512), "WS received");
      handle_client_ws(incoming, state).await
    }
    Err(e) => ServerWsMessage::Error { code: "invalid_json".into(), message: format!("Invalid JSON: {}", e) },
  };

  serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "code": "serialization", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

fn ws_error(e: PracticeError) -> ServerWsMessage {
  ServerWsMessage::Error { code: e.code().into(), message: e.to_string() }
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Generate(req) => {
      let question = logic::generate_question(state, req).await;
      ServerWsMessage::Question { question }
    }

    ClientWsMessage::GenerateBatch(req) => match logic::generate_batch(state, req).await {
      Ok(questions) => ServerWsMessage::Questions { questions },
      Err(e) => ws_error(e),
    },

    ClientWsMessage::Chapters { subject, grade } => ServerWsMessage::Chapters(logic::chapters(state, &subject, &grade).await),

    ClientWsMessage::Recommended { difficulty } => ServerWsMessage::Recommended(logic::recommended(difficulty.as_deref())),

    ClientWsMessage::StartSession(req) => {
      let out = logic::start_session(state, req).await;
      info!(target: "mcq", session = %out.session_id, "WS session started");
      ServerWsMessage::Session(out)
    }

    ClientWsMessage::Answer { session_id, option } => match logic::answer(state, &session_id, option).await {
      Ok(outcome) => ServerWsMessage::AnswerResult(outcome),
      Err(e) => ws_error(e),
    },

    ClientWsMessage::Next { session_id } => match logic::next(state, &session_id).await {
      Ok(out) => ServerWsMessage::Session(out),
      Err(e) => ws_error(e),
    },

    ClientWsMessage::Finish { session_id } => match logic::finish(state, &session_id).await {
      Ok(summary) => ServerWsMessage::Results(summary),
      Err(e) => ws_error(e),
    },
  }
}
