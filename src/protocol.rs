//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, GenerateParams, McqQuestion, QuestionType};
use crate::session::{AnswerOutcome, PracticeSession, ResultSummary};
use crate::stats::{QuestionFilter, QuestionStats};

/// Generation request as collected by the dashboard wizard.
/// Identifiers are opaque; only the catalog decides whether they resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateIn {
    pub grade: String,
    pub subject: String,
    pub chapter: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub syllabus: Option<String>,
}

impl GenerateIn {
    pub fn into_params(self, default_syllabus: &str) -> GenerateParams {
        GenerateParams {
            grade: self.grade,
            subject: self.subject,
            chapter: self.chapter,
            difficulty: self.difficulty,
            syllabus: self.syllabus.filter(|s| !s.is_empty()).unwrap_or_else(|| default_syllabus.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchIn {
    #[serde(flatten)]
    pub params: GenerateIn,
    /// Defaults to the difficulty's recommended count.
    #[serde(default)]
    pub count: Option<usize>,
}

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Generate(GenerateIn),
    GenerateBatch(BatchIn),
    Chapters {
        subject: String,
        grade: String,
    },
    Recommended {
        #[serde(default)]
        difficulty: Option<String>,
    },
    StartSession(GenerateIn),
    Answer {
        #[serde(rename = "sessionId")]
        session_id: String,
        #[serde(default)]
        option: Option<usize>,
    },
    Next {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
    Finish {
        #[serde(rename = "sessionId")]
        session_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Question {
        question: McqQuestion,
    },
    Questions {
        questions: Vec<McqQuestion>,
    },
    Chapters(ChaptersOut),
    Recommended(RecommendedOut),
    Session(SessionOut),
    AnswerResult(AnswerOutcome),
    Results(ResultSummary),
    Error {
        code: String,
        message: String,
    },
}

/// A question as shown during practice: no answer, no explanation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOut {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub difficulty: Difficulty,
    pub subject: String,
    pub chapter: String,
    pub grade: String,
    pub syllabus: String,
    pub topic: String,
    pub question_type: QuestionType,
    pub time_limit: u32,
    pub marks: u32,
}

/// Strip the answer from a question before it goes to a learner.
pub fn to_out(q: &McqQuestion) -> QuestionOut {
    QuestionOut {
        id: q.id.clone(),
        question: q.question.clone(),
        options: q.options.clone(),
        difficulty: q.difficulty,
        subject: q.subject.clone(),
        chapter: q.chapter.clone(),
        grade: q.grade.clone(),
        syllabus: q.syllabus.clone(),
        topic: q.topic.clone(),
        question_type: q.question_type,
        time_limit: q.time_limit,
        marks: q.marks,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOut {
    pub session_id: String,
    /// Zero-based.
    pub position: usize,
    pub score: usize,
    pub question: QuestionOut,
}

impl SessionOut {
    pub fn new(session_id: &str, question: &McqQuestion, position: usize, score: usize) -> Self {
        Self { session_id: session_id.to_string(), position, score, question: to_out(question) }
    }

    pub fn from_session(s: &PracticeSession) -> Self {
        Self::new(&s.id, s.current(), s.position(), s.score())
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ChaptersQuery {
    pub subject: String,
    pub grade: String,
}

#[derive(Debug, Serialize)]
pub struct ChaptersOut {
    pub subject: String,
    pub grade: String,
    pub chapters: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
    pub subject: String,
    pub grade: String,
    pub chapter: String,
}

#[derive(Debug, Serialize)]
pub struct TopicsOut {
    pub topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendedQuery {
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedOut {
    pub difficulty: Difficulty,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnswerIn {
    /// Omitted or null when the timer ran out.
    #[serde(default)]
    pub option: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct StatsIn {
    pub questions: Vec<McqQuestion>,
    #[serde(default)]
    pub filter: QuestionFilter,
}

#[derive(Debug, Serialize)]
pub struct StatsOut {
    pub stats: QuestionStats,
    /// Questions matching the filter, easiest first.
    pub questions: Vec<McqQuestion>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub sessions: usize,
    pub generated: u64,
}
