//! Application state: catalog, generator, practice sessions and settings.
//!
//! This module owns:
//!   - the immutable catalog (built-in seeds + configured chapters)
//!   - the single generator instance (serialized behind a mutex)
//!   - the in-memory session store
//!   - generator/session settings (from TOML or defaults)

use std::{collections::HashMap, sync::Arc};

use rand::rngs::StdRng;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::{load_config_from_env, AppConfig, GeneratorSettings};
use crate::domain::{GenerateParams, McqQuestion};
use crate::error::PracticeError;
use crate::generator::McqGenerator;
use crate::random::std_source;
use crate::seeds::seed_catalog;
use crate::session::{AnswerOutcome, PracticeSession, ResultSummary};

pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: Mutex<McqGenerator<StdRng>>,
    pub sessions: RwLock<HashMap<String, PracticeSession>>,
    pub settings: GeneratorSettings,
}

impl AppState {
    /// Build state from env: load config, build the catalog, seed the generator.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_config_from_env().unwrap_or_default())
    }

    pub fn from_config(cfg: AppConfig) -> Self {
        let mut catalog = seed_catalog();
        cfg.apply_chapters(&mut catalog);

        for subject in catalog.subjects() {
            let grades = catalog.grades(&subject);
            let chapters: usize = grades.iter().map(|g| catalog.chapters(&subject, g).len()).sum();
            info!(target: "mcq", %subject, grades = grades.len(), chapters, "Startup catalog inventory");
        }

        let settings = cfg.generator;
        info!(target: "mcq_practice_backend", seeded = settings.seed.is_some(), more_batch_size = settings.more_batch_size, refill_threshold = settings.refill_threshold, max_batch = settings.max_batch, "Generator settings");

        let catalog = Arc::new(catalog);
        let generator = McqGenerator::new(Arc::clone(&catalog), std_source(settings.seed));
        Self {
            catalog,
            generator: Mutex::new(generator),
            sessions: RwLock::new(HashMap::new()),
            settings,
        }
    }

    #[instrument(level = "debug", skip(self), fields(subject = %params.subject, chapter = %params.chapter))]
    pub async fn generate_one(&self, params: &GenerateParams) -> McqQuestion {
        self.generator.lock().await.generate_one(params)
    }

    #[instrument(level = "debug", skip(self), fields(subject = %params.subject, chapter = %params.chapter))]
    pub async fn generate_many(&self, params: &GenerateParams, count: usize) -> Result<Vec<McqQuestion>, PracticeError> {
        if count > self.settings.max_batch {
            return Err(PracticeError::BatchTooLarge { requested: count, max: self.settings.max_batch });
        }
        Ok(self.generator.lock().await.generate_many(params, count))
    }

    /// Create a session and return it (cloned) for the caller to render.
    #[instrument(level = "info", skip(self), fields(subject = %params.subject, chapter = %params.chapter, difficulty = %params.difficulty))]
    pub async fn start_session(&self, params: GenerateParams) -> PracticeSession {
        let id = Uuid::new_v4().to_string();
        let session = {
            let mut generator = self.generator.lock().await;
            PracticeSession::start(id.clone(), params, &mut *generator)
        };
        self.sessions.write().await.insert(id.clone(), session.clone());
        info!(target: "mcq", session = %id, queued = session.queued(), "Practice session started");
        session
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn current_question(&self, id: &str) -> Result<(McqQuestion, usize, usize), PracticeError> {
        let sessions = self.sessions.read().await;
        let s = sessions.get(id).ok_or_else(|| PracticeError::UnknownSession(id.to_string()))?;
        Ok((s.current().clone(), s.position(), s.score()))
    }

    #[instrument(level = "info", skip(self))]
    pub async fn answer(&self, id: &str, option: Option<usize>) -> Result<AnswerOutcome, PracticeError> {
        let mut sessions = self.sessions.write().await;
        let s = sessions.get_mut(id).ok_or_else(|| PracticeError::UnknownSession(id.to_string()))?;
        s.answer(option)
    }

    /// Advance a session; may generate more questions.
    ///
    /// Lock order: the sessions lock is never held while waiting on the
    /// generator. The top-up batch is drawn between the read and write phases.
    #[instrument(level = "info", skip(self))]
    pub async fn advance(&self, id: &str) -> Result<(McqQuestion, usize, usize), PracticeError> {
        loop {
            let (params, refill) = {
                let sessions = self.sessions.read().await;
                let s = sessions.get(id).ok_or_else(|| PracticeError::UnknownSession(id.to_string()))?;
                (s.params.clone(), s.needs_refill(&self.settings))
            };

            let more = if refill {
                let batch = self.settings.more_batch_size.max(1);
                let more = self.generator.lock().await.generate_many(&params, batch);
                debug!(target: "mcq", session = %id, added = more.len(), "Session queue topped up");
                more
            } else {
                Vec::new()
            };

            let mut sessions = self.sessions.write().await;
            let s = sessions.get_mut(id).ok_or_else(|| PracticeError::UnknownSession(id.to_string()))?;
            s.push_questions(more);
            // A concurrent `next` may have consumed the queue in between; draw again.
            if s.step() {
                return Ok((s.current().clone(), s.position(), s.score()));
            }
        }
    }

    /// Remove a session and summarize it.
    #[instrument(level = "info", skip(self))]
    pub async fn finish(&self, id: &str) -> Result<ResultSummary, PracticeError> {
        let s = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| PracticeError::UnknownSession(id.to_string()))?;
        let summary = s.summary();
        info!(target: "mcq", session = %id, score = summary.score, total = summary.total, grade = summary.grade, "Practice session finished");
        Ok(summary)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Questions produced by the shared generator since startup.
    pub async fn generated(&self) -> u64 {
        self.generator.lock().await.generated()
    }

    pub fn available_chapters(&self, subject: &str, grade: &str) -> Vec<String> {
        self.catalog.chapters(subject, grade)
    }

    pub fn chapter_topics(&self, subject: &str, grade: &str, chapter: &str) -> Vec<String> {
        self.catalog.topics(subject, grade, chapter)
    }
}
