use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizSession,
};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>>;
    async fn update(&self, session: QuizSession) -> AppResult<QuizSession>;
}

/// Process-local session store. Sessions live for the lifetime of the server
/// only; there is deliberately no durable backend behind this.
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, QuizSession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: QuizSession) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                session.id
            )));
        }

        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }
}
