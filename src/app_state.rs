use std::sync::Arc;

use crate::{
    config::Config,
    gateway::OpenAiQuizGateway,
    repositories::InMemorySessionRepository,
    services::{GenerationService, SessionService},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = Arc::new(OpenAiQuizGateway::new(&config));
        let generation_service = Arc::new(GenerationService::new(gateway));
        let session_repository = Arc::new(InMemorySessionRepository::new());
        let session_service = Arc::new(SessionService::new(session_repository, generation_service));

        Self {
            session_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_serves_sessions() {
        let state = AppState::new(Config::test_config());

        let session = state
            .session_service
            .create_session()
            .await
            .expect("create works");
        let fetched = state
            .session_service
            .get_session(&session.id)
            .await
            .expect("get works");

        assert_eq!(fetched.id, session.id);
    }
}
