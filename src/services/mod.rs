pub mod extraction;
pub mod generation_service;
pub mod scoring_service;
pub mod session_service;

pub use generation_service::GenerationService;
pub use scoring_service::ScoringService;
pub use session_service::SessionService;
