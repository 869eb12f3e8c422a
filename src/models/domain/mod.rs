pub mod quiz;
pub mod score;
pub mod session;
pub use quiz::{Question, Quiz};
pub use score::{QuestionResult, ScoreReport};
pub use session::{QuizSession, SessionStatus};
