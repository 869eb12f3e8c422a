pub mod session_handler;

pub use session_handler::{
    create_session, generate_quiz, get_session, health_check, record_answer, reset_quiz,
    submit_quiz,
};
