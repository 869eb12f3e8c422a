use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use mcqgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("Starting MCQ generator server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::create_session)
            .service(handlers::get_session)
            .service(handlers::generate_quiz)
            .service(handlers::record_answer)
            .service(handlers::submit_quiz)
            .service(handlers::reset_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
