use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quizbank_server::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to build application state");

    log::info!("starting HTTP server on {}:{}", host, port);
    log::info!(
        "contributor group: '{}', allowed origin: {}",
        state.config.contributor_group,
        state.config.allowed_origin
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(AuthMiddleware::new(state.principal_resolver.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
