use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use school_exam_server::{
    app_state::AppState, config::Config, graphql, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.validate().map_err(std::io::Error::other)?;

    let state = AppState::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    let schema = graphql::create_schema(state.clone());

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting HTTP server on http://{}:{}",
        bind_addr.0,
        bind_addr.1
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        bind_addr.0,
        bind_addr.1
    );

    let cors_origin = config.cors_allowed_origin.clone();

    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .configure(graphql::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
