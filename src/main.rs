use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use temple_forecast::{configure, logger, AppState, CapacityTable, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger(&config.log_level);

    if let Some(seed) = config.forecast_seed {
        tracing::warn!(seed, "Fixed forecast seed configured, responses are reproducible");
    }

    let state = web::Data::new(AppState::new(CapacityTable::builtin(), config.forecast_seed));

    tracing::info!("Server running at http://{}:{}", config.host, config.port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await
}
