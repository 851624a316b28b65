use actix_cors::Cors;
use actix_files as fs;
use actix_web::{middleware, middleware::ErrorHandlers, web::ThinData, App, HttpServer};
use confik::{Configuration as _, EnvSource};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use offer_catalog::config::CatalogConfig;
use offer_catalog::persistence::dataset::OfferRepository;
use offer_catalog::rest_api;
use offer_catalog::rest_api::base_api::json_error_body;
use std::io;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    let config = match CatalogConfig::builder()
        .override_with(EnvSource::new())
        .try_build() {
        Ok(config) => config,
        Err(build_error) => panic!("Could not create CatalogConfig: {}", build_error),
    };

    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.clone()));

    let repository = OfferRepository::new(&config.data_path);
    info!("Serving offers from {} on {}", repository.data_path().display(), config.server_addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(ThinData(repository.clone()))
            .wrap(middleware::Logger::default())
            .wrap(ErrorHandlers::new().default_handler(json_error_body))
            .wrap(
                Cors::permissive()
                    .allowed_methods(vec!["GET", "OPTIONS"])
                    .max_age(3600)
                    )
            .configure(rest_api::configure)
            .service(fs::Files::new("/", static_dir.as_str())
                         .index_file("index.html")
                         .use_last_modified(true),)
         })
        .bind(config.server_addr)?
        .run()
        .await
}
