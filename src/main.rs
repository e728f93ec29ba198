use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use ignite_call_rust::config::AppConfig;
use ignite_call_rust::handlers;
use ignite_call_rust::openapi_config::{configure_openapi, ApiDoc};
use ignite_call_rust::services::{
    HttpSchedulingBackend, RecordingBackend, SchedulingBackend, TimeIntervalService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Initialize the scheduling backend client
    let backend: Arc<dyn SchedulingBackend> = match &config.scheduling_api_url {
        Some(url) => {
            tracing::info!("Forwarding availability to {}", url);
            Arc::new(HttpSchedulingBackend::new(url, config.backend_timeout)?)
        }
        None => {
            tracing::warn!("SCHEDULING_API_URL is not set, submissions are kept in memory only");
            Arc::new(RecordingBackend::new())
        }
    };

    let interval_service = web::Data::new(TimeIntervalService::new(backend));

    tracing::info!("Ignite Call listening on http://{}", config.bind_address);
    tracing::info!("API Documentation: http://{}/swagger-ui/", config.bind_address);

    let openapi_spec = configure_openapi(ApiDoc::openapi());
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(interval_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .service(Files::new("/static", &static_dir))
            .configure(handlers::configure_routes)
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
