//! Service entry-point: wires the upstream client, resolver, REST endpoints,
//! and OpenAPI docs.

use std::sync::Arc;

use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use employee_api::ApiDoc;
use employee_api::domain::EmployeeService;
use employee_api::inbound::http::health::{HealthState, live, ready};
use employee_api::inbound::http;
use employee_api::inbound::http::state::HttpState;
use employee_api::middleware::trace_request;
use employee_api::outbound::employee_server::EmployeeServerClient;
use employee_api::server::AppConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let directory = EmployeeServerClient::new(
        &config.upstream.base_url,
        config.upstream.connect_timeout,
        config.upstream.read_timeout,
    )
    .map_err(std::io::Error::other)?;
    let service = Arc::new(EmployeeService::new(Arc::new(directory)));
    let state = HttpState::new(service.clone(), service);

    info!(
        bind_addr = %config.bind_addr,
        upstream = %config.upstream.base_url,
        "starting employee API"
    );

    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(web::Data::new(state.clone()))
            .wrap(from_fn(trace_request))
            .configure(http::configure)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app
            .service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
