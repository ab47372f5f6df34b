//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
pub(crate) use state_builders::Stores;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::Clock;
use tracing::info;

use chirp::Trace;
#[cfg(debug_assertions)]
use chirp::doc::ApiDoc;
use chirp::inbound::http::configure_api;
use chirp::inbound::http::health::{self, HealthState};
use chirp::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure_api))
        .service(health::service_info)
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over `stores`.
///
/// The caller marks `health_state` ready once any startup work, such as
/// example data seeding, has finished.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails, or when
/// metrics collectors cannot be registered.
pub fn create_server(
    health_state: web::Data<HealthState>,
    stores: &Stores,
    config: ServerConfig,
    clock: Arc<dyn Clock>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(stores, config.timeline, clock));
    let bind_addr = config.bind_addr();

    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics(&config.app_name)?;

    let server = HttpServer::new(move || {
        let app = build_app(health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "chirp listening");
    Ok(server)
}
