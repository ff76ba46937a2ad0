mod core;
mod features;
mod shared;

use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::books::{routes as books_routes, BookService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::clients::{routes as clients_routes, ClientService};
use crate::features::licensure::{
    routes as licensure_routes, LicenseService, ProfessionalLicenseService,
};
use crate::features::professionals::{routes as professionals_routes, ProfessionalService};
use crate::features::reviews::{routes as reviews_routes, ReviewService};
use crate::features::users::{routes as users_routes, UserService};

fn main() -> anyhow::Result<()> {
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?
        .block_on(serve(worker_threads))
}

async fn serve(worker_threads: usize) -> anyhow::Result<()> {
    // .env first so RUST_LOG reaches the subscriber
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        worker_threads,
        pid = std::process::id(),
        "Configuration loaded"
    );

    let pool = database::create_pool(&config.database).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database pool ready, migrations applied");

    let user_service = Arc::new(UserService::new(pool.clone()));
    let professional_service = Arc::new(ProfessionalService::new(pool.clone()));
    let client_service = Arc::new(ClientService::new(pool.clone()));
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    let book_service = Arc::new(BookService::new(pool.clone()));
    let review_service = Arc::new(ReviewService::new(pool.clone()));
    let license_service = Arc::new(LicenseService::new(pool.clone()));
    let professional_license_service = Arc::new(ProfessionalLicenseService::new(pool));
    tracing::info!("Services initialized");

    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);
    let swagger = match config.swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            Router::new()
                .merge(swagger_ui)
                .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                    credentials,
                ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            Router::new().merge(swagger_ui)
        }
    };

    let api = Router::new()
        .merge(users_routes::routes(user_service))
        .merge(professionals_routes::routes(professional_service))
        .merge(clients_routes::routes(client_service))
        .merge(categories_routes::routes(category_service))
        .merge(books_routes::routes(book_service))
        .merge(reviews_routes::routes(review_service))
        .merge(licensure_routes::routes(
            license_service,
            professional_license_service,
        ));

    let app = Router::new()
        .merge(swagger)
        .merge(api)
        .route(
            "/health",
            axum::routing::get(|| async { axum::http::StatusCode::OK }),
        )
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    let addr = config.app.server_address();
    let listener = bind_listener(&addr)?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// TCP listener tuned for many concurrent short requests: address/port reuse,
/// TCP_NODELAY, larger socket buffers and keepalive probes.
fn bind_listener(addr: &str) -> anyhow::Result<tokio::net::TcpListener> {
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address '{}': {}", addr, e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;
    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    #[cfg(target_os = "linux")]
    let keepalive = keepalive
        .with_interval(std::time::Duration::from_secs(10))
        .with_retries(3);
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}
