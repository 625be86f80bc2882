use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use motionstudy::config::Config;
use motionstudy::handlers::{
    MessageResponse, ProjectListResponse, ProjectResponse, ProjectSummaryResponse,
    SaveProjectResponse,
};
use motionstudy::state::AppState;
use motionstudy::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::project::save_project,
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::delete_project,
    ),
    components(schemas(
        SaveProjectResponse,
        ProjectListResponse,
        ProjectSummaryResponse,
        ProjectResponse,
        MessageResponse,
    )),
    tags(
        (name = "Projects", description = "Time and motion study project persistence")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects and prepares the schema)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database ready");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}
