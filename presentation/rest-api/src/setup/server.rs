use poem::endpoint::StaticFilesEndpoint;
use poem::error::NotFoundError;
use poem::http::StatusCode;
use poem::session::{CookieConfig, MemoryStorage, ServerSession};
use poem::{
    EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::views::not_found_page;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.home_api,
                container.auth_api,
                container.product_api,
                container.sale_api,
                container.report_api,
            ),
            "Store API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        tokio::fs::create_dir_all(&config.storage.upload_dir).await?;
        let uploads = StaticFilesEndpoint::new(&config.storage.upload_dir);

        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/uploads", uploads)
            .catch_error(|_: NotFoundError| async move {
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .content_type("text/html; charset=utf-8")
                    .body(not_found_page())
            })
            .with(ServerSession::new(
                CookieConfig::private(config.session.cookie_key()),
                MemoryStorage::new(),
            ))
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
