use poem::middleware::{Cors, Tracing};
use poem::{EndpointExt, IntoEndpoint, Route, Server as PoemServer, listener::TcpListener};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// JSON API under `/api`, its docs, and the HTML pages at the root.
    ///
    /// `cors` guards the JSON API only; the HTML pages are same-origin.
    pub fn routes(container: DependencyContainer, server_url: &str, cors: Cors) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Product Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{server_url}/api"));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/api", api_service.into_endpoint().with(cors))
            .nest("/docs", ui)
            .at("/openapi.json", spec)
            .nest("/", crate::web::routes::routes(container.web_state))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &format!("http://{addr}"), config.cors).with(Tracing);

        tracing::info!("Server running at http://{addr}");
        tracing::info!("Swagger UI at http://{addr}/docs");
        tracing::info!("OpenAPI JSON at http://{addr}/openapi.json");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
