//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_health_routes, build_property_routes, with_middleware};
use crate::config::PaginationConfig;
use crate::core::repository::PropertyRepository;
use crate::core::service::{PropertyService, PropertyServiceImpl};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the property HTTP application
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryPropertyRepository::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn PropertyService>>,
    pagination: PaginationConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            pagination: PaginationConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Back the default service with `repository`
    pub fn with_repository(mut self, repository: impl PropertyRepository + 'static) -> Self {
        self.service = Some(Arc::new(PropertyServiceImpl::from_repository(repository)));
        self
    }

    /// Use a custom service implementation
    pub fn with_service(mut self, service: Arc<dyn PropertyService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Override page size defaults and limits
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Add custom routes to the server
    ///
    /// They share the middleware stack and problem-body fallback of the
    /// property routes.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let service = self.service.ok_or_else(|| {
            anyhow::anyhow!(
                "PropertyService is required. Call .with_repository() or .with_service()"
            )
        })?;

        let state = AppState::new(service, self.pagination);
        let mut app = build_health_routes().merge(build_property_routes(state));
        for routes in self.custom_routes {
            app = app.merge(routes);
        }

        Ok(with_middleware(app))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
