//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use food_payments_types::PaymentUseCase;

use super::controller::PaymentController;
use super::handlers::{self, AppState};
use super::mapper::PaymentMapper;
use crate::openapi::ApiDoc;

/// HTTP Server for the Payments API.
pub struct HttpServer<U: PaymentUseCase, M: PaymentMapper> {
    state: Arc<AppState<U, M>>,
}

impl<U: PaymentUseCase, M: PaymentMapper> HttpServer<U, M> {
    /// Creates a new HTTP server around the given use case and mapper.
    pub fn new(use_case: U, mapper: M) -> Self {
        Self {
            state: Arc::new(AppState {
                controller: PaymentController::new(use_case, mapper),
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api/payments/pix/qr-code",
                post(handlers::create_payment_qr_code_pix::<U, M>),
            )
            .route("/api/payments", get(handlers::get_payments::<U, M>))
            .route(
                "/api/payments/options",
                get(handlers::list_payment_options::<U, M>),
            )
            .route(
                "/api/payments/{id}",
                get(handlers::find_by_id::<U, M>)
                    .delete(handlers::delete_payment_order_by_id::<U, M>),
            )
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
