//! # Food Payments Application
//!
//! Loads configuration, connects the payment order store, builds the
//! order, customer and PIX gateways, and serves the payment API.

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_payments_hex::{DefaultPaymentMapper, PaymentService, inbound::HttpServer};
use food_payments_repo::{HttpCustomerGateway, HttpOrderGateway, HttpPixGateway, build_repo};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("food-payments-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (otel_tracer, otel_provider) = init_tracer()?;
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,food_payments_app=debug,food_payments_hex=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    let config = config::Config::from_env()?;

    tracing::info!("Starting food payments server on port {}", config.port);
    tracing::info!(
        orders = %config.orders_api_url,
        customers = %config.customers_api_url,
        pix = %config.pix_api_url,
        "Upstream services"
    );

    // Handles connection and migration
    let repo = build_repo(&config.database_url).await?;

    let orders = HttpOrderGateway::new(config.orders_api_url);
    let customers = HttpCustomerGateway::new(config.customers_api_url);
    let pix = HttpPixGateway::new(config.pix_api_url, config.pix_api_token);

    let service = PaymentService::new(repo, orders, customers, pix);

    let server = HttpServer::new(service, DefaultPaymentMapper);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Flush traces before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
