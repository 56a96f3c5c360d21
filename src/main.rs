use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::PayrollCalculator;
use payroll_engine::config::ConfigLoader;
use payroll_engine::processing::PayrollProcessor;
use payroll_engine::store::InMemoryRepository;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_path =
        env::var("PAYROLL_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let loader = ConfigLoader::load_or_default(&config_path)?;

    let calculator = PayrollCalculator::new(loader.config().clone());
    let processor = PayrollProcessor::new(Arc::new(InMemoryRepository::new()), calculator);
    let app = create_router(AppState::new(processor));

    let addr = env::var("PAYROLL_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, config = %config_path, "Payroll engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
