mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use snaplink_assigner::{AssignerConfig, AssignerService};
use snaplink_gateway::{App, AppState};
use snaplink_generator::RandomGenerator;
use snaplink_resolver::ResolverService;
use snaplink_storage::{InMemoryRepository, MySqlRepository, Repository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                config.base_url,
                InMemoryRepository::new(),
            )
            .await
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config.mysql_dsn.ok_or_else(|| {
                anyhow::anyhow!("mysql dsn is required when storage backend is mysql")
            })?;
            let repository = MySqlRepository::connect(&mysql_dsn).await?;
            repository.migrate().await?;
            run_server(config.listen_addr, config.base_url, repository).await
        }
    }
}

async fn run_server<R>(
    listen_addr: SocketAddr,
    base_url: String,
    repository: R,
) -> anyhow::Result<()>
where
    R: Repository + Clone,
{
    let assigner = AssignerService::new(
        repository.clone(),
        RandomGenerator::new(),
        AssignerConfig::builder().base_url(base_url).build(),
    );
    let resolver = ResolverService::new(repository);
    let state = AppState::new(Arc::new(assigner), Arc::new(resolver));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
