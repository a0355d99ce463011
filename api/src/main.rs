use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use acct_api::{create_app, telemetry, AppState, Config, Ports};
use acct_infra::attachments::LocalAttachmentStore;
use acct_infra::cache::{RedisClient, RedisTokenCache};
use acct_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlCredentialRepository, MySqlTokenRepository,
};
use acct_infra::providers::ProviderRegistry;

/// MySQL stores, Redis token cache, HTTP identity providers and local
/// attachment storage
struct ProductionPorts;

impl Ports for ProductionPorts {
    type Accounts = MySqlAccountRepository;
    type Credentials = MySqlCredentialRepository;
    type Providers = ProviderRegistry;
    type Tokens = MySqlTokenRepository;
    type Cache = RedisTokenCache;
    type Attachments = LocalAttachmentStore;
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();
    telemetry::init_tracing(&config.logging);
    tracing::info!(environment = %config.environment, "Starting account API server");

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("connecting to the database")?;
    database
        .run_migrations()
        .await
        .context("running database migrations")?;
    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("connecting to redis")?;
    let providers =
        ProviderRegistry::from_config(&config.auth.provider).context("building provider clients")?;
    let attachments = LocalAttachmentStore::new(&config.attachment)
        .context("building attachment download client")?;

    let pool = database.get_pool().clone();
    let state = web::Data::new(AppState::<ProductionPorts>::new(
        Arc::new(MySqlAccountRepository::new(pool.clone())),
        Arc::new(MySqlCredentialRepository::new(pool.clone())),
        Arc::new(providers),
        Arc::new(MySqlTokenRepository::with_lifetime(
            pool,
            config.auth.token.lifetime_months,
        )),
        Arc::new(RedisTokenCache::new(redis)),
        Arc::new(attachments),
        config.clone(),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    database.close().await;
    Ok(())
}
