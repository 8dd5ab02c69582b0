use lambda_http::{run, Body, Error};
use books_api::catalog::controller::routes;
use books_api::core::controller::AppState;
use books_api::core::domain::Configuration;
use books_api::core::repository::RepositoryStore;
use books_api::utils::logs::setup_tracing;
use books_api::utils::sql::{build_db_pool, create_table};

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Configuration::from_env()?;
    if config.dev_mode {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    let store = RepositoryStore::from_url(config.database_url.as_str())?;
    let pool = build_db_pool(&config).await?;
    create_table(&pool, store).await?;
    tracing::info!(api_prefix = config.api_prefix.as_str(), "catalog ready");

    let app = routes::<Body>(AppState::new(config, pool));
    run(app).await
}
