use sea_orm::Database;
use tracing::info;

use custodia_customers::config::CustomersConfig;
use custodia_customers::router::build_router;
use custodia_customers::state::AppState;

#[tokio::main]
async fn main() {
    custodia_core::tracing::init_tracing();

    let config = CustomersConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.customers_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("customers service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
