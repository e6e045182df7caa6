/// Customers service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CustomersConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3117). Env var: `CUSTOMERS_PORT`.
    pub customers_port: u16,
}

impl CustomersConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            customers_port: std::env::var("CUSTOMERS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3117),
        }
    }
}
