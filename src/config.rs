use std::env;

#[derive(Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub mongodb_database: String,
    /// Shared Basic-Auth credential; every API route requires it
    pub api_username: String,
    pub api_password: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mongodb_url: env::var("MONGODB_URL").expect("MONGODB_URL must be set"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "family_registry".to_string()),
            api_username: env::var("API_USERNAME").expect("API_USERNAME must be set"),
            api_password: env::var("API_PASSWORD").expect("API_PASSWORD must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}
