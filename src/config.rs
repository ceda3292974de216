use once_cell::sync::OnceCell;

use crate::split::DEFAULT_BALANCE_EPSILON;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub users: Vec<String>,
    pub balance_epsilon: f64,
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

// Comma-separated list, whitespace trimmed, empty entries dropped
fn parse_users(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

pub fn load_from_env() -> AppConfig {
    let raw_users = std::env::var("USERS").expect("USERS must be set");
    let users = parse_users(&raw_users);
    assert!(!users.is_empty(), "USERS must name at least one user");

    let balance_epsilon = match std::env::var("BALANCE_EPSILON") {
        Ok(raw) => raw
            .parse::<f64>()
            .expect("BALANCE_EPSILON must be a number"),
        Err(_) => DEFAULT_BALANCE_EPSILON,
    };

    AppConfig {
        users,
        balance_epsilon,
    }
}

pub fn init_config(config: AppConfig) {
    CONFIG.set(config).expect("Config already initialized");
}

pub fn get_config() -> &'static AppConfig {
    CONFIG.get().expect("Config not initialized")
}
