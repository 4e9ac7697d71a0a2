use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("GHASSAN_VERIFIER_BIND")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }
}
