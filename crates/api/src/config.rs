//! Process configuration, read from the environment at startup.

/// Runtime configuration for the API binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub admin_token: String,
    /// Hosted document-store settings; `None` runs on the in-memory store
    /// (dev mode).
    pub firestore: Option<FirestoreConfig>,
}

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project: String,
    pub token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let admin_token = std::env::var("ADMIN_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_TOKEN not set; using insecure dev default");
            "dev-admin-token".to_string()
        });

        let firestore = match std::env::var("FIRESTORE_PROJECT") {
            Ok(project) if !project.trim().is_empty() => Some(FirestoreConfig {
                project,
                token: std::env::var("FIRESTORE_TOKEN").ok(),
            }),
            _ => {
                tracing::warn!("FIRESTORE_PROJECT not set; running on the in-memory store");
                None
            }
        };

        Self {
            bind_addr,
            admin_token,
            firestore,
        }
    }
}
