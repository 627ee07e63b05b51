//! AWS Secrets Manager integration
//!
//! Fetches raw secret payloads by identifier and parses the database
//! credential payload into a typed form. One fetch per call — callers that
//! need the value across restarts fetch it again at startup.

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Access denied to secret: {0}")]
    AccessDenied(String),

    #[error("Invalid secret format: {0}")]
    InvalidFormat(String),

    #[error("AWS SDK error: {0}")]
    Sdk(String),
}

/// AWS Secrets Manager client wrapper
pub struct SecretStore {
    client: SecretsClient,
}

impl SecretStore {
    /// Create a new SecretStore with default AWS configuration.
    ///
    /// Credentials are resolved from the environment, the AWS credentials
    /// file, an instance profile, or IRSA — whatever the runtime provides.
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: SecretsClient::new(&config),
        }
    }

    /// Wrap an existing Secrets Manager client
    pub fn with_client(client: SecretsClient) -> Self {
        Self { client }
    }

    /// Fetch a secret's string payload by identifier.
    ///
    /// No caching and no retry: failure here is surfaced immediately so the
    /// caller decides whether startup can proceed.
    pub async fn get_secret(&self, secret_id: &str) -> Result<String, SecretError> {
        debug!(secret_id = %secret_id, "Fetching secret from AWS Secrets Manager");

        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                let error_msg = e.to_string();
                if error_msg.contains("ResourceNotFoundException") {
                    SecretError::NotFound(secret_id.to_string())
                } else if error_msg.contains("AccessDeniedException") {
                    SecretError::AccessDenied(secret_id.to_string())
                } else {
                    SecretError::Sdk(error_msg)
                }
            })?;

        response
            .secret_string()
            .map(|s| s.to_string())
            .ok_or_else(|| SecretError::InvalidFormat("Secret is binary, not string".to_string()))
    }
}

/// Database credentials stored in Secrets Manager.
///
/// Expects the secret to be stored as JSON:
/// ```json
/// {
///   "host": "db.internal",
///   "port": 5432,
///   "username": "app",
///   "password": "...",
///   "dbname": "tasks"
/// }
/// ```
/// `port` may be a JSON number or a numeric string — RDS-managed secrets
/// use either depending on how they were created.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCredentials {
    pub host: String,
    #[serde(deserialize_with = "de_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub dbname: String,
}

impl DatabaseCredentials {
    /// Parse database credentials from a JSON payload.
    ///
    /// Pure and deterministic. Fails when a required key is missing, has the
    /// wrong type, or is empty; never yields a partially populated value.
    pub fn from_json(json: &str) -> Result<Self, SecretError> {
        let credentials: Self = serde_json::from_str(json).map_err(|e| {
            SecretError::InvalidFormat(format!("Failed to parse database credentials: {}", e))
        })?;
        credentials.validate()?;
        Ok(credentials)
    }

    fn validate(&self) -> Result<(), SecretError> {
        let fields = [
            ("host", &self.host),
            ("username", &self.username),
            ("password", &self.password),
            ("dbname", &self.dbname),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(SecretError::InvalidFormat(format!(
                    "Field '{}' must not be empty",
                    name
                )));
            }
        }
        if self.port == 0 {
            return Err(SecretError::InvalidFormat(
                "Field 'port' must not be zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn de_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
