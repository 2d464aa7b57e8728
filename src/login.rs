use super::config::{generate_ecr_registry_auth, generate_registry_auth};
use super::{CredentialFileError, Result};

pub const DEFAULT_REGISTRY_URL: &str = "https://index.docker.io/v1";
pub const DEFAULT_REGION: &str = "us-west-1";

const MISSING_ACCOUNT_ID: &str = "you must provide an --account-id value when using --ecr";
const MISSING_BASIC_CREDENTIALS: &str =
    "both --username and --password-stdin must be used, and provided, for us to generate a valid file";

/// A validated login request, either a username/password pair for a registry
/// or an ECR credential helper setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLogin {
    Basic {
        registry_url: String,
        username: String,
        password: String,
    },
    Ecr {
        account_id: String,
        region: String,
    },
}

impl RegistryLogin {
    /// Both `username` and `password` must be non-empty.
    pub fn basic(registry_url: &str, username: &str, password: &str) -> Result<Self> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialFileError::MissingInput(MISSING_BASIC_CREDENTIALS));
        }

        Ok(RegistryLogin::Basic {
            registry_url: registry_url.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// `account_id` must be non-empty, `region` is taken as given.
    pub fn ecr(account_id: &str, region: &str) -> Result<Self> {
        if account_id.is_empty() {
            return Err(CredentialFileError::MissingInput(MISSING_ACCOUNT_ID));
        }

        Ok(RegistryLogin::Ecr {
            account_id: account_id.to_owned(),
            region: region.to_owned(),
        })
    }

    /// Renders the `config.json` contents for this login.
    pub fn render(&self) -> Result<Vec<u8>> {
        match self {
            RegistryLogin::Basic {
                registry_url,
                username,
                password,
            } => generate_registry_auth(registry_url, username, password),
            RegistryLogin::Ecr { account_id, region } => {
                generate_ecr_registry_auth(account_id, region)
            }
        }
    }
}
