use super::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;

/// Credential helper that ECR configs point both `credsStore` and `credHelpers` at.
pub const ECR_CREDENTIAL_HELPER: &str = "ecr-registryLogin";

#[derive(Debug, PartialEq, Serialize)]
pub struct AuthConfig {
    pub auth: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BasicAuthConfig {
    pub auths: BTreeMap<String, AuthConfig>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcrAuthConfig {
    pub creds_store: String,
    pub cred_helpers: BTreeMap<String, String>,
}

/// The two shapes of `config.json` this crate writes.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DockerConfig {
    Basic(BasicAuthConfig),
    Ecr(EcrAuthConfig),
}

impl DockerConfig {
    pub fn basic(registry_url: &str, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", username, password));
        let mut auths = BTreeMap::new();
        auths.insert(registry_url.to_owned(), AuthConfig { auth: encoded });
        DockerConfig::Basic(BasicAuthConfig { auths })
    }

    pub fn ecr(account_id: &str, region: &str) -> Self {
        let mut cred_helpers = BTreeMap::new();
        cred_helpers.insert(
            ecr_registry_host(account_id, region),
            ECR_CREDENTIAL_HELPER.to_owned(),
        );
        DockerConfig::Ecr(EcrAuthConfig {
            creds_store: ECR_CREDENTIAL_HELPER.to_owned(),
            cred_helpers,
        })
    }

    /// Serializes the config as JSON indented by a single space per level.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// The registry host the ECR credential helper serves for an account and region.
pub fn ecr_registry_host(account_id: &str, region: &str) -> String {
    format!("{}.dkr.ecr.{}.amazonaws.com", account_id, region)
}

pub fn generate_registry_auth(
    registry_url: &str,
    username: &str,
    password: &str,
) -> Result<Vec<u8>> {
    DockerConfig::basic(registry_url, username, password).to_pretty_json()
}

pub fn generate_ecr_registry_auth(account_id: &str, region: &str) -> Result<Vec<u8>> {
    DockerConfig::ecr(account_id, region).to_pretty_json()
}
