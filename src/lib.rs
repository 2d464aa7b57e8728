pub mod cli;
mod config;
mod login;
mod store;

use std::io;
use std::path::{Path, PathBuf};

pub use config::{
    ecr_registry_host, generate_ecr_registry_auth, generate_registry_auth, AuthConfig, BasicAuthConfig, DockerConfig, EcrAuthConfig, ECR_CREDENTIAL_HELPER,
};
pub use login::{RegistryLogin, DEFAULT_REGION, DEFAULT_REGISTRY_URL};
pub use store::{write_config, CONFIG_FILE_NAME, CREDENTIALS_DIR};

type Result<T> = std::result::Result<T, CredentialFileError>;

/// An error that occurred whilst attempting to generate a credential file.
#[derive(Debug, thiserror::Error)]
pub enum CredentialFileError {
    /// A flag required by the selected login mode was empty.
    #[error("{0}")]
    MissingInput(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Unable to serialize credential file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render the config for `registry_login` and write it into `dir`.
///
/// Returns the path of the written `config.json`.
///
/// Example:
/// ```no_run
/// use registry_credentials::{RegistryLogin, CREDENTIALS_DIR};
///
/// let registry_login = RegistryLogin::ecr("123456789012", "us-east-1").expect("Account id is set");
/// let path = registry_credentials::login(&registry_login, CREDENTIALS_DIR).expect("Unable to write credentials");
///
/// println!("Wrote {}", path.display());
/// ```
pub fn login(registry_login: &RegistryLogin, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let file_bytes = registry_login.render()?;
    write_config(dir, &file_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_basic_config() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("credentials");
        let registry_login =
            RegistryLogin::basic("https://example.com", "bob", "secret").unwrap();

        let path = login(&registry_login, &dir).unwrap();

        assert_eq!(path, dir.join(CONFIG_FILE_NAME));
        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"auths":{"https://example.com":{"auth":"Ym9iOnNlY3JldA=="}}})
        );
    }

    #[test]
    fn writes_ecr_config() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("credentials");
        let registry_login = RegistryLogin::ecr("123456789012", "us-east-1").unwrap();

        let path = login(&registry_login, &dir).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({
                "credsStore": "ecr-registryLogin",
                "credHelpers": {
                    "123456789012.dkr.ecr.us-east-1.amazonaws.com": "ecr-registryLogin"
                }
            })
        );
    }

    #[test]
    fn second_login_replaces_first() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("credentials");

        login(&RegistryLogin::ecr("123456789012", "us-east-1").unwrap(), &dir).unwrap();
        let path = login(
            &RegistryLogin::basic("https://example.com", "bob", "secret").unwrap(),
            &dir,
        )
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"auths":{"https://example.com":{"auth":"Ym9iOnNlY3JldA=="}}})
        );
    }

    #[test]
    fn io_errors_are_passed_through() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("missing-parent").join("credentials");
        let registry_login = RegistryLogin::ecr("123456789012", "us-east-1").unwrap();

        let err = login(&registry_login, &dir).unwrap_err();

        match err {
            CredentialFileError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
