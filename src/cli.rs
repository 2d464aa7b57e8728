use clap::{Parser, Subcommand};
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter, SetLoggerError};
use std::path::{Path, PathBuf};

use crate::{CredentialFileError, RegistryLogin, DEFAULT_REGION, DEFAULT_REGISTRY_URL};

#[derive(Debug, Parser)]
#[clap(
    name = "registry-credentials",
    about = "Generate container registry credential files",
    version
)]
pub struct Cli {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(LoginArgs),
}

#[derive(Debug, Parser)]
#[clap(about = "Generate and save the registry authentication file")]
pub struct LoginArgs {
    #[clap(
        long = "ecr",
        help = "Write an ECR credential helper config, requires --account-id instead of --username and --password-stdin"
    )]
    pub ecr: bool,

    #[clap(
        long = "registry-url",
        default_value = DEFAULT_REGISTRY_URL,
        help = "The registry URL, defaults to the docker registry"
    )]
    pub registry_url: String,

    #[clap(long = "username", default_value = "", help = "The registry username")]
    pub username: String,

    #[clap(
        long = "password-stdin",
        visible_alias = "password",
        default_value = "",
        help = "The registry password",
        long_help = "The registry password. Passed as a flag value despite the name, it is not read from stdin"
    )]
    pub password: String,

    #[clap(long = "account-id", default_value = "", help = "Your AWS account id")]
    pub account_id: String,

    #[clap(long = "region", default_value = DEFAULT_REGION, help = "Your AWS region")]
    pub region: String,
}

impl TryFrom<&LoginArgs> for RegistryLogin {
    type Error = CredentialFileError;

    fn try_from(args: &LoginArgs) -> Result<Self, Self::Error> {
        if args.ecr {
            RegistryLogin::ecr(&args.account_id, &args.region)
        } else {
            RegistryLogin::basic(&args.registry_url, &args.username, &args.password)
        }
    }
}

/// Runs the parsed command, writing into `dir`.
pub fn run(cli: Cli, dir: impl AsRef<Path>) -> Result<PathBuf, CredentialFileError> {
    match cli.commands {
        Commands::Login(args) => {
            let registry_login = RegistryLogin::try_from(&args)?;
            match &registry_login {
                RegistryLogin::Basic {
                    registry_url,
                    username,
                    ..
                } => {
                    log::debug!("Generating basic auth config for {} on {}", username, registry_url)
                }
                RegistryLogin::Ecr { account_id, region } => {
                    log::debug!("Generating ECR config for {} in {}", account_id, region)
                }
            }

            let path = crate::login(&registry_login, dir)?;
            log::debug!("Saved registry credentials to {}", path.display());
            Ok(path)
        }
    }
}

fn log_format(verbose: bool) -> fern::Dispatch {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = colors.color(record.level()).to_string().to_lowercase();
            if record.level() == Level::Debug {
                out.finish(format_args!("{} [{}]: {}", level, record.target(), message))
            } else {
                out.finish(format_args!("{}: {}", level, message))
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
}

/// Errors go to stderr, everything else to stdout.
pub fn setup_logs(verbose: bool) -> Result<(), SetLoggerError> {
    log_format(verbose)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| metadata.level() != Level::Error)
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Error)
                .chain(std::io::stderr()),
        )
        .apply()
}
