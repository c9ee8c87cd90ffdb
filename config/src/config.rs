use std::{path::Path, path::PathBuf, process::exit};

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::CliConfig;
use crate::networks::Network;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub execution_rpc: String,
    pub output: PathBuf,
    #[serde(skip)]
    pub network: Network,
}

impl Config {
    /// Layers the network defaults, the `[<network>]` table of the TOML file
    /// and the command line, in increasing order of precedence. Exits the
    /// process on an unusable configuration.
    pub fn from_file(config_path: &Path, network: Network, cli_config: &CliConfig) -> Self {
        match Self::try_from_file(config_path, network, cli_config) {
            Ok(config) => config,
            Err(err) => {
                match err.kind {
                    figment::error::Kind::MissingField(field) => {
                        let field = field.replace('_', "-");

                        println!("\x1b[91merror\x1b[0m: missing configuration field: {field}");

                        println!("\n\ttry supplying the proper command line argument: --{field}");

                        println!("\talternatively, you can add the field to your tokenscope.toml file or as an environment variable");
                    }
                    _ => println!("cannot parse configuration: {err}"),
                }
                exit(1);
            }
        }
    }

    pub fn try_from_file(
        config_path: &Path,
        network: Network,
        cli_config: &CliConfig,
    ) -> Result<Self, figment::Error> {
        let name = network.to_string();

        let base_provider = Serialized::from(network.to_base_config(), name.as_str());
        let toml_provider = Toml::file(config_path).nested();
        let cli_provider = cli_config.as_provider(&name);

        let mut config: Config = Figment::new()
            .merge(base_provider)
            .merge(toml_provider)
            .merge(cli_provider)
            .select(name.as_str())
            .extract()?;

        config.network = network;
        debug!(target: "tokenscope::config", ?config, "loaded configuration");

        Ok(config)
    }
}
