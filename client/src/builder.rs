use std::path::PathBuf;

use eyre::Result;

use config::{Config, Network};
use execution::rpc::ExecutionRpc;

use crate::Client;

/// Builds a [`Client`]. Explicitly set fields win over `config`, which wins
/// over the network defaults.
#[derive(Default)]
pub struct ClientBuilder {
    pub network: Option<Network>,
    pub execution_rpc: Option<String>,
    pub output: Option<PathBuf>,
    pub config: Option<Config>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    pub fn execution_rpc(mut self, execution_rpc: &str) -> Self {
        self.execution_rpc = Some(execution_rpc.to_string());
        self
    }

    pub fn output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build<R: ExecutionRpc>(self) -> Result<Client<R>> {
        let network = self
            .network
            .or(self.config.as_ref().map(|config| config.network))
            .unwrap_or_default();

        let base_config = network.to_base_config();

        let execution_rpc = self
            .execution_rpc
            .or(self.config.as_ref().map(|config| config.execution_rpc.clone()))
            .unwrap_or(base_config.execution_rpc);

        let output = self
            .output
            .or(self.config.as_ref().map(|config| config.output.clone()))
            .unwrap_or(base_config.output);

        Client::new(&execution_rpc, network, output)
    }
}
