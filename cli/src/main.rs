use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use dirs::home_dir;
use eyre::Result;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

use client::report::Report;
use client::{Client, ClientBuilder};
use config::{CliConfig, Config, Network};
use execution::rpc::http_rpc::HttpRpc;
use execution::types::CallOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    enable_tracer();

    let cli = Cli::parse();
    let network = Network::default();
    let config = Config::from_file(&config_path(), network, &cli.as_cli_config());

    let client: Client<HttpRpc> = ClientBuilder::new().config(config).build()?;
    let mut report = Report::new(stdout().lock());

    let outcome = match cli.result {
        Some(result) => {
            debug!(target: "tokenscope::runner", "decoding supplied result, skipping rpc call");
            client.inspect(CallOutcome::Success(result), &mut report)?
        }
        None => client.run(&mut report).await?,
    };

    debug!(target: "tokenscope::runner", ?outcome, "done");
    Ok(())
}

fn enable_tracer() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

fn config_path() -> PathBuf {
    home_dir()
        .unwrap_or_default()
        .join(".tokenscope/tokenscope.toml")
}

#[derive(Parser)]
#[clap(version, about)]
/// Fetches tokenURI(1) from the master contract, decodes its metadata and
/// reports which renderer produced the embedded HTML
struct Cli {
    #[clap(short, long, env = "TOKENSCOPE_EXECUTION_RPC")]
    execution_rpc: Option<String>,
    #[clap(short, long, env = "TOKENSCOPE_OUTPUT")]
    output: Option<PathBuf>,
    /// Decode this eth_call result hex instead of querying the node
    #[clap(short, long)]
    result: Option<String>,
}

impl Cli {
    fn as_cli_config(&self) -> CliConfig {
        CliConfig {
            execution_rpc: self.execution_rpc.clone(),
            output: self.output.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn env_of(id: &str) -> Option<String> {
        Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_env_vars_are_namespaced() {
        assert_eq!(
            env_of("execution_rpc").as_deref(),
            Some("TOKENSCOPE_EXECUTION_RPC")
        );
        assert_eq!(env_of("output").as_deref(), Some("TOKENSCOPE_OUTPUT"));
        assert_eq!(env_of("result"), None);
    }

    #[test]
    fn test_flags_map_to_cli_config() {
        let cli = Cli::parse_from(["tokenscope", "-e", "http://localhost:8545", "-o", "out.html"]);
        let config = cli.as_cli_config();

        assert_eq!(config.execution_rpc.as_deref(), Some("http://localhost:8545"));
        assert_eq!(config.output, Some(PathBuf::from("out.html")));
    }
}
