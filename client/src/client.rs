use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde_json::Value;
use tracing::{debug, info, warn};

use config::Network;
use execution::abi::decode_string;
use execution::rpc::ExecutionRpc;
use execution::types::CallOutcome;
use execution::ExecutionClient;
use metadata::data_uri::{decode_html, decode_metadata};
use metadata::renderer::Renderer;
use metadata::types::TokenMetadata;

use crate::errors::ClientError;
use crate::report::Report;

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The node answered with a JSON-RPC error object; nothing was decoded.
    RpcError(Value),
    Inspected(Inspection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub token_uri: String,
    /// `None` when the token URI is not a base64 JSON data URI.
    pub metadata: Option<TokenMetadata>,
    /// `None` when `animation_url` is not a base64 HTML data URI.
    pub render: Option<Render>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub renderer: Renderer,
    pub html_len: usize,
    pub saved_to: PathBuf,
}

pub struct Client<R: ExecutionRpc> {
    execution: ExecutionClient<R>,
    network: Network,
    output: PathBuf,
}

impl<R: ExecutionRpc> Client<R> {
    pub(crate) fn new(execution_rpc: &str, network: Network, output: PathBuf) -> Result<Self> {
        let execution = ExecutionClient::new(execution_rpc)
            .wrap_err_with(|| format!("invalid execution rpc: {execution_rpc}"))?;

        Ok(Client {
            execution,
            network,
            output,
        })
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Fetches `tokenURI` for the network's token and inspects the result.
    pub async fn run<W: Write>(&self, report: &mut Report<W>) -> Result<Outcome> {
        report.fetching()?;

        let contract = self.network.contract();
        let token_id = self.network.token_id();
        info!(target: "tokenscope::client", %contract, %token_id, "fetching token uri");

        let outcome = self.execution.token_uri(contract, token_id).await?;
        self.inspect(outcome, report)
    }

    /// Decodes, classifies and saves the token's renderer from a `tokenURI`
    /// call outcome.
    pub fn inspect<W: Write>(
        &self,
        outcome: CallOutcome,
        report: &mut Report<W>,
    ) -> Result<Outcome> {
        let result = match outcome {
            CallOutcome::Success(result) => result,
            CallOutcome::Error(err) => {
                warn!(target: "tokenscope::client", error = %err, "rpc returned an error");
                report.rpc_error(&err)?;
                return Ok(Outcome::RpcError(err));
            }
        };

        let token_uri = decode_string(&result).wrap_err("failed to decode tokenURI return data")?;
        report.token_uri(&token_uri)?;

        let Some(metadata) =
            decode_metadata(&token_uri).wrap_err("failed to decode token metadata")?
        else {
            debug!(target: "tokenscope::client", "token uri is not a json data uri");
            return Ok(Outcome::Inspected(Inspection {
                token_uri,
                metadata: None,
                render: None,
            }));
        };
        report.metadata(&metadata)?;

        let render = match decode_html(&metadata.animation_url)
            .wrap_err("failed to decode animation html")?
        {
            Some(html) => Some(self.render(&html, report)?),
            None => {
                debug!(target: "tokenscope::client", "animation url is not an html data uri");
                None
            }
        };

        Ok(Outcome::Inspected(Inspection {
            token_uri,
            metadata: Some(metadata),
            render,
        }))
    }

    fn render<W: Write>(&self, html: &str, report: &mut Report<W>) -> Result<Render> {
        let renderer = Renderer::classify(html);
        info!(target: "tokenscope::client", %renderer, "classified renderer");

        report.renderer(renderer)?;
        report.html(html)?;

        fs::write(&self.output, html).map_err(|source| ClientError::WriteOutput {
            path: self.output.clone(),
            source,
        })?;
        report.saved(&self.output)?;

        Ok(Render {
            renderer,
            html_len: html.chars().count(),
            saved_to: self.output.clone(),
        })
    }
}
