use alloy::primitives::{Address, U256};
use eyre::Result;
use tracing::debug;

use common::types::BlockTag;

use crate::abi::token_uri_calldata;
use crate::rpc::ExecutionRpc;
use crate::types::{CallOpts, CallOutcome};

#[derive(Clone)]
pub struct ExecutionClient<R: ExecutionRpc> {
    pub rpc: R,
}

impl<R: ExecutionRpc> ExecutionClient<R> {
    pub fn new(rpc: &str) -> Result<Self> {
        let rpc: R = ExecutionRpc::new(rpc)?;
        Ok(ExecutionClient { rpc })
    }

    /// Calls `tokenURI(token_id)` on `contract` at the latest block.
    pub async fn token_uri(&self, contract: Address, token_id: U256) -> Result<CallOutcome> {
        let opts = CallOpts {
            to: contract,
            data: token_uri_calldata(token_id),
        };

        let response = self.rpc.call(&opts, BlockTag::Latest).await?;
        debug!(
            target: "tokenscope::execution",
            has_error = response.error.is_some(),
            result_len = response.result.as_ref().and_then(serde_json::Value::as_str).map(str::len),
            "received eth_call response"
        );

        response.into_outcome()
    }
}
