use std::{fs::read_to_string, path::PathBuf};

use async_trait::async_trait;
use eyre::Result;

use common::types::BlockTag;

use super::ExecutionRpc;
use crate::types::{CallOpts, RpcResponse};

/// Serves a recorded `eth_call` response from `<path>/call.json`.
#[derive(Clone)]
pub struct MockRpc {
    path: PathBuf,
}

#[async_trait]
impl ExecutionRpc for MockRpc {
    fn new(rpc: &str) -> Result<Self> {
        let path = PathBuf::from(rpc);
        Ok(MockRpc { path })
    }

    async fn call(&self, _opts: &CallOpts, _block: BlockTag) -> Result<RpcResponse> {
        let response = read_to_string(self.path.join("call.json"))?;
        Ok(serde_json::from_str(&response)?)
    }
}
