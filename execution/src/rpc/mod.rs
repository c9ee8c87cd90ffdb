use async_trait::async_trait;
use eyre::Result;

use common::types::BlockTag;

use crate::types::{CallOpts, RpcResponse};

pub mod http_rpc;
pub mod mock_rpc;

#[async_trait]
pub trait ExecutionRpc: Send + Clone + Sync + 'static {
    fn new(rpc: &str) -> Result<Self>
    where
        Self: Sized;

    async fn call(&self, opts: &CallOpts, block: BlockTag) -> Result<RpcResponse>;
}
