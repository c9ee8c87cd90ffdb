use async_trait::async_trait;
use eyre::Result;
use reqwest::{Client, Url};
use tracing::debug;

use common::{errors::RpcError, types::BlockTag};

use super::ExecutionRpc;
use crate::types::{CallOpts, JsonRpcRequest, RpcResponse};

#[derive(Clone)]
pub struct HttpRpc {
    url: Url,
    client: Client,
}

#[async_trait]
impl ExecutionRpc for HttpRpc {
    fn new(rpc: &str) -> Result<Self> {
        let url = Url::parse(rpc)?;
        Ok(HttpRpc {
            url,
            client: Client::new(),
        })
    }

    async fn call(&self, opts: &CallOpts, block: BlockTag) -> Result<RpcResponse> {
        let request = JsonRpcRequest::new("eth_call", (opts, block));
        debug!(target: "tokenscope::rpc", url = %self.url, ?opts, %block, "eth_call");

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::new("eth_call", e))?
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::new("eth_call", e))?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Bytes};
    use mockito::Matcher;
    use serde_json::json;

    use super::*;
    use crate::types::CallOutcome;

    fn opts() -> CallOpts {
        CallOpts {
            to: address!("8a94e7c81a4982a80405b5aead52155208b40d18"),
            data: Bytes::from(vec![0xc8, 0x7b, 0x56, 0xdd]),
        }
    }

    #[tokio::test]
    async fn test_call_posts_eth_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({
                    "jsonrpc": "2.0",
                    "method": "eth_call",
                    "id": 1
                })),
                Matcher::Regex(r#""data":"0xc87b56dd""#.to_string()),
                Matcher::Regex(r#""latest"\]"#.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x1234"}"#)
            .expect(1)
            .create_async()
            .await;

        let rpc = HttpRpc::new(&server.url()).unwrap();
        let response = rpc.call(&opts(), BlockTag::Latest).await.unwrap();

        assert_eq!(
            response.into_outcome().unwrap(),
            CallOutcome::Success("0x1234".to_string())
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_surfaces_rpc_error_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#)
            .expect(1)
            .create_async()
            .await;

        let rpc = HttpRpc::new(&server.url()).unwrap();
        let response = rpc.call(&opts(), BlockTag::Latest).await.unwrap();

        match response.into_outcome().unwrap() {
            CallOutcome::Error(err) => assert_eq!(err["message"], "execution reverted"),
            CallOutcome::Success(_) => panic!("expected error outcome"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_call_non_json_body_fails() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(502)
            .with_body("bad gateway")
            .expect(1)
            .create_async()
            .await;

        let rpc = HttpRpc::new(&server.url()).unwrap();
        let err = rpc.call(&opts(), BlockTag::Latest).await.unwrap_err();

        assert!(err.to_string().contains("eth_call"));
        mock.assert_async().await;
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(HttpRpc::new("not a url").is_err());
    }
}
