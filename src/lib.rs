#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! # tokenscope
//!
//! Inspects the on-chain renderer of a token whose `tokenURI` is a base64
//! JSON data URI carrying a base64 HTML `animation_url`.
//!
//! The pipeline is a single `eth_call`, an ABI string unwrap, two data URI
//! decodes and a substring classification of the resulting HTML.
//!
//! ## Breakdown of exported modules
//!
//! ### `client`
//!
//! `ClientBuilder` and `Client`, which run the pipeline and write the report.
//!
//! ### `config`
//!
//! Network defaults and the layered `Config`.
//!
//! ### `execution`
//!
//! The `eth_call` transports and ABI helpers.
//!
//! ### `metadata`
//!
//! Data URI decoding, token metadata types and the renderer classifier.

pub mod client {
    pub use client::report::Report;
    pub use client::{Client, ClientBuilder, Inspection, Outcome, Render};
}

pub mod config {
    pub use config::{networks, CliConfig, Config, Network};
}

pub mod execution {
    pub use execution::abi;
    pub use execution::rpc::{http_rpc::HttpRpc, mock_rpc::MockRpc, ExecutionRpc};
    pub use execution::types::{CallOpts, CallOutcome, RpcResponse};
    pub use execution::ExecutionClient;
}

pub mod metadata {
    pub use metadata::data_uri;
    pub use metadata::renderer::Renderer;
    pub use metadata::types::{Attribute, AttributeValue, TokenMetadata};
}

pub mod types {
    pub use common::types::BlockTag;
}

pub mod errors {
    pub use client::errors::*;
    pub use common::errors::*;
    pub use execution::errors::*;
    pub use metadata::errors::*;
}

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::metadata::*;
    pub use crate::types::*;
}
