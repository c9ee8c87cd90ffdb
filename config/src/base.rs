use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_OUTPUT: &str = "token1_render.html";

/// The base configuration for a network.
#[derive(Serialize, Debug, Clone)]
pub struct BaseConfig {
    pub execution_rpc: String,
    pub output: PathBuf,
}
