//! Decoding of on-chain token metadata served as `data:` URIs, and
//! classification of the embedded HTML renderer.

pub mod data_uri;
pub mod errors;
pub mod renderer;
pub mod types;
