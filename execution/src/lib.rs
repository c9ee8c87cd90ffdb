pub mod abi;
pub mod errors;
pub mod rpc;
pub mod types;

mod execution;
pub use crate::execution::*;
