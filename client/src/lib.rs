mod builder;
pub use crate::builder::*;

mod client;
pub use crate::client::*;

pub mod errors;
pub mod report;
