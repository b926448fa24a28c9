//! HTTP client for the node's REST API
//!
//! Thin transport layer over [`crate::proto`]: it fetches bytes, buffers
//! them, and hands them to the tagged decoder. Retry, if wanted, belongs
//! here or above, applied to the whole fetch-and-decode operation; a decode
//! failure on its own is almost never transient.

mod errors;
mod options;
mod transactions;

pub use errors::{ClientError, ClientResult};
pub use options::Options;
pub use transactions::Transactions;
