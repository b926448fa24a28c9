//! riptide-client - HTTP client for Riptide blockchain nodes
//!
//! The interesting part lives in [`proto`]: transaction envelopes carry a
//! `(type, version)` discriminator in-place, and the decoder probes it first
//! to pick one of the 14 concrete shapes before decoding the full buffer.
//! [`client`] is the transport around it.

pub mod cli;
pub mod client;
pub mod proto;
