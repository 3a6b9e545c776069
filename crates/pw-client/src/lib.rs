//! pw-client
//!
//! HTTP implementations of the wizard's draft-project and import boundaries.

pub(crate) mod client;
pub(crate) mod import;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult};
pub use import::FileImport;
