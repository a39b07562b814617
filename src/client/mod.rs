//! Cloud API client
//!
//! Builds an authenticated HTTPS connection from resolved credentials,
//! bootstraps the default site via `sites.json`, and exposes a generic
//! `get(path)` returning parsed JSON. Connection configuration is read-only
//! after construction; use one client per thread for concurrent work.

mod accessors;
mod constructor;
mod options;
mod request;
mod types;

pub use options::ClientOptions;
pub use types::Client;
