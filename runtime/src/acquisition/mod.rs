//! Talking to the upstream portal: session credentials and the HTTP client.

pub mod http_client;
pub mod http_session;
