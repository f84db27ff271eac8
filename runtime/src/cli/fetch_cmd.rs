//! `portal-attendance fetch`: run the pipeline once and print the response.

use crate::acquisition::http_client::PortalClient;
use crate::acquisition::http_session::PortalSession;
use crate::attendance::report::assemble;
use crate::attendance::{fetch_report, RawAttendanceQuery};
use crate::config::PortalConfig;
use anyhow::{bail, Context, Result};

/// Fetch and print. Exits with an error if the pipeline failed, after still
/// printing the error envelope.
pub async fn run(portal: PortalConfig, query: RawAttendanceQuery, cookie: &str) -> Result<()> {
    let Some(session) = PortalSession::from_forwarded(cookie) else {
        bail!("--cookie must not be empty");
    };
    let client = PortalClient::new(&portal)?;

    let outcome = fetch_report(&client, &session, &query).await;
    let body = serde_json::to_string_pretty(&assemble(&outcome)).context("serializing response")?;
    println!("{body}");

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => bail!("{} ({})", e.user_message(), e.status()),
    }
}
