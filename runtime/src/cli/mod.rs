//! Command-line interface for the `portal-attendance` binary.

pub mod fetch_cmd;
pub mod serve_cmd;

use crate::config::{PortalConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "portal-attendance", version, about = "Monthly attendance API over the academic portal")]
pub struct Cli {
    #[command(flatten)]
    pub portal: PortalArgs,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Upstream portal settings shared by every subcommand.
#[derive(Debug, Args)]
pub struct PortalArgs {
    /// Portal root URL
    #[arg(long, env = "PORTAL_BASE_URL")]
    pub base_url: String,

    /// User-Agent sent to the portal
    #[arg(long, env = "PORTAL_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Timeout for the outbound request, in seconds
    #[arg(long, env = "PORTAL_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

impl PortalArgs {
    pub fn to_config(&self) -> anyhow::Result<PortalConfig> {
        PortalConfig::new(
            &self.base_url,
            &self.user_agent,
            Duration::from_secs(self.timeout_secs),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the attendance API
    Serve {
        /// Address to listen on
        #[arg(long, env = "PORTAL_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,

        /// Append a JSON line per request to this file
        #[arg(long, env = "PORTAL_AUDIT_LOG")]
        audit_log: Option<PathBuf>,
    },
    /// Fetch one month of attendance and print the JSON response
    Fetch {
        #[arg(long)]
        month: String,
        #[arg(long)]
        semester: String,
        #[arg(long)]
        year: String,
        /// Portal session cookie value
        #[arg(long, env = "PORTAL_COOKIE", hide_env_values = true)]
        cookie: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "portal-attendance",
            "--base-url",
            "https://portal.example.edu",
            "serve",
            "--bind",
            "0.0.0.0:9000",
        ])
        .unwrap();

        assert_eq!(cli.portal.timeout_secs, DEFAULT_TIMEOUT_SECS);
        match cli.command {
            Command::Serve { bind, audit_log } => {
                assert_eq!(bind.port(), 9000);
                assert!(audit_log.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_fetch_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "portal-attendance",
            "--base-url",
            "https://portal.example.edu",
            "fetch",
            "--month",
            "10",
            "--semester",
            "5",
            "--year",
            "2024",
            "--cookie",
            "abc",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.portal.timeout_secs, 5);
        let cfg = cli.portal.to_config().unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert!(matches!(cli.command, Command::Fetch { ref month, .. } if month == "10"));
    }
}
