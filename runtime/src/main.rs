use anyhow::Result;
use clap::Parser;
use portal_attendance::attendance::RawAttendanceQuery;
use portal_attendance::cli::{fetch_cmd, serve_cmd, Cli, Command};
use portal_attendance::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json)?;

    let portal = cli.portal.to_config()?;
    match cli.command {
        Command::Serve { bind, audit_log } => {
            serve_cmd::run(portal, ServerConfig { bind, audit_log }).await
        }
        Command::Fetch {
            month,
            semester,
            year,
            cookie,
        } => {
            let query = RawAttendanceQuery {
                month: Some(month),
                semester: Some(semester),
                year: Some(year),
            };
            fetch_cmd::run(portal, query, &cookie).await
        }
    }
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("portal_attendance=info".parse()?);
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}
