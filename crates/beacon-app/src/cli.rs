use std::path::PathBuf;

use clap::Parser;

/// Beacon: rich presence and push-notification bridge for the Beacon browser.
///
/// Reads host messages as JSON lines on stdin and writes signals to stdout.
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not connect to the presence service.
    #[arg(long)]
    pub no_presence: bool,

    /// Do not start the push-notification bridge.
    #[arg(long)]
    pub no_notifications: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_overrides() {
        let args = Args::try_parse_from(["beacon"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.no_presence);
        assert!(!args.no_notifications);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "beacon",
            "--config",
            "/tmp/beacon.toml",
            "--log-level",
            "debug",
            "--no-presence",
            "--no-notifications",
        ])
        .unwrap();
        assert_eq!(args.config.unwrap(), PathBuf::from("/tmp/beacon.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_presence);
        assert!(args.no_notifications);
    }
}
