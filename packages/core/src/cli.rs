use clap::Parser;

/// koreanit-server CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "koreanit-server",
    version,
    about = "Minimal HTTP backend with uniform JSON response envelopes"
)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database URL (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "koreanit-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--database-url",
            "sqlite://koreanit.db",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9090));
        assert_eq!(cli.database_url.as_deref(), Some("sqlite://koreanit.db"));
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::try_parse_from(["koreanit-server"]).unwrap();
        assert!(cli.host.is_none() && cli.port.is_none() && cli.database_url.is_none());
    }
}
