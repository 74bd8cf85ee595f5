//! Runtime configuration and command line options.

use clap::Parser;
use std::path::PathBuf;

/// Public Zscaler egress address endpoint.
pub const DEFAULT_URL: &str =
    "https://config.zscaler.com/api/getdata/zscaler.net/all/cenr?site=config.zscaler.com";

pub const DEFAULT_OUTPUT: &str = "zscaler_egress_ips.json";

/// Position of the egress table among the top level `data` sections.
pub const DEFAULT_SECTION_INDEX: usize = 6;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the expected table lives inside the vendor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLayout {
    /// Index into the top level `data` array.
    pub section_index: usize,
    /// Leading rows of the table that are headers, not regions.
    pub header_rows: usize,
}

impl Default for FeedLayout {
    fn default() -> Self {
        FeedLayout {
            section_index: DEFAULT_SECTION_INDEX,
            header_rows: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every record with its metadata.
    #[default]
    Full,
    /// Collapsed CIDR blocks of the ready records.
    Summarized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    /// Previously downloaded raw feed document.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub output: PathBuf,
    pub mode: OutputMode,
    pub layout: FeedLayout,
    pub timeout_secs: u64,
    /// Print the per region table to stdout.
    pub report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Url(DEFAULT_URL.to_string()),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::Full,
            layout: FeedLayout::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            report: false,
        }
    }
}

/// Fetch Zscaler egress IPs and save them to JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Override the feed URL, ignored when --input is given
    #[arg(long, env = "ZSCALER_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Read a saved feed document instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output JSON filename
    #[arg(long, env = "ZSCALER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output summarized CIDR blocks instead of full metadata
    #[arg(long)]
    pub summarize: bool,

    /// Index of the egress table section in the feed
    #[arg(long, default_value_t = DEFAULT_SECTION_INDEX)]
    pub section_index: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print record counts per region
    #[arg(long)]
    pub report: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match cli.input {
            Some(path) => Source::File(path),
            None => Source::Url(cli.url),
        };
        Config {
            source,
            output: cli.output,
            mode: if cli.summarize {
                OutputMode::Summarized
            } else {
                OutputMode::Full
            },
            layout: FeedLayout {
                section_index: cli.section_index,
                ..FeedLayout::default()
            },
            timeout_secs: cli.timeout,
            report: cli.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests below may set `ZSCALER_URL`, only when unset and only to
    /// [`DEFAULT_URL`], so the expected url does not depend on test order.
    fn expected_from_env(var: &str, default: &str) -> String {
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["zscaler-egress-ips"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(
            config.source,
            Source::Url(expected_from_env("ZSCALER_URL", DEFAULT_URL))
        );
        assert_eq!(
            config.output,
            PathBuf::from(expected_from_env("ZSCALER_OUTPUT", DEFAULT_OUTPUT))
        );
        assert_eq!(config.mode, OutputMode::Full);
        assert_eq!(config.layout, FeedLayout::default());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.report);
    }

    #[test]
    fn test_cli_input_with_url_from_env() {
        if std::env::var_os("ZSCALER_URL").is_none() {
            std::env::set_var("ZSCALER_URL", DEFAULT_URL);
        }
        let cli = Cli::try_parse_from(["zscaler-egress-ips", "--input", "feed.json"])
            .expect("--input must be accepted when ZSCALER_URL is set");
        assert_eq!(
            Config::from(cli).source,
            Source::File(PathBuf::from("feed.json"))
        );
    }

    #[test]
    fn test_cli_summarize_input() {
        let cli = Cli::try_parse_from([
            "zscaler-egress-ips",
            "--input",
            "feed.json",
            "--output",
            "out.json",
            "--summarize",
            "--section-index",
            "4",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.source, Source::File(PathBuf::from("feed.json")));
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.mode, OutputMode::Summarized);
        assert_eq!(config.layout.section_index, 4);
        assert_eq!(config.layout.header_rows, 1);
    }

    #[test]
    fn test_cli_input_wins_over_url() {
        let cli = Cli::try_parse_from([
            "zscaler-egress-ips",
            "--url",
            "https://example.com/feed",
            "--input",
            "feed.json",
        ])
        .unwrap();
        assert_eq!(
            Config::from(cli).source,
            Source::File(PathBuf::from("feed.json"))
        );
    }
}
