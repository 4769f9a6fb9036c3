use std::path::PathBuf;

use crate::cli::Cli;
use crate::lda::DEFAULT_PRECISION;
use crate::present::DEFAULT_WEB_URL;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub scaling_path: PathBuf,
    pub xbar_path: PathBuf,

    /// Leading components of each sample that are projected.
    pub freqs: usize,

    /// Fractional digits of the output; `-1` for the default.
    pub precision: i32,

    pub terminal_qr: bool,
    pub write_images: bool,
    pub verbose: bool,

    /// Use the built-in web endpoint when no custom URL is given.
    pub web: bool,
    /// Custom base URL; empty means none.
    pub url: String,

    pub out_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            scaling_path: PathBuf::from("scalings.csv"),
            xbar_path: PathBuf::from("xbar.csv"),
            freqs: 680,
            precision: DEFAULT_PRECISION,
            terminal_qr: false,
            write_images: true,
            verbose: false,
            web: false,
            url: String::new(),
            out_path: PathBuf::from("./output/"),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_path: cli.data_path,
            scaling_path: cli.scaling_path,
            xbar_path: cli.xbar_path,
            freqs: cli.freqs,
            precision: cli.round,
            terminal_qr: cli.cli,
            write_images: !cli.disable_image,
            verbose: cli.verbose,
            web: cli.web,
            url: cli.url,
            out_path: cli.out_path,
        }
    }
}

impl Config {
    /// Base URL for query strings: `url` when set, else the built-in
    /// endpoint with `web`, else none (plain text payloads).
    pub fn base_url(&self) -> Option<&str> {
        if !self.url.is_empty() {
            Some(self.url.as_str())
        } else if self.web {
            Some(DEFAULT_WEB_URL)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["lda-qr"]).unwrap();
        assert_eq!(Config::from(cli), Config::default());
    }

    #[test]
    fn custom_url_wins_over_web() {
        let config = Config {
            web: true,
            url: "http://localhost:8000/predict?".to_string(),
            ..Config::default()
        };
        assert_eq!(config.base_url(), Some("http://localhost:8000/predict?"));
    }

    #[test]
    fn web_uses_builtin_endpoint() {
        let config = Config {
            web: true,
            ..Config::default()
        };
        assert_eq!(config.base_url(), Some(DEFAULT_WEB_URL));
        assert_eq!(Config::default().base_url(), None);
    }

    #[test]
    fn disable_image_turns_images_off() {
        let cli = Cli::try_parse_from(["lda-qr", "--disable-image"]).unwrap();
        assert!(!Config::from(cli).write_images);
    }
}
