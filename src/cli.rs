use clap::Parser;
use std::path::PathBuf;

use crate::lda::MAX_PRECISION;

#[derive(Parser, Debug)]
#[command(name = "lda-qr")]
#[command(version, about = "Project samples through LDA weights and render the result as text, URL or QR code")]
pub struct Cli {
    /// csv file with samples, each row represents one sample
    #[arg(long = "DataPath", visible_alias = "data-path", default_value = "data.csv")]
    pub data_path: PathBuf,

    /// Path for the scalings (weights of LDA)
    #[arg(long, default_value = "scalings.csv")]
    pub scaling_path: PathBuf,

    /// Path for the xbars (means of LDA)
    #[arg(long, default_value = "xbar.csv")]
    pub xbar_path: PathBuf,

    /// Number of frequencies used from each sample
    #[arg(long, default_value_t = 680)]
    pub freqs: usize,

    /// Print QR code in the terminal
    #[arg(long)]
    pub cli: bool,

    /// Don't save QR code images
    #[arg(long)]
    pub disable_image: bool,

    /// Verbose output on stdout
    #[arg(short, long)]
    pub verbose: bool,

    /// Encode results as a query string for the built-in web endpoint
    #[arg(long)]
    pub web: bool,

    /// Number of decimals to round to (-1 = default precision, at most 340)
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-1..=MAX_PRECISION as i64)
    )]
    pub round: i32,

    /// Directory for image output
    #[arg(long, default_value = "./output/")]
    pub out_path: PathBuf,

    /// Base URL for the API (overrides --web)
    #[arg(long, default_value = "")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["lda-qr"]).unwrap();
        assert_eq!(cli.data_path, PathBuf::from("data.csv"));
        assert_eq!(cli.scaling_path, PathBuf::from("scalings.csv"));
        assert_eq!(cli.xbar_path, PathBuf::from("xbar.csv"));
        assert_eq!(cli.freqs, 680);
        assert_eq!(cli.round, -1);
        assert_eq!(cli.out_path, PathBuf::from("./output/"));
        assert!(cli.url.is_empty());
        assert!(!cli.cli && !cli.disable_image && !cli.verbose && !cli.web);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "lda-qr",
            "--DataPath",
            "s.txt",
            "--scaling-path",
            "w.txt",
            "--xbar-path",
            "m.txt",
            "--freqs",
            "3",
            "--cli",
            "--disable-image",
            "-v",
            "--web",
            "--round",
            "2",
            "--out-path",
            "out",
            "--url",
            "http://localhost/?",
        ])
        .unwrap();
        assert_eq!(cli.data_path, PathBuf::from("s.txt"));
        assert_eq!(cli.freqs, 3);
        assert_eq!(cli.round, 2);
        assert!(cli.cli && cli.disable_image && cli.verbose && cli.web);
        assert_eq!(cli.url, "http://localhost/?");
    }

    #[test]
    fn data_path_alias() {
        let cli = Cli::try_parse_from(["lda-qr", "--data-path", "x.csv"]).unwrap();
        assert_eq!(cli.data_path, PathBuf::from("x.csv"));
    }

    #[test]
    fn round_accepts_minus_one_only() {
        let cli = Cli::try_parse_from(["lda-qr", "--round", "-1"]).unwrap();
        assert_eq!(cli.round, -1);
        assert!(Cli::try_parse_from(["lda-qr", "--round", "-2"]).is_err());
    }

    #[test]
    fn round_has_an_upper_bound() {
        let cli = Cli::try_parse_from(["lda-qr", "--round", "340"]).unwrap();
        assert_eq!(cli.round, MAX_PRECISION);
        assert!(Cli::try_parse_from(["lda-qr", "--round", "341"]).is_err());
        assert!(Cli::try_parse_from(["lda-qr", "--round", "70000"]).is_err());
    }
}
