//! Turning a formatted result into something a person or a phone can read.

pub mod qr;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{LdaError, Result};

/// Base URL used by `--web` when no `--url` is given.
pub const DEFAULT_WEB_URL: &str = "https://p435.herokuapp.com/predict?";

/// `[v0 v1 ... vN-1]`
pub fn plain_text(values: &[String]) -> String {
    format!("[{}]", values.join(" "))
}

/// `base` followed by `v0=..&v1=..`, values form-urlencoded, in index order.
pub fn encode_params(values: &[String], base: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (i, val) in values.iter().enumerate() {
        query.append_pair(&format!("v{i}"), val);
    }
    format!("{base}{}", query.finish())
}

/// Verbose line for a sample's result: `i  ==>  [..]`.
pub fn result_line(index: usize, values: &[String]) -> String {
    format!("{index}  ==>  {}", plain_text(values))
}

/// Verbose line for a sample's URL payload: `url  i  -->  ..`.
pub fn url_line(index: usize, url: &str) -> String {
    format!("url  {index}  -->  {url}")
}

// ---------------------------------------------------------------------------
// Presenter
// ---------------------------------------------------------------------------

/// Output side of a run: builds the payload for each sample and sends it to
/// the configured targets.
#[derive(Debug)]
pub struct Presenter {
    base_url: Option<String>,
    terminal_qr: bool,
    out_dir: Option<PathBuf>,
}

impl Presenter {
    /// Build a presenter. When images are enabled the output directory is
    /// created here, once, before any sample runs.
    pub fn new(config: &Config) -> Result<Self> {
        let out_dir = if config.write_images {
            create_out_dir(&config.out_path)?;
            Some(config.out_path.clone())
        } else {
            None
        };

        Ok(Presenter {
            base_url: config.base_url().map(str::to_string),
            terminal_qr: config.terminal_qr,
            out_dir,
        })
    }

    /// The string a sample is rendered as: a URL when a base URL is set,
    /// plain text otherwise.
    pub fn payload(&self, values: &[String]) -> String {
        match &self.base_url {
            Some(base) => encode_params(values, base),
            None => plain_text(values),
        }
    }

    /// Path of the image for sample `index`, if images are enabled.
    pub fn image_path(&self, index: usize) -> Option<PathBuf> {
        self.out_dir
            .as_ref()
            .map(|dir| dir.join(format!("{index}.png")))
    }

    /// Present one sample. Terminal QR codes go to `out`.
    pub fn present<W: Write>(&self, index: usize, values: &[String], out: &mut W) -> Result<()> {
        log::info!("{}", result_line(index, values));

        let content = self.payload(values);
        if self.base_url.is_some() {
            log::info!("{}", url_line(index, &content));
        }

        if self.terminal_qr {
            let rendered = qr::render_terminal(&content)?;
            writeln!(out)
                .and_then(|_| writeln!(out, "{rendered}"))
                .map_err(|source| LdaError::Io {
                    context: "writing QR code to terminal".to_string(),
                    source,
                })?;
        }

        if let Some(path) = self.image_path(index) {
            qr::write_png(&content, &path)?;
            log::debug!("Wrote {}", path.display());
        }

        Ok(())
    }
}

fn create_out_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| LdaError::Io {
        context: format!("creating output directory {}", path.display()),
        source,
    })
}
