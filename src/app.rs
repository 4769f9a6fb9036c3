use std::io::Write;

use crate::config::Config;
use crate::data::loader::load_matrix;
use crate::data::model::Matrix;
use crate::error::Result;
use crate::lda::{Pipeline, Summary};
use crate::present::Presenter;

// ---------------------------------------------------------------------------
// Loaded inputs
// ---------------------------------------------------------------------------

/// The three input matrices, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub samples: Matrix,
    pub scalings: Matrix,
    pub means: Matrix,
}

impl Inputs {
    /// Load scalings, means and samples. Any failure stops before output.
    pub fn load(config: &Config) -> Result<Self> {
        let scalings = load_matrix(&config.scaling_path)?;
        let means = load_matrix(&config.xbar_path)?;
        let samples = load_matrix(&config.data_path)?;
        Ok(Inputs {
            samples,
            scalings,
            means,
        })
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Load the inputs and present every sample. Terminal QR codes go to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let inputs = Inputs::load(config)?;
    run_with(config, &inputs, out)
}

/// The verbose configuration block.
pub fn configuration_lines(summary: &Summary, freqs: usize) -> Vec<String> {
    vec![
        "@#=====! configuration !=====#@".to_string(),
        format!(
            "[data] samples: {} frequencies: {}",
            summary.samples, summary.sample_width
        ),
        format!(
            "[scaling] components: {} frequencies: {freqs}",
            summary.components
        ),
        format!("[xbar] components: {}", summary.means),
        "@#===========================#@".to_string(),
    ]
}

/// Present every sample of already loaded inputs.
pub fn run_with<W: Write>(config: &Config, inputs: &Inputs, out: &mut W) -> Result<()> {
    let pipeline = Pipeline::new(
        &inputs.samples,
        &inputs.scalings,
        &inputs.means,
        config.freqs,
        config.precision,
    )?;

    let summary = pipeline.summary();
    for line in configuration_lines(&summary, config.freqs) {
        log::info!("{line}");
    }

    if summary.samples == 0 {
        log::warn!("No samples in {}", config.data_path.display());
        return Ok(());
    }

    let presenter = Presenter::new(config)?;

    log::info!("@#=====! results !=====#@");
    pipeline.run(|i, values| presenter.present(i, &values, &mut *out))
}
