use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Write synthetic samples and LDA weights to try `lda-qr` with.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Values per spectrum (before the label column)
    #[arg(long, default_value_t = 680)]
    freqs: usize,

    /// Number of spectra
    #[arg(long, default_value_t = 6)]
    samples: usize,

    /// Number of discriminant components
    #[arg(long, default_value_t = 7)]
    components: usize,

    /// Directory the three files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

fn generate_spectrum(
    channels: usize,
    peaks: &[(f64, f64, f64)],
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    (0..channels)
        .map(|c| {
            let x = c as f64;
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(x, mu, sigma, amp))
                .sum();
            // intensities stay positive so normalisation is well defined
            (signal + rng.gauss(0.0, noise_level)).abs() + 1e-6
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_rows(path: &Path, rows: &[Vec<f64>], sep: &str) -> Result<()> {
    let mut text = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:.6E}")).collect();
        writeln!(text, "{}", line.join(sep))?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);
    let n = args.freqs as f64;

    // Three classes with peaks at different channel positions.
    let class_peaks: [Vec<(f64, f64, f64)>; 3] = [
        vec![(0.2 * n, 0.04 * n, 0.8), (0.55 * n, 0.02 * n, 0.5)],
        vec![(0.3 * n, 0.03 * n, 0.6), (0.7 * n, 0.05 * n, 0.7)],
        vec![(0.1 * n, 0.05 * n, 0.9), (0.85 * n, 0.02 * n, 0.4)],
    ];

    let mut samples = Vec::with_capacity(args.samples);
    let mut spectra = Vec::with_capacity(args.samples);
    for i in 0..args.samples {
        let label = i % class_peaks.len();
        let spectrum = generate_spectrum(args.freqs, &class_peaks[label], 0.01, &mut rng);
        let mut row = spectrum.clone();
        row.push(label as f64);
        samples.push(row);
        spectra.push(spectrum);
    }

    // Means of the normalised spectra, one per row.
    let mut xbar = vec![0.0; args.freqs];
    for spectrum in &spectra {
        let sum: f64 = spectrum.iter().sum();
        for (m, v) in xbar.iter_mut().zip(spectrum) {
            *m += v / sum / spectra.len().max(1) as f64;
        }
    }
    let xbar_rows: Vec<Vec<f64>> = xbar.into_iter().map(|m| vec![m]).collect();

    let scalings: Vec<Vec<f64>> = (0..args.components)
        .map(|_| (0..args.freqs).map(|_| rng.gauss(0.0, 50.0)).collect())
        .collect();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    write_rows(&args.out_dir.join("data.csv"), &samples, ",")?;
    write_rows(&args.out_dir.join("scalings.csv"), &scalings, " ")?;
    write_rows(&args.out_dir.join("xbar.csv"), &xbar_rows, " ")?;

    println!(
        "Wrote {} samples ({} frequencies each), {} components to {}",
        args.samples,
        args.freqs,
        args.components,
        args.out_dir.display()
    );
    Ok(())
}
