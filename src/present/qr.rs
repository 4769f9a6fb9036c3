use std::path::Path;

use image::{ImageFormat, Luma};
use qrcode::render::unicode::Dense1x2;
use qrcode::{EcLevel, QrCode};

use crate::error::{LdaError, Result};

/// Minimum side length of written images, in pixels.
pub const IMAGE_SIZE: u32 = 256;

/// Render `content` as a QR code with Unicode half blocks, colors inverted
/// so it scans on a dark terminal.
pub fn render_terminal(content: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(content, EcLevel::H)?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .build())
}

/// Write `content` as a PNG QR code to `path`.
///
/// The image goes to a sibling `.tmp` file first and is renamed into place,
/// so `path` never holds a half-written image.
pub fn write_png(content: &str, path: &Path) -> Result<()> {
    let code = QrCode::with_error_correction_level(content, EcLevel::M)?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(IMAGE_SIZE, IMAGE_SIZE)
        .build();

    let tmp = path.with_extension("png.tmp");
    if let Err(e) = image.save_with_format(&tmp, ImageFormat::Png) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        LdaError::Io {
            context: format!("moving {} into place", path.display()),
            source,
        }
    })
}
