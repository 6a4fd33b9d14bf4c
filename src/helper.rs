use crate::error::Result;
use crate::qrcode::ModuleGrid;

use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{ImageBuffer, Luma};
use std::fs;
use std::path::Path;

/*---- Utilities ----*/

/// Quiet zone and pixel scale used by the image renderers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderOptions {
    /// Light modules around the symbol on every side.
    pub border: u32,
    /// Pixels per module for raster output.
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { border: 4, scale: 8 }
    }
}

// Module lookup in quiet-zone coordinates; anything outside the symbol is light.
fn dark_with_border(qr: &impl ModuleGrid, border: usize, y: usize, x: usize) -> Result<bool> {
    let size = qr.module_count();
    if y < border || x < border || y >= size + border || x >= size + border {
        return Ok(false);
    }
    qr.is_dark(y - border, x - border)
}

/// Renders the grid as console art, two characters per module so it stays square.
///
/// # Errors
///
/// Returns [`crate::error::QrError::NotBuilt`] if the grid has not been built.
pub fn to_ascii(qr: &impl ModuleGrid, border: u32) -> Result<String> {
    let border = border as usize;
    let side = qr.module_count() + 2 * border;
    let mut result = String::new();
    for y in 0..side {
        for x in 0..side {
            let c = if dark_with_border(qr, border, y, x)? { '█' } else { ' ' };
            result.push(c);
            result.push(c);
        }
        result.push('\n');
    }
    Ok(result)
}

/// Prints the grid to stdout with the default border.
///
/// # Errors
///
/// Same as [`to_ascii`].
pub fn print_qr(qr: &impl ModuleGrid) -> Result<()> {
    println!("{}", to_ascii(qr, RenderOptions::default().border)?);
    Ok(())
}

// Returns a string of SVG code for an image depicting
// the given grid, with the given number of border modules.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(qr: &impl ModuleGrid, border: u32) -> Result<String> {
    let size = qr.module_count();
    let offset = border as usize;
    let dimension = size + 2 * offset;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension,
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..size {
        for x in 0..size {
            if qr.is_dark(y, x)? {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + offset, y + offset);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    Ok(result)
}

/// Rasterises the grid into a grayscale image.
///
/// # Arguments
///
/// * `qr` - The finished grid.
/// * `options` - Quiet zone width and pixels per module.
///
/// # Returns
///
/// A square `ImageBuffer` of `(module_count + 2 * border) * scale` pixels per side,
/// black on white.
///
/// # Errors
///
/// Returns [`crate::error::QrError::Image`] with a dimension limit error if the
/// side length does not fit in a `u32`.
///
/// # Example
///
/// ```rust
/// use qrmint::helper::{to_image_buffer, RenderOptions};
/// use qrmint::qrcode::{ErrorCorrectionLevel, QrModel};
///
/// let qr = QrModel::encode_text("Hello, World!", ErrorCorrectionLevel::L).unwrap();
/// let img = to_image_buffer(&qr, &RenderOptions { border: 4, scale: 1 }).unwrap();
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn to_image_buffer(
    qr: &impl ModuleGrid,
    options: &RenderOptions,
) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let border = options.border as usize;
    let scale = options.scale.max(1);
    let side = u32::try_from(qr.module_count())
        .ok()
        .and_then(|size| options.border.checked_mul(2)?.checked_add(size))
        .and_then(|modules| modules.checked_mul(scale))
        .ok_or_else(|| {
            ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError))
        })?;
    let mut img = ImageBuffer::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mx = (x / scale) as usize;
        let my = (y / scale) as usize;
        *pixel = if dark_with_border(qr, border, my, mx)? {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }

    Ok(img)
}

/// Renders the grid and writes it as a PNG file.
///
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns [`crate::error::QrError::Io`] if the directory cannot be created and
/// [`crate::error::QrError::Image`] if encoding or writing the PNG fails.
///
/// # Example
///
/// ```rust,no_run
/// use qrmint::helper::{save_png, RenderOptions};
/// use qrmint::qrcode::{ErrorCorrectionLevel, QrModel};
///
/// let qr = QrModel::encode_text("Hello, World!", ErrorCorrectionLevel::M).unwrap();
/// save_png(&qr, "images/qr_code.png", &RenderOptions::default()).unwrap();
/// ```
pub fn save_png(qr: &impl ModuleGrid, path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let img = to_image_buffer(qr, options)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
