use crate::gui::board::{CairoSurface, SegmentRenderer};
use cairo::{Context, Format, ImageSurface};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid image size {0}")]
    InvalidSize(u32),
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),
}

/// Renders the board into a square ARGB image and writes it to `path` as PNG.
pub fn render_png(path: &Path, size: u32) -> Result<(), ExportError> {
    let side = i32::try_from(size)
        .ok()
        .filter(|&s| s > 0)
        .ok_or(ExportError::InvalidSize(size))?;

    let image = ImageSurface::create(Format::ARgb32, side, side)?;
    {
        let cr = Context::new(&image)?;
        SegmentRenderer::default().render(
            side as f64,
            side as f64,
            &mut CairoSurface::new(&cr),
        )?;
    }

    let mut file = fs_err::File::create(path)?;
    image.write_to_png(&mut file)?;
    log::debug!("Wrote {}x{} PNG to {}", side, side, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unusable_sizes() {
        let path = std::env::temp_dir().join("dartboard-never-written.png");
        for size in [0, u32::MAX] {
            assert!(matches!(
                render_png(&path, size),
                Err(ExportError::InvalidSize(s)) if s == size
            ));
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_writes_png_file() {
        let path = std::env::temp_dir().join(format!("dartboard-export-{}.png", std::process::id()));

        render_png(&path, 64).unwrap();
        let bytes = fs_err::read(&path).unwrap();
        fs_err::remove_file(&path).unwrap();

        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
