/// Drawing surface — wraps the framebuffer pixmap and the two recognized
/// acquisition failures. Construction failures abort initialization before
/// any repaint is scheduled.
use std::path::Path;

use anyhow::Result;
use thiserror::Error;
use tiny_skia::Pixmap;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("drawing surface not found ({width}x{height} has no drawable area)")]
    NotFound { width: u32, height: u32 },
    #[error("failed to obtain {width}x{height} drawing context")]
    Context { width: u32, height: u32 },
}

pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::NotFound { width, height });
        }
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::Context { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn context_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Raw RGBA pixel data
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| anyhow::anyhow!("Failed to save PNG: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_surface_is_not_found() {
        assert!(matches!(
            Surface::new(0, 64),
            Err(SurfaceError::NotFound { .. })
        ));
        assert!(matches!(
            Surface::new(64, 0),
            Err(SurfaceError::NotFound { .. })
        ));
    }

    #[test]
    fn test_valid_surface_reports_dimensions() {
        let surface = Surface::new(128, 64).unwrap();
        assert_eq!(surface.width(), 128);
        assert_eq!(surface.height(), 64);
        assert_eq!(surface.data().len(), 128 * 64 * 4);
    }
}
