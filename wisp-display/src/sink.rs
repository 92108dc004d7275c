//! Frame sinks — where rendered rectangles end up.
//!
//! The engine emits ordered [`PixelRect`]s and stays agnostic to the
//! target: memory, file, or hardware. A real panel driver implements
//! [`FrameSink`] over its own transport; [`FrameBuffer`] is the
//! reference implementation used by tests and the preview binary, and
//! doubles as the no-hardware fallback (render to an image file instead
//! of a panel).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wisp_core::error::Result;
use wisp_core::types::{PixelRect, Rgb};

use crate::refresh::RefreshKind;

/// A rectangular pixel target that can absorb one frame at a time.
///
/// Calls arrive in draw order: `clear`, then `fill` per rectangle
/// (later fills override earlier ones), then one `present`.
pub trait FrameSink {
    /// Target dimensions in pixels, `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Fill the whole target with one color.
    fn clear(&mut self, color: Rgb);

    /// Fill one rectangle. Out-of-bounds portions are clipped.
    fn fill(&mut self, rect: &PixelRect);

    /// Push the accumulated frame to the output.
    ///
    /// # Errors
    /// Propagates whatever the underlying transport reports.
    fn present(&mut self, kind: RefreshKind) -> Result<()>;
}

/// In-memory RGB framebuffer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    presents: u64,
    full_refreshes: u64,
}

impl FrameBuffer {
    /// Create a buffer of the given size, initially white.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::gray(255); (width * height) as usize],
            presents: 0,
            full_refreshes: 0,
        }
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// How many frames have been presented.
    #[must_use]
    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// How many of those were full refreshes.
    #[must_use]
    pub fn full_refreshes(&self) -> u64 {
        self.full_refreshes
    }

    /// Write the buffer as a binary PPM (P6) image.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be written.
    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for px in &self.pixels {
            out.write_all(&[px.r, px.g, px.b])?;
        }
        out.flush()?;
        Ok(())
    }
}

impl FrameSink for FrameBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn fill(&mut self, rect: &PixelRect) {
        let size = rect.size as i32;
        for dy in 0..size {
            let y = rect.y + dy;
            if y < 0 || y >= self.height as i32 {
                continue;
            }
            for dx in 0..size {
                let x = rect.x + dx;
                if x < 0 || x >= self.width as i32 {
                    continue;
                }
                self.pixels[(y as u32 * self.width + x as u32) as usize] = rect.color;
            }
        }
    }

    fn present(&mut self, kind: RefreshKind) -> Result<()> {
        self.presents += 1;
        if kind == RefreshKind::Full {
            self.full_refreshes += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_writes_and_clips() {
        let mut fb = FrameBuffer::new(8, 8);
        let red = Rgb::new(255, 0, 0);
        fb.fill(&PixelRect {
            x: 6,
            y: 6,
            size: 4,
            color: red,
        });
        assert_eq!(fb.pixel(6, 6), Some(red));
        assert_eq!(fb.pixel(7, 7), Some(red));
        assert_eq!(fb.pixel(5, 5), Some(Rgb::gray(255)));
        // The overhang is clipped, not wrapped.
        assert_eq!(fb.pixel(0, 0), Some(Rgb::gray(255)));
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill(&PixelRect {
            x: 0,
            y: 0,
            size: 4,
            color: Rgb::new(1, 2, 3),
        });
        fb.clear(Rgb::gray(0));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(fb.pixel(x, y), Some(Rgb::gray(0)));
            }
        }
    }

    #[test]
    fn present_counts_refresh_kinds() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.present(RefreshKind::Full).expect("present");
        fb.present(RefreshKind::Partial).expect("present");
        fb.present(RefreshKind::Partial).expect("present");
        assert_eq!(fb.presents(), 3);
        assert_eq!(fb.full_refreshes(), 1);
    }

    #[test]
    fn ppm_has_correct_header_and_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("frame.ppm");
        let fb = FrameBuffer::new(3, 2);
        fb.write_ppm(&path).expect("write ppm");

        let bytes = std::fs::read(&path).expect("read back");
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
