//! Hand-off of rendered frames to the panel.

use std::fs;
use std::path::{Path, PathBuf};

use chores_common::Canvas;
use chores_common::colors::composite;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::{Point, Size};
use image::{Rgb, RgbImage};

use crate::error::DisplayError;

pub const PRIMARY_FILE: &str = "primary.bin";
pub const ACCENT_FILE: &str = "accent.bin";
pub const PREVIEW_FILE: &str = "preview.png";

/// Something that shows a rendered, already rotated canvas.
pub trait DisplaySink {
    fn show(
        &mut self,
        canvas: &Canvas,
    ) -> Result<(), DisplayError>;
}

/// Writes both planes in panel byte order plus a PNG preview into a
/// directory watched by the panel driver.
#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
    panel: Size,
}

impl FileSink {
    pub fn new(
        dir: impl Into<PathBuf>,
        panel: Size,
    ) -> Self {
        Self { dir: dir.into(), panel }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn write(
        &self,
        name: &str,
        bytes: &[u8],
    ) -> Result<(), DisplayError> {
        let path = self.dir.join(name);
        fs::write(&path, bytes).map_err(|source| DisplayError::Io { path, source })
    }
}

/// Composite both planes into an RGB preview: white paper, black and red ink.
pub fn preview_image(canvas: &Canvas) -> RgbImage {
    let size = canvas.size();
    RgbImage::from_fn(size.width, size.height, |x, y| {
        let point = Point::new(x as i32, y as i32);
        let color = Rgb888::from(composite(canvas.primary.pixel(point), canvas.accent.pixel(point)));
        Rgb([color.r(), color.g(), color.b()])
    })
}

impl DisplaySink for FileSink {
    fn show(
        &mut self,
        canvas: &Canvas,
    ) -> Result<(), DisplayError> {
        let size = canvas.size();
        if size != self.panel {
            return Err(DisplayError::Geometry {
                expected_w: self.panel.width,
                expected_h: self.panel.height,
                actual_w: size.width,
                actual_h: size.height,
            });
        }

        fs::create_dir_all(&self.dir).map_err(|source| DisplayError::Io {
            path: self.dir.clone(),
            source,
        })?;
        self.write(PRIMARY_FILE, &canvas.primary.to_panel_bytes())?;
        self.write(ACCENT_FILE, &canvas.accent.to_panel_bytes())?;
        preview_image(canvas).save(self.dir.join(PREVIEW_FILE))?;

        tracing::info!(dir = %self.dir.display(), "frame written");
        Ok(())
    }
}
