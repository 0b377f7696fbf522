use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use rapid_qoi::{Colors, Qoi};
use raydraft::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ppm,
    Png,
    Qoi,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ppm") => Ok(Self::Ppm),
            Some("png") => Ok(Self::Png),
            Some("qoi") => Ok(Self::Qoi),
            _ => bail!(
                "cannot tell the image format of {}, expected a .ppm, .png or .qoi extension",
                path.display()
            ),
        }
    }

    pub fn encode(self, image: &Image) -> Result<Vec<u8>> {
        let mut encoded = Vec::new();
        match self {
            Self::Ppm => write_ppm(&mut encoded, image)?,
            Self::Png => write_png(&mut encoded, image)?,
            Self::Qoi => {
                let qoi = Qoi {
                    width: image.width(),
                    height: image.height(),
                    colors: Colors::Srgb,
                };
                encoded = qoi.encode_alloc(&image.to_rgb8_bytes())?;
            }
        }
        Ok(encoded)
    }
}

/// Plain text PPM: a `P3` header, then one `r g b` line per pixel.
pub fn write_ppm(mut out: impl Write, image: &Image) -> io::Result<()> {
    writeln!(out, "P3\n{} {}\n255", image.width(), image.height())?;
    for [r, g, b] in image.to_rgb8() {
        writeln!(out, "{r} {g} {b}")?;
    }
    Ok(())
}

fn write_png(out: impl Write, image: &Image) -> Result<()> {
    let mut encoder = png::Encoder::new(out, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.to_rgb8_bytes())?;
    writer.finish()?;
    Ok(())
}

pub fn save(image: &Image, path: &Path) -> Result<()> {
    let format = Format::from_path(path)?;
    let encoded = format
        .encode(image)
        .with_context(|| format!("failed to encode {format:?} image"))?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, encoded).with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("wrote {format:?} image to {}", path.display());
    Ok(())
}
