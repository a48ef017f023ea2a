//! Writing rendered images to disk
//!
//! `.ppm` files are written as plain-text P3 pixmaps, one pixel per line.
//! Other extensions are handed to the [image] crate's encoders.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;

use crate::error::{Error, Result};

/// Output encodings chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text P3 pixmap
    Ppm,
    /// Any format the [image] crate was compiled to encode
    Image(image::ImageFormat),
}

impl OutputFormat {
    /// Picks the format for `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));
        if is_ppm {
            return Ok(OutputFormat::Ppm);
        }

        let unsupported = || Error::UnsupportedFormat(path.to_path_buf());
        let format = image::ImageFormat::from_path(path).map_err(|_| unsupported())?;
        // image::ImageOutputFormat only knows the encoders enabled by feature flags
        match image::ImageOutputFormat::from(format) {
            image::ImageOutputFormat::Unsupported(_) => Err(unsupported()),
            _ => Ok(OutputFormat::Image(format)),
        }
    }
}

/// Writes `img` as a P3 pixmap: header `P3`, dimensions, max value 255,
/// then one `r g b` line per pixel in row-major order, top row first.
pub fn write_ppm(img: &image::RgbImage, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "P3\n{} {}\n255", img.width(), img.height())?;
    for image::Rgb([r, g, b]) in img.pixels() {
        writeln!(out, "{r} {g} {b}")?;
    }
    out.flush()
}

/// Saves `img` to `path` in the format implied by its extension.
pub fn save_image(img: &image::RgbImage, path: &Path) -> Result<()> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Ppm => write_ppm(img, BufWriter::new(File::create(path)?))?,
        OutputFormat::Image(format) => img.save_with_format(path, format)?,
    }
    info!("Image written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn ppm_layout() {
        let mut img = image::RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([1, 2, 3]));

        let mut buf = Vec::new();
        write_ppm(&img, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n1 2 3\n"
        );
    }

    #[test]
    fn formats_by_extension() {
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("out/final.ppm")).unwrap(),
            OutputFormat::Ppm
        );
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("render.png")).unwrap(),
            OutputFormat::Image(image::ImageFormat::Png)
        );
        assert!(matches!(
            OutputFormat::from_path(&PathBuf::from("notes.txt")),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(&PathBuf::from("no_extension")).is_err());
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let img = image::RgbImage::new(1, 1);
        let path = PathBuf::from("/nonexistent-dir/for/sure/out.ppm");
        assert!(matches!(save_image(&img, &path), Err(Error::Io(_))));
    }
}
