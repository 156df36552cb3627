use std::path::Path;

use anyhow::Context;
use denoise::{Grid, NoiseRemover, Sample};
use image::{ColorType, DynamicImage, ImageBuffer, Luma, Primitive};

/// A decoded single-channel image at its native depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrayImage {
    Luma8(Grid<u8>),
    Luma16(Grid<u16>),
}

impl GrayImage {
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Self::Luma8(grid) => grid.dimensions(),
            Self::Luma16(grid) => grid.dimensions(),
        }
    }

    pub fn bit_depth(&self) -> u8 {
        match self {
            Self::Luma8(_) => 8,
            Self::Luma16(_) => 16,
        }
    }

    pub fn denoise(&self, remover: &NoiseRemover) -> Self {
        match self {
            Self::Luma8(grid) => Self::Luma8(remover.remove_noise(grid)),
            Self::Luma16(grid) => Self::Luma16(remover.remove_noise(grid)),
        }
    }
}

pub fn load_gray(path: &Path) -> anyhow::Result<GrayImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image '{}'", path.display()))?;
    to_gray(img).with_context(|| format!("Unusable image '{}'", path.display()))
}

/// Keep 8/16-bit luma as is; collapse anything else to luma of matching depth.
fn to_gray(img: DynamicImage) -> anyhow::Result<GrayImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let color = img.color();

    let gray = match color {
        ColorType::L8 => {
            GrayImage::Luma8(Grid::new(width, height, img.into_luma8().into_raw())?)
        }
        ColorType::L16 => {
            GrayImage::Luma16(Grid::new(width, height, img.into_luma16().into_raw())?)
        }
        other => {
            tracing::warn!(
                "Color type {:?} is not grayscale; filtering its luma only",
                other
            );
            let bytes_per_channel = other.bytes_per_pixel() / other.channel_count();
            if bytes_per_channel > 1 {
                GrayImage::Luma16(Grid::new(width, height, img.into_luma16().into_raw())?)
            } else {
                GrayImage::Luma8(Grid::new(width, height, img.into_luma8().into_raw())?)
            }
        }
    };

    Ok(gray)
}

/// Encode to `path`, format chosen by its extension.
pub fn save_gray(image: &GrayImage, path: &Path) -> anyhow::Result<()> {
    match image {
        GrayImage::Luma8(grid) => to_image_buffer(grid)?.save(path),
        GrayImage::Luma16(grid) => to_image_buffer(grid)?.save(path),
    }
    .with_context(|| format!("Failed to save image '{}'", path.display()))
}

fn to_image_buffer<T: Sample + Primitive>(
    grid: &Grid<T>,
) -> anyhow::Result<ImageBuffer<Luma<T>, Vec<T>>> {
    let width = u32::try_from(grid.width()).context("Image too wide to encode")?;
    let height = u32::try_from(grid.height()).context("Image too tall to encode")?;
    ImageBuffer::from_raw(width, height, grid.samples().to_vec())
        .context("Sample buffer does not match image dimensions")
}

#[cfg(test)]
mod tests {
    use denoise::FilterKind;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_luma8_png_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray.png");
        let grid = Grid::from_rows(&[[0u8, 64, 128], [192, 255, 7]]).unwrap();

        save_gray(&GrayImage::Luma8(grid.clone()), &path).unwrap();
        let loaded = load_gray(&path).unwrap();

        assert_eq!(loaded, GrayImage::Luma8(grid));
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.bit_depth(), 8);
    }

    #[test]
    fn test_luma16_png_keeps_depth() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gray16.png");
        let grid = Grid::from_rows(&[[0u16, 1000], [40000, u16::MAX]]).unwrap();

        save_gray(&GrayImage::Luma16(grid.clone()), &path).unwrap();
        let loaded = load_gray(&path).unwrap();

        assert_eq!(loaded, GrayImage::Luma16(grid));
        assert_eq!(loaded.bit_depth(), 16);
    }

    #[test]
    fn test_rgb_is_converted_to_luma8() {
        let rgb = RgbImage::from_pixel(4, 3, Rgb([90, 90, 90]));
        let gray = to_gray(DynamicImage::ImageRgb8(rgb)).unwrap();
        match gray {
            GrayImage::Luma8(grid) => {
                assert_eq!(grid.dimensions(), (4, 3));
                assert!(grid.samples().iter().all(|&v| v == 90));
            }
            other => panic!("expected 8-bit luma, got {}-bit", other.bit_depth()),
        }
    }

    #[test]
    fn test_denoise_keeps_variant() {
        let mut rows = vec![vec![30u8; 4]; 4];
        rows[1][2] = 255;
        let image = GrayImage::Luma8(Grid::from_rows(&rows).unwrap());
        let filtered = image.denoise(&NoiseRemover::new(FilterKind::Median));
        assert_eq!(
            filtered,
            GrayImage::Luma8(Grid::filled(4, 4, 30u8).unwrap())
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");
        let err = load_gray(&path).unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }
}
