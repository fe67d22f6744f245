//! In-memory 8-bit images, regions and region histogram extraction.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::histogram::HistogramSource;
use crate::{Error, Result};

/// Width and height of a tracked region, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSize {
    pub width: u32,
    pub height: u32,
}

impl RegionSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned pixel region; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Region of the given size at a sub-pixel position, rounded to the nearest pixel.
    ///
    /// # Errors
    /// `Error::InvalidPosition` if either coordinate is not finite or
    /// rounds outside the `i64` range.
    pub fn at(x: f64, y: f64, size: RegionSize) -> Result<Self> {
        match (to_pixel(x), to_pixel(y)) {
            (Some(px), Some(py)) => Ok(Self {
                x: px,
                y: py,
                width: size.width,
                height: size.height,
            }),
            _ => Err(Error::InvalidPosition { x, y }),
        }
    }

    pub fn size(&self) -> RegionSize {
        RegionSize::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the region lies entirely inside an image of the given size.
    pub fn fits_within(&self, image_width: usize, image_height: usize) -> bool {
        let right = self.x.checked_add(i64::from(self.width));
        let bottom = self.y.checked_add(i64::from(self.height));
        match (right, bottom) {
            (Some(right), Some(bottom)) => {
                self.x >= 0
                    && self.y >= 0
                    && right as i128 <= image_width as i128
                    && bottom as i128 <= image_height as i128
            }
            _ => false,
        }
    }
}

// 2^63; `i64::MAX as f64` rounds up to it, so the upper bound is exclusive.
const PIXEL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn to_pixel(coordinate: f64) -> Option<i64> {
    let rounded = coordinate.round();
    if rounded.is_finite() && rounded >= -PIXEL_LIMIT && rounded < PIXEL_LIMIT {
        Some(rounded as i64)
    } else {
        None
    }
}

/// 8-bit image stored as one `height x width` matrix per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    planes: Vec<DMatrix<u8>>,
}

impl Image {
    /// Single-channel image.
    pub fn gray(plane: DMatrix<u8>) -> Self {
        Self { planes: vec![plane] }
    }

    /// Image from per-channel planes, which must all have the same shape.
    pub fn from_planes(planes: Vec<DMatrix<u8>>) -> Result<Self> {
        let Some(first) = planes.first() else {
            return Err(Error::InvalidConfig("image needs at least one channel".to_string()));
        };
        let shape = first.shape();
        if planes.iter().any(|p| p.shape() != shape) {
            return Err(Error::InvalidConfig(
                "all image channels must have the same shape".to_string(),
            ));
        }
        Ok(Self { planes })
    }

    /// Image from row-major interleaved pixel data (e.g. RGBRGB...).
    pub fn from_interleaved(width: usize, height: usize, channels: usize, data: &[u8]) -> Result<Self> {
        if channels == 0 || data.len() != width * height * channels {
            return Err(Error::InvalidConfig(format!(
                "pixel buffer of {} bytes does not match {}x{}x{}",
                data.len(),
                width,
                height,
                channels
            )));
        }
        let planes = (0..channels)
            .map(|c| DMatrix::from_fn(height, width, |row, col| data[(row * width + col) * channels + c]))
            .collect();
        Ok(Self { planes })
    }

    /// Image of uniform color; the channel count is `color.len()`.
    ///
    /// # Panics
    /// If `color` is empty.
    pub fn filled(width: usize, height: usize, color: &[u8]) -> Self {
        assert!(!color.is_empty(), "image needs at least one channel");
        Self {
            planes: color
                .iter()
                .map(|&v| DMatrix::from_element(height, width, v))
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.planes[0].ncols()
    }

    pub fn height(&self) -> usize {
        self.planes[0].nrows()
    }

    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    pub fn plane(&self, channel: usize) -> &DMatrix<u8> {
        &self.planes[channel]
    }

    /// Paint the part of `region` that falls inside the image.
    pub fn fill_region(&mut self, region: &Region, color: &[u8]) {
        let x0 = region.x.max(0) as usize;
        let y0 = region.y.max(0) as usize;
        let x1 = (region.x.saturating_add(i64::from(region.width)).max(0) as usize).min(self.width());
        let y1 = (region.y.saturating_add(i64::from(region.height)).max(0) as usize).min(self.height());
        for (plane, &value) in self.planes.iter_mut().zip(color.iter()) {
            for row in y0..y1 {
                for col in x0..x1 {
                    plane[(row, col)] = value;
                }
            }
        }
    }

    /// Ensure the region can be read without clamping.
    pub fn check_region(&self, region: &Region) -> Result<()> {
        if !region.fits_within(self.width(), self.height()) {
            return Err(Error::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                image_width: self.width(),
                image_height: self.height(),
            });
        }
        Ok(())
    }
}

/// Joint color histogram extractor over an image.
///
/// Each channel is quantized into `bins` levels; the histogram has
/// `bins^channels` entries and is normalized to sum to one.
#[derive(Clone, Copy, Debug)]
pub struct ImageHistogramSource<'a> {
    image: &'a Image,
    bins: usize,
}

impl<'a> ImageHistogramSource<'a> {
    /// Create an extractor with `bins` levels per channel (1 to 256).
    pub fn new(image: &'a Image, bins: usize) -> Result<Self> {
        if bins == 0 || bins > 256 {
            return Err(Error::InvalidConfig(format!(
                "bins per channel must be in 1..=256, got {}",
                bins
            )));
        }
        Ok(Self { image, bins })
    }

    pub fn image(&self) -> &Image {
        self.image
    }

    /// Number of entries in every histogram produced.
    pub fn histogram_len(&self) -> usize {
        self.bins.pow(self.image.channels() as u32)
    }

    #[inline]
    fn quantize(&self, value: u8) -> usize {
        value as usize * self.bins / 256
    }

    /// Normalized joint histogram of `region`.
    ///
    /// # Errors
    /// `Error::RegionOutOfBounds` if the region leaves the image,
    /// `Error::InvalidHistogram` if it is empty.
    pub fn histogram(&self, region: &Region) -> Result<Vec<f64>> {
        self.image.check_region(region)?;
        if region.is_empty() {
            return Err(Error::InvalidHistogram(format!(
                "region {}x{} contains no pixels",
                region.width, region.height
            )));
        }

        let mut counts = vec![0.0; self.histogram_len()];
        let x0 = region.x as usize;
        let y0 = region.y as usize;
        for row in y0..y0 + region.height as usize {
            for col in x0..x0 + region.width as usize {
                let index = self
                    .image
                    .planes
                    .iter()
                    .fold(0, |acc, plane| acc * self.bins + self.quantize(plane[(row, col)]));
                counts[index] += 1.0;
            }
        }

        let total = (region.width as f64) * (region.height as f64);
        for count in counts.iter_mut() {
            *count /= total;
        }
        Ok(counts)
    }

    /// Convenience wrapper around `histogram` for a region given by corner and size.
    pub fn histogram_at(&self, x: i64, y: i64, width: u32, height: u32) -> Result<Vec<f64>> {
        self.histogram(&Region::new(x, y, width, height))
    }
}

impl HistogramSource for ImageHistogramSource<'_> {
    fn region_histogram(&self, region: &Region) -> Result<Vec<f64>> {
        self.histogram(region)
    }
}
