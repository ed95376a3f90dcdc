use alloc::format;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::error::PgmError;

/// An 8-bit grayscale image with its declared maximum gray value.
///
/// Pixels are stored row-major and contiguous (stride equals width). Every
/// sample is guaranteed to be `<= maxval`.
#[derive(Clone, Debug)]
pub struct PgmImage {
    pixels: ImgVec<u8>,
    maxval: u8,
}

impl PgmImage {
    /// Wrap a pixel grid, validating dimensions and sample range.
    ///
    /// Padded (strided) input is compacted.
    pub fn new(pixels: ImgVec<u8>, maxval: u8) -> Result<Self, PgmError> {
        check_dimensions(pixels.width(), pixels.height())?;
        let pixels = if pixels.stride() == pixels.width() {
            pixels
        } else {
            let (w, h) = (pixels.width(), pixels.height());
            let buf: Vec<u8> = pixels.as_ref().rows().flatten().copied().collect();
            ImgVec::new(buf, w, h)
        };
        check_range(pixels.as_ref(), maxval)?;
        Ok(Self { pixels, maxval })
    }

    /// Build an image from a slice of rows.
    ///
    /// The first row fixes the width; every other row must match it.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], maxval: u8) -> Result<Self, PgmError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        check_dimensions(width, rows.len())?;
        let mut buf = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(PgmError::InvalidArgument(format!(
                    "row {y} has {} pixels, expected {width}",
                    row.len()
                )));
            }
            buf.extend_from_slice(row);
        }
        Self::new(ImgVec::new(buf, width, rows.len()), maxval)
    }

    /// Decoder-side constructor; the caller has already range-checked `buf`.
    pub(crate) fn from_validated(buf: Vec<u8>, width: usize, height: usize, maxval: u8) -> Self {
        debug_assert_eq!(buf.len(), width * height);
        Self {
            pixels: ImgVec::new(buf, width, height),
            maxval,
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// The declared maximum gray value.
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Sample at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixels.buf().get(y * self.width() + x).copied()
    }

    /// All samples, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.pixels.buf()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.buf().chunks_exact(self.width())
    }

    /// Borrow as an [`imgref::ImgRef`], ready to hand to the encoder.
    pub fn as_imgref(&self) -> ImgRef<'_, u8> {
        self.pixels.as_ref()
    }

    pub fn into_imgvec(self) -> ImgVec<u8> {
        self.pixels
    }

    /// Copy out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

impl PartialEq for PgmImage {
    fn eq(&self, other: &Self) -> bool {
        self.maxval == other.maxval
            && self.width() == other.width()
            && self.height() == other.height()
            && self.pixels() == other.pixels()
    }
}

impl Eq for PgmImage {}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), PgmError> {
    if width == 0 || height == 0 {
        return Err(PgmError::InvalidArgument(format!(
            "image must not be empty, got {width}x{height}"
        )));
    }
    Ok(())
}

fn check_range(pixels: ImgRef<'_, u8>, maxval: u8) -> Result<(), PgmError> {
    for (y, row) in pixels.rows().enumerate() {
        if let Some(x) = row.iter().position(|&p| p > maxval) {
            return Err(PgmError::PixelOutOfRange {
                value: i64::from(row[x]),
                maxval: u32::from(maxval),
                x,
                y,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_rows_builds_row_major_grid() {
        let img = PgmImage::from_rows(&[[1u8, 2, 3], [4, 5, 6]], 255).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixels(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(img.pixel(2, 1), Some(6));
        assert_eq!(img.pixel(3, 0), None);
        assert_eq!(img.pixel(0, 2), None);
        assert_eq!(img.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![4, 5]];
        assert!(matches!(
            PgmImage::from_rows(&rows, 255),
            Err(PgmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_grid_rejected() {
        let none: [[u8; 0]; 0] = [];
        assert!(matches!(
            PgmImage::from_rows(&none, 255),
            Err(PgmError::InvalidArgument(_))
        ));
        let empty_row: [[u8; 0]; 1] = [[]];
        assert!(matches!(
            PgmImage::from_rows(&empty_row, 255),
            Err(PgmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn sample_above_maxval_rejected() {
        let err = PgmImage::from_rows(&[[5u8, 20]], 10).unwrap_err();
        match err {
            PgmError::PixelOutOfRange {
                value,
                maxval,
                x,
                y,
            } => {
                assert_eq!((value, maxval, x, y), (20, 10, 1, 0));
            }
            other => panic!("expected PixelOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn strided_input_is_compacted() {
        // 2x2 image with a stride of 3
        let padded = ImgVec::new_stride(vec![1u8, 2, 99, 3, 4, 99], 2, 2, 3);
        let img = PgmImage::new(padded, 255).unwrap();
        assert_eq!(img.pixels(), &[1, 2, 3, 4]);
        assert_eq!(img.as_imgref().stride(), 2);
    }
}
