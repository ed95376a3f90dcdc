//! # zenpgm
//!
//! Binary PGM (P5) grayscale image decoder and encoder.
//!
//! ## Format
//!
//! ```text
//! P5 <ws> width <ws> height <ws> maxval <one ws byte> raster
//! ```
//!
//! Header tokens may be separated by any run of whitespace and `#` comments
//! running to end of line. The raster is `width * height` bytes, row-major,
//! each `<= maxval`. The encoder always writes the canonical
//! `P5\n<width> <height>\n<maxval>\n` header.
//!
//! ## Non-Goals
//!
//! - ASCII PGM (P2)
//! - 16-bit samples (maxval above 255)
//! - Multiple images per file
//! - Comments inside the raster
//!
//! ## Usage
//!
//! ```
//! use zenpgm::{DecodeRequest, EncodeRequest, Unstoppable};
//! use imgref::ImgVec;
//!
//! let grid = ImgVec::new(vec![0u8, 64, 128, 192, 255, 100], 3, 2);
//! let bytes = EncodeRequest::new().encode(grid.as_ref(), Unstoppable)?;
//!
//! let image = DecodeRequest::new(&bytes).decode(Unstoppable)?;
//! assert_eq!((image.width(), image.height()), (3, 2));
//! assert_eq!(image.pixels(), grid.buf().as_slice());
//! # Ok::<(), zenpgm::PgmError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): [`fs`] file adapters and `tracing` diagnostics.
//! - `rgb`: [`gray::rgb8_to_gray`] and [`gray::rgba8_to_gray`].
//! - `image`: decode arbitrary color files with the `image` crate and write
//!   them as PGM.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod limits;
mod pgm_image;
mod sample;

pub mod gray;
pub mod pgm;

#[cfg(feature = "std")]
pub mod fs;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::{DEFAULT_MAXVAL, EncodeRequest, EncodeSummary};
pub use enough::{Stop, Unstoppable};
pub use error::PgmError;
pub use limits::Limits;
pub use pgm_image::PgmImage;
pub use sample::GraySample;

use alloc::vec::Vec;
use imgref::ImgRef;

/// Decode P5 bytes with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<PgmImage, PgmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode with the default maxval of 255.
pub fn encode<S: GraySample>(img: ImgRef<'_, S>, stop: impl Stop) -> Result<Vec<u8>, PgmError> {
    EncodeRequest::new().encode(img, stop)
}

/// Encode declaring `maxval`; fails with [`PgmError::InvalidMaxval`] above 255.
pub fn encode_with_maxval<S: GraySample>(
    img: ImgRef<'_, S>,
    maxval: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, PgmError> {
    EncodeRequest::new().with_maxval(maxval).encode(img, stop)
}
