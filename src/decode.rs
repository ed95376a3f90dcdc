use enough::Stop;

use crate::error::PgmError;
use crate::limits::Limits;
use crate::pgm_image::PgmImage;

/// Builder for decoding a P5 byte buffer.
///
/// ```
/// use zenpgm::{DecodeRequest, Limits, Unstoppable};
///
/// let data = b"P5\n2 1\n255\n\x07\x09";
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// assert_eq!(image.pixels(), &[7, 9]);
/// # Ok::<(), zenpgm::PgmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before the raster is read.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode into a fresh [`PgmImage`]. A failed decode yields no pixels.
    pub fn decode(self, stop: impl Stop) -> Result<PgmImage, PgmError> {
        crate::pgm::decode(self.data, self.limits, &stop)
    }
}
