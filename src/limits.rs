use alloc::format;

use crate::error::PgmError;
use crate::pgm::PgmHeader;

/// Caps on what a P5 header may declare, applied before the raster is read.
///
/// Samples are one byte each, so `max_pixels` is also the cap on the decoded
/// buffer in bytes. `None` means unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Largest `width * height`, which is the raster length in bytes.
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// Reject a header whose declared size is over any configured cap.
    pub(crate) fn check_header(&self, header: &PgmHeader) -> Result<(), PgmError> {
        let raster = u64::from(header.width) * u64::from(header.height);
        let caps = [
            ("width", u64::from(header.width), self.max_width.map(u64::from)),
            ("height", u64::from(header.height), self.max_height.map(u64::from)),
            ("pixel count", raster, self.max_pixels),
        ];
        for (field, declared, cap) in caps {
            if let Some(cap) = cap.filter(|&cap| declared > cap) {
                return Err(PgmError::LimitExceeded(format!(
                    "{field} {declared} exceeds limit {cap}"
                )));
            }
        }
        Ok(())
    }
}
