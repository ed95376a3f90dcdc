use alloc::vec::Vec;
use core::fmt;
use enough::Stop;
use imgref::ImgRef;

use crate::error::PgmError;
use crate::pgm::MAX_MAXVAL;
use crate::sample::GraySample;

/// Maxval written when none is requested.
pub const DEFAULT_MAXVAL: u32 = MAX_MAXVAL;

/// What a successful encode produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeSummary {
    pub width: usize,
    pub height: usize,
    pub maxval: u32,
    /// Total bytes written, header included.
    pub bytes: usize,
}

/// Builder for encoding a grayscale grid as P5.
///
/// ```
/// use zenpgm::{EncodeRequest, Unstoppable};
/// use imgref::ImgVec;
///
/// let grid = ImgVec::new(vec![7u8, 9], 2, 1);
/// let bytes = EncodeRequest::new().encode(grid.as_ref(), Unstoppable)?;
/// assert_eq!(bytes, b"P5\n2 1\n255\n\x07\x09");
/// # Ok::<(), zenpgm::PgmError>(())
/// ```
#[derive(Clone, Copy)]
pub struct EncodeRequest<'a> {
    maxval: u32,
    on_complete: Option<&'a dyn Fn(&EncodeSummary)>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EncodeRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeRequest")
            .field("maxval", &self.maxval)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self {
            maxval: DEFAULT_MAXVAL,
            on_complete: None,
        }
    }

    /// Declared maximum gray value. Values above 255 fail at encode time.
    pub fn with_maxval(mut self, maxval: u32) -> Self {
        self.maxval = maxval;
        self
    }

    /// Called once after every pixel has been written.
    pub fn on_complete(mut self, callback: &'a dyn Fn(&EncodeSummary)) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn maxval(&self) -> u32 {
        self.maxval
    }

    /// Encode to a new buffer.
    pub fn encode<S: GraySample>(
        &self,
        img: ImgRef<'_, S>,
        stop: impl Stop,
    ) -> Result<Vec<u8>, PgmError> {
        let out = crate::pgm::encode(img, self.maxval, &stop)?;
        self.complete(img, out.len());
        Ok(out)
    }

    /// Encode, handing the header and then each row to `sink`.
    #[cfg(feature = "std")]
    pub(crate) fn encode_streaming<S: GraySample>(
        &self,
        img: ImgRef<'_, S>,
        stop: &dyn Stop,
        sink: &mut dyn FnMut(&[u8]) -> Result<(), PgmError>,
    ) -> Result<EncodeSummary, PgmError> {
        let bytes = crate::pgm::encode_streaming(img, self.maxval, stop, sink)?;
        Ok(self.complete(img, bytes))
    }

    fn complete<S>(&self, img: ImgRef<'_, S>, bytes: usize) -> EncodeSummary {
        let summary = EncodeSummary {
            width: img.width(),
            height: img.height(),
            maxval: self.maxval,
            bytes,
        };
        if let Some(callback) = self.on_complete {
            callback(&summary);
        }
        summary
    }
}
