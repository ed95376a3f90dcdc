//! File-path adapters around the in-memory codec.
//!
//! Each call opens its own handle and drops it on every exit path, so calls
//! on distinct files are safe to run from different threads.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use enough::Stop;
use imgref::ImgRef;

use crate::decode::DecodeRequest;
use crate::encode::{EncodeRequest, EncodeSummary};
use crate::error::PgmError;
use crate::pgm::MAX_MAXVAL;
use crate::pgm_image::{PgmImage, check_dimensions};
use crate::sample::GraySample;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PgmError + '_ {
    move |source| PgmError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read and decode a P5 file.
pub fn read_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<PgmImage, PgmError> {
    let path = path.as_ref();
    let mut data = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut data))
        .map_err(io_error(path))?;

    let image = DecodeRequest::new(&data).decode(stop)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        maxval = image.maxval(),
        "read PGM"
    );
    Ok(image)
}

/// Encode `img` straight into a file.
///
/// The maxval is checked before the file is created. Pixels are range
/// checked as they are written, so a bad sample leaves a truncated file
/// behind; nothing is rolled back.
pub fn write_file<S: GraySample>(
    path: impl AsRef<Path>,
    img: ImgRef<'_, S>,
    request: &EncodeRequest<'_>,
    stop: impl Stop,
) -> Result<EncodeSummary, PgmError> {
    let path = path.as_ref();
    if request.maxval() > MAX_MAXVAL {
        return Err(PgmError::InvalidMaxval(request.maxval()));
    }
    check_dimensions(img.width(), img.height())?;

    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    let summary = request.encode_streaming(img, &stop, &mut |bytes| {
        writer.write_all(bytes).map_err(io_error(path))
    })?;
    writer.flush().map_err(io_error(path))?;

    tracing::info!(
        file = %path.file_name().unwrap_or(path.as_os_str()).to_string_lossy(),
        width = summary.width,
        height = summary.height,
        "PGM written"
    );
    Ok(summary)
}

/// Decode any image format the `image` crate understands and average it
/// down to grayscale.
///
/// Decode failures are returned as [`PgmError::ColorDecode`].
#[cfg(feature = "image")]
pub fn load_color_as_gray(path: impl AsRef<Path>) -> Result<PgmImage, PgmError> {
    let path = path.as_ref();
    let color = image::open(path)
        .map_err(|source| PgmError::ColorDecode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    let (w, h) = (color.width() as usize, color.height() as usize);
    check_dimensions(w, h)?;
    let packed: Vec<u32> = color
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            u32::from_be_bytes([a, r, g, b])
        })
        .collect();
    crate::gray::argb_to_gray(ImgRef::new(&packed[..], w, h))
}

/// Decode a color image file and encode it as P5 bytes (maxval 255).
#[cfg(feature = "image")]
pub fn encode_color_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Vec<u8>, PgmError> {
    let gray = load_color_as_gray(path)?;
    EncodeRequest::new().encode(gray.as_imgref(), stop)
}

/// Convert a color image file into a P5 file at `dst`.
#[cfg(feature = "image")]
pub fn convert_color_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    request: &EncodeRequest<'_>,
    stop: impl Stop,
) -> Result<EncodeSummary, PgmError> {
    let gray = load_color_as_gray(src)?;
    write_file(dst, gray.as_imgref(), request, stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;
    use imgref::ImgVec;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("zenpgm_fs_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{}_{name}", std::process::id()))
    }

    #[test]
    fn write_then_read() {
        let path = scratch("roundtrip.pgm");
        let grid = ImgVec::new(vec![0u8, 50, 100, 150, 200, 250], 3, 2);
        let summary = write_file(&path, grid.as_ref(), &EncodeRequest::new(), Unstoppable).unwrap();
        assert_eq!(summary.bytes, std::fs::metadata(&path).unwrap().len() as usize);

        let image = read_file(&path, Unstoppable).unwrap();
        assert_eq!(image.pixels(), grid.buf().as_slice());
        assert_eq!((image.width(), image.height(), image.maxval()), (3, 2, 255));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_maxval_creates_no_file() {
        let path = scratch("never.pgm");
        std::fs::remove_file(&path).ok();
        let grid = ImgVec::new(vec![1u8], 1, 1);
        let request = EncodeRequest::new().with_maxval(256);
        let err = write_file(&path, grid.as_ref(), &request, Unstoppable).unwrap_err();
        assert!(matches!(err, PgmError::InvalidMaxval(256)));
        assert!(!path.exists());
    }

    #[test]
    fn empty_grid_creates_no_file() {
        let path = scratch("empty.pgm");
        std::fs::remove_file(&path).ok();
        let grid = ImgVec::new(Vec::<u8>::new(), 0, 1);
        let err = write_file(&path, grid.as_ref(), &EncodeRequest::new(), Unstoppable).unwrap_err();
        assert!(matches!(err, PgmError::InvalidArgument(_)));
        assert!(!path.exists());
    }

    #[test]
    fn bad_pixel_leaves_partial_file() {
        let path = scratch("partial.pgm");
        let grid = ImgVec::new(vec![1u16, 2, 300, 4], 2, 2);
        let err = write_file(&path, grid.as_ref(), &EncodeRequest::new(), Unstoppable).unwrap_err();
        assert!(matches!(err, PgmError::PixelOutOfRange { value: 300, .. }));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"P5\n2 2\n255\n\x01\x02");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_reports_path() {
        let path = scratch("does_not_exist.pgm");
        match read_file(&path, Unstoppable) {
            Err(PgmError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn decode_error_passes_through() {
        let path = scratch("not_pgm.bin");
        std::fs::write(&path, b"P6\n1 1\n255\n\0\0\0").unwrap();
        assert!(matches!(
            read_file(&path, Unstoppable),
            Err(PgmError::UnrecognizedFormat)
        ));
        std::fs::remove_file(&path).ok();
    }

    #[cfg(feature = "image")]
    #[test]
    fn color_file_to_pgm() {
        let src = scratch("color.png");
        let mut color = image::RgbaImage::new(2, 1);
        color.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
        color.put_pixel(1, 0, image::Rgba([255, 0, 0, 0]));
        color.save(&src).unwrap();

        let bytes = encode_color_file(&src, Unstoppable).unwrap();
        assert_eq!(bytes, b"P5\n2 1\n255\n\x14\x55");

        let dst = scratch("color.pgm");
        convert_color_file(&src, &dst, &EncodeRequest::new(), Unstoppable).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), bytes);
        std::fs::remove_file(&src).ok();
        std::fs::remove_file(&dst).ok();
    }

    #[cfg(feature = "image")]
    #[test]
    fn color_decode_failure_propagates() {
        let src = scratch("garbage.png");
        std::fs::write(&src, b"definitely not an image").unwrap();
        let err = encode_color_file(&src, Unstoppable).unwrap_err();
        assert!(matches!(err, PgmError::ColorDecode { .. }));
        std::fs::remove_file(&src).ok();
    }
}
