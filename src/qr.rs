//! Entry QR code generation.
//!
//! The event runs off one printed QR code that encodes the check-in form
//! URL. The image is (re)written on every startup so a changed scan URL
//! or a wiped data directory never leaves a stale or missing asset
//! behind. JPEG output keeps the file drop-in compatible with badge and
//! poster print templates.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::CheckinError;

/// File name of the printed QR asset inside the QR directory.
pub const ENTRY_QR_FILE: &str = "entry_qr.jpg";

/// Writes the entry QR code for `scan_url` into `qr_dir`.
///
/// The directory is created if missing and an existing image is
/// overwritten. The rendered module grid is scaled up to at least
/// `min_size_px` on each side so the print stays scannable.
///
/// # Errors
///
/// Returns [`CheckinError::Qr`] if the directory cannot be created, the
/// payload does not fit in a QR code, or the image cannot be written.
pub fn write_entry_qr(
    qr_dir: &Path,
    scan_url: &str,
    min_size_px: u32,
) -> Result<PathBuf, CheckinError> {
    std::fs::create_dir_all(qr_dir).map_err(|e| CheckinError::Qr(e.to_string()))?;

    let code = QrCode::new(scan_url.as_bytes()).map_err(|e| CheckinError::Qr(e.to_string()))?;
    let luma = code
        .render::<Luma<u8>>()
        .min_dimensions(min_size_px, min_size_px)
        .build();

    let path = qr_dir.join(ENTRY_QR_FILE);
    // JPEG has no grayscale-with-alpha pitfalls, but print shops expect RGB.
    DynamicImage::ImageLuma8(luma)
        .into_rgb8()
        .save_with_format(&path, ImageFormat::Jpeg)
        .map_err(|e| CheckinError::Qr(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_jpeg_under_the_qr_dir() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let qr_dir = dir.path().join("qrcodes");

        let Ok(path) = write_entry_qr(&qr_dir, "http://localhost:5000/scan_qr", 360) else {
            panic!("qr generation failed");
        };
        assert_eq!(path, qr_dir.join(ENTRY_QR_FILE));

        let Ok(bytes) = std::fs::read(&path) else {
            panic!("read failed");
        };
        // JPEG SOI marker.
        assert_eq!(bytes.first(), Some(&0xFF));
        assert_eq!(bytes.get(1), Some(&0xD8));
    }

    #[test]
    fn overwrites_existing_image() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let qr_dir = dir.path().to_path_buf();

        let Ok(first) = write_entry_qr(&qr_dir, "http://localhost:5000/scan_qr", 360) else {
            panic!("qr generation failed");
        };
        let Ok(second) = write_entry_qr(&qr_dir, "http://10.0.0.2:5000/scan_qr", 360) else {
            panic!("qr regeneration failed");
        };
        assert_eq!(first, second);
        assert!(second.exists());
    }

    #[test]
    fn oversize_payload_is_rejected() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir failed");
        };
        let payload = "x".repeat(4000);

        let result = write_entry_qr(dir.path(), &payload, 360);
        assert!(matches!(result, Err(CheckinError::Qr(_))));
    }
}
