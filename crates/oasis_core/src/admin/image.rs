//! Image upload encoding.
//!
//! Uploaded files become `data:<mime>;base64,<payload>` strings, which the
//! store keeps exactly like remote URLs.

use super::AdminError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;
use std::fs;
use std::path::Path;

/// Largest accepted upload, inclusive.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Maps a file extension to its image mime type.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

/// Reads an image file into an inline payload string.
///
/// # Errors
/// - `UnsupportedImageType` when the extension is not a known image type.
/// - `ImageTooLarge` when the file exceeds `MAX_IMAGE_BYTES`; the file body
///   is not read in that case.
/// - `Io` when the file cannot be inspected or read.
pub fn encode_image_file(path: &Path) -> Result<String, AdminError> {
    let mime = mime_for_path(path)
        .ok_or_else(|| AdminError::UnsupportedImageType(path.display().to_string()))?;

    let size = fs::metadata(path)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(AdminError::ImageTooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    let bytes = fs::read(path)?;
    let encoded = encode_image_bytes(&bytes, mime)?;
    info!("event=image_encode module=admin status=ok mime={mime} size={size}");
    Ok(encoded)
}

/// Encodes raw image bytes with the given mime type.
pub fn encode_image_bytes(bytes: &[u8], mime: &str) -> Result<String, AdminError> {
    let size = bytes.len() as u64;
    if size > MAX_IMAGE_BYTES {
        return Err(AdminError::ImageTooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
