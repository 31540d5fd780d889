//! Media shortcode <-> numeric id conversion
//!
//! A shortcode is the media id written in base 64 with the URL-safe
//! alphabet, most significant digit first.

use crate::error::{Error, Result};
use crate::types::MediaCode;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// 12 digits decode to 9 bytes; a u64 needs the first byte to be zero
const PADDED_LEN: usize = 12;

/// Numeric media id of a shortcode
pub fn media_id_from_code(code: &MediaCode) -> Result<u64> {
    let raw = code.as_str();
    if raw.is_empty() || raw.len() >= PADDED_LEN || !raw.is_ascii() {
        return Err(Error::invalid_media_code(raw));
    }

    // 'A' is the zero digit
    let padded = format!("{raw:A>PADDED_LEN$}");
    let bytes = URL_SAFE_NO_PAD
        .decode(padded)
        .map_err(|_| Error::invalid_media_code(raw))?;

    match bytes.split_first() {
        Some((0, rest)) => {
            let arr: [u8; 8] = rest
                .try_into()
                .map_err(|_| Error::invalid_media_code(raw))?;
            Ok(u64::from_be_bytes(arr))
        }
        _ => Err(Error::invalid_media_code(raw)),
    }
}

/// Shortcode of a numeric media id
pub fn media_code_from_id(id: u64) -> MediaCode {
    let mut bytes = [0u8; 9];
    bytes[1..].copy_from_slice(&id.to_be_bytes());
    let encoded = URL_SAFE_NO_PAD.encode(bytes);
    let trimmed = encoded.trim_start_matches('A');
    if trimmed.is_empty() {
        MediaCode::new("A")
    } else {
        MediaCode::new(trimmed)
    }
}
