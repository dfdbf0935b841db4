//! Credential payload decoding.
//!
//! The signature is NOT verified here. The backend validates every request;
//! the client only reads the payload to decide what to show.

use crate::{Claims, DecodeError, DecodeResult};

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use log::debug;
use serde_json::Value;

const PAYLOAD_SEGMENT: usize = 1;

/// Decode a bearer credential (`header.payload.signature`) into [`Claims`].
///
/// Returns [`DecodeError::Malformed`] when the payload segment is missing,
/// is not Base64 (URL-safe or standard, padding optional) or is not a JSON
/// object, and [`DecodeError::MissingSubject`] when no identity claim is
/// present.
#[track_caller]
pub fn decode(credential: &str) -> DecodeResult<Claims> {
    let segment = credential
        .trim()
        .split('.')
        .nth(PAYLOAD_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            DecodeError::malformed("expected dot-separated header.payload segments")
        })?;

    let bytes = decode_segment(segment)?;

    let payload: Value = serde_json::from_slice(&bytes)
        .map_err(|e| DecodeError::malformed(format!("payload is not JSON: {e}")))?;

    if !payload.is_object() {
        return Err(DecodeError::malformed("payload is not a JSON object"));
    }

    let claims = Claims::from_payload(&payload)?;
    debug!(
        "Decoded credential: subject={}, role={}",
        claims.subject, claims.role
    );

    Ok(claims)
}

fn decode_segment(segment: &str) -> DecodeResult<Vec<u8>> {
    let unpadded = segment.trim_end_matches('=');

    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
        .map_err(|e| DecodeError::malformed(format!("payload is not base64: {e}")))
}
