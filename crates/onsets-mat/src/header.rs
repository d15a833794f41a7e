//! MAT-file Level 5 file header.
//!
//! The first 128 bytes of a Level 5 MAT-file:
//!
//! | Offset  | Length | Field                                      |
//! |---------|--------|--------------------------------------------|
//! | 0-115   | 116    | Descriptive text, space padded             |
//! | 116-123 | 8      | Subsystem data offset (zero when unused)   |
//! | 124-125 | 2      | Version word, `0x0100`                     |
//! | 126-127 | 2      | Endian indicator, reads `IM` when the file |
//! |         |        | was written little-endian                  |

use crate::error::{MatError, Result};

/// File header length in bytes.
pub const HEADER_LEN: usize = 128;

/// Descriptive-text field length in bytes.
pub const DESCRIPTION_LEN: usize = 116;

/// Level 5 version word.
pub const MAT5_VERSION: u16 = 0x0100;

/// Endian indicator as seen by a little-endian reader.
pub const ENDIAN_INDICATOR: [u8; 2] = *b"IM";

/// Default descriptive text.
///
/// Deliberately carries no timestamp: rewriting unchanged input must produce
/// byte-identical files.
#[must_use]
pub fn default_description() -> String {
    format!(
        "MATLAB 5.0 MAT-file, platform: {}, written by onsets-mat {}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    )
}

/// Build the 128-byte file header.
///
/// Non-ASCII characters in the description are replaced and the text is
/// truncated to fit the 116-byte field.
#[must_use]
pub fn build_file_header(description: &str) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    // Descriptive text, space padded.
    for slot in header.iter_mut().take(DESCRIPTION_LEN) {
        *slot = b' ';
    }
    for (idx, ch) in description.chars().take(DESCRIPTION_LEN).enumerate() {
        header[idx] = if ch.is_ascii() { ch as u8 } else { b'?' };
    }
    // Bytes 116-123 stay zero: no subsystem-specific data.
    header[124..126].copy_from_slice(&MAT5_VERSION.to_le_bytes());
    header[126..128].copy_from_slice(&ENDIAN_INDICATOR);
    header
}

/// Validate a file header and return the descriptive text.
pub fn parse_file_header(data: &[u8]) -> Result<String> {
    if data.len() < HEADER_LEN {
        return Err(MatError::invalid_format("file too small for header"));
    }
    match &data[126..128] {
        indicator if indicator == ENDIAN_INDICATOR => {}
        b"MI" => return Err(MatError::BigEndian),
        _ => return Err(MatError::invalid_format("missing endian indicator")),
    }
    let version = u16::from_le_bytes([data[124], data[125]]);
    if version != MAT5_VERSION {
        return Err(MatError::invalid_format(format!(
            "unsupported version word 0x{version:04x}"
        )));
    }
    let description = String::from_utf8_lossy(&data[..DESCRIPTION_LEN])
        .trim_end()
        .to_string();
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = build_file_header("test file");
        assert_eq!(header.len(), HEADER_LEN);
        assert_eq!(&header[..9], b"test file");
        assert_eq!(header[9], b' ');
        assert_eq!(&header[116..124], &[0u8; 8]);
        assert_eq!(&header[124..126], &[0x00, 0x01]);
        assert_eq!(&header[126..128], b"IM");
    }

    #[test]
    fn test_header_roundtrip() {
        let header = build_file_header(&default_description());
        let description = parse_file_header(&header).expect("parse header");
        assert!(description.starts_with("MATLAB 5.0 MAT-file"));
    }

    #[test]
    fn test_big_endian_rejected() {
        let mut header = build_file_header("x");
        header[126..128].copy_from_slice(b"MI");
        assert!(matches!(parse_file_header(&header), Err(MatError::BigEndian)));
    }

    #[test]
    fn test_short_header_rejected() {
        assert!(parse_file_header(&[0u8; 64]).is_err());
    }

    #[test]
    fn test_long_description_truncated() {
        let description = "x".repeat(200);
        let header = build_file_header(&description);
        assert_eq!(header[DESCRIPTION_LEN - 1], b'x');
        assert_eq!(&header[116..124], &[0u8; 8]);
    }
}
