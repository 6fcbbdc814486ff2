//! Binary/text codec helpers.
//!
//! Base64 conversion for wire payloads and attachment bodies, the base64url
//! rewrite used for filenames and REST path segments, and byte-sequence
//! concatenation.

use base64::{engine::general_purpose::STANDARD as Base64Standard, Engine as _};

use crate::error::PlatformError;

/// Encodes bytes as standard base64.
///
/// Uses the standard alphabet with padding and no line wrapping.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    Base64Standard.encode(bytes)
}

/// Decodes a standard base64 string.
///
/// # Errors
///
/// Returns [`PlatformError::Decode`] if the input is not valid base64.
pub fn base64_to_bytes(base64: &str) -> Result<Vec<u8>, PlatformError> {
    Ok(Base64Standard.decode(base64)?)
}

/// Rewrites a standard base64 string into its base64url form.
///
/// Substitutes `+` with `-` and `/` with `_`, and strips `=` padding. The
/// rewrite is one-directional: the unpadded output is suitable as a URL
/// path segment but a consumer that wants to decode it must restore the
/// padding first.
pub fn base64_to_base64_url(base64: &str) -> String {
    base64
        .chars()
        .filter_map(|c| match c {
            '+' => Some('-'),
            '/' => Some('_'),
            '=' => None,
            other => Some(other),
        })
        .collect()
}

/// Concatenates any number of byte sequences into one, preserving order.
///
/// The output length is the sum of the input lengths; the buffer is
/// allocated once up front.
pub fn merge<T: AsRef<[u8]>>(parts: &[T]) -> Vec<u8> {
    let total: usize = parts.iter().map(|part| part.as_ref().len()).sum();
    let mut merged = Vec::with_capacity(total);
    for part in parts {
        merged.extend_from_slice(part.as_ref());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base64_round_trip() {
        let inputs: Vec<Vec<u8>> = vec![
            vec![],
            vec![0],
            b"attachment body".to_vec(),
            vec![0xFF, 0x00, 0x7F, 0x80],
            (0u8..=255).collect(),
        ];
        for bytes in inputs {
            let encoded = bytes_to_base64(&bytes);
            assert_eq!(base64_to_bytes(&encoded).unwrap(), bytes);
        }
    }

    #[test]
    fn encoding_has_no_line_wrapping() {
        let bytes = vec![0xAB; 600];
        assert!(!bytes_to_base64(&bytes).contains('\n'));
    }

    #[test]
    fn malformed_base64_fails_with_decode_error() {
        assert!(matches!(
            base64_to_bytes("not base64!"),
            Err(PlatformError::Decode(_))
        ));
        assert!(matches!(
            base64_to_bytes("AAA"),
            Err(PlatformError::Decode(_))
        ));
    }

    #[test]
    fn base64_url_substitutes_and_strips_padding() {
        assert_eq!(base64_to_base64_url("a+b/c="), "a-b_c");
        assert_eq!(base64_to_base64_url("++//=="), "--__");
        assert_eq!(base64_to_base64_url("plain"), "plain");
        assert_eq!(base64_to_base64_url(""), "");
    }

    #[test]
    fn merge_preserves_order_and_boundaries() {
        let merged = merge(&[b"ab".as_slice(), b"".as_slice(), b"cde".as_slice()]);
        assert_eq!(merged, b"abcde");
    }

    #[test]
    fn merge_length_is_the_sum_of_input_lengths() {
        let parts: Vec<Vec<u8>> = vec![vec![1; 3], vec![2; 5], vec![3; 7]];
        let expected: usize = parts.iter().map(Vec::len).sum();
        assert_eq!(merge(&parts).len(), expected);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        assert!(merge::<&[u8]>(&[]).is_empty());
        assert!(merge(&[b"".as_slice(), b"".as_slice()]).is_empty());
    }
}
