use crate::error::KeychainError;

/// Decode a run of hex digits into UTF-8 text.
///
/// The store prints any attribute containing non-printable or non-ASCII bytes
/// as a hex dump instead of a quoted string.
pub fn decode_hex(digits: &str) -> Result<String, KeychainError> {
    let bytes = hex::decode(digits).map_err(|e| KeychainError::DecodeError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| KeychainError::DecodeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decodes_uppercase_digits() {
        assert_eq!(decode_hex("68656C6C6F20").unwrap(), "hello ");
    }

    #[test]
    fn test_decodes_multibyte_utf8() {
        // "café" with a two-byte é
        assert_eq!(decode_hex("636166c3a9").unwrap(), "café");
    }

    #[test]
    fn test_empty_input_is_empty_string() {
        assert_eq!(decode_hex("").unwrap(), "");
    }

    #[test]
    fn test_odd_length_rejected() {
        assert!(matches!(
            decode_hex("686").unwrap_err(),
            KeychainError::DecodeError(_)
        ));
    }

    #[test]
    fn test_non_hex_character_rejected() {
        assert!(matches!(
            decode_hex("68zz").unwrap_err(),
            KeychainError::DecodeError(_)
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        assert!(matches!(
            decode_hex("c328").unwrap_err(),
            KeychainError::DecodeError(_)
        ));
    }

    proptest! {
        #[test]
        fn test_hex_roundtrip(s in any::<String>()) {
            prop_assert_eq!(decode_hex(&hex::encode(&s)).unwrap(), s.clone());
            prop_assert_eq!(decode_hex(&hex::encode_upper(&s)).unwrap(), s);
        }
    }
}
