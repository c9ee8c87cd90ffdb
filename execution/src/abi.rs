//! The two pieces of ABI handling needed for a `tokenURI` call: building the
//! calldata and unwrapping the returned `string`.

use alloy::primitives::{keccak256, Bytes, U256};

use crate::errors::AbiError;

pub const TOKEN_URI_SIGNATURE: &str = "tokenURI(uint256)";

const WORD_HEX_LEN: usize = 64;
const HEADER_HEX_LEN: usize = 2 * WORD_HEX_LEN;

pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

pub fn token_uri_calldata(token_id: U256) -> Bytes {
    let mut data = selector(TOKEN_URI_SIGNATURE).to_vec();
    data.extend_from_slice(&token_id.to_be_bytes::<32>());
    Bytes::from(data)
}

/// Unwraps an ABI-encoded `string` return value.
///
/// The offset word is ignored. The length word bounds the payload when it is
/// non-zero and fits in what was returned; otherwise every remaining byte is
/// decoded and trailing NUL padding is stripped.
pub fn decode_string(result: &str) -> Result<String, AbiError> {
    let hex_data = result.strip_prefix("0x").unwrap_or(result);

    let header = hex_data
        .get(..HEADER_HEX_LEN)
        .ok_or(AbiError::InvalidHeader)?;
    let payload = hex_data
        .get(HEADER_HEX_LEN..)
        .ok_or(AbiError::InvalidHeader)?;

    let mut bytes = hex::decode(payload)?;

    match header.get(WORD_HEX_LEN..).and_then(declared_length) {
        Some(len) if len > 0 && len <= bytes.len() => {
            bytes.truncate(len);
            Ok(String::from_utf8(bytes)?)
        }
        _ => {
            let text = String::from_utf8(bytes)?;
            Ok(text.trim_end_matches('\0').to_string())
        }
    }
}

fn declared_length(word: &str) -> Option<usize> {
    if word.len() != WORD_HEX_LEN || !word.is_ascii() {
        return None;
    }

    let (high, low) = word.split_at(WORD_HEX_LEN - 16);
    if !high.bytes().all(|b| b == b'0') {
        return None;
    }

    let len = u64::from_str_radix(low, 16).ok()?;
    usize::try_from(len).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_string(s: &str, declared: usize) -> String {
        let mut payload = hex::encode(s);
        while payload.len() % WORD_HEX_LEN != 0 {
            payload.push('0');
        }
        format!("0x{:064x}{:064x}{}", 32, declared, payload)
    }

    #[test]
    fn test_token_uri_calldata() {
        let data = token_uri_calldata(U256::from(1));
        let expected = format!("c87b56dd{}1", "0".repeat(63));

        assert_eq!(hex::encode(&data), expected);
    }

    #[test]
    fn test_decode_with_length_word() {
        let encoded = encode_string("data:application/json;base64,e30=", 33);
        assert_eq!(
            decode_string(&encoded).unwrap(),
            "data:application/json;base64,e30="
        );
    }

    #[test]
    fn test_length_word_keeps_embedded_nul() {
        let encoded = encode_string("ab\0", 3);
        assert_eq!(decode_string(&encoded).unwrap(), "ab\0");
    }

    #[test]
    fn test_zero_header_falls_back_to_nul_stripping() {
        let encoded = format!("0x{}{}000000", "0".repeat(128), hex::encode("hello"));
        assert_eq!(decode_string(&encoded).unwrap(), "hello");
    }

    #[test]
    fn test_oversized_length_word_falls_back() {
        let encoded = encode_string("hi", 4096);
        assert_eq!(decode_string(&encoded).unwrap(), "hi");
    }

    #[test]
    fn test_decode_without_prefix() {
        let encoded = encode_string("plain", 5);
        assert_eq!(decode_string(&encoded[2..]).unwrap(), "plain");
    }

    #[test]
    fn test_short_result() {
        assert!(matches!(
            decode_string("0x1234"),
            Err(AbiError::InvalidHeader)
        ));
    }

    #[test]
    fn test_bad_payload() {
        let odd = format!("0x{}abc", "0".repeat(128));
        assert!(matches!(decode_string(&odd), Err(AbiError::Hex(_))));

        let not_utf8 = format!("0x{}ff", "0".repeat(128));
        assert!(matches!(decode_string(&not_utf8), Err(AbiError::Utf8(_))));
    }
}
