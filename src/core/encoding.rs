// src/core/encoding.rs
use encoding_rs::EUC_KR;

/// Decode an EUC-KR page body. Unmappable bytes become U+FFFD.
pub fn decode_euc_kr(bytes: &[u8]) -> String {
    let (text, _, had_errors) = EUC_KR.decode(bytes);
    if had_errors {
        logd!("EUC-KR decode replaced malformed bytes ({} bytes in)", bytes.len());
    }
    text.into_owned()
}
