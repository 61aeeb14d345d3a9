pub(crate) fn normalize_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

/// Decodes a raw field, replacing invalid UTF-8 instead of failing the load.
pub(crate) fn decode_field(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}
