use memchr::memchr;

use crate::types::RouteParams;

use super::CompiledRoute;

// Matching never fails: no-match yields an empty map, and a capture whose
// percent-escapes cannot be decoded is returned as the raw text.
pub fn extract_params(compiled: &CompiledRoute, normalized: &str) -> RouteParams {
    let Some(captures) = compiled.regex().captures(normalized) else {
        return RouteParams::new();
    };

    let mut params = RouteParams::with_capacity(compiled.param_names().len());
    for (index, name) in compiled.param_names().iter().enumerate() {
        if let Some(capture) = captures.get(index + 1) {
            params.insert(name.to_string(), decode_component(capture.as_str()));
        }
    }

    params
}

fn decode_component(raw: &str) -> String {
    match try_decode(raw) {
        Some(decoded) => decoded,
        None => raw.to_string(),
    }
}

fn try_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();

    if memchr(b'%', bytes).is_none() {
        return Some(raw.to_string());
    }

    let mut output = Vec::with_capacity(bytes.len());
    let mut idx = 0usize;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte == b'%' {
            if idx + 2 >= bytes.len() {
                return None;
            }
            let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2])?;
            output.push(value);
            idx += 3;
            continue;
        }
        output.push(byte);
        idx += 1;
    }

    String::from_utf8(output).ok()
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}
