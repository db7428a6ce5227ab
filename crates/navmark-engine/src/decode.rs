//! Permissive UTF-8 decoding

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            tracing::trace!("Dropping {} invalid UTF-8 bytes", chunk.invalid().len());
        }
    }
    out
}
