use std::io::Write;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

/// Stages of the software delivery lifecycle, in the order they are printed.
pub const STAGES: [&str; 6] = ["plan", "code", "test", "delivery", "deploy", "monitor"];

/// Standard (RFC 4648, padded) Base64 of the label's UTF-8 bytes.
pub fn encode_stage(label: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(label.as_bytes());
    log::debug!("[encode_stage] {label} -> {encoded}");
    encoded
}

pub fn encoded_stages() -> impl Iterator<Item = String> {
    STAGES.into_iter().map(encode_stage)
}

/// Writes one encoded stage per line, in `STAGES` order.
pub fn write_encoded_stages<W: Write>(out: &mut W) -> Result<()> {
    for (index, encoded) in encoded_stages().enumerate() {
        writeln!(out, "{encoded}")
            .with_context(|| format!("failed to write stage {}", STAGES[index]))?;
    }
    out.flush().context("failed to flush encoded stages")?;

    log::debug!("Wrote {} encoded stages.", STAGES.len());
    Ok(())
}

/// Inverse of [`encode_stage`].
pub fn decode_stage(encoded: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .with_context(|| format!("invalid base64: {encoded}"))?;
    Ok(String::from_utf8(bytes)?)
}
