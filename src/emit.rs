//! Identifier derivation, hex formatting, and header rendering.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Required input extension, compared case-insensitively.
pub const REQUIRED_EXTENSION: &str = "vlw";

/// Byte literals per output line.
const BYTES_PER_LINE: usize = 16;

/// Check whether a path has the `.vlw` extension (case-insensitive).
pub fn has_vlw_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(REQUIRED_EXTENSION))
}

/// Derive the C array identifier from the input path.
///
/// Takes the file stem (no directory, no extension) and strips every hyphen.
/// No other sanitization is applied, so a stem like `8x8` passes through as-is
/// even though it is not a valid C identifier.
pub fn derive_identifier(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::NoFileName { path: path.to_path_buf() })?;
    Ok(stem.replace('-', ""))
}

/// Format bytes as `0xHH, ` literals, 16 per line.
///
/// The newline precedes the first byte of each line after the first, so the
/// output has no leading or trailing newline and an empty input produces an
/// empty string.
pub fn format_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 6 + data.len() / BYTES_PER_LINE);
    for (index, byte) in data.iter().enumerate() {
        if index > 0 && index % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
        out.push_str(&format!("0x{byte:02X}, "));
    }
    out
}

/// Wrap a formatted byte block in the header template.
///
/// The leading blank line matches the reference generator's output.
pub fn render_header(name: &str, bytes: &str) -> String {
    format!("\n#include <pgmspace.h>\n\nconst uint8_t {name}[] PROGMEM = {{\n{bytes}\n}};\n")
}

/// Compute the output path: same directory, derived identifier, `.h` extension.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let name = derive_identifier(input)?;
    Ok(input.with_file_name(format!("{name}.h")))
}
