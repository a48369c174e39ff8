//! # vlw2array
//!
//! Convert a VLW font file into a C header declaring a `PROGMEM` byte array,
//! ready to compile into microcontroller firmware.
//!
//! The VLW payload is treated as an opaque byte blob; nothing inside it is
//! parsed. Given `glyphs-16.vlw`, the tool writes `glyphs16.h` next to it:
//!
//! ```c
//! #include <pgmspace.h>
//!
//! const uint8_t glyphs16[] PROGMEM = {
//! 0x00, 0x01, 0x02, ...
//! };
//! ```
//!
//! ## Example
//!
//! ```no_run
//! let header_path = vlw2array::convert("fonts/glyphs-16.vlw".as_ref()).unwrap();
//! println!("wrote {}", header_path.display());
//! ```

mod emit;
mod error;

pub use emit::{
    REQUIRED_EXTENSION, derive_identifier, format_bytes, has_vlw_extension, output_path,
    render_header,
};
pub use error::{Error, Result};

use std::{
    fs::{read, write},
    path::{Path, PathBuf},
};

use log::{debug, info};

/// Convert a VLW file to a byte-array header next to it.
///
/// Checks the extension, reads the whole file, renders the header, and
/// overwrites any existing output unconditionally. Returns the path of the
/// written header.
pub fn convert(path: &Path) -> Result<PathBuf> {
    if !has_vlw_extension(path) {
        return Err(Error::NotVlw { path: path.to_path_buf() });
    }

    let name = derive_identifier(path)?;
    let data = read(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    let header = render_header(&name, &format_bytes(&data));
    let out = output_path(path)?;
    write(&out, header)?;
    info!("Wrote {}", out.display());

    Ok(out)
}
