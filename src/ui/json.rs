use std::io::{self, Write};

use serde::Serialize;

/// Write one JSON document followed by a newline.
pub fn write_document(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// `write_document` to stdout.
pub fn emit(value: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_document(&mut out, value)
}
