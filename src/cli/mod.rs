pub mod decode;
pub mod encode;
pub mod hack;
pub mod train;

pub use decode::*;
pub use encode::*;
pub use hack::*;
pub use train::*;

use crate::error::Result;
use std::io::{Read, Write};
use std::path::Path;

/// Read the working text from a file, or from stdin when no path is given.
pub(crate) fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write the result to a file, or to stdout (with a trailing newline) when
/// no path is given.
pub(crate) fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
