pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, RenderOptions};

use crate::errors::RoiError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<(), RoiError> {
    fs::write(path, content).map_err(|e| RoiError::io(path, e))
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Open the report destination: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, RoiError> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| RoiError::io(path, e))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
