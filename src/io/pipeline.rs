//! Read / process / write seams over tracked files.
//!
//! The three traits split a file transformation into its natural phases so
//! each side can be swapped or mocked independently. [`run_pipeline`] ties
//! them together for the common one-in, one-out case.

use log::debug;

use crate::error::UtilError;

use super::tracked_file::TrackedFile;

/// Reads a value of type `T` out of a file.
pub trait FileReader<T> {
    fn read(&self, file: &TrackedFile) -> Result<T, UtilError>;
}

/// Writes a value of type `T` into a file.
pub trait FileWriter<T> {
    fn write(&self, data: &T, file: &TrackedFile) -> Result<(), UtilError>;
}

/// Transforms a read value before it is written.
pub trait Processor<T, R> {
    fn process(&self, input: &T) -> R;
}

/// Identity processor for pipelines that move data unchanged.
#[derive(Default)]
pub struct DefaultProcessor;

impl<T: Clone> Processor<T, T> for DefaultProcessor {
    fn process(&self, input: &T) -> T {
        input.clone()
    }
}

/// Reads the whole file as a string.
#[derive(Default)]
pub struct StringFileReader;

impl FileReader<String> for StringFileReader {
    fn read(&self, file: &TrackedFile) -> Result<String, UtilError> {
        std::fs::read_to_string(file.path()).map_err(|source| UtilError::FileRead {
            path: file.path().display().to_string(),
            source,
        })
    }
}

/// Writes a string as the whole file content.
#[derive(Default)]
pub struct StringFileWriter;

impl FileWriter<String> for StringFileWriter {
    fn write(&self, data: &String, file: &TrackedFile) -> Result<(), UtilError> {
        file.write(data)
    }
}

/// Reads `input`, processes the value, and writes the result to `output`.
pub fn run_pipeline<T, R>(
    input: &TrackedFile,
    reader: &dyn FileReader<T>,
    processor: &dyn Processor<T, R>,
    writer: &dyn FileWriter<R>,
    output: &TrackedFile,
) -> Result<(), UtilError> {
    debug!("Start of pipeline: {}", input.path().display());

    let data = reader.read(input)?;
    let processed = processor.process(&data);
    writer.write(&processed, output)?;

    debug!("End of pipeline: {}", output.path().display());
    Ok(())
}
