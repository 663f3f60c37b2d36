/// Console printing and line reading.
pub mod console;

/// Path-based file helpers.
pub mod files;

/// Read / process / write seams over tracked files.
pub mod pipeline;

/// A file handle carrying caller-defined attributes.
pub mod tracked_file;

#[doc(inline)]
pub use pipeline::{FileReader, FileWriter, Processor};

#[doc(inline)]
pub use tracked_file::TrackedFile;
