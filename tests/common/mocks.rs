//! Mock versions of the pipeline seams.
use mockall::mock;

use commons_util_rs::error::UtilError;
use commons_util_rs::io::{FileReader, FileWriter, TrackedFile};

mock! {
    pub TextReader {}
    impl FileReader<String> for TextReader {
        fn read(&self, file: &TrackedFile) -> Result<String, UtilError>;
    }
}

mock! {
    pub TextWriter {}
    impl FileWriter<String> for TextWriter {
        fn write(&self, data: &String, file: &TrackedFile) -> Result<(), UtilError>;
    }
}
