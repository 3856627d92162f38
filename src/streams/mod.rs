mod csv_file_stream;
mod stream;

pub use csv_file_stream::CsvFileStream;
pub use stream::Stream;
