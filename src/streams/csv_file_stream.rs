use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::BinaryInstance;
use crate::streams::Stream;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads a comma-separated file of binary values.
///
/// The first record names the attributes. By default the last column is the
/// class; [`CsvFileStream::open_with_label`] picks it by name instead. Token
/// `"0"` reads as 0 and every other token as 1. Blank lines are skipped.
pub struct CsvFileStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    reader: Reader<File>,
    pending: Option<(u64, StringRecord)>,
}

impl CsvFileStream {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        Self::open_inner(path.as_ref(), None)
    }

    pub fn open_with_label<P: AsRef<Path>>(path: P, label: &str) -> Result<Self, DataError> {
        Self::open_inner(path.as_ref(), Some(label))
    }

    fn open_inner(path: &Path, label: Option<&str>) -> Result<Self, DataError> {
        let (reader, names) = Self::read_header(path)?;
        let relation = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let header = match label {
            Some(name) => InstanceHeader::with_class_attribute(relation, names, name)?,
            None => {
                let class_index = names.len() - 1;
                InstanceHeader::new(relation, names, class_index)?
            }
        };

        let mut stream = Self {
            path: path.to_path_buf(),
            header: Arc::new(header),
            reader,
            pending: None,
        };
        stream.advance()?;
        Ok(stream)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_header(path: &Path) -> Result<(Reader<File>, Vec<String>), DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // flexible: short or long rows surface as RowWidth with their line number.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);
        let names: Vec<String> = reader
            .headers()
            .map_err(|source| csv_error(path, source))?
            .iter()
            .map(str::to_string)
            .collect();
        if names.iter().all(|n| n.is_empty()) {
            return Err(DataError::MissingHeader(path.to_path_buf()));
        }
        Ok((reader, names))
    }

    /// Loads the next non-blank record into `pending`.
    fn advance(&mut self) -> Result<(), DataError> {
        self.pending = None;
        let mut record = StringRecord::new();
        loop {
            let more = self
                .reader
                .read_record(&mut record)
                .map_err(|source| csv_error(&self.path, source))?;
            if !more {
                return Ok(());
            }
            if record.iter().any(|field| !field.is_empty()) {
                let line = record.position().map_or(0, |p| p.line());
                self.pending = Some((line, record));
                return Ok(());
            }
        }
    }
}

fn csv_error(path: &Path, source: csv::Error) -> DataError {
    DataError::Csv {
        path: path.to_path_buf(),
        line: source.position().map_or(0, |p| p.line()),
        source,
    }
}

impl Stream for CsvFileStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    fn next_instance(&mut self) -> Result<Option<BinaryInstance>, DataError> {
        let Some((line, record)) = self.pending.take() else {
            return Ok(None);
        };
        let expected = self.header.number_of_attributes();
        if record.len() != expected {
            return Err(DataError::RowWidth {
                path: self.path.clone(),
                line,
                expected,
                found: record.len(),
            });
        }
        let tokens: Vec<&str> = record.iter().collect();
        let instance = BinaryInstance::from_tokens(Arc::clone(&self.header), &tokens)?;
        self.advance()?;
        Ok(Some(instance))
    }

    fn restart(&mut self) -> Result<(), DataError> {
        let (reader, _) = Self::read_header(&self.path)?;
        self.reader = reader;
        self.advance()
    }
}
