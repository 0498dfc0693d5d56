//! Row and column counting for CSV files

use fileinfo_plugin::prelude::*;
use std::path::Path;
use tracing::debug;

pub struct CsvShape;

impl CsvShape {
    /// Count records and the widest record. A parse error part-way through
    /// collapses the report to zero rows and columns.
    fn shape(&self, path: &Path) -> Result<(usize, usize), HandlerError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| {
                HandlerError::failed(format!("failed to open {}: {source}", path.display()))
            })?;

        let mut rows = 0;
        let mut columns = 0;
        for record in reader.records() {
            match record {
                Ok(record) => {
                    rows += 1;
                    columns = columns.max(record.len());
                }
                Err(source) => {
                    debug!(path = %path.display(), error = %source, "csv parse failed");
                    return Ok((0, 0));
                }
            }
        }
        Ok((rows, columns))
    }
}

impl FileHandler for CsvShape {
    fn meta(&self) -> HandlerMeta {
        HandlerMeta {
            name: "csv_shape",
            description: "Count rows and columns in a CSV file",
        }
    }

    fn inspect(&self, path: &Path) -> Result<Vec<String>, HandlerError> {
        let (rows, columns) = self.shape(path)?;
        Ok(vec![
            format!("Rows {rows}"),
            format!("Columns {columns}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_rows_and_max_columns() {
        let file = fixture(b"a,b,c\n1,2,3\n4,5\n");

        let lines = CsvShape.inspect(file.path()).unwrap();
        assert_eq!(lines, vec!["Rows 3".to_string(), "Columns 3".to_string()]);
    }

    #[test]
    fn test_malformed_csv_reports_zero() {
        // Invalid UTF-8 makes record decoding fail part-way through
        let file = fixture(b"a,b\n\xff\xfe,1\nc,d\n");

        let lines = CsvShape.inspect(file.path()).unwrap();
        assert_eq!(lines, vec!["Rows 0".to_string(), "Columns 0".to_string()]);
    }

    #[test]
    fn test_empty_file() {
        let file = fixture(b"");

        let lines = CsvShape.inspect(file.path()).unwrap();
        assert_eq!(lines, vec!["Rows 0".to_string(), "Columns 0".to_string()]);
    }
}
