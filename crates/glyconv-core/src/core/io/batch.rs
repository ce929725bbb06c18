use crate::core::model::ConversionResult;
use crate::core::inputs::parameter_set::ParameterSet;
use crate::core::params::ParameterTable;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchIoError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Row {row} of '{path}': column '{column}' holds '{value}', which is not a number")]
    InvalidNumber {
        path: String,
        row: usize,
        column: String,
        value: String,
    },
    #[error("Duplicate column '{column}' in '{path}'")]
    DuplicateColumn { path: String, column: String },
    #[error("CSV write error: {0}")]
    Write(#[from] csv::Error),
    #[error("I/O error while writing results: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads one parameter set per CSV row; the header row names the parameters.
pub fn read_parameter_sets(path: &Path) -> Result<Vec<ParameterSet>, BatchIoError> {
    let file = std::fs::File::open(path).map_err(|e| BatchIoError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e.into(),
    })?;
    read_parameter_sets_from(file, &path.to_string_lossy())
}

pub fn read_parameter_sets_from<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<ParameterSet>, BatchIoError> {
    let csv_error = |e: csv::Error| BatchIoError::Csv {
        path: source_name.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    for (i, column) in headers.iter().enumerate() {
        if headers.iter().skip(i + 1).any(|other| other == column) {
            return Err(BatchIoError::DuplicateColumn {
                path: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut sets = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row = index + 1;
        let mut set = ParameterSet::new();
        for (column, field) in headers.iter().zip(record.iter()) {
            let value: f64 = field.parse().map_err(|_| BatchIoError::InvalidNumber {
                path: source_name.to_string(),
                row,
                column: column.to_string(),
                value: field.to_string(),
            })?;
            set.set(column, value);
        }
        sets.push(set);
    }
    Ok(sets)
}

/// Writes `row,conversion,total_impact` followed by one `impact_<name>` column per
/// table entry, in table order.
pub fn write_results<W: Write>(
    writer: W,
    table: &ParameterTable,
    results: &[ConversionResult],
) -> Result<(), BatchIoError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec![
        "row".to_string(),
        "conversion".to_string(),
        "total_impact".to_string(),
    ];
    header.extend(table.names().map(|name| format!("impact_{name}")));
    writer.write_record(&header)?;

    for (index, result) in results.iter().enumerate() {
        let mut record = vec![
            (index + 1).to_string(),
            format!("{:.6}", result.conversion),
            format!("{:.6}", result.total_impact),
        ];
        record.extend(table.names().map(|name| {
            result
                .breakdown
                .get(name)
                .map(|impact| format!("{impact:.6}"))
                .unwrap_or_default()
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ConversionModel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_one_set_per_row() {
        let csv = "t2,t3\n200,201.5\n 195 , 199\n";
        let sets = read_parameter_sets_from(csv.as_bytes(), "inline").unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].get("t2"), Some(200.0));
        assert_eq!(sets[0].get("t3"), Some(201.5));
        assert_eq!(sets[1].get("t2"), Some(195.0));
    }

    #[test]
    fn reports_row_and_column_of_bad_number() {
        let csv = "t2,t3\n200,201\n200,hot\n";
        let err = read_parameter_sets_from(csv.as_bytes(), "inline").unwrap_err();
        match err {
            BatchIoError::InvalidNumber {
                row, column, value, ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "t3");
                assert_eq!(value, "hot");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "t2,t3\n200\n";
        let result = read_parameter_sets_from(csv.as_bytes(), "inline");
        assert!(matches!(result, Err(BatchIoError::Csv { .. })));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let csv = "t2,t2\n200,201\n";
        let result = read_parameter_sets_from(csv.as_bytes(), "inline");
        assert!(matches!(result, Err(BatchIoError::DuplicateColumn { .. })));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let result = read_parameter_sets(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(BatchIoError::Csv { .. })));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sets.csv");
        fs::write(&path, "lhsv\n0.55\n").unwrap();
        let sets = read_parameter_sets(&path).unwrap();
        assert_eq!(sets[0].get("lhsv"), Some(0.55));
    }

    #[test]
    fn writes_header_and_rows_in_table_order() {
        let table = ParameterTable::glycerol_hydrogenolysis();
        let model = ConversionModel::new(table.clone()).unwrap();
        let result = model
            .total_conversion(&ParameterSet::at_optimum(&table))
            .unwrap();

        let mut buffer = Vec::new();
        write_results(&mut buffer, &table, &[result.clone(), result]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("row,conversion,total_impact,impact_t2,impact_t3"));
        assert!(lines[0].ends_with("impact_feed_ph"));
        assert!(lines[1].starts_with("1,100.000000,67.500000,15.000000,12.500000"));
        assert!(lines[2].starts_with("2,"));
    }
}
