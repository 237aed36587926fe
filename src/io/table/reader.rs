use crate::io::{Format, error::Error};
use crate::model::record::AtomRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::io::Read;

/// Required columns of the atom table, located by header name.
pub const COLUMNS: [&str; 5] = ["ATOM", "X", "Y", "Z", "MAGNETIC_MOMENT"];

/// Reads every row of a CSV atom table.
///
/// Columns are matched by header name, so their order is free and extra
/// columns are ignored. A table with a header but no rows yields an empty
/// vector.
pub fn read_atoms<R: Read>(reader: R) -> Result<Vec<AtomRecord>, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::locate(&headers)?;

    let mut atoms = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 2);
        atoms.push(columns.parse_row(&row, line)?);
    }
    debug!("read {} atom records", atoms.len());
    Ok(atoms)
}

struct ColumnMap {
    atom: usize,
    x: usize,
    y: usize,
    z: usize,
    moment: usize,
}

impl ColumnMap {
    fn locate(headers: &StringRecord) -> Result<Self, Error> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(Error::MissingColumn(name))
        };
        Ok(Self {
            atom: find(COLUMNS[0])?,
            x: find(COLUMNS[1])?,
            y: find(COLUMNS[2])?,
            z: find(COLUMNS[3])?,
            moment: find(COLUMNS[4])?,
        })
    }

    fn parse_row(&self, row: &StringRecord, line: usize) -> Result<AtomRecord, Error> {
        let label = row.get(self.atom).unwrap_or_default();
        if label.is_empty() {
            return Err(Error::parse(Format::Csv, line, "empty ATOM label"));
        }
        let x = parse_float(row, self.x, "X", line)?;
        let y = parse_float(row, self.y, "Y", line)?;
        let z = parse_float(row, self.z, "Z", line)?;
        let moment = parse_float(row, self.moment, "MAGNETIC_MOMENT", line)?;
        Ok(AtomRecord::new(label, [x, y, z], moment))
    }
}

fn parse_float(row: &StringRecord, idx: usize, name: &str, line: usize) -> Result<f64, Error> {
    let raw = row.get(idx).unwrap_or_default();
    let value = raw
        .parse::<f64>()
        .map_err(|_| Error::parse(Format::Csv, line, format!("invalid {name} value '{raw}'")))?;
    if !value.is_finite() {
        return Err(Error::parse(
            Format::Csv,
            line,
            format!("non-finite {name} value '{raw}'"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<Vec<AtomRecord>, Error> {
        read_atoms(input.as_bytes())
    }

    #[test]
    fn reads_standard_table() {
        let atoms = read(
            "ATOM,X,Y,Z,MAGNETIC_MOMENT\n\
             N1,0.0,1.5,-2.0,0.12\n\
             C1,1.0,2.0,3.0,-0.5\n",
        )
        .unwrap();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0], AtomRecord::new("N1", [0.0, 1.5, -2.0], 0.12));
        assert_eq!(atoms[1].label, "C1");
        assert_eq!(atoms[1].magnetic_moment, -0.5);
    }

    #[test]
    fn columns_are_matched_by_name() {
        let atoms = read(
            "MAGNETIC_MOMENT,Z,INDEX,ATOM,Y,X\n\
             0.7, 3.0 ,9,O4,2.0,1.0\n",
        )
        .unwrap();
        assert_eq!(atoms, vec![AtomRecord::new("O4", [1.0, 2.0, 3.0], 0.7)]);
    }

    #[test]
    fn header_only_is_empty() {
        assert!(read("ATOM,X,Y,Z,MAGNETIC_MOMENT\n").unwrap().is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let result = read("ATOM,X,Y,Z\nC1,0,0,0\n");
        assert!(matches!(result, Err(Error::MissingColumn("MAGNETIC_MOMENT"))));
    }

    #[test]
    fn empty_input_reports_first_missing_column() {
        assert!(matches!(read(""), Err(Error::MissingColumn("ATOM"))));
    }

    #[test]
    fn malformed_float_reports_line() {
        let result = read(
            "ATOM,X,Y,Z,MAGNETIC_MOMENT\n\
             C1,0,0,0,0\n\
             C2,abc,0,0,0\n",
        );
        match result {
            Err(Error::Parse {
                format,
                line,
                details,
            }) => {
                assert_eq!(format, Format::Csv);
                assert_eq!(line, 3);
                assert!(details.contains("X"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let result = read("ATOM,X,Y,Z,MAGNETIC_MOMENT\nC1,NaN,0,0,0\n");
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn empty_label_is_rejected() {
        let result = read("ATOM,X,Y,Z,MAGNETIC_MOMENT\n,0,0,0,0\n");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let result = read("ATOM,X,Y,Z,MAGNETIC_MOMENT\nC1,0,0\n");
        assert!(matches!(
            result,
            Err(Error::Parse {
                format: Format::Csv,
                ..
            })
        ));
    }
}
