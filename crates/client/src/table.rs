//! Tabular results returned by successful queries

// standard library
use std::format as f;
use std::str::FromStr;

// internal modules
use crate::error::{Error, Result};

/// Row/column data from a successful query
///
/// The columns are whatever the API sent back in the CSV header, so nothing
/// is known about them statically. Every value is kept as the text received
/// and numeric conversion is left to the caller through [Row::parse].
///
/// ```rust
/// # use livechart_client::interpret;
/// let table = interpret("z,n,symbol,half_life_sec\n27,33,Co,166344192\n").unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.headers(), ["z", "n", "symbol", "half_life_sec"]);
///
/// let row = table.row(0).unwrap();
/// assert_eq!(row.get("symbol"), Some("Co"));
/// assert_eq!(row.parse::<f64>("half_life_sec"), Some(166344192.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from headers and rows of values
    ///
    /// Header names must be unique and every row must have exactly one
    /// value per header.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some(name) = headers
            .iter()
            .enumerate()
            .find_map(|(i, h)| headers[..i].contains(h).then_some(h))
        {
            return Err(Error::Unexpected(f!("duplicate column \"{name}\"").into()));
        }

        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(Error::Unexpected(
                f!(
                    "row {i} has {} values but there are {} columns",
                    row.len(),
                    headers.len()
                )
                .into(),
            ));
        }

        Ok(Self { headers, rows })
    }

    /// Column names in the order received
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Row at a given index
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            headers: &self.headers,
            values,
        })
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            headers: &self.headers,
            values,
        })
    }

    /// Iterate over every value in a named column
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Write the table back out as CSV text
    ///
    /// Values containing commas or quotes are quoted, so reading the output
    /// back with [interpret](crate::interpret) gives an equal table. A table
    /// without columns has no CSV form and is an error.
    pub fn to_csv(&self) -> Result<String> {
        if self.headers.is_empty() {
            return Err(Error::Unexpected("table has no columns".into()));
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Unexpected(Box::new(e.into_error())))?;
        String::from_utf8(bytes).map_err(|e| Error::Unexpected(Box::new(e)))
    }

    /// Serialise to a JSON array with one object per row
    ///
    /// Every value is a JSON string, blank cells become `null`.
    pub fn to_json(&self) -> Result<String> {
        let rows: Vec<serde_json::Value> = self.rows().map(|row| row.to_json_value()).collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Table ({} rows x {} columns)", self.len(), self.n_columns())?;
        for row in self.rows() {
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// View of a single row in a [Table]
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Raw text under a column
    ///
    /// `None` if the column does not exist. Blank cells are `Some("")`.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let values = self.values;
        self.headers
            .iter()
            .position(|h| h == column)
            .map(|i| values[i].as_str())
    }

    /// Non-blank text under a column
    pub fn value(&self, column: &str) -> Option<&'a str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// Value under a column converted to `T`
    ///
    /// Missing columns, blank cells and anything `T` fails to parse all
    /// coerce to `None`.
    pub fn parse<T: FromStr>(&self, column: &str) -> Option<T> {
        self.value(column).and_then(|v| v.parse().ok())
    }

    /// Values in column order
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let (headers, values) = (self.headers, self.values);
        headers
            .iter()
            .zip(values.iter())
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }

    fn to_json_value(self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    "" => serde_json::Value::Null,
                    v => serde_json::Value::String(v.to_string()),
                };
                (k.to_string(), value)
            })
            .collect::<serde_json::Map<String, serde_json::Value>>();
        serde_json::Value::Object(map)
    }
}

impl std::fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = self.headers.iter().map(|h| h.len()).max().unwrap_or(0);
        let mut s = "Row\n".to_string();
        for (column, value) in self.iter() {
            let value = if value.is_empty() { "none" } else { value };
            s += &f!("  {column:<width$} {value}\n");
        }
        write!(f, "{s}")
    }
}
