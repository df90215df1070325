//! Interpretation of raw response bodies

// standard library
use std::collections::HashSet;
use std::format as f;

// internal modules
use crate::error::{Error, ErrorKind, Result};
use crate::table::Table;

// external crates
use log::{trace, warn};

/// Known API error codes, their failure kinds and messages
///
/// Anything not listed here is reported as [ErrorKind::UnknownApi] with the
/// raw code attached.
const API_ERROR_CODES: [(u64, ErrorKind, &str); 7] = [
    (
        0,
        ErrorKind::NoDataFound,
        "request is valid, but no data fulfilling the conditions was found",
    ),
    (1, ErrorKind::MissingParameter, "'fields' parameter is not given"),
    (
        2,
        ErrorKind::MissingParameter,
        "'nuclides' parameter is required but was not given",
    ),
    (
        3,
        ErrorKind::InvalidParameter,
        "'fields' parameter is misspelled or invalid",
    ),
    (
        4,
        ErrorKind::MissingParameter,
        "'parents' or 'products' not given for fission yields",
    ),
    (5, ErrorKind::InvalidParameter, "'rad_types' parameter is not valid"),
    (
        6,
        ErrorKind::UnknownApi,
        "an unknown error occurred on the API server",
    ),
];

/// Turn a raw response body into a [Table]
///
/// A body made up entirely of digits (ignoring surrounding whitespace) is an
/// error code from the API and never data, even if a genuine single-value
/// result would look the same.
///
/// ```rust
/// # use livechart_client::{interpret, ErrorKind};
/// let error = interpret("0").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::NoDataFound);
///
/// let table = interpret("a_daughter,cumulative_thermal_fy\n90,0.0578\n").unwrap();
/// assert_eq!(table.len(), 1);
/// ```
///
/// Otherwise the body is read as CSV with a header row. Values are trimmed,
/// rows shorter than the header are padded with blanks, and rows longer than
/// the header are an error. A repeated column name gets a `.1`, `.2`, ...
/// suffix so every column stays reachable by name.
pub fn interpret(raw: &str) -> Result<Table> {
    if is_error_code(raw) {
        return Err(api_error(raw.trim()));
    }

    parse_csv(raw)
}

/// Check if a body is an API error code rather than data
pub fn is_error_code(raw: &str) -> bool {
    let raw = raw.trim();
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Map the digits of an API error code to the corresponding [Error]
pub fn api_error(digits: &str) -> Error {
    let Ok(code) = digits.parse::<u64>() else {
        return Error::UnknownApi {
            code: None,
            message: f!("received unknown API error code: {digits}"),
        };
    };

    match API_ERROR_CODES.iter().find(|(c, _, _)| *c == code) {
        Some((_, kind, message)) => error_of_kind(*kind, code, message),
        None => Error::UnknownApi {
            code: Some(code),
            message: f!("received unknown API error code: {code}"),
        },
    }
}

fn error_of_kind(kind: ErrorKind, code: u64, message: &str) -> Error {
    match kind {
        ErrorKind::NoDataFound => Error::NoDataFound,
        ErrorKind::MissingParameter => Error::MissingParameter(message.to_string()),
        ErrorKind::InvalidParameter => Error::InvalidParameter(message.to_string()),
        _ => Error::UnknownApi {
            code: Some(code),
            message: message.to_string(),
        },
    }
}

fn csv_reader(csv_text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(csv_text.as_bytes())
}

fn parse_csv(csv_text: &str) -> Result<Table> {
    if csv_text.trim().is_empty() {
        return Err(Error::Unexpected("response body is empty".into()));
    }

    let mut reader = csv_reader(csv_text);
    let headers = unique_headers(reader.headers()?.iter().map(String::from).collect());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(Error::Unexpected(
                f!(
                    "row {i} has {} values but there are {} columns",
                    record.len(),
                    headers.len()
                )
                .into(),
            ));
        }

        let mut row: Vec<String> = record.iter().map(String::from).collect();
        if row.len() < headers.len() {
            warn!(
                "Row {i} has {} of {} values, padding with blanks",
                row.len(),
                headers.len()
            );
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    trace!("Parsed {} rows x {} columns", rows.len(), headers.len());
    Table::from_parts(headers, rows)
}

/// Rename repeated column names by appending `.1`, `.2`, ...
///
/// Beta- `decay_rads` bodies list `unc_me` twice, for example. The first
/// occurrence keeps its name.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(headers.len());
    let mut unique = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        let mut n = 0;
        while seen.contains(&name) {
            n += 1;
            name = f!("{header}.{n}");
        }
        if n > 0 {
            warn!("Duplicate column \"{header}\" renamed to \"{name}\"");
        }
        seen.insert(name.clone());
        unique.push(name);
    }
    unique
}
