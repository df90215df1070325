//! Query nuclear data directly from the IAEA Live Chart of Nuclides
//!
//! This crate wraps the Live Chart data download API
//! (`https://nds.iaea.org/relnsd/v1/data`) in a small blocking client.
//!
//! See <https://www-nds.iaea.org/relnsd/vcharthtml/api_v0_guide.html> for
//! further information on the API itself.
//!
//! ## Implementation
//!
//! Each request is a single GET with a set of named [Query] parameters. The
//! API answers with either CSV text or a bare integer error code, so every
//! response goes through [interpret()]:
//!
//! | code | [Error] variant | meaning |
//! | ---- | --------------- | ------- |
//! | 0 | `NoDataFound` | valid request, but no matching data |
//! | 1 | `MissingParameter` | `fields` not given |
//! | 2 | `MissingParameter` | `nuclides` required but not given |
//! | 3 | `InvalidParameter` | `fields` misspelled or invalid |
//! | 4 | `MissingParameter` | `parents` or `products` not given for yields |
//! | 5 | `InvalidParameter` | `rad_types` not valid |
//! | 6 | `UnknownApi` | unknown error on the server |
//! | other | `UnknownApi` | code kept for diagnostics |
//!
//! Anything else is a [Table] of text values, one row per CSV record.
//!
//! For example:
//!
//! ```rust, no_run
//! # use livechart_client::{LiveChartClient, RadType, Table};
//! let client = LiveChartClient::new().unwrap();
//!
//! // Gamma emissions following the decay of Cobalt-60
//! let gammas: Table = client.decay_rads("60co", RadType::Gamma).unwrap();
//!
//! // Find the 1173 keV emission as an example
//! let line = gammas
//!     .rows()
//!     .find(|row| row.parse::<f64>("energy") == Some(1173.228))
//!     .unwrap();
//!
//! // Print every column of this row
//! println!("{line}");
//! ```
//!
//! Arguments that are obviously wrong, such as an unknown radiation type or
//! a fission yield query without a parent or product, fail before any
//! request is sent.

// Modules
mod client;
mod common;
mod error;
mod interpret;
mod parsers;
mod query;
mod table;
mod transport;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use client::LiveChartClient;

#[doc(inline)]
pub use common::{Field, Nuclide, NuclideQuery, RadType, YieldType};

#[doc(inline)]
pub use error::{BoxError, Error, ErrorKind, Result};

#[doc(inline)]
pub use interpret::{api_error, interpret, is_error_code};

#[doc(inline)]
pub use query::Query;

#[doc(inline)]
pub use table::{Row, Table};

#[doc(inline)]
pub use transport::{Config, HttpTransport, Transport, BASE_URL, USER_AGENT};
