//! Half-life regression on Live Chart ground state data
//!
//! A small helper for fitting a baseline model of nuclide half-lives from
//! ground state properties fetched with `livechart-client`.
//!
//! The steps are:
//! - fetch ground states for `all` nuclides
//! - keep the [FEATURES] and [TARGET] columns, dropping any row with a blank
//!   or non-numeric value, or a half-life that is not positive
//! - transform the target to `ln(1 + half_life_sec)`
//! - shuffle with a fixed seed and hold out a test fraction
//! - fit a [LinearModel] by least squares and report [Metrics]
//!
//! [train_half_life_model] does all of this in one call, or the pieces can be
//! used individually on any [Table](livechart_client::Table).

// Modules
mod dataset;
mod error;
mod model;
mod train;

#[doc(inline)]
pub use dataset::{HalfLifeDataset, FEATURES, TARGET};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use model::{HalfLifeModel, LinearModel, Metrics};

#[doc(inline)]
pub use train::{train_half_life_model, TrainOptions};
