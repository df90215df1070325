//! End to end training on the full chart of nuclides

// internal modules
use crate::dataset::HalfLifeDataset;
use crate::error::Result;
use crate::model::{HalfLifeModel, Metrics};

// external crates
use livechart_client::{LiveChartClient, Transport};
use log::info;

/// Settings for [train_half_life_model]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOptions {
    /// Fraction of samples held out for evaluation
    pub test_size: f64,
    /// Seed for the train/test shuffle
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }
}

/// Fetch every ground state and fit a half-life model
///
/// This downloads the whole chart in a single request, so it can take a
/// while on a slow connection.
///
/// ```rust, no_run
/// # use livechart_client::LiveChartClient;
/// # use livechart_ml::{train_half_life_model, TrainOptions};
/// let client = LiveChartClient::new().unwrap();
/// let (model, metrics) = train_half_life_model(&client, &TrainOptions::default()).unwrap();
/// println!("{metrics}");
///
/// let ca48 = client.ground_states("48ca").unwrap();
/// let predicted = model.predict_seconds(&ca48.row(0).unwrap());
/// println!("Predicted Ca-48 half-life: {predicted:?} s");
/// ```
pub fn train_half_life_model<T: Transport>(
    client: &LiveChartClient<T>,
    options: &TrainOptions,
) -> Result<(HalfLifeModel, Metrics)> {
    info!("Fetching all ground state data");
    let table = client.ground_states("all")?;

    let dataset = HalfLifeDataset::from_table(&table)?;
    let (train, test) = dataset.split(options.test_size, options.seed)?;

    info!("Fitting linear model to {} samples", train.len());
    let model = HalfLifeModel::fit(&train)?;
    let metrics = model.evaluate(&test)?;
    info!(
        "Test set R-squared {:.4}, RMSLE {:.4}",
        metrics.r2_score, metrics.rmsle
    );

    Ok((model, metrics))
}
