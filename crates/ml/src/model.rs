//! Linear least squares regression

// internal modules
use crate::dataset::{numeric_values, HalfLifeDataset};
use crate::error::{Error, Result};

// external crates
use livechart_client::Row;
use nalgebra::{DMatrix, DVector};

/// Singular values below this are treated as zero in the solve
const SVD_EPSILON: f64 = 1e-12;

/// Ordinary least squares fit with an intercept
///
/// Solved through the SVD of the design matrix, so collinear features give
/// the minimum norm solution instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    coefficients: DVector<f64>,
}

impl LinearModel {
    /// Fit `y = intercept + x . coefficients`
    pub fn fit(samples: &[Vec<f64>], targets: &[f64]) -> Result<Self> {
        if samples.is_empty() || samples.len() != targets.len() {
            return Err(Error::InsufficientData {
                found: samples.len().min(targets.len()),
                required: 1,
            });
        }

        let n_features = samples[0].len();
        if let Some(bad) = samples.iter().find(|s| s.len() != n_features) {
            return Err(Error::FeatureMismatch {
                expected: n_features,
                found: bad.len(),
            });
        }

        // leading column of ones for the intercept
        let design = DMatrix::from_fn(samples.len(), n_features + 1, |r, c| match c {
            0 => 1.0,
            c => samples[r][c - 1],
        });
        let y = DVector::from_column_slice(targets);

        let solution = design
            .svd(true, true)
            .solve(&y, SVD_EPSILON)
            .map_err(|e| Error::SingularFit(e.to_string()))?;

        Ok(Self {
            intercept: solution[0],
            coefficients: solution.rows(1, n_features).into_owned(),
        })
    }

    /// Constant term
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// One coefficient per feature
    pub fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }

    /// Predict a single sample
    pub fn predict(&self, sample: &[f64]) -> Result<f64> {
        if sample.len() != self.coefficients.len() {
            return Err(Error::FeatureMismatch {
                expected: self.coefficients.len(),
                found: sample.len(),
            });
        }

        Ok(self.intercept + self.coefficients.dot(&DVector::from_column_slice(sample)))
    }
}

/// Linear model of `ln(1 + half_life_sec)` on ground state properties
#[derive(Debug, Clone, PartialEq)]
pub struct HalfLifeModel {
    features: Vec<String>,
    linear: LinearModel,
}

impl HalfLifeModel {
    /// Fit to a prepared dataset
    pub fn fit(dataset: &HalfLifeDataset) -> Result<Self> {
        Ok(Self {
            features: dataset.features().to_vec(),
            linear: LinearModel::fit(dataset.samples(), dataset.targets())?,
        })
    }

    /// Feature columns the model expects, in order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The underlying linear fit
    pub fn linear(&self) -> &LinearModel {
        &self.linear
    }

    /// Predict `ln(1 + half_life_sec)` from feature values
    pub fn predict_log(&self, sample: &[f64]) -> Result<f64> {
        self.linear.predict(sample)
    }

    /// Predict a half-life in seconds from a ground state row
    ///
    /// `None` if any feature is blank or not numeric in the row.
    pub fn predict_seconds(&self, row: &Row) -> Option<f64> {
        let sample = numeric_values(row, self.features.as_slice())?;
        self.predict_log(&sample).ok().map(f64::exp_m1)
    }

    /// Evaluate on held out data
    pub fn evaluate(&self, dataset: &HalfLifeDataset) -> Result<Metrics> {
        let predicted = dataset
            .samples()
            .iter()
            .map(|s| self.predict_log(s))
            .collect::<Result<Vec<f64>>>()?;
        Metrics::new(dataset.targets(), &predicted)
    }
}

/// Goodness of fit in log space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Coefficient of determination
    pub r2_score: f64,
    /// Root mean squared error of `ln(1 + t)`, i.e. the RMSLE of half-lives
    pub rmsle: f64,
}

impl Metrics {
    /// Compare true and predicted log targets
    pub fn new(actual: &[f64], predicted: &[f64]) -> Result<Self> {
        if actual.is_empty() || actual.len() != predicted.len() {
            return Err(Error::InsufficientData {
                found: actual.len().min(predicted.len()),
                required: 1,
            });
        }

        let n = actual.len() as f64;
        let mean = actual.iter().sum::<f64>() / n;
        let ss_res: f64 = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| (a - p).powi(2))
            .sum();
        let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();

        // constant targets: perfect or nothing
        let r2_score = if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(Self {
            r2_score,
            rmsle: (ss_res / n).sqrt(),
        })
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Model evaluation")?;
        writeln!(f, "  R-squared  {:.4}", self.r2_score)?;
        write!(f, "  RMSLE      {:.4}", self.rmsle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn recovers_exact_plane() {
        // y = 1.5 + 2 x0 - 0.5 x1
        let samples: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![i as f64, ((i * 7) % 5) as f64])
            .collect();
        let targets: Vec<f64> = samples.iter().map(|s| 1.5 + 2.0 * s[0] - 0.5 * s[1]).collect();

        let model = LinearModel::fit(&samples, &targets).unwrap();
        assert!(close(model.intercept(), 1.5));
        assert!(close(model.coefficients()[0], 2.0));
        assert!(close(model.coefficients()[1], -0.5));
        assert!(close(model.predict(&[10.0, 2.0]).unwrap(), 20.5));
    }

    #[test]
    fn collinear_features_still_fit() {
        let samples: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 2.0 * i as f64]).collect();
        let targets: Vec<f64> = (0..10).map(|i| 3.0 * i as f64).collect();

        let model = LinearModel::fit(&samples, &targets).unwrap();
        assert!(close(model.predict(&[4.0, 8.0]).unwrap(), 12.0));
    }

    #[test]
    fn feature_count_is_checked() {
        let samples = vec![vec![1.0, 2.0], vec![1.0]];
        assert!(matches!(
            LinearModel::fit(&samples, &[1.0, 2.0]),
            Err(Error::FeatureMismatch { expected: 2, found: 1 })
        ));

        let model = LinearModel::fit(&[vec![1.0], vec![2.0]], &[1.0, 2.0]).unwrap();
        assert!(model.predict(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn metrics_of_perfect_and_mean_predictions() {
        let actual = [1.0, 2.0, 3.0, 4.0];

        let perfect = Metrics::new(&actual, &actual).unwrap();
        assert!(close(perfect.r2_score, 1.0));
        assert!(close(perfect.rmsle, 0.0));

        let mean = Metrics::new(&actual, &[2.5; 4]).unwrap();
        assert!(close(mean.r2_score, 0.0));
        assert!(close(mean.rmsle, 1.25f64.sqrt()));
    }
}
