//! Half-life training data prepared from ground state tables

// internal modules
use crate::error::{Error, Result};

// external crates
use livechart_client::{Row, Table};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Ground state columns used as model inputs
///
/// Proton number, neutron number, isospin, binding energy, beta- decay
/// energy, alpha decay energy, electron capture decay energy, and the
/// neutron and proton separation energies.
pub const FEATURES: [&str; 9] = [
    "z", "n", "isospin", "binding", "qbm", "qa", "qec", "sn", "sp",
];

/// Ground state column used as the model target, in seconds
pub const TARGET: &str = "half_life_sec";

/// Numeric feature matrix and log-transformed half-lives
///
/// A row from the table is only kept if every feature and the target parse
/// as finite numbers and the half-life is positive. The target is stored as
/// `ln(1 + half_life_sec)`.
///
/// ```rust
/// # use livechart_client::interpret;
/// # use livechart_ml::HalfLifeDataset;
/// let table = interpret(
///     "z,n,isospin,binding,qbm,qa,qec,sn,sp,half_life_sec\n\
///      27,33,3,8746.8,2822.8,-7875.5,-188.2,7492.0,9998.5,166344192\n\
///      27,32,2.5,8768.0,-1565.0,-6950.0,-1565.0,10454.0,7364.6,STABLE\n",
/// )
/// .unwrap();
///
/// let dataset = HalfLifeDataset::from_table(&table).unwrap();
/// assert_eq!(dataset.len(), 1);
/// assert!((dataset.targets()[0] - 166344192f64.ln_1p()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HalfLifeDataset {
    features: Vec<String>,
    samples: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl HalfLifeDataset {
    /// Prepare the default [FEATURES] and [TARGET] from a ground state table
    pub fn from_table(table: &Table) -> Result<Self> {
        Self::with_columns(table, &FEATURES, TARGET)
    }

    /// Prepare an arbitrary set of feature columns and a target column
    pub fn with_columns(table: &Table, features: &[&str], target: &str) -> Result<Self> {
        if let Some(missing) = features
            .iter()
            .chain(std::iter::once(&target))
            .find(|c| !table.has_column(c))
        {
            return Err(Error::MissingColumn(missing.to_string()));
        }

        let mut samples = Vec::new();
        let mut targets = Vec::new();
        for row in table.rows() {
            let Some(x) = numeric_values(&row, features) else {
                continue;
            };
            match numeric(&row, target) {
                Some(y) if y > 0.0 => {
                    samples.push(x);
                    targets.push(y.ln_1p());
                }
                _ => continue,
            }
        }

        info!(
            "{} of {} rows available for training",
            samples.len(),
            table.len()
        );

        Ok(Self {
            features: features.iter().map(|f| f.to_string()).collect(),
            samples,
            targets,
        })
    }

    /// Feature column names
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Feature values, one vector per sample
    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    /// Targets as `ln(1 + half_life_sec)`
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Number of usable samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no rows survived preprocessing
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shuffle with a fixed seed and split into `(train, test)`
    ///
    /// The test set holds `ceil(test_size * len)` samples. Both sets must
    /// end up non-empty.
    pub fn split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(Error::InvalidTestSize(test_size));
        }

        let n_test = (test_size * self.len() as f64).ceil() as usize;
        if n_test == 0 || n_test >= self.len() {
            return Err(Error::InsufficientData {
                found: self.len(),
                required: 2,
            });
        }

        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let (test, train) = indices.split_at(n_test);

        debug!("Split into {} train and {} test samples", train.len(), test.len());
        Ok((self.subset(train), self.subset(test)))
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.clone(),
            samples: indices.iter().map(|&i| self.samples[i].clone()).collect(),
            targets: indices.iter().map(|&i| self.targets[i]).collect(),
        }
    }
}

/// Finite numeric value of a cell
pub(crate) fn numeric(row: &Row, column: &str) -> Option<f64> {
    row.parse::<f64>(column).filter(|v| v.is_finite())
}

/// Finite numeric values for every column, or `None` if any are unusable
pub(crate) fn numeric_values<S: AsRef<str>>(row: &Row, columns: &[S]) -> Option<Vec<f64>> {
    columns.iter().map(|c| numeric(row, c.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str]) -> Table {
        let mut csv = "z,n,half_life_sec\n".to_string();
        for row in rows {
            csv += row;
            csv += "\n";
        }
        livechart_client::interpret(&csv).unwrap()
    }

    fn dataset(n: usize) -> HalfLifeDataset {
        let rows: Vec<String> = (1..=n).map(|i| format!("{i},{i},{i}")).collect();
        let rows: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();
        HalfLifeDataset::with_columns(&table(&rows), &["z", "n"], "half_life_sec").unwrap()
    }

    #[test]
    fn unusable_rows_are_dropped() {
        let t = table(&[
            "1,0,", "1,1,12.3", "1,2,0", "2,1,-5", "x,2,4.5", "2,2,nan", "3,3,inf",
        ]);
        let data = HalfLifeDataset::with_columns(&t, &["z", "n"], "half_life_sec").unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.samples()[0], [1.0, 1.0]);
        assert_eq!(data.targets()[0], 12.3f64.ln_1p());
    }

    #[test]
    fn missing_column_is_reported() {
        let err = HalfLifeDataset::from_table(&table(&["1,1,1"])).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(c) if c == "isospin"));
    }

    #[test]
    fn split_sizes() {
        let (train, test) = dataset(10).split(0.2, 42).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);

        let (train, test) = dataset(11).split(0.2, 42).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn split_is_seeded() {
        let data = dataset(50);
        assert_eq!(data.split(0.3, 7).unwrap(), data.split(0.3, 7).unwrap());

        // every sample ends up in exactly one set
        let (train, test) = data.split(0.3, 7).unwrap();
        let mut all: Vec<f64> = train.targets().iter().chain(test.targets()).copied().collect();
        all.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(all, data.targets());
    }

    #[test]
    fn split_rejects_bad_sizes() {
        let data = dataset(5);
        assert!(matches!(data.split(0.0, 1), Err(Error::InvalidTestSize(_))));
        assert!(matches!(data.split(1.0, 1), Err(Error::InvalidTestSize(_))));
        assert!(matches!(
            dataset(1).split(0.5, 1),
            Err(Error::InsufficientData { .. })
        ));
    }
}
