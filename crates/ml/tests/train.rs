//! Integration tests for end to end half-life training

use std::cell::RefCell;

use livechart_client::{interpret, LiveChartClient, Query, Transport};
use livechart_ml::{train_half_life_model, Error, HalfLifeDataset, TrainOptions, FEATURES};
use rstest::{fixture, rstest};

/// Transport answering every query with the same body
struct Canned {
    body: String,
    queries: RefCell<Vec<Query>>,
}

impl Transport for Canned {
    fn get(&self, query: &Query) -> livechart_client::Result<String> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.body.clone())
    }
}

/// Synthetic chart where ln(1 + t) is exactly linear in the features
#[fixture]
fn chart() -> String {
    let mut csv = FEATURES.join(",") + ",half_life_sec,symbol\n";
    for i in 0..60 {
        let z = (i % 17 + 1) as f64;
        let n = (i % 23 + 2) as f64;
        let isospin = (n - z) / 2.0;
        let binding = 8000.0 + (i * 13 % 29) as f64;
        let qbm = (i * 7 % 11) as f64 * 100.0;
        let (qa, qec, sn, sp) = (-5000.0, -200.0, 7000.0 + i as f64, 9000.0);
        let log_t = 0.3 * z - 0.1 * n + 0.002 * qbm + 3.0;
        csv += &format!(
            "{z},{n},{isospin},{binding},{qbm},{qa},{qec},{sn},{sp},{},X\n",
            log_t.exp_m1()
        );
    }
    // rows that must be dropped
    csv += "1,0,,,,,,,,,n\n";
    csv += "26,30,2,8790.3,-4207,-7500,-4207,11197,10183,STABLE,Fe\n";
    csv
}

#[rstest]
fn trains_on_all_ground_states(chart: String) {
    let transport = Canned {
        body: chart,
        queries: RefCell::new(Vec::new()),
    };
    let client = LiveChartClient::with_transport(&transport);

    let (model, metrics) = train_half_life_model(&client, &TrainOptions::default()).unwrap();

    let queries = transport.queries.borrow();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].get("fields"), Some("ground_states"));
    assert_eq!(queries[0].get("nuclides"), Some("all"));

    assert_eq!(model.features(), &FEATURES);
    assert!(metrics.r2_score > 0.999, "r2 = {}", metrics.r2_score);
    assert!(metrics.rmsle < 1e-6, "rmsle = {}", metrics.rmsle);
}

#[rstest]
fn predicts_seconds_from_rows(chart: String) {
    let table = interpret(&chart).unwrap();
    let dataset = HalfLifeDataset::from_table(&table).unwrap();
    assert_eq!(dataset.len(), 60);

    let (train, _) = dataset.split(0.2, 42).unwrap();
    let model = livechart_ml::HalfLifeModel::fit(&train).unwrap();

    let row = table.row(5).unwrap();
    let expected: f64 = row.parse("half_life_sec").unwrap();
    let predicted = model.predict_seconds(&row).unwrap();
    assert!((predicted - expected).abs() / expected < 1e-6);

    // incomplete row
    assert_eq!(model.predict_seconds(&table.row(60).unwrap()), None);
}

#[test]
fn client_errors_are_wrapped() {
    let transport = Canned {
        body: "0".to_string(),
        queries: RefCell::new(Vec::new()),
    };
    let client = LiveChartClient::with_transport(&transport);

    let err = train_half_life_model(&client, &TrainOptions::default()).unwrap_err();
    match err {
        Error::Client(e) => assert_eq!(e.kind(), livechart_client::ErrorKind::NoDataFound),
        e => panic!("expected client error, got {e:?}"),
    }
}
