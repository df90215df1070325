//! Integration tests for response interpretation

use livechart_client::{interpret, Error, ErrorKind, Table};
use rstest::{fixture, rstest};

#[fixture]
fn ground_state_csv() -> &'static str {
    "z,n,symbol,jp,half_life,unit_hl,half_life_sec,unc_hls,decay_1,decay_1_%\n\
     27,33,Co,5+,1925.28,d,166344192,12096,B-,100\n\
     27,32,Co,7/2-,STABLE,,,,,\n"
}

#[rstest]
#[case("0", ErrorKind::NoDataFound)]
#[case("1", ErrorKind::MissingParameter)]
#[case("2", ErrorKind::MissingParameter)]
#[case("3", ErrorKind::InvalidParameter)]
#[case("4", ErrorKind::MissingParameter)]
#[case("5", ErrorKind::InvalidParameter)]
#[case("6", ErrorKind::UnknownApi)]
#[case("7", ErrorKind::UnknownApi)]
#[case("404", ErrorKind::UnknownApi)]
#[case(" 3\r\n", ErrorKind::InvalidParameter)]
fn error_codes_map_to_kinds(#[case] body: &str, #[case] expected: ErrorKind) {
    let err = interpret(body).unwrap_err();
    assert_eq!(err.kind(), expected);
}

#[rstest]
#[case("6", 6)]
#[case("7", 7)]
#[case("0042", 42)]
#[case("999999", 999999)]
fn unknown_codes_are_carried(#[case] body: &str, #[case] expected: u64) {
    match interpret(body).unwrap_err() {
        Error::UnknownApi { code, .. } => assert_eq!(code, Some(expected)),
        e => panic!("expected UnknownApi, got {e:?}"),
    }
}

#[test]
fn unknown_code_message_names_code() {
    let err = interpret("17").unwrap_err();
    assert_eq!(err.to_string(), "received unknown API error code: 17");
}

#[test]
fn missing_parameter_messages() {
    let err = interpret("4").unwrap_err();
    assert!(err.to_string().contains("'parents' or 'products'"));
}

#[rstest]
fn rows_and_columns_preserved(ground_state_csv: &str) {
    let table = interpret(ground_state_csv).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.n_columns(), 10);

    let first = table.row(0).unwrap();
    assert_eq!(first.values()[0], "27");
    assert_eq!(first.values()[2], "Co");
    assert_eq!(first.get("half_life_sec"), Some("166344192"));

    let second = table.row(1).unwrap();
    assert_eq!(second.get("half_life"), Some("STABLE"));
    assert_eq!(second.parse::<f64>("half_life"), None);
    assert_eq!(second.get("decay_1"), Some(""));
}

#[rstest]
#[case(1, 1)]
#[case(3, 4)]
#[case(25, 7)]
fn generated_dimensions(#[case] n_rows: usize, #[case] n_columns: usize) {
    let header: Vec<String> = (0..n_columns).map(|c| format!("col_{c}")).collect();
    let mut csv = header.join(",") + "\n";
    for r in 0..n_rows {
        let row: Vec<String> = (0..n_columns).map(|c| format!("{r}.{c}")).collect();
        csv += &(row.join(",") + "\n");
    }

    let table = interpret(&csv).unwrap();
    assert_eq!(table.len(), n_rows);
    assert_eq!(table.n_columns(), n_columns);
    for (r, row) in table.rows().enumerate() {
        for (c, value) in row.values().iter().enumerate() {
            assert_eq!(value, &format!("{r}.{c}"));
        }
    }
}

#[test]
fn header_only_is_an_empty_table() {
    let table = interpret("z,n,symbol\n").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.headers(), ["z", "n", "symbol"]);
}

#[rstest]
#[case("")]
#[case("   \n")]
fn empty_body_is_unexpected(#[case] body: &str) {
    assert_eq!(interpret(body).unwrap_err().kind(), ErrorKind::Unexpected);
}

#[test]
fn long_rows_are_unexpected() {
    let err = interpret("z,n\n27,33,Co\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[test]
fn short_rows_are_padded() {
    let table = interpret("z,n,symbol\n27,33\n").unwrap();
    assert_eq!(table.row(0).unwrap().get("symbol"), Some(""));
}

#[test]
fn whitespace_is_trimmed() {
    let table = interpret(" z , symbol \n 27 , Co \n").unwrap();
    assert_eq!(table.headers(), ["z", "symbol"]);
    assert_eq!(table.row(0).unwrap().get("symbol"), Some("Co"));
}

#[rstest]
fn csv_round_trip(ground_state_csv: &str) {
    let table = interpret(ground_state_csv).unwrap();
    let again = interpret(&table.to_csv().unwrap()).unwrap();
    assert_eq!(table, again);
}

#[test]
fn round_trip_with_awkward_values() {
    let table = Table::from_parts(
        vec!["ensdf_authors".to_string(), "multipolarity".to_string()],
        vec![
            vec!["E. BROWNE, J. K. TULI".to_string(), "E2(+M3)".to_string()],
            vec!["quoted \"name\"".to_string(), String::new()],
        ],
    )
    .unwrap();

    let again = interpret(&table.to_csv().unwrap()).unwrap();
    assert_eq!(table, again);
}

#[test]
fn repeated_columns_are_renamed() {
    let body = "mean_energy,unc_me,endpoint_energy,unc_me,intensity_beta,unc_ib\n\
                96.0,1.0,317.9,1.2,99.88,0.03\n";
    let table = interpret(body).unwrap();
    assert_eq!(
        table.headers(),
        ["mean_energy", "unc_me", "endpoint_energy", "unc_me.1", "intensity_beta", "unc_ib"]
    );

    let row = table.row(0).unwrap();
    assert_eq!(row.get("unc_me"), Some("1.0"));
    assert_eq!(row.get("unc_me.1"), Some("1.2"));

    let json: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
    assert_eq!(json[0].as_object().unwrap().len(), table.n_columns());
    assert_eq!(interpret(&table.to_csv().unwrap()).unwrap(), table);
}
