//! Unit tests for NBA stats wire types

use super::*;
use serde_json::json;

fn result_set(name: &str, headers: &[&str], rows: Vec<Vec<StatValue>>) -> ResultSet {
    ResultSet {
        name: name.to_string(),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        row_set: rows,
    }
}

fn empty_sets(count: usize) -> Vec<ResultSet> {
    (0..count)
        .map(|i| result_set(&format!("Set{i}"), &["PLAYER_ID", "PTS"], vec![]))
        .collect()
}

#[test]
fn test_stat_value_from_json() {
    assert_eq!(StatValue::from(json!(23)), StatValue::Int(23));
    assert_eq!(StatValue::from(json!(0.504)), StatValue::Float(0.504));
    assert_eq!(StatValue::from(json!("LAL")), StatValue::Text("LAL".into()));
    assert_eq!(StatValue::from(json!(null)), StatValue::Null);
    assert_eq!(StatValue::from(json!(true)), StatValue::Text("true".into()));
}

#[test]
fn test_stat_value_display() {
    assert_eq!(StatValue::Int(2544).to_string(), "2544");
    assert_eq!(StatValue::Float(0.5).to_string(), "0.5");
    assert_eq!(StatValue::Text("2003-04".into()).to_string(), "2003-04");
    assert_eq!(StatValue::Null.to_string(), "-");
}

#[test]
fn test_stat_value_as_i64() {
    assert_eq!(StatValue::Int(7).as_i64(), Some(7));
    assert_eq!(StatValue::Float(7.0).as_i64(), Some(7));
    assert_eq!(StatValue::Float(7.5).as_i64(), None);
    assert_eq!(StatValue::Text("12".into()).as_i64(), Some(12));
    assert_eq!(StatValue::Null.as_i64(), None);
}

#[test]
fn test_envelope_deserialization() {
    let payload = json!({
        "resource": "playercareerstats",
        "parameters": {"PerMode": "Totals", "PlayerID": 2544},
        "resultSets": [
            {
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "PTS", "FG_PCT"],
                "rowSet": [
                    [2544, "2003-04", 1654, 0.417],
                    [2544, "2004-05", 2175, 0.472]
                ]
            }
        ]
    });

    let envelope: ResultSetsEnvelope = serde_json::from_value(payload).unwrap();
    assert_eq!(envelope.result_sets.len(), 1);

    let table = StatTable::try_from(envelope.result_sets[0].clone()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.columns()[1], "SEASON_ID");
    assert_eq!(table.get(1, "PTS"), Some(&StatValue::Int(2175)));
    assert_eq!(table.get(0, "FG_PCT"), Some(&StatValue::Float(0.417)));
    assert_eq!(table.get(0, "MISSING"), None);
}

#[test]
fn test_stat_table_rejects_ragged_rows() {
    let err = StatTable::new(
        vec!["A".into(), "B".into()],
        vec![vec![1i64.into(), 2i64.into()], vec![3i64.into()]],
    )
    .unwrap_err();

    match err {
        StatsError::MalformedBundle { message } => assert!(message.contains("row 1")),
        other => panic!("Expected MalformedBundle, got {other:?}"),
    }
}

#[test]
fn test_ragged_result_set_names_the_set() {
    let set = result_set("CareerTotalsPostSeason", &["A"], vec![vec![]]);
    match StatTable::try_from(set).unwrap_err() {
        StatsError::MalformedBundle { message } => {
            assert!(message.contains("CareerTotalsPostSeason"))
        }
        other => panic!("Expected MalformedBundle, got {other:?}"),
    }
}

#[test]
fn test_stat_table_tail() {
    let rows = (1..=8).map(|i| vec![StatValue::Int(i)]).collect();
    let table = StatTable::new(vec!["N".into()], rows).unwrap();

    let tail = table.tail(5);
    let values: Vec<_> = tail.rows().iter().map(|r| r[0].as_i64().unwrap()).collect();
    assert_eq!(values, vec![4, 5, 6, 7, 8]);

    assert_eq!(table.tail(20).len(), 8);
    assert_eq!(table.tail(0).len(), 0);
    assert_eq!(StatTable::default().tail(5).len(), 0);
}

#[test]
fn test_bundle_picks_named_positions() {
    let mut sets = empty_sets(10);
    sets[0] = result_set("SeasonTotalsRegularSeason", &["PTS"], vec![vec![10i64.into()]]);
    sets[1] = result_set("CareerTotalsRegularSeason", &["PTS"], vec![vec![11i64.into()]]);
    sets[2] = result_set("SeasonTotalsPostSeason", &["PTS"], vec![vec![12i64.into()]]);
    sets[3] = result_set("CareerTotalsPostSeason", &["PTS"], vec![vec![13i64.into()]]);
    sets[6] = result_set("SeasonTotalsCollegeSeason", &["PTS"], vec![vec![16i64.into()]]);

    let bundle = StatBundle::from_result_sets(sets).unwrap();
    assert_eq!(bundle.season_rows.get(0, "PTS"), Some(&StatValue::Int(10)));
    assert_eq!(bundle.career_regular.get(0, "PTS"), Some(&StatValue::Int(11)));
    assert_eq!(bundle.career_postseason.get(0, "PTS"), Some(&StatValue::Int(13)));
    assert_eq!(bundle.career_college.get(0, "PTS"), Some(&StatValue::Int(16)));
}

#[test]
fn test_bundle_ignores_ragged_unused_sets() {
    let mut sets = empty_sets(9);
    for idx in [2, 4, 5, 7, 8] {
        sets[idx] = result_set("Unused", &["A", "B"], vec![vec![1i64.into()]]);
    }
    sets[0] = result_set("SeasonTotalsRegularSeason", &["PTS"], vec![vec![10i64.into()]]);

    let bundle = StatBundle::from_result_sets(sets).unwrap();
    assert_eq!(bundle.season_rows.get(0, "PTS"), Some(&StatValue::Int(10)));
}

#[test]
fn test_bundle_rejects_ragged_kept_set() {
    let mut sets = empty_sets(7);
    sets[6] = result_set("CareerTotalsCollegeSeason", &["A", "B"], vec![vec![1i64.into()]]);

    match StatBundle::from_result_sets(sets).unwrap_err() {
        StatsError::MalformedBundle { message } => {
            assert!(message.contains("CareerTotalsCollegeSeason"))
        }
        other => panic!("Expected MalformedBundle, got {other:?}"),
    }
}

#[test]
fn test_bundle_accepts_exactly_seven_sets() {
    assert!(StatBundle::from_result_sets(empty_sets(positions::MIN_RESULT_SETS)).is_ok());
}

#[test]
fn test_bundle_rejects_short_response() {
    match StatBundle::from_result_sets(empty_sets(4)).unwrap_err() {
        StatsError::MalformedBundle { message } => {
            assert!(message.contains("at least 7"));
            assert!(message.contains("found 4"));
        }
        other => panic!("Expected MalformedBundle, got {other:?}"),
    }
}

#[test]
fn test_player_records_from_directory_table() {
    let table = StatTable::new(
        vec![
            "PERSON_ID".into(),
            "DISPLAY_LAST_COMMA_FIRST".into(),
            "DISPLAY_FIRST_LAST".into(),
            "ROSTERSTATUS".into(),
        ],
        vec![
            vec![2544i64.into(), "James, LeBron".into(), "LeBron James".into(), 1i64.into()],
            vec![76375i64.into(), "Johnson, Magic".into(), "Magic Johnson".into(), 0i64.into()],
            vec![StatValue::Null, "Nobody".into(), "Nobody".into(), 0i64.into()],
            vec![1i64.into(), "".into(), "  ".into(), 0i64.into()],
        ],
    )
    .unwrap();

    let records = PlayerRecord::from_directory_table(&table).unwrap();
    assert_eq!(
        records,
        vec![
            PlayerRecord {
                id: PlayerId::new(2544),
                full_name: "LeBron James".into(),
                is_active: true,
            },
            PlayerRecord {
                id: PlayerId::new(76375),
                full_name: "Magic Johnson".into(),
                is_active: false,
            },
        ]
    );
}

#[test]
fn test_player_records_require_id_and_name_columns() {
    let table = StatTable::new(vec!["DISPLAY_FIRST_LAST".into()], vec![]).unwrap();
    match PlayerRecord::from_directory_table(&table).unwrap_err() {
        StatsError::MissingColumn { column } => assert_eq!(column, "PERSON_ID"),
        other => panic!("Expected MissingColumn, got {other:?}"),
    }
}
