//! Tests for the output module

use super::*;
use crate::probe::{ProbeReport, Variant};
use crate::search::SearchParams;
use pretty_assertions::assert_eq;

fn sample_report() -> ProbeReport {
    let initial = SearchParams::new("rust").with("count", 2);
    let with_max = initial.clone().with("max_id", 30);
    ProbeReport::new(vec![
        Variant::new("initial", initial, vec![30, 20]),
        Variant::new("max_id", with_max, vec![30, 10]),
    ])
}

#[test]
fn test_ascii_table_layout() {
    let mut table = AsciiTable::new(vec!["id".to_string(), "name".to_string()]);
    table.push_row(vec!["1".to_string(), "alpha".to_string()]);
    table.push_row(vec!["22".to_string()]);

    let expected = "\
+----+-------+
| id | name  |
+----+-------+
| 1  | alpha |
| 22 |       |
+----+-------+";
    assert_eq!(table.render(), expected);
}

#[test]
fn test_ascii_table_multiline_heading() {
    let table = AsciiTable::new(vec!["a".to_string(), "one\nthree".to_string()]);

    let expected = "\
+---+-------+
| a | one   |
|   | three |
+---+-------+";
    assert_eq!(table.render(), expected);
}

#[test]
fn test_render_table_report() {
    let expected = "\
+-----------+----------+------------+
| tweet ids | count: 2 | count: 2   |
|           | q: rust  | max_id: 30 |
|           |          | q: rust    |
+-----------+----------+------------+
| 30        | x        | x          |
| 20        | x        |            |
| 10        |          | x          |
+-----------+----------+------------+";

    let table = render(&sample_report(), OutputFormat::Table).unwrap();
    assert_eq!(table, expected);
}

#[test]
fn test_render_json() {
    let json = render(&sample_report(), OutputFormat::Json).unwrap();
    assert!(!json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"].as_array().unwrap().len(), 3);
    assert_eq!(value["variants"][1]["params"]["max_id"], "30");
}

#[test]
fn test_render_pretty() {
    let pretty = render(&sample_report(), OutputFormat::Pretty).unwrap();
    assert!(pretty.contains('\n'));
    assert!(pretty.contains("\"label\": \"initial\""));
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Table);
}
