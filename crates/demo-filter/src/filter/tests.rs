//! Tests for the filter parser.

use super::*;

fn list(values: &[&str]) -> Parameter {
    Parameter::List(values.iter().map(|v| v.to_string()).collect())
}

fn range(start: Option<&str>, end: Option<&str>) -> Parameter {
    Parameter::Range {
        start: start.map(String::from),
        end: end.map(String::from),
    }
}

// ==================== Clause Sequence Tests ====================

#[test]
fn test_parse_empty() {
    assert_eq!(FilterParser::parse("").unwrap(), vec![]);
    assert_eq!(FilterParser::parse("  \t ").unwrap(), vec![]);
}

#[test]
fn test_parse_single_clause() {
    let clauses = FilterParser::parse("map: koth_").unwrap();
    assert_eq!(
        clauses,
        vec![Clause {
            key: "map".to_string(),
            negated: false,
            parameter: list(&["koth_"]),
        }]
    );
}

#[test]
fn test_parse_compound_filter() {
    let clauses = FilterParser::parse("map: koth_, beststreak: 6.., !bookmarks: 0").unwrap();
    assert_eq!(clauses.len(), 3);

    assert_eq!(clauses[0].key, "map");
    assert_eq!(clauses[1].key, "beststreak");
    assert!(clauses[1].is_range());
    assert_eq!(clauses[1].parameter, range(Some("6"), None));
    assert_eq!(clauses[2].key, "bookmarks");
    assert!(clauses[2].negated);
    assert_eq!(clauses[2].parameter, list(&["0"]));
}

#[test]
fn test_parse_no_space_after_colon() {
    let clauses = FilterParser::parse("name:a,bookmarks:1").unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[1].parameter, list(&["1"]));
}

#[test]
fn test_parse_whitespace_around_separators() {
    let clauses = FilterParser::parse("  name:   a  ,   bookmarks:  1  ").unwrap();
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].parameter, list(&["a"]));
    assert_eq!(clauses[1].parameter, list(&["1"]));
}

#[test]
fn test_parse_trailing_comma() {
    let clauses = FilterParser::parse("name: a,").unwrap();
    assert_eq!(clauses.len(), 1);
}

#[test]
fn test_parse_double_comma_is_error() {
    assert_eq!(
        FilterParser::parse("name: a,, map: b"),
        Err(FilterError::ExpectedKey {
            context: ", map: b".to_string()
        })
    );
}

#[test]
fn test_parse_same_key_twice() {
    let clauses = FilterParser::parse("name: a, name: b").unwrap();
    assert_eq!(clauses.len(), 2);
}

#[test]
fn test_parse_does_not_check_key_table() {
    let clauses = FilterParser::parse("bogus: 1").unwrap();
    assert_eq!(clauses[0].key, "bogus");
}

// ==================== Parameter Form Tests ====================

#[test]
fn test_parse_quoted_tuple() {
    let clauses = FilterParser::parse(r#"name: ("a b", 'c, d',), map: x"#).unwrap();
    assert_eq!(clauses[0].parameter, list(&["a b", "c, d"]));
    assert_eq!(clauses[1].parameter, list(&["x"]));
}

#[test]
fn test_parse_quoteless_tuple() {
    let clauses = FilterParser::parse("name: (koth, cp)").unwrap();
    assert_eq!(clauses[0].parameter, list(&["koth", "cp"]));
}

#[test]
fn test_parse_quoted_value_unescaped() {
    let clauses = FilterParser::parse(r#"name: 'it\'s \\ here'"#).unwrap();
    assert_eq!(clauses[0].parameter, list(&[r"it's \ here"]));
}

#[test]
fn test_parse_escaped_value_round_trips() {
    let original = r#"weird "name" with 'quotes' and \slashes\"#;
    let filter = format!("name: \"{}\"", escape(original));
    let clauses = FilterParser::parse(&filter).unwrap();
    assert_eq!(clauses[0].parameter, list(&[original]));
}

#[test]
fn test_parse_ranges() {
    let clauses = FilterParser::parse("beststreak: 3..10, filesize: ..500, moddate: 7..").unwrap();
    assert_eq!(clauses[0].parameter, range(Some("3"), Some("10")));
    assert_eq!(clauses[1].parameter, range(None, Some("500")));
    assert_eq!(clauses[2].parameter, range(Some("7"), None));
}

#[test]
fn test_parse_empty_values_dropped_from_tuple() {
    let clauses = FilterParser::parse(r#"name: ("", "a")"#).unwrap();
    assert_eq!(clauses[0].parameter, list(&["a"]));
}

// ==================== Error Tests ====================

#[test]
fn test_parse_missing_key() {
    assert_eq!(
        FilterParser::parse("koth_"),
        Err(FilterError::ExpectedKey {
            context: "koth_".to_string()
        })
    );
}

#[test]
fn test_parse_expected_key_context_truncated() {
    assert_eq!(
        FilterParser::parse("name: a, this is garbage"),
        Err(FilterError::ExpectedKey {
            context: "this is ga".to_string()
        })
    );
}

#[test]
fn test_parse_degenerate_range() {
    assert!(matches!(
        FilterParser::parse("beststreak: .."),
        Err(FilterError::ExpectedParameter { .. })
    ));
}

#[test]
fn test_parse_unclosed_tuple() {
    assert!(matches!(
        FilterParser::parse("name: (a, b"),
        Err(FilterError::ExpectedParameter { .. })
    ));
}

#[test]
fn test_parse_unterminated_quote() {
    assert_eq!(
        FilterParser::parse(r#"name: "abc"#),
        Err(FilterError::ExpectedParameter {
            context: "\"abc".to_string()
        })
    );
}

#[test]
fn test_parse_empty_parameter() {
    assert_eq!(
        FilterParser::parse("name:"),
        Err(FilterError::EmptyParameterList {
            key: "name".to_string()
        })
    );
    assert_eq!(
        FilterParser::parse("name: '', map: x"),
        Err(FilterError::EmptyParameterList {
            key: "name".to_string()
        })
    );
}

#[test]
fn test_parse_negation_must_touch_key() {
    assert!(matches!(
        FilterParser::parse("! name: a"),
        Err(FilterError::ExpectedKey { .. })
    ));
}

#[test]
fn test_parse_double_negation_is_error() {
    assert!(matches!(
        FilterParser::parse("!!name: a"),
        Err(FilterError::ExpectedKey { .. })
    ));
}
