use runtime_analysis::parser::{match_line, parse_timestamp, EventKind};

#[test]
fn test_unrelated_lines_yield_nothing() {
    let lines = [
        "2020-05-01 12:00:00 INFO Loading data",
        "[2020-05-01 12:00:00] Initialising model",
        "Initialising estimates for: Region1",
        "[2020-05-01 12:00:00]  Initialising estimates for: Region1",
        "[2020-05-01 12:00:00] Initialising estimates for:",
    ];

    for line in lines {
        assert!(match_line(line).is_empty(), "expected no match for {line:?}");
    }
}

#[test]
fn test_location_key_is_trailing_text() {
    let cases = [
        ("[2020-05-01 12:00:00] Completed estimates for: Region1\n", "Region1"),
        ("[2020-05-01 12:00:00] Completed estimates for: Region1\r\n", "Region1"),
        ("[2020-05-01 12:00:00] Completed estimates for: São Paulo \t", "São Paulo"),
        ("[2020-05-01 12:00:00] Completed estimates for: a: b, c", "a: b, c"),
    ];

    for (line, key) in cases {
        let matches = match_line(line);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].location_key, key);
    }
}

#[test]
fn test_kind_word_classification() {
    assert_eq!(EventKind::from_word("Initialising"), EventKind::Start);
    assert_eq!(EventKind::from_word("Completed"), EventKind::End);
    assert_eq!(EventKind::from_word("completed"), EventKind::Other);
    assert_eq!(EventKind::from_word("Initializing"), EventKind::Other);
}

#[test]
fn test_timestamp_parsing() {
    assert!(parse_timestamp("2020-01-01 00:00:00").is_ok());
    assert!(parse_timestamp("2020-02-30 00:00:00").is_err());
    assert!(parse_timestamp("2020-01-01").is_err());
    assert!(parse_timestamp("").is_err());
}

#[test]
fn test_empty_brackets_match_but_fail_to_parse() {
    let matches = match_line("[] Initialising estimates for: Region1");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].timestamp_text, "");
    assert!(matches[0].to_event(1).is_err());
}

#[test]
fn test_timestamp_without_separator_or_with_leading_blank_is_rejected() {
    for line in [
        "[2020-01-0100:00:00] Completed estimates for: X",
        "[ 2020-01-01 00:00:00] Completed estimates for: X",
    ] {
        let matches = match_line(line);
        assert_eq!(matches.len(), 1, "line should still match: {line:?}");
        assert!(matches[0].to_event(1).unwrap_err().is_parse());
    }

    assert!(parse_timestamp("2020-01-0100:00:00").is_err());
    assert!(parse_timestamp(" 2020-01-01 00:00:00").is_err());
}

#[test]
fn test_bracketed_tag_with_untracked_kind_is_skipped() {
    assert!(match_line("[INFO] Saving estimates for: X").is_empty());
    assert!(match_line("[DEBUG] Loading estimates for: X").is_empty());

    let matches = match_line("[bad-date] Initialising estimates for: RegionX");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].timestamp_text, "bad-date");
}

#[test]
fn test_second_timing_on_same_line_is_part_of_location_key() {
    let line = "[2020-01-01 00:00:00] Initialising estimates for: A \
                [2020-01-01 00:05:00] Completed estimates for: B";

    let matches = match_line(line);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind(), EventKind::Start);
    assert_eq!(
        matches[0].location_key,
        "A [2020-01-01 00:05:00] Completed estimates for: B"
    );
}
