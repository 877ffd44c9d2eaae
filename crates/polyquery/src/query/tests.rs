use super::*;
use crate::geom::{Direction, Polygon, VertexFilter};
use crate::store::PolygonStore;
use std::io::Cursor;

fn sample_store() -> PolygonStore {
    PolygonStore::new(vec![
        Polygon::from_coords(&[(0, 0), (0, 2), (2, 0)]).unwrap(),
        Polygon::from_coords(&[(0, 0), (0, 2), (2, 2), (2, 0)]).unwrap(),
    ])
}

fn run(store: &PolygonStore, input: &str) -> String {
    let mut out = Vec::new();
    Session::new(store, SessionCfg::default())
        .run(Cursor::new(input), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parse_covers_all_verbs() {
    assert_eq!(
        Command::parse("AREA EVEN").unwrap(),
        Command::Area(AreaArg::Filter(VertexFilter::Even))
    );
    assert_eq!(Command::parse("AREA MEAN").unwrap(), Command::Area(AreaArg::Mean));
    assert_eq!(
        Command::parse("COUNT 5").unwrap(),
        Command::Count(VertexFilter::Exactly(5))
    );
    assert_eq!(
        Command::parse("MIN VERTEXES").unwrap(),
        Command::Extremum {
            dir: Direction::Min,
            key: ExtremumKey::Vertexes
        }
    );
    assert!(matches!(
        Command::parse("  INFRAME 3 0 0 1 1 2 0 ").unwrap(),
        Command::InFrame(_)
    ));
    assert!(matches!(
        Command::parse("PERMS 3 0 0 1 1 2 0").unwrap(),
        Command::Perms(_)
    ));
}

#[test]
fn parse_errors_are_classified() {
    assert_eq!(
        Command::parse("AREA 2"),
        Err(QueryError::OutOfRange { value: 2 })
    );
    assert_eq!(
        Command::parse("COUNT -4"),
        Err(QueryError::OutOfRange { value: -4 })
    );
    assert!(matches!(
        Command::parse("AREA BIG"),
        Err(QueryError::MalformedArgument { .. })
    ));
    assert!(matches!(
        Command::parse("MAX PERIMETER"),
        Err(QueryError::UnknownVerbOrArgument { .. })
    ));
    assert!(matches!(
        Command::parse("FROB"),
        Err(QueryError::UnknownVerbOrArgument { .. })
    ));
    assert!(matches!(
        Command::parse("COUNT"),
        Err(QueryError::MissingArgument { verb: "COUNT" })
    ));
    assert!(matches!(
        Command::parse("LESSAREA"),
        Err(QueryError::MissingArgument { verb: "LESSAREA" })
    ));
    assert!(matches!(
        Command::parse("COUNT EVEN ODD"),
        Err(QueryError::UnknownVerbOrArgument { .. })
    ));
    assert!(matches!(
        Command::parse("LESSAREA 3 0 0 1 1"),
        Err(QueryError::MalformedArgument { .. })
    ));
    assert!(matches!(
        Command::parse("LESSAREA 3 0 0 1 1 2 2 9"),
        Err(QueryError::UnknownVerbOrArgument { .. })
    ));
    assert!(Command::parse("area even").is_err());
}

#[test]
fn dispatcher_scenario() {
    let store = sample_store();
    let out = run(&store, "MAX AREA\nCOUNT EVEN\nAREA 2\nAREA MEAN\n");
    assert_eq!(out, "4.0\n1\n<INVALID COMMAND>\n3.0\n");
}

#[test]
fn failure_does_not_disturb_next_command() {
    let store = sample_store();
    let out = run(&store, "AREA 1\nAREA EVEN\nLESSAREA 3 0 0\nAREA ODD\n");
    assert_eq!(out, "<INVALID COMMAND>\n4.0\n<INVALID COMMAND>\n2.0\n");
}

#[test]
fn remaining_verbs_render() {
    let store = sample_store();
    let input = "\
MIN AREA
MAX VERTEXES
MIN VERTEXES
COUNT ODD
COUNT 3
AREA 4
LESSAREA 4 0 0 0 2 2 2 2 0
INFRAME 3 0 0 1 1 2 2
INFRAME 3 0 0 1 1 3 2
PERMS 4 2 2 0 0 2 0 0 2
";
    let out = run(&store, input);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["2.0", "4", "3", "1", "1", "4.0", "1", "<TRUE>", "<FALSE>", "1"]
    );
}

#[test]
fn empty_collection_queries() {
    let store = PolygonStore::default();
    let out = run(
        &store,
        "AREA MEAN\nMAX AREA\nMIN VERTEXES\nINFRAME 3 0 0 1 1 2 2\nAREA EVEN\nCOUNT 3\nLESSAREA 3 0 0 1 1 2 0\n",
    );
    assert_eq!(
        out,
        "<INVALID COMMAND>\n<INVALID COMMAND>\n<INVALID COMMAND>\n<INVALID COMMAND>\n0.0\n0\n0\n"
    );
}

#[test]
fn blank_lines_are_silent_and_stats_count() {
    let store = sample_store();
    let mut out = Vec::new();
    let mut session = Session::new(&store, SessionCfg::default());
    let stats = session
        .run(Cursor::new("\n   \nCOUNT ODD\nNOPE\n"), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n<INVALID COMMAND>\n");
    assert_eq!(
        stats,
        SessionStats {
            answered: 1,
            rejected: 1
        }
    );
}

#[test]
fn precision_applies_to_areas_only() {
    let store = sample_store();
    let cfg = SessionCfg {
        invalid_marker: "ERR".to_string(),
        area_precision: 3,
    };
    let mut out = Vec::new();
    Session::new(&store, cfg)
        .run(Cursor::new("AREA ODD\nCOUNT EVEN\nAREA 0\n"), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2.000\n1\nERR\n");
    assert_eq!(format!("{}", Response::Area(2.5)), "2.5");
    assert_eq!(format!("{}", Response::Verdict(true)), "<TRUE>");
}

#[test]
fn non_utf8_line_rejects_only_itself() {
    let store = sample_store();
    let mut out = Vec::new();
    let stats = Session::new(&store, SessionCfg::default())
        .run(Cursor::new(&b"COUNT EVEN\nAREA \xff\nCOUNT ODD\n"[..]), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n<INVALID COMMAND>\n1\n");
    assert_eq!(stats.rejected, 1);
}

#[test]
fn extreme_literal_coordinates_never_abort() {
    let store = sample_store();
    let out = run(
        &store,
        "LESSAREA 3 9223372036854775807 9223372036854775807 -9223372036854775808 9223372036854775807 -9223372036854775808 -9223372036854775808\n\
         LESSAREA 3 2147483647 2147483647 -2147483648 2147483647 -2147483648 -2147483648\n\
         INFRAME 3 2147483647 2147483647 -2147483648 2147483647 -2147483648 -2147483648\n",
    );
    assert_eq!(out, "<INVALID COMMAND>\n2\n<FALSE>\n");
}
