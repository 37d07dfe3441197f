mod common;

use ncaa_scorers::render::{render_scatter_svg, render_table_svg};
use ncaa_scorers::shaper::shape;

fn prepared() -> ncaa_scorers::aggregator::Table {
    let mut table = common::table(&[
        ("Ann O'Hare", "A&M", "10", "30", "3.0"),
        ("Bo", "Tech", "10", "20", "2.0"),
        ("Cy", "State", "12", "18", "1.5"),
        ("Di", "U", "8", "8", "1.0"),
        ("Ed", "V", "8", "8", "1.0"),
    ]);
    table.coerce_numeric(&["Goals", "Per Game", "Games"]).unwrap();
    table.sort_desc_by("Per Game").unwrap();
    table
}

#[test]
fn test_table_chart_has_every_row() {
    let table = prepared();
    let svg = render_table_svg(&table);

    assert!(svg.contains("Top NCAA Goal Scorers"));
    assert_eq!(svg.matches(r#"fill="darkslategray""#).count(), 5 * 8);
    assert!(svg.contains("A&amp;M"));
    assert!(!svg.contains("A&M"));
}

#[test]
fn test_scatter_has_tooltips_and_annotations() {
    let table = prepared();
    let data = shape(&table).unwrap();
    let svg = render_scatter_svg(&data);

    // one marker per group
    assert_eq!(svg.matches("<circle").count(), data.points.len());
    assert_eq!(svg.matches("<title>").count(), data.points.len());

    assert!(svg.contains("Name: Di\nTeam: U"));
    assert!(svg.contains("Di, Ed"));
    assert!(svg.contains("NCAA Most Dangerous Goal Scorers"));
    assert!(svg.contains("Goals Per Game vs. Games Played (Player Counts and Names)"));
    assert!(svg.contains("Ann O&apos;Hare"));

    // one arrow per top performer
    assert_eq!(svg.matches("url(#arrowhead)").count(), 3);
    assert_eq!(svg.matches(r#"r="10""#).count(), 3);
    assert_eq!(svg.matches(r#"r="8""#).count(), 1);
}

#[test]
fn test_scatter_with_single_record() {
    let mut table = common::table(&[("Solo", "T", "4", "4", "1.0")]);
    table.coerce_numeric(&["Goals", "Per Game", "Games"]).unwrap();

    let data = shape(&table).unwrap();
    let svg = render_scatter_svg(&data);

    assert_eq!(svg.matches("<circle").count(), 1);
    assert_eq!(svg.matches("url(#arrowhead)").count(), 1);
    assert!(!svg.contains("NaN"));
}

#[test]
fn test_scatter_ignores_infinite_rate() {
    let mut table = common::table(&[("A", "X", "5", "10", "inf"), ("B", "Y", "5", "5", "1.0")]);
    table.coerce_numeric(&["Goals", "Per Game", "Games"]).unwrap();
    table.sort_desc_by("Per Game").unwrap();

    let data = shape(&table).unwrap();
    let svg = render_scatter_svg(&data);

    assert_eq!(data.points.len(), 1);
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}
