//! Integration tests exercising the charting engine end to end.

use graficar::{
    compute_slices, render_to_svg, scale::calculate_ticks, Category, CategoryTotals, DrawCommand,
    Event, PeriodEntry, PieChart, Point, Rect, RecordingCanvas, StackedBarChart, TickScale,
    TokenPalette, Widget,
};

fn categories() -> Vec<Category> {
    vec![
        Category::new("activities", "Activities", "primary-500"),
        Category::new("content", "Content", "success-500"),
    ]
}

#[test]
fn test_shared_tick_scale_alignment() {
    // ticks for 11 and 12 agree, and the adjusted maximum normalizes bars so
    // the tallest column meets the top gridline exactly
    assert_eq!(calculate_ticks(11.0), vec![12, 9, 6, 3, 0]);
    assert_eq!(calculate_ticks(12.0), vec![12, 9, 6, 3, 0]);

    let scale = TickScale::from_max_value(11.0);
    assert_eq!(scale.height_for(12.0, 240.0), 240.0);
}

#[test]
fn test_tick_rounding_rule() {
    assert_eq!(calculate_ticks(5.0), vec![6, 5, 3, 2, 0]);
    assert_eq!(calculate_ticks(-1.0), vec![0]);
    assert_eq!(calculate_ticks(0.0), vec![0]);
}

#[test]
fn test_quarter_slice_geometry() {
    // raw values {10, 30}: 25%/75%, angles 90/270, large-arc on the second
    let totals = CategoryTotals::new()
        .with_value("activities", 10.0)
        .with_value("content", 30.0);
    let slices = compute_slices(&categories(), &totals);

    assert!((slices[0].percentage - 25.0).abs() < 1e-9);
    assert!((slices[1].percentage - 75.0).abs() < 1e-9);
    assert!((slices[0].angular_span() - 90.0).abs() < 1e-9);
    assert!((slices[1].angular_span() - 270.0).abs() < 1e-9);

    let mut chart = PieChart::new(categories()).totals(totals);
    let svg = render_to_svg(&mut chart, 200.0, 200.0);
    // the 270 deg wedge must carry large_arc = 1, sweep 0
    assert!(svg.contains(" 0 1 0 "), "large-arc wedge missing in {svg}");
    assert!(!svg.contains(" 0 1 1 "));
}

#[test]
fn test_single_category_full_circle_and_overlay() {
    let mut chart = PieChart::new(categories())
        .totals(CategoryTotals::new().with_value("activities", 10.0));
    chart.layout(Rect::new(0.0, 0.0, 200.0, 200.0));

    let mut base = RecordingCanvas::new();
    chart.paint(&mut base);
    assert!(base
        .commands()
        .iter()
        .all(|c| !matches!(c, DrawCommand::Wedge { .. })));

    // pointer-enter over the circle: the overlay is a circle too
    chart.event(&Event::PointerEnter {
        position: Point::new(100.0, 70.0),
    });
    let mut hovered = RecordingCanvas::new();
    chart.paint(&mut hovered);

    let circles = hovered
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .count();
    assert_eq!(circles, 2);
}

#[test]
fn test_missing_category_key_is_silent_zero() {
    let entries = vec![
        PeriodEntry::new("Mon").with_value("activities", 4.0),
        PeriodEntry::new("Tue")
            .with_value("activities", 2.0)
            .with_value("content", 3.0),
    ];
    let mut chart = StackedBarChart::new(categories()).data(entries);
    chart.layout(Rect::new(0.0, 0.0, 480.0, 260.0));

    // Monday is missing "content": one segment only, one tooltip line only
    let lines = chart.tooltip_lines(chart.entries().first().expect("entry"));
    assert_eq!(lines, ["Activities: 4"]);

    let mut canvas = RecordingCanvas::new();
    chart.paint(&mut canvas);
    let segments = canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { radius, .. } if !radius.is_zero()))
        .count();
    assert_eq!(segments, 3);
}

#[test]
fn test_zero_data_degrades_to_neutral_visuals() {
    let mut bar = StackedBarChart::new(categories())
        .entry(PeriodEntry::new("Mon"))
        .entry(PeriodEntry::new("Tue"));
    let bar_svg = render_to_svg(&mut bar, 480.0, 260.0);
    assert!(bar_svg.contains("<line"));
    assert!(!bar_svg.contains("<path"));

    let mut pie = PieChart::new(categories());
    let pie_svg = render_to_svg(&mut pie, 200.0, 200.0);
    assert!(pie_svg.contains("<circle"));
    assert!(!pie_svg.contains("<path"));
}

#[test]
fn test_hover_state_independent_between_charts() {
    let entries = vec![PeriodEntry::new("Mon").with_value("activities", 4.0)];
    let mut bar = StackedBarChart::new(categories()).data(entries.clone());
    let mut pie = PieChart::new(categories()).data(entries);
    bar.layout(Rect::new(0.0, 0.0, 480.0, 260.0));
    pie.layout(Rect::new(0.0, 0.0, 200.0, 200.0));

    pie.event(&Event::PointerMove {
        position: Point::new(100.0, 70.0),
    });
    assert_eq!(pie.hovered_slice(), Some(0));
    assert_eq!(bar.hovered_period(), None);

    pie.event(&Event::PointerLeave);
    assert_eq!(pie.hovered_slice(), None);
}

#[test]
fn test_svg_document_from_widget_tree() {
    let mut chart = StackedBarChart::new(categories())
        .title("Time spent")
        .entry(
            PeriodEntry::new("Mon")
                .with_value("activities", 4.0)
                .with_value("content", 2.0),
        );
    let svg = render_to_svg(&mut chart, 480.0, 260.0);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("Time spent"));
    assert!(svg.contains("Mon"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_token_palette_css_rewrite_matches_rendered_colors() {
    let palette = TokenPalette::light();
    assert_eq!(palette.css_var("success-800"), "var(--color-success-800)");

    let custom = TokenPalette::new("theme");
    assert_eq!(custom.css_var("success-800"), "var(--theme-success-800)");
}

#[test]
fn test_period_data_round_trips_through_json() {
    // the data-fetching collaborators exchange rows as JSON
    let entries = vec![
        PeriodEntry::new("Mon").with_value("activities", 4.0),
        PeriodEntry::new("Tue").with_value("content", 2.5),
    ];
    let json = serde_json::to_string(&entries).expect("serialize");
    let back: Vec<PeriodEntry> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(entries, back);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_render_is_total_for_any_inputs(
            a in 0.0f64..500.0,
            b in 0.0f64..500.0,
            c in 0.0f64..500.0
        ) {
            let mut bar = StackedBarChart::new(categories())
                .entry(PeriodEntry::new("Mon").with_value("activities", a))
                .entry(
                    PeriodEntry::new("Tue")
                        .with_value("activities", b)
                        .with_value("content", c),
                );
            let svg = render_to_svg(&mut bar, 480.0, 260.0);
            prop_assert!(svg.starts_with("<svg"));
            prop_assert!(svg.trim_end().ends_with("</svg>"));
        }

        #[test]
        fn prop_pie_percentages_always_sum_to_100(
            a in 0.01f64..500.0,
            b in 0.0f64..500.0
        ) {
            let totals = CategoryTotals::new()
                .with_value("activities", a)
                .with_value("content", b);
            let sum: f64 = compute_slices(&categories(), &totals)
                .iter()
                .map(|s| s.percentage)
                .sum();
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }
}
