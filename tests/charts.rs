use vidi_stats::prelude::*;

const SAMPLE: [f64; 7] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 5.0];

#[test]
fn styling_twice_is_the_same_as_once() {
    let mut once = Axes::new();
    apply_style(&mut once);
    let mut twice = once.clone();
    apply_style(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn histogram_legend_lists_reference_lines() {
    let mut ax = Axes::new();
    render_histogram(&SAMPLE, 0.0, 6.0, 2.0, &mut ax, true).unwrap();

    let legend = ax.legend.as_ref().unwrap();
    let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Mediana (3.000)", "Média (2.714)", "Boxplot outliers"]);
    assert!(matches!(legend.entries[2].handle, LegendHandle::Marker(_)));
    assert_eq!(ax.x.label.as_ref().map(|l| l.text.as_str()), Some("Volume / mL"));
    assert_eq!(ax.y.label.as_ref().map(|l| l.text.as_str()), Some("Frequência"));
    assert!(ax.axis_below);
}

#[test]
fn histogram_without_marker_entry() {
    let mut ax = Axes::new();
    render_histogram(&SAMPLE, 0.0, 6.0, 2.0, &mut ax, false).unwrap();
    assert_eq!(ax.legend.map(|l| l.entries.len()), Some(2));
}

#[test]
fn boxplot_flags_values_beyond_whiskers() {
    let mut boxes = Axes::new();
    render_boxplot(&SAMPLE, &mut boxes).unwrap();

    let Some(Element::Box(glyph)) = boxes.elements.first() else {
        panic!("expected a box glyph");
    };
    assert_eq!(glyph.orientation, Orientation::Horizontal);
    assert_eq!(glyph.stats.median, 3.0);
    assert_eq!(glyph.stats.fliers, vec![5.0]);
    assert!(!boxes.y.visible);
    assert!(!boxes.spines.left && !boxes.spines.bottom);
}

#[test]
fn surface_round_trips_through_json() {
    let ax = vidi_stats::dash::axes()
        .title("Calibração")
        .histogram(&SAMPLE, 0.0, 6.0, 2.0, true)
        .build()
        .unwrap();
    let back = Axes::from_json(&ax.to_json().unwrap()).unwrap();
    assert_eq!(back, ax);
}
