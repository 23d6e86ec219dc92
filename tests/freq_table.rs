use rstest::rstest;
use vidi_stats::prelude::*;

const SAMPLE: [f64; 7] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 5.0];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_table() {
    let table = freq_table(&SAMPLE, 0.0, 6.0, 2.0).unwrap();

    let bins: Vec<_> = table.iter().map(|r| (r.bin.lower, r.bin.upper)).collect();
    assert_eq!(bins, vec![(0.0, 2.0), (2.0, 4.0), (4.0, 6.0)]);

    let counts: Vec<_> = table.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![1, 5, 1]);

    let cum: Vec<_> = table.iter().map(|r| r.cumulative_count).collect();
    assert_eq!(cum, vec![1, 6, 7]);

    for (row, (pct, cum_pct)) in table
        .iter()
        .zip([(14.29, 14.29), (71.43, 85.72), (14.29, 100.01)])
    {
        assert!(close(row.count_pct, pct), "{} != {pct}", row.count_pct);
        assert!(close(row.cumulative_pct, cum_pct), "{} != {cum_pct}", row.cumulative_pct);
    }
}

#[test]
fn nothing_in_range_is_an_error() {
    let err = freq_table(&SAMPLE, 100.0, 200.0, 10.0).unwrap_err();
    assert!(matches!(err.current_context(), StatsError::EmptyRange));
}

#[test]
fn out_of_range_values_are_not_counted() {
    let table = freq_table(&[-1.0, 0.5, 1.5, 9.0, f64::NAN], 0.0, 2.0, 1.0).unwrap();
    assert_eq!(table.total(), 2);
    assert!(table.iter().all(|r| r.count_pct == 50.0));
}

#[rstest]
#[case(&SAMPLE, 0.0, 6.0, 2.0)]
#[case(&[0.1, 0.2, 0.7, 0.75, 0.9, 1.3, 1.9], 0.0, 2.0, 0.25)]
#[case(&[10.0, 11.0, 12.5, 13.0, 13.1, 14.9, 20.0, 22.2, 23.0], 10.0, 25.0, 1.5)]
#[case(&[1.0, 1.0, 1.0], 0.0, 3.0, 1.0)]
#[case(&[-4.0, 0.0, 0.5, 2.5, 3.99, 4.0, 7.5, f64::NAN], 0.0, 4.0, 0.5)]
fn cumulative_columns_are_monotone(
    #[case] values: &[f64],
    #[case] bin_min: f64,
    #[case] bin_max: f64,
    #[case] bin_width: f64,
) {
    let table = freq_table(values, bin_min, bin_max, bin_width).unwrap();

    for pair in table.rows().windows(2) {
        assert!(pair[1].cumulative_count >= pair[0].cumulative_count);
        assert!(pair[1].cumulative_pct >= pair[0].cumulative_pct);
        assert_eq!(pair[0].bin.upper, pair[1].bin.lower);
    }

    let pct_sum: f64 = table.iter().map(|r| r.count_pct).sum();
    assert!((pct_sum - 100.0).abs() <= 0.1, "pct sum {pct_sum}");

    let in_range = values
        .iter()
        .filter(|v| bin_min <= **v && **v < bin_max)
        .count();
    let last = table.rows().last().unwrap();
    assert_eq!(last.cumulative_count, in_range);
    assert!(close(last.cumulative_pct, pct_sum));
}

#[test]
fn oversized_bin_count_is_an_error() {
    let err = freq_table(&[0.5], 0.0, 1.0, 1e-25).unwrap_err();
    assert!(matches!(err.current_context(), StatsError::TooManyBins));
}

#[test]
fn config_column_names_reach_rendered_table() {
    let cfg = ChartConfig::from_json(r#"{ "columns": { "cumulative_count": "Acumulado" } }"#)
        .unwrap();
    let text = FreqTable::builder(&SAMPLE)
        .range(0.0, 6.0)
        .width(2.0)
        .config(&cfg)
        .build()
        .unwrap()
        .to_string();
    assert!(text.contains("Acumulado"));
    assert!(text.contains("Count / %"));
}

#[test]
fn custom_column_names_show_in_rendered_table() {
    let names = ColumnNames::new()
        .bins("Classes")
        .count("Contagem")
        .count_pct("Contagem / %");
    let text = FreqTable::builder(&SAMPLE)
        .range(0.0, 6.0)
        .width(2.0)
        .names(names)
        .build()
        .unwrap()
        .to_string();

    assert!(text.contains("Classes"));
    assert!(text.contains("Contagem / %"));
    assert!(text.contains("[2, 4)"));
    assert!(text.contains("100.01"));
}

#[test]
fn table_serializes_rows() {
    let table = freq_table(&SAMPLE, 0.0, 6.0, 2.0).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["rows"][1]["count"], 5);
    assert_eq!(json["names"]["bins"], "Bins");
}
