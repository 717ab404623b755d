// File: crates/chart-data/tests/rotate.rs
// Purpose: Validate the positional row/column pivot.

use chart_data::data::{Datum, Series};
use chart_data::rotate;

fn uk_fr() -> Vec<Series> {
    vec![
        Series::new("Apples", vec![Datum::new("UK", 1.0), Datum::new("FR", -2.0)]),
        Series::new("Oranges", vec![Datum::new("UK", 3.0), Datum::new("FR", 4.0)]),
    ]
}

#[test]
fn pivot_swaps_rows_and_columns() {
    let rotated = rotate(&uk_fr());

    assert_eq!(rotated.len(), 2);
    assert_eq!(rotated[0].key, "UK");
    assert_eq!(rotated[0].values, vec![Datum::new("Apples", 1.0), Datum::new("Oranges", 3.0)]);
    assert_eq!(rotated[1].key, "FR");
    assert_eq!(rotated[1].values, vec![Datum::new("Apples", -2.0), Datum::new("Oranges", 4.0)]);
}

#[test]
fn pivot_carries_coordinates() {
    let input = vec![
        Series::new("s1", vec![Datum::new("a", 1.0).with_coords(5.0, 6.0, 7.0)]),
        Series::new("s2", vec![Datum::new("a", 2.0)]),
    ];
    let rotated = rotate(&input);
    assert_eq!(rotated[0].values[0].x, Some(5.0));
    assert_eq!(rotated[0].values[0].y, Some(6.0));
    assert_eq!(rotated[0].values[1].x, None);
}

#[test]
fn pivot_twice_restores_rectangular_input() {
    let input = uk_fr();
    assert_eq!(rotate(&rotate(&input)), input);
}

#[test]
fn pivot_leaves_input_untouched() {
    let input = uk_fr();
    let copy = input.clone();
    let _ = rotate(&input);
    assert_eq!(input, copy);
}

#[test]
fn pivot_of_empty_is_empty() {
    assert!(rotate(&[]).is_empty());
}
