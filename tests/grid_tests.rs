use workhours::core::aggregate::{monthly_total, parse_hours, week_total, weekly_totals};
use workhours::core::calendar::{
    WEEK_LEN, days_in_month, first_weekday, is_weekend_column, is_weekend_day, month_grid,
};
use workhours::models::DayHours;

fn hours(pairs: &[(u32, &str)]) -> DayHours {
    pairs
        .iter()
        .map(|(day, raw)| (*day, raw.to_string()))
        .collect()
}

#[test]
fn test_grid_shape_for_sample_months() {
    // (year, month, expected number of days)
    let samples = [
        (2024, 2, 29), // leap year
        (2023, 2, 28),
        (2024, 5, 31),
        (2024, 4, 30),
        (2025, 12, 31),
        (1999, 1, 31),
    ];

    for (year, month, expected) in samples {
        let grid = month_grid(year, month);

        assert_eq!(days_in_month(year, month), expected);
        assert!(!grid.weeks.is_empty());

        // every week row has exactly 7 cells
        for week in &grid.weeks {
            assert_eq!(week.len(), WEEK_LEN);
        }

        // flattened day numbers are strictly increasing 1..=expected
        let days: Vec<u32> = grid.days().collect();
        assert_eq!(days.len(), expected as usize);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&expected));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_first_day_lands_on_its_weekday() {
    // 2024-05-01 was a Wednesday → column 3 of the first week
    assert_eq!(first_weekday(2024, 5), 3);

    let grid = month_grid(2024, 5);
    let first_week = &grid.weeks[0];

    assert_eq!(first_week[3], Some(1));
    assert!(first_week[..3].iter().all(|c| c.is_none()));
}

#[test]
fn test_final_week_is_right_padded() {
    // 2024-05-31 was a Friday → Saturday cell of the last week is empty
    let grid = month_grid(2024, 5);
    let last_week = grid.weeks.last().unwrap();

    assert_eq!(last_week[5], Some(31));
    assert_eq!(last_week[6], None);
}

#[test]
fn test_invalid_month_yields_degenerate_grid() {
    assert!(month_grid(2024, 13).weeks.is_empty());
    assert!(month_grid(2024, 0).weeks.is_empty());
    assert_eq!(days_in_month(2024, 13), 0);
}

#[test]
fn test_weekend_helpers() {
    assert!(is_weekend_column(0));
    assert!(is_weekend_column(6));
    assert!(!is_weekend_column(3));

    assert!(is_weekend_day(2024, 5, 4)); // Saturday
    assert!(is_weekend_day(2024, 5, 5)); // Sunday
    assert!(!is_weekend_day(2024, 5, 6)); // Monday

    // non-existent dates never contribute hours
    assert!(is_weekend_day(2024, 5, 40));
}

#[test]
fn test_parse_hours_coercion() {
    assert_eq!(parse_hours("8"), 8.0);
    assert_eq!(parse_hours(" 7.5 "), 7.5);
    assert_eq!(parse_hours("abc"), 0.0);
    assert_eq!(parse_hours(""), 0.0);
}

#[test]
fn test_week_total_skips_weekend_columns() {
    let grid = month_grid(2024, 5);
    // first week of May 2024: [_, _, _, 1, 2, 3, 4], day 4 is the Saturday column
    let recorded = hours(&[(1, "8"), (4, "9")]);

    assert_eq!(week_total(&grid.weeks[0], &recorded), 8.0);
}

#[test]
fn test_weekly_totals_cover_every_week() {
    let grid = month_grid(2024, 5);
    let recorded = hours(&[(1, "8"), (6, "4")]);

    let totals = weekly_totals(&grid, &recorded);
    assert_eq!(totals.len(), grid.weeks.len());
    assert_eq!(totals[0], 8.0);
    assert_eq!(totals[1], 4.0);
    assert!(totals[2..].iter().all(|t| *t == 0.0));
}

#[test]
fn test_monthly_total_excludes_weekend_days() {
    // day 4 is a Saturday: its value must not count, whatever it is
    let recorded = hours(&[(1, "8"), (4, "5"), (6, "4")]);

    assert_eq!(monthly_total(2024, 5, &recorded), 12.0);
}

#[test]
fn test_monthly_total_treats_unparseable_as_zero() {
    let recorded = hours(&[(1, "abc"), (2, "4")]);

    assert_eq!(monthly_total(2024, 5, &recorded), 4.0);
}

#[test]
fn test_monthly_total_skips_days_outside_month() {
    let recorded = hours(&[(40, "8")]);

    assert_eq!(monthly_total(2024, 5, &recorded), 0.0);
}
