use approx::assert_relative_eq;
use fintime_scale::TimeIndexScale;

const DAY: i64 = 86_400_000;
// 2024-01-01 00:00:00 UTC, a Monday.
const MONDAY: i64 = 1_704_067_200_000;

/// Two weeks of weekdays: Mon..Fri, skipping Sat/Sun.
fn two_weeks_of_weekdays() -> Vec<i64> {
    [0, 1, 2, 3, 4, 7, 8, 9, 10, 11]
        .iter()
        .map(|&day| MONDAY + day * DAY)
        .collect()
}

fn weekday_scale() -> TimeIndexScale {
    let mut scale = TimeIndexScale::utc();
    scale.set_range((0.0, 500.0)).expect("valid range");
    scale
        .set_domain(two_weeks_of_weekdays())
        .expect("valid domain");
    scale
}

#[test]
fn domain_points_round_trip_through_pixels() {
    let scale = weekday_scale();
    for &time in scale.full_domain() {
        let pixel = scale.time_to_pixel(time);
        assert_eq!(scale.pixel_to_time(pixel), Some(time));
    }
}

#[test]
fn first_band_is_inset_by_outer_padding() {
    let mut scale = TimeIndexScale::utc();
    scale.set_range((0.0, 500.0)).expect("valid range");
    scale
        .set_domain((0..5).map(|day| MONDAY + day * DAY).collect())
        .expect("valid domain");

    // Index domain [0,4] widened by 0.65 * band(100px) on both pixel ends
    // puts the first sample at 6500/126 px instead of 0.
    assert_relative_eq!(scale.time_to_pixel(MONDAY), 6_500.0 / 126.0, epsilon = 1e-9);
    assert_relative_eq!(
        scale.time_to_pixel(MONDAY + 4 * DAY),
        500.0 - 6_500.0 / 126.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(scale.band(), 100.0 / 1.26, epsilon = 1e-9);
}

#[test]
fn weekend_queries_snap_forward_without_a_gap() {
    let scale = weekday_scale();
    let friday = MONDAY + 4 * DAY;
    let saturday = MONDAY + 5 * DAY;
    let sunday = MONDAY + 6 * DAY;
    let next_monday = MONDAY + 7 * DAY;

    assert_eq!(scale.time_to_pixel(saturday), scale.time_to_pixel(next_monday));
    assert_eq!(scale.time_to_pixel(sunday), scale.time_to_pixel(next_monday));
    assert!(scale.time_to_pixel(friday) < scale.time_to_pixel(saturday));
}

#[test]
fn queries_before_and_after_the_domain_snap_one_step_out() {
    let scale = weekday_scale();
    let first = scale.full_domain()[0];
    let last = *scale.full_domain().last().expect("non-empty");

    assert_eq!(
        scale.time_to_pixel(first - DAY),
        scale.time_to_pixel_offset(first, -1.0)
    );
    assert_eq!(
        scale.time_to_pixel(last + DAY),
        scale.time_to_pixel_offset(last, 1.0)
    );
}

#[test]
fn invert_outside_the_mapped_domain_returns_none() {
    let scale = weekday_scale();
    assert_eq!(scale.pixel_to_time(-10_000.0), None);
    assert_eq!(scale.pixel_to_time(10_000.0), None);
}

#[test]
fn pixel_to_index_exposes_out_of_bounds_indexes() {
    let scale = weekday_scale();
    assert!(scale.pixel_to_index(-10_000.0) < 0);
    assert!(scale.pixel_to_index(10_000.0) > 9);
}

#[test]
fn visible_domain_spans_the_full_array_after_set_domain() {
    let scale = weekday_scale();
    assert_eq!(scale.visible_domain(), scale.full_domain());
}

#[test]
fn zoom_windows_left_of_the_limit_slide_back_inside() {
    let mut scale = weekday_scale();
    scale.set_zoom_window(-8.0, -2.0).expect("clamped window");

    let (limit_start, _) = scale.zoom_limit();
    let (start, end) = scale.zoomable().window();
    assert_relative_eq!(start, limit_start, epsilon = 1e-9);
    assert_relative_eq!(end, limit_start + 6.0, epsilon = 1e-9);
    assert!(!scale.visible_domain().is_empty());
}

#[test]
fn single_point_domain_stays_centered() {
    let mut scale = TimeIndexScale::utc();
    scale.set_range((0.0, 500.0)).expect("valid range");
    scale.set_domain(vec![MONDAY]).expect("valid domain");

    assert_eq!(scale.time_to_pixel(MONDAY), 250.0);
    assert_eq!(scale.visible_domain(), &[MONDAY]);
}

#[test]
fn unsorted_or_duplicated_domains_are_rejected() {
    let mut scale = TimeIndexScale::utc();
    assert!(scale.set_domain(vec![3, 1, 2]).is_err());
    assert!(scale.set_domain(vec![1, 1, 2]).is_err());
}

#[test]
fn padding_mutators_validate_and_reapply() {
    let mut scale = weekday_scale();
    assert!(scale.set_padding(1.5).is_err());
    assert!(scale.set_padding(f64::NAN).is_err());
    assert!(scale.set_outer_padding(-0.1).is_err());

    let band_before = scale.band();
    scale.set_padding(0.5).expect("valid padding");
    assert!(scale.band() < band_before);
}

#[test]
fn padding_changes_recapture_the_zoom_limit() {
    let mut scale = weekday_scale();
    scale.set_zoom_window(2.0, 5.0).expect("zoom in");
    let limit_before = scale.zoom_limit();

    scale.set_outer_padding(0.0).expect("valid outer padding");
    let refreshed_limit = scale.zoom_limit();
    assert_ne!(limit_before, refreshed_limit);
    // With no outer padding the limit snaps back to the raw index bounds.
    assert_relative_eq!(refreshed_limit.0, 0.0, epsilon = 1e-9);
    assert_relative_eq!(refreshed_limit.1, 9.0, epsilon = 1e-9);
}

#[test]
fn cloned_scales_match_until_mutated_independently() {
    let mut original = weekday_scale();
    let mut copy = original.clone();

    assert_eq!(
        original.time_to_pixel(MONDAY + 2 * DAY),
        copy.time_to_pixel(MONDAY + 2 * DAY)
    );
    assert_eq!(original.ticks(), copy.ticks());

    copy.set_zoom_window(4.0, 9.0).expect("zoom copy");
    assert_ne!(
        original.time_to_pixel(MONDAY + 2 * DAY),
        copy.time_to_pixel(MONDAY + 2 * DAY)
    );
    assert_eq!(original.visible_domain().len(), 10);
}

#[test]
fn set_range_rescales_band_without_moving_the_window() {
    let mut scale = weekday_scale();
    let window = scale.zoom_limit();
    let band_before = scale.band();

    scale.set_range((0.0, 1_000.0)).expect("valid range");
    assert_relative_eq!(scale.band(), band_before * 2.0, epsilon = 1e-9);
    assert_eq!(scale.zoom_limit(), window);
    assert!(scale.set_range((0.0, f64::INFINITY)).is_err());
}
