use rvenuereport::core::ReportLogic;
use rvenuereport::core::ranking::{RankWindow, is_proximal, rank};
use rvenuereport::models::{IdentityScheme, VenueRecord};

mod common;
use common::{JobRow, d, job, rows};

fn venues(jobs: &[JobRow]) -> Vec<VenueRecord> {
    ReportLogic::build_index(rows(jobs), None, IdentityScheme::Full).into_venues()
}

fn june_2025() -> RankWindow {
    RankWindow {
        start_date: d("2025-06-01"),
        end_date: d("2025-06-30"),
        prox_weeks: 2,
    }
}

fn ranked_ids(list: &[VenueRecord], window: &RankWindow) -> Vec<i64> {
    let refs: Vec<&VenueRecord> = list.iter().collect();
    rank(&refs, window)
        .iter()
        .map(|r| r.venue.latest_job().id())
        .collect()
}

#[test]
fn test_last_year_bounds() {
    assert_eq!(
        june_2025().last_year_bounds(),
        (d("2024-05-18"), d("2024-07-14"))
    );
}

#[test]
fn test_leap_day_window_clamps() {
    let window = RankWindow {
        start_date: d("2028-02-29"),
        end_date: d("2028-03-10"),
        prox_weeks: 0,
    };
    assert_eq!(window.last_year_bounds().0, d("2027-02-28"));
}

#[test]
fn test_proximity_bounds_are_inclusive() {
    let window = june_2025();
    let edge = venues(&[job(1).on("2024-07-14")]);
    let outside = venues(&[job(1).on("2024-07-15")]);

    assert!(is_proximal(&edge[0], &window));
    assert!(!is_proximal(&outside[0], &window));
}

#[test]
fn test_any_session_of_any_job_counts_for_proximity() {
    // latest job is in 2025, but an older job ran last June
    let list = venues(&[job(1).on("2024-06-12"), job(2).on("2025-01-15")]);
    assert!(is_proximal(&list[0], &june_2025()));
}

#[test]
fn test_proximal_venues_come_first() {
    let list = venues(&[
        job(1).street("1 A St").rsvps(50).on("2024-01-10"),
        job(2).street("2 B St").rsvps(10).on("2024-06-10"),
    ]);

    assert_eq!(ranked_ids(&list, &june_2025()), vec![2, 1]);
}

#[test]
fn test_proximal_sorted_by_ror() {
    let list = venues(&[
        job(1).street("1 A St").rsvps(10).on("2024-06-03"),
        job(2).street("2 B St").rsvps(40).on("2024-06-10"),
        job(3).street("3 C St").rsvps(25).on("2024-06-17"),
    ]);

    assert_eq!(ranked_ids(&list, &june_2025()), vec![2, 3, 1]);
}

#[test]
fn test_others_sorted_by_month_then_ror() {
    let list = venues(&[
        job(1).street("1 A St").rsvps(10).on("2024-03-05"),
        job(2).street("2 B St").rsvps(40).on("2024-02-20"),
        job(3).street("3 C St").rsvps(25).on("2024-03-20"),
        job(4).street("4 D St").rsvps(30).on("2024-01-08"),
    ]);

    // Jan, Feb, then March with higher ROR first
    assert_eq!(ranked_ids(&list, &june_2025()), vec![4, 2, 3, 1]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let list = venues(&[
        job(1).street("1 A St").on("2024-03-05"),
        job(2).street("2 B St").on("2024-03-12"),
        job(3).street("3 C St").on("2024-03-19"),
    ]);

    assert_eq!(ranked_ids(&list, &june_2025()), vec![1, 2, 3]);
}

#[test]
fn test_rank_marks_proximal_flag() {
    let list = venues(&[
        job(1).street("1 A St").on("2024-01-10"),
        job(2).street("2 B St").on("2024-06-10"),
    ]);
    let refs: Vec<&VenueRecord> = list.iter().collect();
    let ranked = rank(&refs, &june_2025());

    assert!(ranked[0].proximal);
    assert!(!ranked[1].proximal);
}
