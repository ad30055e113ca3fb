use airsched::config::{PolicyConfig, SlotPolicy};
use airsched::engines::AssignmentEngine;
use airsched::error::AirschedError;
use airsched::types::Parameters;
use polars::df;
use polars::prelude::*;

fn ratings_table() -> DataFrame {
    df! {
        "Program" => &["Wildlife Documentary", "News", "Kids Show", "Sports Live", "Cooking Show", "Drama Series"],
        "Hour 6" => &[4.1, 5.2, 3.0, 4.8, 3.5, 4.4],
        "Hour 7" => &[3.9, 5.0, 2.8, 4.9, 3.7, 4.6],
    }
    .unwrap()
}

#[test]
fn schedule_length_tracks_slot_count() {
    let policy = PolicyConfig {
        slot_policy: SlotPolicy::FixedDefaults,
        ..Default::default()
    };
    let schedule =
        AssignmentEngine::run(&ratings_table(), &Parameters::default(), &policy).unwrap();
    assert_eq!(schedule.len(), 6);
}

#[test]
fn column_names_policy_pairs_against_hour_columns() {
    let policy = PolicyConfig {
        slot_policy: SlotPolicy::ColumnNames,
        ..Default::default()
    };
    let schedule =
        AssignmentEngine::run(&ratings_table(), &Parameters::default(), &policy).unwrap();

    assert_eq!(schedule.len(), 2);
    let slots: Vec<&str> = schedule.slots().collect();
    assert_eq!(slots, vec!["Hour 6", "Hour 7"]);
}

#[test]
fn reference_example_is_reproducible_and_complete() {
    let df = df! {
        "Program" => &["News", "Sports", "Drama"],
        "Time Slot" => &["08:00", "09:00", "10:00"],
    }
    .unwrap();
    let policy = PolicyConfig {
        slot_policy: SlotPolicy::ColumnValues,
        ..Default::default()
    };
    let params = Parameters::new(0.8, 0.02);

    let first = AssignmentEngine::run(&df, &params, &policy).unwrap();
    let second = AssignmentEngine::run(&df, &params, &policy).unwrap();
    assert_eq!(first, second);

    let slots: Vec<&str> = first.slots().collect();
    assert_eq!(slots, vec!["08:00", "09:00", "10:00"]);

    let mut programs: Vec<&str> = first.programs().collect();
    programs.sort();
    assert_eq!(programs, vec!["Drama", "News", "Sports"]);
}

#[test]
fn parameter_pair_changes_can_reorder_the_schedule() {
    let policy = PolicyConfig {
        slot_policy: SlotPolicy::FixedDefaults,
        ..Default::default()
    };
    let df = ratings_table();

    let baseline = AssignmentEngine::run(&df, &Parameters::new(0.8, 0.02), &policy).unwrap();
    let candidates = [
        Parameters::new(0.1, 0.05),
        Parameters::new(0.45, 0.03),
        Parameters::new(0.95, 0.01),
    ];
    let any_different = candidates
        .iter()
        .any(|p| AssignmentEngine::run(&df, p, &policy).unwrap() != baseline);
    assert!(any_different);
}

#[test]
fn fewer_programs_than_slots_repeats_round_robin() {
    let df = df! {
        "Program" => &["A", "B"],
        "Rating" => &[1.0, 2.0],
    }
    .unwrap();
    let policy = PolicyConfig {
        slot_policy: SlotPolicy::FixedDefaults,
        ..Default::default()
    };
    let schedule = AssignmentEngine::run(&df, &Parameters::default(), &policy).unwrap();

    assert_eq!(schedule.len(), 6);
    let programs: Vec<&str> = schedule.programs().collect();
    assert!(programs.iter().all(|p| *p == "A" || *p == "B"));
    assert!(programs.contains(&"A"));
    assert!(programs.contains(&"B"));
}

#[test]
fn zero_column_table_is_rejected() {
    let df = DataFrame::empty();
    let result = AssignmentEngine::run(&df, &Parameters::default(), &PolicyConfig::default());
    assert!(matches!(result, Err(AirschedError::InvalidInput(_))));
}

#[test]
fn out_of_range_parameters_abort_before_assignment() {
    let result = AssignmentEngine::run(
        &ratings_table(),
        &Parameters::new(0.8, 0.2),
        &PolicyConfig::default(),
    );
    assert!(matches!(result, Err(AirschedError::Configuration(_))));
}

#[test]
fn duplicate_programs_collapse_before_assignment() {
    let df = df! {
        "Program" => &["News", "News", "Drama", "Drama", "Sports"],
        "Rating" => &[5.0, 5.0, 3.0, 3.0, 4.0],
    }
    .unwrap();
    let schedule =
        AssignmentEngine::run(&df, &Parameters::default(), &PolicyConfig::default()).unwrap();

    // Synthesized slots count unique programs only.
    assert_eq!(schedule.len(), 3);
    let mut programs: Vec<&str> = schedule.programs().collect();
    programs.sort();
    assert_eq!(programs, vec!["Drama", "News", "Sports"]);
}
