//! End-to-end tests for the revelation schedule
//!
//! Drives a scheduler over a single eight-sample line with one revealed
//! sample, the smallest setup where every phase of the schedule is visible.

use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use revelar::config::parse_config;
use revelar::{
    delete_random_traces, grow, simulate, Mask, Phase, RevealScheduler, ScheduleParams,
    ThinningMode,
};

fn line_mask(revealed: &[usize]) -> Mask {
    let mut values = vec![false; 8];
    for &i in revealed {
        values[i] = true;
    }
    Mask::from(ndarray::Array1::from(values))
}

/// Keep convention: the reveal fraction is the chance of admitting a sample.
fn scheduler() -> RevealScheduler {
    let params = ScheduleParams::new(10, 5).with_thinning(ThinningMode::Keep);
    RevealScheduler::new(line_mask(&[3]), params).unwrap()
}

// ============================================================================
// Single line walkthrough
// ============================================================================

#[test]
fn test_warm_up_returns_initial_mask() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(1);
    for iteration in 0..=10 {
        assert_eq!(scheduler.update(iteration, &mut rng).unwrap(), line_mask(&[3]));
    }
    assert_eq!(scheduler.epoch(), 0);
    assert_eq!(scheduler.growths(), 0);
}

#[test]
fn test_first_growth_event() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(2);
    let effective = scheduler.update(11, &mut rng).unwrap();

    assert_eq!(scheduler.epoch(), 1);
    assert_eq!(scheduler.old_mask(), &line_mask(&[3]));
    assert_eq!(scheduler.new_mask(), &line_mask(&[3, 4]));
    assert!(effective == line_mask(&[3]) || effective == line_mask(&[3, 4]));
}

#[test]
fn test_admission_rate_matches_reveal_fraction() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(3);
    let trials = 4000;

    let admitted = (0..trials)
        .filter(|_| scheduler.update(11, &mut rng).unwrap().get(&[4]) == Some(true))
        .count();

    let rate = admitted as f64 / trials as f64;
    assert!((rate - 0.6).abs() < 0.03, "admission rate {rate}");
    assert_eq!(scheduler.growths(), 1);
}

#[test]
fn test_last_offset_of_epoch_admits_nothing() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(4);
    scheduler.update(11, &mut rng).unwrap();

    assert_eq!(scheduler.phase(14), Phase::Growing { epoch: 1, offset: 4 });
    for _ in 0..50 {
        assert_eq!(scheduler.update(14, &mut rng).unwrap(), line_mask(&[3]));
    }
}

#[test]
fn test_second_epoch_commits_first_growth() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(5);
    for iteration in 0..=15 {
        scheduler.update(iteration, &mut rng).unwrap();
    }

    assert_eq!(scheduler.epoch(), 2);
    assert_eq!(scheduler.old_mask(), &line_mask(&[3, 4]));
    assert_eq!(scheduler.new_mask(), &line_mask(&[3, 4, 5]));
}

#[test]
fn test_drop_mode_starts_near_empty_and_ends_near_full() {
    let params = ScheduleParams::new(0, 20);
    assert_eq!(params.thinning, ThinningMode::Drop);
    let mut scheduler = RevealScheduler::new(line_mask(&[3]), params).unwrap();
    let mut rng = StdRng::seed_from_u64(6);

    // offset 1: keep probability 2/20
    let early = (0..2000)
        .filter(|_| scheduler.update(1, &mut rng).unwrap().get(&[4]) == Some(true))
        .count();
    // offset 19: keep probability 1
    let late = (0..2000)
        .filter(|_| scheduler.update(19, &mut rng).unwrap().get(&[4]) == Some(true))
        .count();

    assert!((120..280).contains(&early), "early admissions {early}");
    assert_eq!(scheduler.epoch(), 1);
    assert_eq!(late, 2000);
}

#[test]
fn test_full_run_saturates_line() {
    let mut scheduler = scheduler();
    let mut rng = StdRng::seed_from_u64(7);
    for iteration in 0..200 {
        let effective = scheduler.update(iteration, &mut rng).unwrap();
        assert!(scheduler.old_mask().is_subset_of(&effective).unwrap());
        assert!(effective.is_subset_of(scheduler.new_mask()).unwrap());
    }
    // growth only moves towards higher indices; positions 0..3 stay hidden
    assert_eq!(scheduler.old_mask(), &line_mask(&[3, 4, 5, 6, 7]));
}

// ============================================================================
// Gathers
// ============================================================================

#[test]
fn test_gather_schedule_from_decimated_acquisition() {
    let mut rng = StdRng::seed_from_u64(8);
    let acquisition = Mask::full(&[16, 24]).unwrap();
    let initial = delete_random_traces(&acquisition, 0.5, &mut rng).unwrap();
    assert_eq!(initial.revealed(), 16 * 12);

    let mut scheduler = RevealScheduler::new(initial.clone(), ScheduleParams::new(2, 3)).unwrap();
    let mut previous = initial.revealed();
    for iteration in 0..40 {
        scheduler.update(iteration, &mut rng).unwrap();
        assert!(scheduler.old_mask().revealed() >= previous);
        previous = scheduler.old_mask().revealed();
    }
    assert!(initial.is_subset_of(scheduler.old_mask()).unwrap());
}

#[test]
fn test_grow_does_not_leak_across_time_slices() {
    let mut data = Array2::from_elem((4, 6), false);
    data[[0, 2]] = true;
    let grown = grow(&Mask::from(data));

    assert_eq!(grown.revealed(), 2);
    assert_eq!(grown.get(&[0, 3]), Some(true));
    assert_eq!(grown.get(&[1, 2]), Some(false));
}

#[test]
fn test_grow_rank3_plane() {
    let data = array![[[true, false, false], [false, false, false], [false, false, false]]];
    let grown = grow(&Mask::from(data));
    let expected = array![[[true, true, false], [true, true, false], [false, false, false]]];
    assert_eq!(grown, Mask::from(expected));
}

// ============================================================================
// Configured runs
// ============================================================================

#[test]
fn test_simulate_from_yaml() {
    let spec = parse_config(
        r#"
schedule:
  threshold: 4
  step: 4
  thinning: keep
acquisition:
  shape: [8, 6, 6]
  decimation: 0.75
run:
  iterations: 30
  seed: 11
"#,
    )
    .unwrap();

    let report = simulate(&spec).unwrap();
    assert_eq!(report.total_samples, 8 * 36);
    assert_eq!(report.initial_revealed, 8 * 9);
    assert_eq!(report.iterations.len(), 30);
    assert_eq!(report.growth_events, 7);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"growth_events\":7"));
}
