use std::time::{Duration, Instant};

use super::{format_clock, Indicator, Phase, ScoreCommand, Scoreboard, Timer};
use crate::scheduler::{Scheduler, Task};

const TICK: Duration = Duration::from_millis(10);

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

fn minute_timer() -> Timer {
    Timer::new(Some(60_000), TICK)
}

#[test]
fn format_clock_uses_unbounded_minutes() {
    assert_eq!(format_clock(0), "00:00.000");
    assert_eq!(format_clock(500), "00:00.500");
    assert_eq!(format_clock(61_007), "01:01.007");
    assert_eq!(format_clock(100 * 60_000 + 5), "100:00.005");
}

#[test]
fn start_then_tick_renders_elapsed_time() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    timer.tick(at(base, 500), &mut scheduler);

    assert!(timer.is_running());
    assert_eq!(timer.display(), "00:00.500");
    assert_eq!(timer.phase(), Phase::Running);
}

#[test]
fn tick_past_limit_clamps_and_stops() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    timer.tick(at(base, 500), &mut scheduler);
    timer.tick(at(base, 61_000), &mut scheduler);

    assert_eq!(timer.elapsed_ms(), 60_000);
    assert_eq!(timer.display(), "01:00.000");
    assert!(!timer.is_running());
    assert_eq!(timer.phase(), Phase::Expired);
    assert_eq!(timer.remaining_ms(), Some(0));
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn expired_clock_does_not_restart() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    timer.tick(at(base, 70_000), &mut scheduler);
    timer.start(at(base, 71_000), &mut scheduler);

    assert!(!timer.is_running());
    assert_eq!(timer.elapsed_ms(), 60_000);
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn pause_then_start_resumes_from_banked_time() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    timer.pause(at(base, 1_234), &mut scheduler);
    assert_eq!(timer.elapsed_ms(), 1_234);
    assert_eq!(timer.indicator(), Indicator::Paused);
    assert_eq!(timer.phase(), Phase::Paused);

    // Time spent paused must not count.
    timer.start(at(base, 5_000), &mut scheduler);
    assert_eq!(timer.indicator(), Indicator::Active);
    timer.tick(at(base, 5_000), &mut scheduler);
    assert_eq!(timer.elapsed_ms(), 1_234);
    timer.tick(at(base, 5_100), &mut scheduler);
    assert_eq!(timer.elapsed_ms(), 1_334);
}

#[test]
fn pause_cancels_pending_tick() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    let handle = timer.pending_tick().expect("tick scheduled on start");
    timer.pause(at(base, 5), &mut scheduler);

    assert!(!scheduler.is_pending(handle));
    assert!(timer.pending_tick().is_none());
    assert!(scheduler.take_due(at(base, 1_000)).is_empty());
}

#[test]
fn running_clock_keeps_exactly_one_tick_queued() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.start(base, &mut scheduler);
    timer.start(at(base, 1), &mut scheduler);
    assert_eq!(scheduler.len(), 1);

    for step in 0..5 {
        let now = at(base, step * 10);
        for task in scheduler.take_due(now) {
            assert_eq!(task, Task::TimerTick);
            timer.tick(now, &mut scheduler);
        }
        assert_eq!(scheduler.len(), 1);
    }
    assert_eq!(timer.elapsed_ms(), 40);
}

#[test]
fn reset_always_returns_to_zero() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();

    let mut running = minute_timer();
    running.start(base, &mut scheduler);
    running.tick(at(base, 2_500), &mut scheduler);
    running.reset(&mut scheduler);

    let mut paused = minute_timer();
    paused.start(base, &mut scheduler);
    paused.pause(at(base, 800), &mut scheduler);
    paused.reset(&mut scheduler);

    let mut expired = minute_timer();
    expired.start(base, &mut scheduler);
    expired.tick(at(base, 90_000), &mut scheduler);
    expired.reset(&mut scheduler);

    for timer in [&running, &paused, &expired] {
        assert_eq!(timer.elapsed_ms(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "00:00.000");
        assert_eq!(timer.indicator(), Indicator::Active);
        assert_eq!(timer.phase(), Phase::Idle);
    }
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn tick_on_stopped_clock_is_a_no_op() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.tick(at(base, 500), &mut scheduler);

    assert_eq!(timer.elapsed_ms(), 0);
    assert!(timer.pending_tick().is_none());
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn unlimited_clock_never_expires() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = Timer::new(Some(0), TICK);

    timer.start(base, &mut scheduler);
    timer.tick(at(base, 3_600_000), &mut scheduler);

    assert!(timer.is_running());
    assert_eq!(timer.remaining_ms(), None);
    assert_eq!(timer.display(), "60:00.000");
}

#[test]
fn toggle_alternates_start_and_pause() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut timer = minute_timer();

    timer.toggle(base, &mut scheduler);
    assert!(timer.is_running());
    timer.toggle(at(base, 300), &mut scheduler);
    assert!(!timer.is_running());
    assert_eq!(timer.elapsed_ms(), 300);
}

#[test]
fn score_is_gated_by_running_clock() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut board = Scoreboard::new(minute_timer(), true);

    assert!(!board.apply(ScoreCommand::Decrement));
    assert!(!board.apply(ScoreCommand::Increment));
    assert_eq!(board.score.value(), 0);

    board.timer.start(base, &mut scheduler);
    assert!(!board.apply(ScoreCommand::Decrement));
    assert!(board.apply(ScoreCommand::Increment));
    assert_eq!(board.score.value(), 1);

    board.timer.pause(at(base, 100), &mut scheduler);
    assert!(!board.apply(ScoreCommand::Increment));
    assert!(!board.apply(ScoreCommand::Decrement));
    assert_eq!(board.score.value(), 1);
}

#[test]
fn ungated_board_scores_without_clock() {
    let mut board = Scoreboard::new(minute_timer(), false);

    assert!(board.apply(ScoreCommand::Increment));
    assert!(board.apply(ScoreCommand::Increment));
    assert!(board.apply(ScoreCommand::Decrement));
    assert_eq!(board.score.value(), 1);
}
