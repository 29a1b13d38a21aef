use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

use super::{decode_line, InputChannel, InputPoller};
use crate::scheduler::{Scheduler, Task};
use crate::scoreboard::{ScoreCommand, Scoreboard, Timer};

struct ScriptedChannel {
    reads: VecDeque<io::Result<Vec<u8>>>,
}

impl ScriptedChannel {
    fn boxed(reads: Vec<io::Result<Vec<u8>>>) -> Box<dyn InputChannel> {
        Box::new(Self {
            reads: reads.into(),
        })
    }
}

impl InputChannel for ScriptedChannel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        self.reads.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

const INTERVAL: Duration = Duration::from_millis(50);

#[test]
fn decode_line_accepts_only_exact_codes() {
    assert_eq!(decode_line("A"), Some(ScoreCommand::Increment));
    assert_eq!(decode_line("B\r"), Some(ScoreCommand::Decrement));
    assert_eq!(decode_line("a"), None);
    assert_eq!(decode_line("AB"), None);
    assert_eq!(decode_line("Q"), None);
    assert_eq!(decode_line(""), None);
}

#[test]
fn poll_decodes_buffered_lines() {
    let now = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut poller = InputPoller::new(
        Some(ScriptedChannel::boxed(vec![Ok(b"A\nQ\nB\nA".to_vec()), Ok(b"\n".to_vec())])),
        INTERVAL,
    );

    assert_eq!(
        poller.poll(now, &mut scheduler),
        vec![ScoreCommand::Increment, ScoreCommand::Decrement]
    );
    assert_eq!(poller.poll(now, &mut scheduler), vec![ScoreCommand::Increment]);
}

#[test]
fn line_noise_before_code_still_counts() {
    let now = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut poller = InputPoller::new(
        Some(ScriptedChannel::boxed(vec![Ok(b"\xffA\n\x80B\r\n".to_vec())])),
        INTERVAL,
    );

    assert_eq!(
        poller.poll(now, &mut scheduler),
        vec![ScoreCommand::Increment, ScoreCommand::Decrement]
    );
}

#[test]
fn read_errors_do_not_stop_polling() {
    let now = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut poller = InputPoller::new(
        Some(ScriptedChannel::boxed(vec![
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged")),
            Ok(b"A\n".to_vec()),
        ])),
        INTERVAL,
    );

    assert!(poller.poll(now, &mut scheduler).is_empty());
    assert_eq!(scheduler.next_deadline(), Some(now + INTERVAL));
    let later = now + INTERVAL;
    assert_eq!(scheduler.take_due(later), vec![Task::PollInput]);
    assert_eq!(poller.poll(later, &mut scheduler), vec![ScoreCommand::Increment]);
}

#[test]
fn detached_poller_keeps_rescheduling() {
    let now = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut poller = InputPoller::detached(INTERVAL);

    poller.arm(now, &mut scheduler);
    assert_eq!(scheduler.take_due(now), vec![Task::PollInput]);
    assert!(poller.poll(now, &mut scheduler).is_empty());
    assert_eq!(scheduler.next_deadline(), Some(now + INTERVAL));
}

#[test]
fn remote_increment_respects_clock_gate() {
    let base = Instant::now();
    let mut scheduler = Scheduler::new();
    let mut board = Scoreboard::new(Timer::new(Some(60_000), Duration::from_millis(10)), true);
    let mut poller = InputPoller::new(
        Some(ScriptedChannel::boxed(vec![
            Ok(b"A\n".to_vec()),
            Ok(b"A\n".to_vec()),
            Ok(b"Q\n".to_vec()),
        ])),
        INTERVAL,
    );

    for command in poller.poll(base, &mut scheduler) {
        board.apply(command);
    }
    assert_eq!(board.score.value(), 0);

    board.timer.start(base, &mut scheduler);
    for command in poller.poll(base, &mut scheduler) {
        board.apply(command);
    }
    assert_eq!(board.score.value(), 1);

    for command in poller.poll(base, &mut scheduler) {
        board.apply(command);
    }
    assert_eq!(board.score.value(), 1);
}
