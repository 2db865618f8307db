//! # Statistics Tests

use std::thread;
use std::time::{Duration, Instant};

use ls8_core::stats::SimStats;
use pretty_assertions::assert_eq;

use crate::common::builder::*;
use crate::common::harness::TestContext;

#[test]
fn test_retire_counts_by_category() {
    let mut stats = SimStats::default();
    for inst in [ldi(0, 1), add(0, 1), mul(0, 1), cmp(0, 1), push(0), pop(0), prn(0), hlt()] {
        stats.retire(&inst, false);
    }

    assert_eq!(stats.instructions_retired, 8);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_alu, 3);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_system, 1);
    assert_eq!(stats.inst_branch, 0);
    assert_eq!(stats.branches_taken, 0);
}

#[test]
fn test_taken_only_counted_when_redirected() {
    let mut stats = SimStats::default();
    stats.retire(&jeq(0), false);
    stats.retire(&jne(0), true);
    stats.retire(&call(0), true);
    stats.retire(&ret(), true);
    stats.retire(&jmp(0), true);

    assert_eq!(stats.inst_branch, 5);
    assert_eq!(stats.branches_taken, 4);
}

#[test]
fn test_faulting_step_is_not_retired() {
    let mut ctx = TestContext::new().load_program(&[ldi(0, 1), pop(0)]);
    assert!(ctx.run().is_err());
    assert_eq!(ctx.cpu().stats.instructions_retired, 1);
    assert_eq!(ctx.cpu().stats.inst_stack, 0);
}

#[test]
fn test_instruction_count_ignores_byte_length() {
    let mut ctx = TestContext::new().load_program(&[ldi(0, 1), prn(0), hlt()]);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.cpu().stats.instructions_retired, 3);
}

#[test]
fn test_run_clock_starts_when_run_begins() {
    let mut ctx = TestContext::new().load_program(&[ldi(0, 1), hlt()]);
    let built = ctx.cpu().stats.start_time();
    thread::sleep(Duration::from_millis(20));
    let before_run = Instant::now();

    let _ = ctx.run().unwrap();

    let started = ctx.cpu().stats.start_time();
    assert!(started >= before_run);
    assert!(started.duration_since(built) >= Duration::from_millis(20));
}
