//! End-to-end container contract: growth, copies, cursors, ownership.

use std::io;
use std::sync::{Arc, Mutex};

use seqvec::{GrowthPolicy, SeqError, Vector};
use seqvec_test_utils::fixtures::{ascending, interleaved_positions, labels};
use seqvec_test_utils::{DropCounter, Opaque};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("seqvec=trace")
        .with_test_writer()
        .try_init();
}

/// In-memory log sink for asserting on emitted events.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_trace<F: FnOnce()>(f: F) -> String {
    let log = CapturedLog::default();
    let sink = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("seqvec=trace")
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.text()
}

#[test]
fn push_six_grows_and_prints() {
    init_tracing();
    let mut v = Vector::new();
    let initial = v.capacity();
    for x in ascending(6) {
        v.push_back(x);
    }
    assert_eq!(v.len(), 6);
    assert!(v.capacity() > initial);
    assert!(v.epoch() >= 1);

    let mut out = Vec::new();
    v.print(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "[1, 2, 3, 4, 5, 6]");
}

#[test]
fn erase_second_of_three() {
    let mut v = Vector::from([10, 20, 30]);
    let second = v.begin().position() + 1;
    v.erase(second).unwrap();
    assert_eq!(v.to_string(), "[10, 30]");
    assert_eq!(v.len(), 2);
}

#[test]
fn copy_of_roomy_vector_is_tight() {
    let mut v = Vector::with_capacity(10);
    v.push_back(1);
    v.push_back(2);
    assert_eq!(v.capacity(), 10);

    let copy = v.clone();
    assert_eq!(copy.capacity(), GrowthPolicy::DEFAULT_MIN_CAPACITY.max(2));
    assert_eq!(copy.as_slice(), &[1, 2]);
}

#[test]
fn copy_is_independent() {
    let original = Vector::from_list(labels(3));
    let mut copy = original.clone();
    copy[0].push_str("-changed");
    copy.push_back("extra".to_owned());
    assert_eq!(original[0], "item-0");
    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 4);
}

#[test]
fn clone_from_uses_source_length() {
    let source = Vector::from_list(ascending(12));
    let mut target = Vector::from([0]);
    target.clone_from(&source);
    assert_eq!(target.capacity(), 12);
    assert_eq!(target, source);
}

#[test]
fn index_at_len_fails_for_both_access_kinds() {
    let mut v = Vector::from([1, 2, 3]);
    let expected = SeqError::IndexOutOfRange { index: 3, len: 3 };
    assert_eq!(v.get(3).unwrap_err(), expected);
    assert_eq!(v.get_mut(3).unwrap_err(), expected);
}

#[test]
fn end_cursor_cannot_be_read_or_advanced() {
    let v = Vector::from([1, 2, 3]);
    let mut end = v.end();
    assert!(matches!(end.get(), Err(SeqError::EndOfRange { .. })));
    assert!(matches!(end.advance(), Err(SeqError::EndOfRange { .. })));
    assert!(matches!(end.post_advance(), Err(SeqError::EndOfRange { .. })));
    assert_eq!(end, v.end());
}

#[test]
fn insert_at_begin_returns_cursor_to_value() {
    let mut v = Vector::from([2, 3, 4]);
    let front = v.begin().position();
    let cursor = v.insert(front, 1).unwrap();
    assert_eq!(cursor.get(), Ok(&1));
    assert_eq!(cursor.index(), 0);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn interleaved_inserts_match_reference() {
    let mut v = Vector::new();
    let mut reference = Vec::new();
    for (value, index) in interleaved_positions(40).into_iter().enumerate() {
        let at = v.position_at(index);
        v.insert(at, value).unwrap();
        reference.insert(index, value);
    }
    assert_eq!(v.as_slice(), reference.as_slice());
    assert!(v.capacity() >= v.len());
}

#[test]
fn position_survives_non_reallocating_insert() {
    let mut v = Vector::with_capacity(10);
    v.extend([1, 2, 3]);
    let at = v.position_at(1);
    v.insert(v.end().position(), 4).unwrap();
    assert_eq!(v.epoch(), 0);
    v.erase(at).unwrap();
    assert_eq!(v.as_slice(), &[1, 3, 4]);
}

#[test]
fn reallocation_makes_position_stale() {
    let mut v = Vector::from_list(ascending(5));
    let at = v.begin().position();
    v.push_back(6);
    assert!(matches!(
        v.insert(at, 0),
        Err(SeqError::StalePosition { .. })
    ));
    assert_eq!(v.len(), 6);
}

#[test]
fn failed_calls_leave_state_untouched() {
    let mut v = Vector::from_list(ascending(4));
    let (len, cap, epoch) = (v.len(), v.capacity(), v.epoch());

    assert!(v.reserve(1).is_err());
    assert!(v.erase(v.end().position()).is_err());
    assert!(v.insert(v.position_at(len + 1), 0).is_err());
    assert!(v.get(len).is_err());

    assert_eq!((v.len(), v.capacity(), v.epoch()), (len, cap, epoch));
    assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn pop_until_empty_then_fail() {
    let mut v = Vector::from([1, 2]);
    assert_eq!(v.pop_back(), Ok(2));
    assert_eq!(v.pop_back(), Ok(1));
    assert_eq!(v.pop_back(), Err(SeqError::EmptyContainer));
    assert!(v.is_empty());
}

#[test]
fn non_clone_elements_move_through_reallocation() {
    let mut v = Vector::new();
    for i in 0..20 {
        v.push_back(Opaque(i));
    }
    v.shrink_to_fit().unwrap();
    assert_eq!(v.capacity(), 20);
    let at = v.position_at(0);
    v.erase(at).unwrap();
    assert_eq!(v[0], Opaque(1));
}

#[test]
fn every_element_dropped_exactly_once() {
    let counter = DropCounter::new();
    {
        let mut v = Vector::new();
        for i in 0..12 {
            v.push_back(counter.track(i));
        }
        v.reserve(40).unwrap();
        v.shrink_to_fit().unwrap();
        assert_eq!(counter.drops(), 0);

        let at = v.position_at(3);
        v.erase(at).unwrap();
        assert_eq!(counter.drops(), 1);

        let popped = v.pop_back().unwrap();
        assert_eq!(popped.value, 11);
        drop(popped);
        assert_eq!(counter.drops(), 2);

        v.clear();
        assert_eq!(counter.drops(), 12);

        v.push_back(counter.track(99));
    }
    assert_eq!(counter.drops(), 13);
}

#[test]
fn assignment_drops_previous_contents() {
    let counter = DropCounter::new();
    let source = Vector::from([counter.track('x')]);
    let mut target = Vector::from_list((0..4).map(|_| counter.track('y')));
    target.assign(&source);
    assert_eq!(counter.drops(), 4);
    assert_eq!(target.len(), 1);
    assert_eq!(target[0].value, 'x');
}

#[test]
fn read_only_cursor_walks_like_an_iterator() {
    let v = Vector::from_list(ascending(5));
    let sum: i32 = v.begin().sum();
    assert_eq!(sum, 15);

    let mut c = v.begin();
    let mut visited = 0;
    while c != v.end() {
        c.advance().unwrap();
        visited += 1;
    }
    assert_eq!(visited, v.len());
    assert_eq!(c - v.begin(), 5);
}

#[test]
fn small_policy_boundary_growth() {
    let policy = GrowthPolicy::new(1, 2);
    let mut v = Vector::with_policy(policy).unwrap();
    let mut capacities = Vec::new();
    for i in 0..9 {
        v.push_back(i);
        capacities.push(v.capacity());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(v.epoch(), 4);
}

#[test]
fn every_buffer_replacement_is_traced() {
    let source = Vector::from([7, 8]);
    let mut target = Vector::from_list(ascending(9));

    let log = capture_trace(|| target.assign(&source));
    assert_eq!(log.matches("buffer reallocated").count(), 1);
    assert!(log.contains("old_capacity=9"));
    assert!(log.contains("new_capacity=5"));

    let log = capture_trace(|| {
        target.reserve(32).unwrap();
        target.shrink_to_fit().unwrap();
    });
    assert_eq!(log.matches("buffer reallocated").count(), 2);
    assert!(log.contains("bytes=8"));
}

#[test]
fn oversized_reserve_is_an_error_not_a_panic() {
    let mut v = Vector::<u64>::from([1, 2]);
    let log = capture_trace(|| {
        assert!(matches!(
            v.reserve(usize::MAX / 2),
            Err(SeqError::AllocationFailed { .. })
        ));
    });
    assert!(log.contains("reallocation failed"));
    assert_eq!((v.len(), v.capacity(), v.epoch()), (2, 5, 0));
}
