use super::*;

fn ev(session: u64, phase_index: usize) -> TimerEvent {
    TimerEvent {
        session: SessionId(session),
        phase_index,
    }
}

#[test]
fn pops_in_due_order_then_fifo() {
    let mut q = VirtualTimers::new();
    q.schedule(Millis(300), ev(1, 0));
    q.schedule(Millis(100), ev(1, 1));
    q.schedule(Millis(100), ev(1, 2));
    assert_eq!(q.pending(), 3);
    assert_eq!(q.next_due(), Some(Millis(100)));

    assert!(q.pop_due(Millis(99)).is_none());
    assert_eq!(q.pop_due(Millis(500)).unwrap().1, ev(1, 1));
    assert_eq!(q.pop_due(Millis(500)).unwrap().1, ev(1, 2));
    assert_eq!(q.pop_due(Millis(500)).unwrap().1, ev(1, 0));
    assert!(q.pop_due(Millis(500)).is_none());
    assert_eq!(q.pending(), 0);
}

#[test]
fn cancelled_timers_never_fire() {
    let mut q = VirtualTimers::new();
    let a = q.schedule(Millis(10), ev(1, 0));
    let b = q.schedule(Millis(20), ev(1, 1));
    q.cancel(a);
    q.cancel(a);
    assert_eq!(q.pending(), 1);
    assert_eq!(q.cancelled_count(), 1);
    let (h, e) = q.pop_due(Millis(100)).unwrap();
    assert_eq!(h, b);
    assert_eq!(e, ev(1, 1));
    // Cancelling after it fired is a no-op.
    q.cancel(b);
    assert_eq!(q.cancelled_count(), 1);
}

#[test]
fn cancelling_leaves_no_per_handle_state() {
    let mut q = VirtualTimers::new();
    for i in 0..1_000 {
        let h = q.schedule(Millis(i), ev(i, 0));
        q.cancel(h);
    }
    assert_eq!(q.pending(), 0);
    assert!(q.queue.is_empty());
    assert!(q.index.is_empty());
    assert_eq!(q.cancelled_count(), 1_000);
}
