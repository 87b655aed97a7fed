use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use futures::stream;

use super::*;
use crate::state::progress::PROGRESS_COMPLETE;

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Progress(u8),
    DelayStarted,
    DelayElapsed,
}

#[test]
fn animate_emits_fifty_even_increasing_values() {
    let mut seen = Vec::new();
    let phase = block_on(animate(stream::repeat(()), || async {}, |p| seen.push(p.value())));

    assert_eq!(phase, LoadingPhase::Revealed);
    assert_eq!(seen.len(), 50);
    assert_eq!(seen.first(), Some(&2));
    assert_eq!(seen.last(), Some(&PROGRESS_COMPLETE));
    assert!(seen.windows(2).all(|w| w[1] == w[0] + 2));
}

#[test]
fn animate_stops_pulling_ticks_after_completion() {
    let pulled = Cell::new(0_u32);
    let ticks = stream::repeat(()).inspect(|_| pulled.set(pulled.get() + 1));

    block_on(animate(ticks, || async {}, |_| {}));

    assert_eq!(pulled.get(), 50);
}

#[test]
fn reveal_delay_starts_once_after_final_tick() {
    let events = RefCell::new(Vec::new());
    let delays = Cell::new(0_u32);
    let log = &events;
    let delay_count = &delays;

    let phase = block_on(animate(
        stream::repeat(()),
        move || {
            delay_count.set(delay_count.get() + 1);
            log.borrow_mut().push(Event::DelayStarted);
            async move {
                log.borrow_mut().push(Event::DelayElapsed);
            }
        },
        move |p| log.borrow_mut().push(Event::Progress(p.value())),
    ));

    assert_eq!(phase, LoadingPhase::Revealed);
    assert_eq!(delays.get(), 1);
    let events = events.into_inner();
    let tail = &events[events.len() - 3..];
    assert_eq!(
        tail,
        &[Event::Progress(100), Event::DelayStarted, Event::DelayElapsed]
    );
}

#[test]
fn short_tick_stream_never_reveals() {
    let delays = Cell::new(0_u32);
    let mut last = 0;

    let phase = block_on(animate(
        stream::repeat(()).take(10),
        || {
            delays.set(delays.get() + 1);
            async {}
        },
        |p| last = p.value(),
    ));

    assert_eq!(phase, LoadingPhase::Loading);
    assert_eq!(delays.get(), 0);
    assert_eq!(last, 20);
}
