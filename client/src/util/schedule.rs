//! Timer-driven loading animation.
//!
//! DESIGN
//! ======
//! `animate` is written against a plain tick `Stream` and a delay factory so
//! the schedule can be exercised without a browser. The tick stream is the
//! repeating timer: it is dropped on the completing tick, which cancels the
//! browser interval, and nothing pulls from it afterwards. The reveal delay
//! is only created once progress is complete, so its clock starts then.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::future::Future;
use std::pin::pin;

use futures::StreamExt;
use futures::stream::Stream;

use crate::state::progress::{LoadingPhase, ProgressState, TickOutcome};

/// Run the progress animation to completion, then wait for the reveal delay.
///
/// `on_progress` sees the counter after every tick, including the final one.
/// Returns `Revealed` once the delay has elapsed, or `Loading` if the tick
/// stream ended before the counter completed.
pub async fn animate<S, D, Fut, F>(ticks: S, reveal_delay: D, mut on_progress: F) -> LoadingPhase
where
    S: Stream<Item = ()>,
    D: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(ProgressState),
{
    let mut progress = ProgressState::new();
    let completed = {
        let mut ticks = pin!(ticks);
        let mut completed = false;
        while ticks.next().await.is_some() {
            match progress.tick() {
                TickOutcome::Advanced(_) => on_progress(progress),
                TickOutcome::Completed(_) => {
                    on_progress(progress);
                    completed = true;
                    break;
                }
                TickOutcome::Finished => break,
            }
        }
        completed
    };

    if !completed {
        return LoadingPhase::Loading;
    }
    reveal_delay().await;
    LoadingPhase::Revealed
}

/// Browser schedule: 20 ms interval ticks and a 300 ms reveal timeout.
#[cfg(feature = "hydrate")]
pub async fn animate_in_browser<F>(on_progress: F) -> LoadingPhase
where
    F: FnMut(ProgressState),
{
    use gloo_timers::future::{IntervalStream, TimeoutFuture};

    use crate::state::progress::{REVEAL_DELAY_MS, TICK_INTERVAL_MS};

    animate(
        IntervalStream::new(TICK_INTERVAL_MS),
        || TimeoutFuture::new(REVEAL_DELAY_MS),
        on_progress,
    )
    .await
}
