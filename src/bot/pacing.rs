//! Per request pacing queue. Fragments are queued as fast as they are
//! produced and a single task drains the queue, letting at most one
//! fragment through per interval. Ordering is whatever the producer
//! sent.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

/// Drain `queue` at no more than one fragment per `interval` into the
/// returned receiver. The first fragment goes out immediately. The
/// returned receiver closes after the last fragment once the producer
/// is done.
///
/// Dropping the returned receiver stops the pacing task, which in
/// turn closes `queue` so the producer can stop early.
pub fn pace(
    mut queue: mpsc::UnboundedReceiver<String>,
    interval: Duration,
) -> mpsc::UnboundedReceiver<String> {
    if interval.is_zero() {
        return queue;
    }

    let (tx, paced) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let drain = async {
            while let Some(fragment) = queue.recv().await {
                ticker.tick().await;
                if tx.send(fragment).is_err() {
                    break;
                }
            }
        };

        tokio::select! {
            _ = drain => {}
            _ = tx.closed() => {
                tracing::debug!("Paced stream receiver dropped");
            }
        }
    });

    paced
}
