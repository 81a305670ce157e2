//! @ai:module:intent Bounded concurrency pool over async workers
//! @ai:module:layer infrastructure
//! @ai:module:public_api run_all
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

/// @ai:intent Run a worker over every item with at most `concurrency` in
///            flight; admission is per-slot, not per-wave
/// @ai:pre concurrency > 0
/// @ai:post resolves once every admitted item has completed; after the first
///          failure no further items are admitted, in-flight workers finish,
///          and the first cause is returned wrapped in Error::Worker
/// @ai:effects async
pub async fn run_all<T, F, Fut>(
    items: impl IntoIterator<Item = T>,
    concurrency: usize,
    worker: F,
) -> Result<()>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let failed = Arc::new(AtomicBool::new(false));
    let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
    let mut first_error: Option<anyhow::Error> = None;

    for item in items {
        if failed.load(Ordering::Acquire) {
            break;
        }

        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .expect("pool semaphore closed");

        // Drain already-finished workers so a failure stops admission as
        // early as possible instead of only after the submit loop.
        while let Some(joined) = tasks.try_join_next() {
            record_outcome(joined, &mut first_error);
        }

        if failed.load(Ordering::Acquire) {
            break;
        }

        let failed = Arc::clone(&failed);
        let work = worker(item);

        tasks.spawn(async move {
            let result = work.await;

            if result.is_err() {
                failed.store(true, Ordering::Release);
            }

            drop(permit);
            result
        });
    }

    while let Some(joined) = tasks.join_next().await {
        record_outcome(joined, &mut first_error);
    }

    match first_error {
        Some(cause) => Err(Error::Worker(cause)),
        None => Ok(()),
    }
}

/// @ai:intent Keep the first failure, whether a worker error or a panic
/// @ai:effects pure
fn record_outcome(
    joined: std::result::Result<anyhow::Result<()>, JoinError>,
    first_error: &mut Option<anyhow::Error>,
) {
    let outcome = match joined {
        Ok(result) => result,
        Err(join_error) => Err(anyhow::Error::new(join_error)),
    };

    if let Err(cause) = outcome {
        if first_error.is_none() {
            *first_error = Some(cause);
        }
    }
}
