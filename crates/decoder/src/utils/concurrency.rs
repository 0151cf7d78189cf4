// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running fallible futures with bounded parallelism.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs at most `max_concurrent` tasks at once and collects their results in
/// input order.
///
/// All tasks run to completion. If any fail, the error of the earliest task
/// in input order is returned and no results are, so the outcome does not
/// depend on completion order.
pub async fn run_with_concurrency_collect<F, T, E>(
    max_concurrent: usize,
    tasks: impl IntoIterator<Item = F>,
) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut futs = FuturesUnordered::new();

    for (idx, task) in tasks.into_iter().enumerate() {
        let sem = semaphore.clone();
        futs.push(async move {
            // the semaphore is never closed, so acquire cannot fail
            let _permit = sem.acquire().await.ok();
            (idx, task.await)
        });
    }

    let mut indexed_results = Vec::with_capacity(futs.len());
    let mut first_error: Option<(usize, E)> = None;
    while let Some((idx, result)) = futs.next().await {
        match result {
            Ok(val) => indexed_results.push((idx, val)),
            Err(err) => {
                if first_error.as_ref().is_none_or(|(first, _)| idx < *first) {
                    first_error = Some((idx, err));
                }
            }
        }
    }
    if let Some((_, err)) = first_error {
        return Err(err);
    }
    indexed_results.sort_by_key(|(idx, _)| *idx);
    Ok(indexed_results.into_iter().map(|(_, val)| val).collect())
}
