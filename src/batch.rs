use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, warn};

use crate::{Aligner, AlignerError, AlignmentMode, AlignmentResult, BatchConfig, ScoringModel};

/// Aligns many independent sequence pairs on a pool of worker threads.
///
/// Each pair gets its own matrices, so results are identical to calling
/// [`Aligner::align`] on the pairs one at a time, and come back in input order.
pub struct BatchAligner<S> {
    aligner: Aligner<S>,
    config: BatchConfig,
}

struct WorkItem<'p> {
    index: usize,
    x: &'p [u8],
    y: &'p [u8],
}

struct WorkResult {
    index: usize,
    result: Result<AlignmentResult, AlignerError>,
}

impl<S: ScoringModel + Sync> BatchAligner<S> {
    pub fn new(scoring: S, config: BatchConfig) -> Self {
        Self {
            aligner: Aligner::new(scoring).with_config(config.aligner.clone()),
            config,
        }
    }

    /// One result per pair. A failing pair does not affect the others.
    pub fn align_all<P>(
        &self,
        mode: AlignmentMode,
        pairs: &[(P, P)],
    ) -> Vec<Result<AlignmentResult, AlignerError>>
    where
        P: AsRef<[u8]> + Sync,
    {
        if pairs.is_empty() {
            return Vec::new();
        }

        let workers = self.config.worker_threads.clamp(1, pairs.len());
        let depth = self.config.queue_depth.max(1);
        debug!(
            "Aligning {} pairs ({:?}) on {} workers",
            pairs.len(),
            mode,
            workers
        );

        let mut slots: Vec<Option<Result<AlignmentResult, AlignerError>>> =
            (0..pairs.len()).map(|_| None).collect();

        thread::scope(|scope| {
            let (work_tx, work_rx) = bounded::<WorkItem>(depth);
            let (result_tx, result_rx) = bounded::<WorkResult>(depth);

            let handles: Vec<_> = (0..workers)
                .map(|worker_id| {
                    let work_rx = work_rx.clone();
                    let result_tx = result_tx.clone();
                    scope.spawn(move || self.worker(worker_id, mode, work_rx, result_tx))
                })
                .collect();
            drop(work_rx);
            drop(result_tx);

            scope.spawn(move || {
                for (index, (x, y)) in pairs.iter().enumerate() {
                    let item = WorkItem {
                        index,
                        x: x.as_ref(),
                        y: y.as_ref(),
                    };
                    if work_tx.send(item).is_err() {
                        break;
                    }
                }
            });

            for WorkResult { index, result } in result_rx.iter() {
                slots[index] = Some(result);
            }

            for (worker_id, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    warn!("Batch worker {} panicked", worker_id);
                }
            }
        });

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    Err(AlignerError::WorkerFailed(format!(
                        "no result produced for pair {}",
                        index
                    )))
                })
            })
            .collect()
    }

    fn worker(
        &self,
        worker_id: usize,
        mode: AlignmentMode,
        work_rx: Receiver<WorkItem<'_>>,
        result_tx: Sender<WorkResult>,
    ) {
        let mut processed = 0usize;
        for WorkItem { index, x, y } in work_rx.iter() {
            let result = self.aligner.align(mode, x, y);
            processed += 1;
            if result_tx.send(WorkResult { index, result }).is_err() {
                break;
            }
        }
        debug!("Batch worker {} processed {} pairs", worker_id, processed);
    }
}
