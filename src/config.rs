use crate::{AlignerError, DEFAULT_MAX_CELLS, GAP_SYMBOL};

/// Upper bound on batch worker threads.
pub const MAX_WORKER_THREADS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignerConfig {
    /// Symbol emitted for a gap column. Input sequences may not contain it.
    pub gap_symbol: u8,
    /// Largest score matrix, in cells, a single alignment may allocate.
    pub max_cells: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            gap_symbol: GAP_SYMBOL,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap_symbol(mut self, gap_symbol: u8) -> Self {
        self.gap_symbol = gap_symbol;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub worker_threads: usize,
    /// Capacity of the work and result channels.
    pub queue_depth: usize,
    pub aligner: AlignerConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: std::thread::available_parallelism()
                .map(|n| n.get().min(MAX_WORKER_THREADS))
                .unwrap_or(1),
            queue_depth: 64,
            aligner: AlignerConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_threads(mut self, worker_threads: usize) -> Result<Self, AlignerError> {
        if worker_threads == 0 || worker_threads > MAX_WORKER_THREADS {
            return Err(AlignerError::InvalidConfig(format!(
                "worker threads must be between 1 and {}, got {}",
                MAX_WORKER_THREADS, worker_threads
            )));
        }
        self.worker_threads = worker_threads;
        Ok(self)
    }

    pub fn with_queue_depth(mut self, queue_depth: usize) -> Result<Self, AlignerError> {
        if queue_depth == 0 {
            return Err(AlignerError::InvalidConfig(
                "queue depth must be at least 1".to_string(),
            ));
        }
        self.queue_depth = queue_depth;
        Ok(self)
    }

    pub fn with_aligner(mut self, aligner: AlignerConfig) -> Self {
        self.aligner = aligner;
        self
    }
}
