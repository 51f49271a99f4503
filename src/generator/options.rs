//! Generation options

/// Options for one generation batch.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Run the generate phase on a thread pool.
    pub parallel: bool,
    /// Size of a dedicated pool for the generate phase (`None` = global rayon pool).
    pub max_threads: Option<usize>,
    /// Stop preparing further inputs after the first prepare failure.
    pub stop_preparing_on_error: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_threads: None,
            stop_preparing_on_error: false,
        }
    }
}

impl GenerateOptions {
    /// Options that run every phase on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads.max(1));
        self
    }

    pub fn with_stop_preparing_on_error(mut self, stop: bool) -> Self {
        self.stop_preparing_on_error = stop;
        self
    }
}
