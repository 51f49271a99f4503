//! Drives a [`Generator`] over a batch of inputs.

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::base::ResourceUri;
use crate::containers::Container;
use crate::index::ResourceDescription;

use super::{
    FileSystemAccess, GenerateOptions, GenerationPhase, Generator, GeneratorContext,
    GeneratorError,
};

/// One input that failed in one phase.
#[derive(Debug)]
pub struct GenerationFailure {
    pub uri: ResourceUri,
    pub phase: GenerationPhase,
    pub error: GeneratorError,
}

/// Outcome of one batch.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Inputs whose generate phase completed before cancellation was seen, in
    /// input order.
    pub generated: Vec<ResourceUri>,
    pub failures: Vec<GenerationFailure>,
    /// Error applying deferred writes after the generate phase.
    pub flush_error: Option<GeneratorError>,
    /// Number of `after_generate` calls made.
    pub cleaned_up: usize,
    /// Cancellation was observed at some point of the batch.
    pub cancelled: bool,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        !self.cancelled && self.failures.is_empty() && self.flush_error.is_none()
    }

    /// Failures recorded for one phase.
    pub fn failures_in(&self, phase: GenerationPhase) -> impl Iterator<Item = &GenerationFailure> {
        self.failures.iter().filter(move |f| f.phase == phase)
    }

    fn fail(&mut self, input: &ResourceDescription, phase: GenerationPhase, error: GeneratorError) {
        tracing::warn!("[GENERATOR] {} failed for {}: {}", phase, input.uri(), error);
        self.failures.push(GenerationFailure {
            uri: input.uri().clone(),
            phase,
            error,
        });
    }
}

/// Runs prepare, generate and cleanup in order for a batch of inputs.
///
/// - Prepare runs sequentially and stops early once cancellation is seen.
/// - Generate runs for every prepared input, on a rayon pool when enabled.
/// - The file-system access is flushed after generate.
/// - Cleanup runs for every input of the batch, even unprepared ones, and even
///   after failures or cancellation.
#[derive(Debug, Clone, Default)]
pub struct GeneratorDriver {
    options: GenerateOptions,
}

impl GeneratorDriver {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate every description visible in `container`.
    pub fn generate_visible<G, C>(
        &self,
        generator: &mut G,
        container: &C,
        fsa: &dyn FileSystemAccess,
        cancel: &CancellationToken,
    ) -> GenerationReport
    where
        G: Generator + ?Sized,
        C: Container + ?Sized,
    {
        let inputs: Vec<&ResourceDescription> = container.resource_descriptions().collect();
        self.run(generator, &inputs, fsa, cancel)
    }

    /// Run all three phases for `inputs`.
    pub fn run<G>(
        &self,
        generator: &mut G,
        inputs: &[&ResourceDescription],
        fsa: &dyn FileSystemAccess,
        cancel: &CancellationToken,
    ) -> GenerationReport
    where
        G: Generator + ?Sized,
    {
        let mut report = GenerationReport::default();

        // Prepare
        let mut prepared = Vec::with_capacity(inputs.len());
        for &input in inputs {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            let ctx = GeneratorContext::new(input, fsa, cancel, GenerationPhase::Prepare);
            match generator.before_generate(&ctx) {
                Ok(()) => prepared.push(input),
                Err(error) => {
                    report.fail(input, GenerationPhase::Prepare, error);
                    if self.options.stop_preparing_on_error {
                        break;
                    }
                }
            }
        }
        tracing::debug!(
            "[GENERATOR] prepared {} of {} input(s)",
            prepared.len(),
            inputs.len()
        );

        // Generate
        let results = self.generate_phase(&*generator, &prepared, fsa, cancel);
        for (&input, result) in prepared.iter().zip(results) {
            match result {
                Ok(true) => report.generated.push(input.uri().clone()),
                Ok(false) => report.cancelled = true,
                Err(error) => report.fail(input, GenerationPhase::Generate, error),
            }
        }
        if let Err(error) = fsa.flush() {
            tracing::warn!("[GENERATOR] flush failed: {}", error);
            report.flush_error = Some(error);
        }

        // Cleanup
        for &input in inputs {
            let ctx = GeneratorContext::new(input, fsa, cancel, GenerationPhase::Cleanup);
            if let Err(error) = generator.after_generate(&ctx) {
                report.fail(input, GenerationPhase::Cleanup, error);
            }
            report.cleaned_up += 1;
        }

        report.cancelled |= cancel.is_cancelled();
        tracing::debug!(
            "[GENERATOR] generated {} input(s), {} failure(s), cancelled: {}",
            report.generated.len(),
            report.failures.len(),
            report.cancelled
        );
        report
    }

    /// `Ok(false)` marks an input skipped because of cancellation, or one whose
    /// generator returned after the token was cancelled.
    fn generate_phase<G>(
        &self,
        generator: &G,
        inputs: &[&ResourceDescription],
        fsa: &dyn FileSystemAccess,
        cancel: &CancellationToken,
    ) -> Vec<Result<bool, GeneratorError>>
    where
        G: Generator + ?Sized,
    {
        let generate_one = |input: &&ResourceDescription| -> Result<bool, GeneratorError> {
            if cancel.is_cancelled() {
                return Ok(false);
            }
            let ctx = GeneratorContext::new(input, fsa, cancel, GenerationPhase::Generate);
            generator.do_generate(&ctx).map(|()| !cancel.is_cancelled())
        };

        if !self.options.parallel || inputs.len() < 2 {
            return inputs.iter().map(generate_one).collect();
        }

        let run_parallel = || inputs.par_iter().map(generate_one).collect::<Vec<_>>();
        match self.options.max_threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run_parallel),
                Err(e) => {
                    tracing::warn!("[GENERATOR] falling back to the global pool: {}", e);
                    run_parallel()
                }
            },
            None => run_parallel(),
        }
    }
}
