//! Generation hook: turning visible resources into output files.
//!
//! A [`Generator`] runs in three phases per input:
//!
//! ```text
//! Prepare   before_generate(&mut self)  sequential, exclusive
//!    │
//!    ▼
//! Generate  do_generate(&self)          may run in parallel across inputs
//!    │
//!    ▼
//! Cleanup   after_generate(&mut self)   sequential, always runs
//! ```
//!
//! The exclusive phases take `&mut self`, the parallel one only `&self`, so a
//! generator cannot mutate its own shared state while inputs are generated
//! concurrently. The [`GeneratorDriver`] enforces the ordering and guarantees
//! cleanup for every input of a batch, whether it was prepared or not.

mod driver;
mod error;
mod fsa;
mod options;


use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::base::ResourceUri;
use crate::index::ResourceDescription;

pub use driver::{GenerationFailure, GenerationReport, GeneratorDriver};
pub use error::GeneratorError;
pub use fsa::{
    DeferredFileSystemAccess, DirectoryFileSystemAccess, FileSystemAccess,
    InMemoryFileSystemAccess, validate_path,
};
pub use options::GenerateOptions;

/// The phases of one generation run, with their concurrency contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    Prepare,
    Generate,
    Cleanup,
}

impl GenerationPhase {
    /// Phases in execution order.
    pub const ALL: [GenerationPhase; 3] = [Self::Prepare, Self::Generate, Self::Cleanup];

    /// Runs with exclusive access to the generator and the file system.
    pub fn is_exclusive(self) -> bool {
        matches!(self, Self::Prepare | Self::Cleanup)
    }

    /// May be invoked concurrently for different inputs.
    pub fn may_run_in_parallel(self) -> bool {
        !self.is_exclusive()
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prepare => "prepare",
            Self::Generate => "generate",
            Self::Cleanup => "cleanup",
        })
    }
}

/// Everything a generator sees for one input in one phase.
#[derive(Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub input: &'a ResourceDescription,
    pub fsa: &'a dyn FileSystemAccess,
    pub cancel: &'a CancellationToken,
    pub phase: GenerationPhase,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(
        input: &'a ResourceDescription,
        fsa: &'a dyn FileSystemAccess,
        cancel: &'a CancellationToken,
        phase: GenerationPhase,
    ) -> Self {
        Self {
            input,
            fsa,
            cancel,
            phase,
        }
    }

    pub fn uri(&self) -> &'a ResourceUri {
        self.input.uri()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl fmt::Debug for GeneratorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorContext")
            .field("input", self.input.uri())
            .field("phase", &self.phase)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// A code generator driven per visible resource.
///
/// Implementations poll [`GeneratorContext::is_cancelled`] and return `Ok(())`
/// early when it is set. `after_generate` must be idempotent: it runs for
/// every input of a batch, including inputs whose `before_generate` never ran.
pub trait Generator: Sync {
    /// Prepare shared state for `ctx.input` (resolve, load, cache).
    fn before_generate(&mut self, ctx: &GeneratorContext<'_>) -> Result<(), GeneratorError> {
        let _ = ctx;
        Ok(())
    }

    /// Produce output for `ctx.input`.
    fn do_generate(&self, ctx: &GeneratorContext<'_>) -> Result<(), GeneratorError>;

    /// Release whatever `before_generate` set up.
    fn after_generate(&mut self, ctx: &GeneratorContext<'_>) -> Result<(), GeneratorError> {
        let _ = ctx;
        Ok(())
    }
}
