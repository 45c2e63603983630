#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod codec;

pub mod engine;
pub mod estimate;
pub mod notify;
pub mod run;
pub mod summary;
pub mod walk;

// Re-exports: stable API surface
pub use notify::Notifier;
pub use policy::{Outcome, SelectionPolicy};
pub use run::{CancelToken, RunOptions, sweep};
pub use summary::RunSummary;
pub use walk::FileRecord;
