//! Turning parsed command-line matches into validated arguments.
//!
//! Parsing is left to `clap`; this module reads each parameter's values back out
//! of the matches as [`RawInput`](genui_core::validation::RawInput) and hands them
//! to the shared validation dispatcher.

// Export public items from submodules
pub mod processing;

// Re-exports for convenience
pub use processing::{collect, raw_inputs};
