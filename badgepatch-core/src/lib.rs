pub mod assets;
pub mod atlas;
pub mod error;
pub mod export;
pub mod markers;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use error::{PatchError, Result};
pub use markers::{Marker, MarkerSpec, PatchConfig, PatchParams, Preset};
pub use pipeline::{run, PatchJob, PatchOutcome};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
