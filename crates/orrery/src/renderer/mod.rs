pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use instance::{TransformBuffer, TransformInstance};
pub use traits::{RecordingSink, RenderSink};
