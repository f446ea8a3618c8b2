pub mod client;
pub mod config;
pub mod contact;
pub mod controller;
pub mod error;
pub mod input;
pub mod landing;
pub mod logging;
pub mod payload;
pub mod preview;
pub mod toast;

// Re-export main types for convenience
pub use client::GeneratorClient;
pub use config::Config;
pub use contact::ContactForm;
pub use controller::{GenerationController, PendingGeneration, Ticket, WorkflowState};
pub use error::GenerateError;
pub use payload::{GenerationRequest, GenerationResponse, GenerationResult};
pub use preview::{summarize, PreviewLine};
pub use toast::{Toast, ToastQueue, ToastSink, ToastVariant};
