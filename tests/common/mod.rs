//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use poehali_studio::{GenerationController, GeneratorClient};

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// A controller with its dialog open and the description typed in.
pub fn controller_with(description: &str) -> GenerationController {
    let mut controller = GenerationController::new();
    controller.open();
    controller.set_description(description);
    controller
}

/// A client pointed at the mock's generator route.
pub fn client_for(backend: &MockBackend) -> GeneratorClient {
    GeneratorClient::new(&backend.generator_url())
}
