// Mock implementations for testing
pub mod clients;

// Re-export commonly used mocks
pub use clients::{CountingGenerator, MockEnvClient};
