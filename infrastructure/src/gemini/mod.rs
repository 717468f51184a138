//! Gemini `generateContent` adapter
//!
//! - [`transport::GeminiTransport`]: reqwest implementation of the
//!   [`GenerationTransport`](relay_application::GenerationTransport) port
//! - [`credentials`]: API key resolution from config and environment

pub mod credentials;
pub mod transport;
