//! Backend payloads: the outbound request and the text extractor.

pub mod extract;
pub mod request;
