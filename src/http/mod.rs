//! HTTP protocol layer module
//!
//! MIME detection, the development header set and response builders,
//! decoupled from request routing.

pub mod headers;
pub mod mime;
pub mod response;

pub use response::{build_404_response, build_405_response, build_500_response, build_file_response};
