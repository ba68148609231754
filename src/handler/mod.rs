//! Request handler module
//!
//! Request dispatch and static file loading.

pub mod router;
pub mod static_files;

pub use router::handle_request;
