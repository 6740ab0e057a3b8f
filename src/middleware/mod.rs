pub mod error_handler;
pub mod request_id;

pub use error_handler::{not_found, ErrorHandler};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
