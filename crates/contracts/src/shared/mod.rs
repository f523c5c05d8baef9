pub mod api_error;
pub mod channels;
pub mod number_format;
pub mod request_seq;
pub mod serde_utils;

pub use api_error::ApiError;
