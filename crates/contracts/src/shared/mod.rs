pub mod envelope;
pub mod errors;
pub mod loose;
pub mod multipart;

pub use envelope::{extract_message, ApiResponse, PageQuery, Pagination};
pub use errors::{RequestError, ValidationError};
pub use multipart::{Attachment, FormPart, FormPayload, PartValue};
