mod error;
mod requests;
mod types;
mod validation;

pub use error::{FieldError, ValidationErrors};
pub use requests::{CreateSubmissionRequest, SubmissionReceipt};
pub use types::{NewSubmission, Submission};
pub use validation::validate;
