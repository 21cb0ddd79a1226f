//! Zoo staff and the duties their roles allow.

mod member;
mod role;

pub use member::*;
pub use role::*;

use thiserror::Error;

use crate::models::ValidationError;

/// Staff errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StaffError {
    #[error("permission denied: {staff} is a {role} and cannot perform {duty}")]
    PermissionDenied { staff: String, role: Role, duty: Duty },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type StaffResult<T> = Result<T, StaffError>;
