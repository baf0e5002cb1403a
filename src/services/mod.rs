use thiserror::Error;

use crate::forms::FormError;

pub mod intake;

/// Errors surfaced by the service layer to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
