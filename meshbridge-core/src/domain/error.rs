// meshbridge-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("required field '{0}' is missing")]
    #[diagnostic(
        code(meshbridge::domain::required_field),
        help("Check the connection section of the asset creation request.")
    )]
    RequiredFieldMissing(String),

    #[error("failed to convert '{0}' to a map")]
    #[diagnostic(
        code(meshbridge::domain::conversion),
        help("The value must be a nested mapping of connection properties.")
    )]
    FailedToConvert(String),

    #[error("field '{field}' has the wrong shape: expected {expected}, found {found}")]
    #[diagnostic(code(meshbridge::domain::shape))]
    ShapeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
