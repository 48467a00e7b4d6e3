pub mod relay;
pub mod validation;

pub use relay::{FormRelay, HttpFormRelay, RelayError};
pub use validation::{
    validate_contact, validate_property, EnquiryValidationError,
};
