mod error;
mod types;
mod validation;

pub use error::{FieldError, ValidationErrors};
pub use types::{generate_user_id, User};
pub use validation::{
    validate_dob, validate_dob_in_year, validate_email, validate_name, validate_user,
    NAME_MAX_LEN, NAME_MIN_LEN,
};
