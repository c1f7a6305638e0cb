//! Request validation for pessoa payloads.

use crate::error::{AppError, FieldError};
use crate::model::{NewPerson, PersonPatch};

pub const NAME_REQUIRED: &str = "Um nome deve ser informado";
pub const ADDRESS_REQUIRED: &str = "Um endereço deve ser informado";
pub const HOBBIES_REQUIRED: &str = "Um hobbie deve ser informado";

pub struct RequestValidator;

impl RequestValidator {
    /// All fields are required on create. Every missing field is reported, not just the first.
    pub fn validate_create(patch: PersonPatch) -> Result<NewPerson, AppError> {
        let mut errors = Vec::new();
        let name = required("name", NAME_REQUIRED, patch.name, &mut errors);
        let address = required("address", ADDRESS_REQUIRED, patch.address, &mut errors);
        let hobbies = required("hobbies", HOBBIES_REQUIRED, patch.hobbies, &mut errors);
        match (name, address, hobbies) {
            (Some(name), Some(address), Some(hobbies)) => Ok(NewPerson {
                name,
                address,
                hobbies,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }
}

fn required(
    field: &'static str,
    message: &str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if value.is_none() {
        errors.push(FieldError::new(field, message));
    }
    value
}
