//! PersonService: business rules over the repository.

mod person;
mod validation;
pub use person::PersonService;
pub use validation::{RequestValidator, ADDRESS_REQUIRED, HOBBIES_REQUIRED, NAME_REQUIRED};
