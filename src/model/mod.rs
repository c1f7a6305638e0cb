//! Domain types for the pessoa resource.

mod person;
pub use person::{NewPerson, Person, PersonPatch};
