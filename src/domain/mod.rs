//! Field value objects and validators.
//!
//! Each field kind of a contact record (name, address, phone, email,
//! birthday) has a type-safe wrapper that is validated at construction time,
//! so an invalid value can never be stored in a record.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod phone;
pub mod text;

pub use birthday::{today, validate_birthday, validate_birthday_on, Birthday, BIRTHDAY_FORMAT};
pub use email::{validate_email, Email};
pub use errors::{FieldKind, ValidationError, ValidationResult};
pub use phone::{validate_phone, Phone, PhoneFormat, PhoneRules};
pub use text::{Address, Name};
