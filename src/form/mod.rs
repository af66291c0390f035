pub mod fields;
pub mod payload;
pub mod state;
pub mod validate;

pub use fields::{profile_fields, FieldDescriptor, RoleField, ValidationRules};
pub use payload::ProfileUpdate;
pub use state::{EditDraft, Selection};
pub use validate::{validate_fields, ValidationErrors, Violation, ViolationKind};
