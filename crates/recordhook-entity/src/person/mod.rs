//! Person entity: typed fields plus the hooks every person carries.

pub mod hooks;
pub mod model;

pub use hooks::{AuditEntry, AuditTrail, RecordAudit, ValidateAge};
pub use model::{Person, PersonFields};
