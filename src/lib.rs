//! Core engine for the organogram data manager: a kind-tagged row model,
//! a lenient CSV tokenizer, a closed role vocabulary, and the import
//! reconciliation pipeline that matches external roster records against
//! existing member rows. The table/dialog layer that renders the result is
//! an external collaborator and lives outside this crate.

pub mod domain;
pub mod infra;
pub mod usecase;


pub use domain::entities::external::ExternalRecord;
pub use domain::entities::role::Role;
pub use domain::entities::row::{Row, RowKind};
pub use domain::matching::{find_associated_info_row, find_matching_member};
pub use domain::reconcile::{apply, plan, reconcile, ImportStats, ReconcileOutcome};
