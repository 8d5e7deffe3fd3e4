pub mod decompose;
pub mod order;
pub mod report;
pub mod restore;

pub use decompose::{decompose, decompose_with_cap, Decomposition};
pub use order::{closed_form_restoration, multiplicative_order};
pub use report::{save_report, sweep, ReportError, SizeReport, SweepReport};
pub use restore::{restoration_count, restoration_count_with_cap, Restoration, RESTORE_CAP};
