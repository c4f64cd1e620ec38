//! Command implementations for the repostat CLI.

pub mod list;
pub mod status;

pub use list::execute_list;
pub use status::{execute_status, run_batch, run_check, CheckOutcome};
