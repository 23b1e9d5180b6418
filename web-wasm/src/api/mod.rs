pub mod submit;

pub use submit::{submit_report, SubmitOutcome};
