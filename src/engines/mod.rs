pub mod assignment;
pub mod trials;

pub use assignment::AssignmentEngine;
pub use trials::TrialRunner;
