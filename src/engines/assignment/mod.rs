pub mod detect;
pub mod engine;
pub mod extract;
pub mod seed;
pub mod slots;

pub use engine::AssignmentEngine;
pub use slots::DEFAULT_SLOTS;
