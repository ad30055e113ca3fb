pub mod traits;
pub mod parameters;
pub mod policy;
pub mod trials;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use parameters::ParametersConfig;
pub use policy::{PolicyConfig, SlotPolicy};
pub use trials::{TrialConfig, TrialsConfig, MAX_TRIALS};
