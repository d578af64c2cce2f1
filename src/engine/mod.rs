pub mod utils;
pub mod errors;
pub mod settings;
pub mod systems;
pub mod components;

// Re-export all commonly used items for easy access
pub use components::*;
pub use systems::*;
pub use utils::*;
pub use errors::{ HitboxError, Result };
pub use settings::DemoSettings;
