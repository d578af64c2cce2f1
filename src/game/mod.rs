pub mod entities;
pub mod game_state;
pub mod program;
pub mod systems;

// Re-export commonly used types
pub use game_state::GameState;
pub use program::{ Program, RunSummary };
