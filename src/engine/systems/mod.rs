pub mod collision_system;
pub mod render_system;

// Re-export the main types for easy access
pub use collision_system::check_collision;
pub use render_system::{ Color, Renderer };
