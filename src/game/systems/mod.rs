pub mod input_system;
pub mod movement_system;
pub mod physics_system;
pub mod render_system;

pub use input_system::{ InputFrame, InputSource, ScriptedInput };
pub use movement_system::MovementSystem;
pub use physics_system::{ FrameReport, PhysicsSystem };
pub use render_system::{ LogRenderer, RenderSystem };
