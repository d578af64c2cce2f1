//! Headless replay of the hitbox demo scene
//!
//! Two circles, a triangle and a spinning rectangle. A scripted pointer
//! stands in for the mouse and drags the movable circle across the screen;
//! collisions are logged each frame and every shape is drawn through the
//! logging renderer (run with `RUST_LOG=debug` to see the draw calls).
//!
//! Usage: `hitbox-demo [settings.json]`

use extended_hitboxes::DemoSettings;
use extended_hitboxes::game::Program;
use extended_hitboxes::game::systems::{ LogRenderer, ScriptedInput };
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            info!("[DEMO] Loading settings from {}", path);
            DemoSettings::load(&path)?
        }
        None => DemoSettings::default(),
    };

    let mut input = ScriptedInput::new(settings.screen_width, settings.screen_height, settings.frames);
    let mut renderer = LogRenderer::default();
    let mut program = Program::new(settings)?;

    let summary = program.run(&mut input, &mut renderer)?;

    println!("Frames simulated:        {}", summary.frames);
    println!("Circle contact frames:   {}", summary.circle_contact_frames);
    println!("Triangle contact frames: {}", summary.triangle_contact_frames);
    println!("Spinner contact frames:  {}", summary.spinner_contact_frames);
    println!("Draw calls:              {}", renderer.circles_drawn + renderer.polygons_drawn);

    Ok(())
}
