use log::{ debug, info };

use crate::engine::errors::Result;
use crate::engine::settings::DemoSettings;
use crate::engine::systems::render_system::Renderer;
use crate::game::game_state::GameState;
use crate::game::systems::{
    FrameReport,
    InputFrame,
    InputSource,
    MovementSystem,
    PhysicsSystem,
    RenderSystem,
};

/// Totals gathered over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub circle_contact_frames: u64,
    pub triangle_contact_frames: u64,
    pub spinner_contact_frames: u64,
}

pub struct Program {
    state: GameState,
}

impl Program {
    pub fn new(settings: DemoSettings) -> Result<Self> {
        let state = GameState::new(settings)?;
        info!("[DEMO] Scene ready with {} hitboxes", state.hitboxes().len());
        Ok(Self { state })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// One frame: apply input, run collision checks, draw.
    pub fn tick(&mut self, input: &InputFrame, renderer: &mut dyn Renderer) -> Result<FrameReport> {
        MovementSystem::update(&mut self.state, input);
        let report = PhysicsSystem::update(&self.state)?;

        match (report.circle_hits_triangle, triangle_status(report.circle_hits_triangle)) {
            (Some(true), Some(status)) => info!("[DEMO] {}", status),
            (_, Some(status)) => debug!("[DEMO] {}", status),
            _ => {}
        }

        RenderSystem::update(&self.state, &report, renderer);
        self.state.frame += 1;
        Ok(report)
    }

    /// Runs until the input source is exhausted, asks to quit, or the
    /// configured frame count is reached.
    pub fn run(&mut self, input: &mut dyn InputSource, renderer: &mut dyn Renderer) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let max_frames = u64::from(self.state.settings.frames);

        while summary.frames < max_frames {
            let Some(frame) = input.poll() else {
                break;
            };
            let report = self.tick(&frame, renderer)?;

            summary.frames += 1;
            summary.circle_contact_frames += u64::from(report.circles_colliding);
            summary.triangle_contact_frames += u64::from(report.circle_hits_triangle == Some(true));
            summary.spinner_contact_frames += u64::from(!report.spinner_hits.is_empty());

            if frame.quit {
                break;
            }
        }

        info!("[DEMO] Finished: {:?}", summary);
        Ok(summary)
    }
}

/// Per-frame line for the movable circle against the triangle. `None` when
/// the scene has no triangle.
fn triangle_status(hit: Option<bool>) -> Option<&'static str> {
    match hit {
        Some(true) => Some("Circle is colliding with Triangle!"),
        Some(false) => Some("No collision."),
        None => None,
    }
}
