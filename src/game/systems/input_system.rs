use crate::engine::utils::math::Vec2;

/// Input sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub pointer: Vec2,
    /// Extra rotation for the spinner this tick, radians.
    pub rotation_delta: f32,
    pub quit: bool,
}

/// Per-tick input provider. `None` means the source is exhausted.
pub trait InputSource {
    fn poll(&mut self) -> Option<InputFrame>;
}

/// Pointer sweeping left to right across the screen and back along a sine
/// wave, standing in for a mouse in the headless demo.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    width: f32,
    height: f32,
    frames: u32,
    tick: u32,
}

impl ScriptedInput {
    pub fn new(width: f32, height: f32, frames: u32) -> Self {
        Self { width, height, frames, tick: 0 }
    }

    fn pointer_at(&self, tick: u32) -> Vec2 {
        let t = if self.frames > 1 { (tick as f32) / ((self.frames - 1) as f32) } else { 0.0 };
        // out and back
        let phase = if t <= 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        let x = phase * self.width;
        let y = self.height / 2.0 + (t * std::f32::consts::TAU).sin() * self.height / 4.0;
        Vec2::new(x, y)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputFrame> {
        if self.tick >= self.frames {
            return None;
        }
        let frame = InputFrame {
            pointer: self.pointer_at(self.tick),
            rotation_delta: 0.0,
            quit: self.tick + 1 == self.frames,
        };
        self.tick += 1;
        Some(frame)
    }
}
