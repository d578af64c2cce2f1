use crate::game::game_state::GameState;
use crate::game::systems::input_system::InputFrame;

#[derive(Debug)]
pub struct MovementSystem;

impl MovementSystem {
    /// Pointer drives the movable circle directly; the spinner turns by its
    /// configured rate plus whatever the input adds.
    pub fn update(state: &mut GameState, input: &InputFrame) {
        state.movable_circle.position = input.pointer;

        let spin = state.settings.rect_spin + input.rotation_delta;
        if let Some(spinner) = state.spinner.as_mut() {
            spinner.rotate(spin);
        }
    }
}
