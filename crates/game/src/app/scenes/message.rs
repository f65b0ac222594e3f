use engine::{GameState, InputSnapshot, Scene, SceneCommand, SceneContext, Surface, TextAlign};

use super::backdrop::SPACE_COLOR;

pub(crate) const BLINK_SECONDS: f32 = 0.5;
pub(crate) const MAX_BLINKS: u32 = 5;

/// Blinking interstitial: shows its lines for the first half of every
/// on/off window, then hands over to the next state once all blink
/// cycles have run. Input is ignored entirely.
pub(crate) struct MessageScene {
    lines: &'static [&'static str],
    color: [u8; 4],
    next: GameState,
    elapsed: f32,
}

impl MessageScene {
    pub(crate) fn new(lines: &'static [&'static str], color: [u8; 4], next: GameState) -> Self {
        Self {
            lines,
            color,
            next,
            elapsed: 0.0,
        }
    }
}

pub(crate) fn total_seconds() -> f32 {
    MAX_BLINKS as f32 * BLINK_SECONDS * 2.0
}

fn message_visible(elapsed: f32) -> bool {
    let cycle = elapsed % (BLINK_SECONDS * 2.0);
    let blink_index = (elapsed / (BLINK_SECONDS * 2.0)) as u32;
    cycle < BLINK_SECONDS && blink_index < MAX_BLINKS
}

impl Scene for MessageScene {
    fn init(&mut self, _ctx: &mut SceneContext) {
        self.elapsed = 0.0;
    }

    fn update(
        &mut self,
        dt_seconds: f32,
        _input: &InputSnapshot,
        _ctx: &mut SceneContext,
    ) -> SceneCommand {
        self.elapsed += dt_seconds;
        if self.elapsed >= total_seconds() {
            return SceneCommand::SwitchTo(self.next);
        }
        SceneCommand::None
    }

    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext) {
        surface.clear(SPACE_COLOR);
        if !message_visible(self.elapsed) {
            return;
        }

        let center_x = ctx.surface_width() as i32 / 2;
        let center_y = ctx.surface_height() as i32 / 2;
        for (index, line) in self.lines.iter().enumerate() {
            let offset = (index as i32 - 1) * 40;
            surface.draw_text(
                line,
                center_x,
                center_y + offset,
                3,
                TextAlign::Center,
                self.color,
            );
        }
    }

    fn cleanup(&mut self, _ctx: &mut SceneContext) {}
}
