use engine::{GameState, InputSnapshot, Scene, SceneCommand, SceneContext, Surface, TextAlign};

use super::backdrop;

const MOVIE_SECONDS: f32 = 10.0;
const PARTICLE_COUNT: i32 = 20;
const PARTICLE_ORBIT_RADIUS: f32 = 50.0;
const PARTICLE_ORBIT_WOBBLE: f32 = 20.0;
const TITLE_COLOR: [u8; 4] = [255, 255, 0, 255];
const SUBTITLE_COLOR: [u8; 4] = [255, 255, 255, 255];
const FOOTER_COLOR: [u8; 4] = [0, 255, 255, 255];
const PROGRESS_BACK_COLOR: [u8; 4] = [51, 51, 51, 255];
const PROGRESS_FILL_COLOR: [u8; 4] = [0, 255, 0, 255];
const PARTICLE_PALETTE: [[u8; 4]; 6] = [
    [255, 64, 64, 255],
    [255, 160, 0, 255],
    [255, 255, 0, 255],
    [64, 255, 64, 255],
    [64, 160, 255, 255],
    [255, 64, 255, 255],
];

/// Closing victory reel: scrolling stars, a bobbing title block, a ring
/// of orbiting particles, and a progress bar. Loops back to the start
/// screen when its run time elapses.
pub(crate) struct MovieScene {
    elapsed: f32,
}

impl MovieScene {
    pub(crate) fn new() -> Self {
        Self { elapsed: 0.0 }
    }
}

fn progress_fraction(elapsed: f32) -> f32 {
    (elapsed / MOVIE_SECONDS).clamp(0.0, 1.0)
}

impl Scene for MovieScene {
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
        if self.elapsed >= MOVIE_SECONDS {
            return SceneCommand::SwitchTo(GameState::Start);
        }
        SceneCommand::None
    }

    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext) {
        backdrop::draw_scrolling(surface, ctx.scroll_offset, self.elapsed);

        let width = ctx.surface_width() as i32;
        let height = ctx.surface_height() as i32;
        let center_x = width / 2;
        let center_y = height / 2;

        let bob = ((self.elapsed * 2.0).sin() * 6.0) as i32;
        surface.draw_text(
            "VICTORY!",
            center_x,
            center_y - 40 + bob,
            6,
            TextAlign::Center,
            TITLE_COLOR,
        );
        surface.draw_text(
            "MISSION ACCOMPLISHED",
            center_x,
            center_y + 20,
            2,
            TextAlign::Center,
            SUBTITLE_COLOR,
        );
        surface.draw_text(
            "THANKS FOR PLAYING!",
            center_x,
            center_y + 60,
            2,
            TextAlign::Center,
            FOOTER_COLOR,
        );

        for particle in 0..PARTICLE_COUNT {
            let angle = (self.elapsed + particle as f32) * 0.5;
            let radius =
                PARTICLE_ORBIT_RADIUS + (self.elapsed + particle as f32).sin() * PARTICLE_ORBIT_WOBBLE;
            let x = center_x + (angle.cos() * radius) as i32;
            let y = center_y + (angle.sin() * radius) as i32;
            let color = PARTICLE_PALETTE
                [((self.elapsed * 10.0) as usize + particle as usize) % PARTICLE_PALETTE.len()];
            surface.fill_rect(x - 2, y - 2, 4, 4, color);
        }

        let bar_width = (width as f32 * 0.8) as i32;
        let bar_x = (width - bar_width) / 2;
        let bar_y = height - 30;
        surface.fill_rect(bar_x, bar_y, bar_width, 4, PROGRESS_BACK_COLOR);
        let fill_width = (bar_width as f32 * progress_fraction(self.elapsed)) as i32;
        surface.fill_rect(bar_x, bar_y, fill_width, 4, PROGRESS_FILL_COLOR);
    }

    fn cleanup(&mut self, _ctx: &mut SceneContext) {}
}
