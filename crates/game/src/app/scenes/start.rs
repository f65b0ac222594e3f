use engine::{
    GameState, InputAction, InputSnapshot, Scene, SceneCommand, SceneContext, Surface, TextAlign,
};

use super::backdrop;

const TITLE_COLOR: [u8; 4] = [0, 255, 0, 255];
const SUBTITLE_COLOR: [u8; 4] = [255, 255, 255, 255];
const HINT_COLOR: [u8; 4] = [204, 204, 204, 255];

pub(crate) struct StartScene {
    next: GameState,
    shoot_latched: bool,
}

impl StartScene {
    pub(crate) fn new(next: GameState) -> Self {
        Self {
            next,
            shoot_latched: true,
        }
    }
}

impl Scene for StartScene {
    fn init(&mut self, _ctx: &mut SceneContext) {
        // Require a release before accepting a press, so a button held
        // through the movie -> start transition cannot skip the screen.
        self.shoot_latched = true;
    }

    fn update(
        &mut self,
        _dt_seconds: f32,
        input: &InputSnapshot,
        _ctx: &mut SceneContext,
    ) -> SceneCommand {
        if !input.is_down(InputAction::Shoot) {
            self.shoot_latched = false;
        } else if !self.shoot_latched {
            self.shoot_latched = true;
            return SceneCommand::FullscreenAndSwitchTo(self.next);
        }
        SceneCommand::None
    }

    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext) {
        backdrop::draw_static(surface);

        let center_x = ctx.surface_width() as i32 / 2;
        let center_y = ctx.surface_height() as i32 / 2;
        surface.draw_text(
            "COSMIC BLASTER",
            center_x,
            center_y - 50,
            5,
            TextAlign::Center,
            TITLE_COLOR,
        );
        surface.draw_text(
            "TAP SHOOT TO START",
            center_x,
            center_y + 20,
            2,
            TextAlign::Center,
            SUBTITLE_COLOR,
        );
        surface.draw_text(
            "DESTROY THE ENEMY TARGETS!",
            center_x,
            center_y + 60,
            1,
            TextAlign::Center,
            HINT_COLOR,
        );
        surface.draw_text(
            "FIRST KILL DECIDES THE RESULT!",
            center_x,
            center_y + 80,
            1,
            TextAlign::Center,
            HINT_COLOR,
        );
    }

    fn cleanup(&mut self, _ctx: &mut SceneContext) {}
}
