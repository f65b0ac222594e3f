use engine::{
    GameResult, GameState, InputSnapshot, Scene, SceneCommand, SceneContext, Surface, TextAlign,
};

use super::backdrop;

const RESULT_SECONDS: f32 = 5.0;
const HEADLINE_COLOR: [u8; 4] = [0, 255, 0, 255];
const CLOSING_COLOR: [u8; 4] = [255, 255, 255, 255];
const COUNTDOWN_COLOR: [u8; 4] = [102, 102, 102, 255];

pub(crate) struct ResultScene {
    elapsed: f32,
}

impl ResultScene {
    pub(crate) fn new() -> Self {
        Self { elapsed: 0.0 }
    }
}

fn result_lines(result: Option<GameResult>) -> (&'static str, Option<&'static str>) {
    match result {
        Some(GameResult::Left) => ("YOU DESTROYED THE", Some("LEFT TARGET!")),
        Some(GameResult::Right) => ("YOU DESTROYED THE", Some("RIGHT TARGET!")),
        None => ("VICTORY!", None),
    }
}

fn remaining_seconds(elapsed: f32) -> i32 {
    (RESULT_SECONDS - elapsed).ceil().max(0.0) as i32
}

impl Scene for ResultScene {
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
        if self.elapsed >= RESULT_SECONDS {
            return SceneCommand::SwitchTo(GameState::Movie);
        }
        SceneCommand::None
    }

    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext) {
        backdrop::draw_static(surface);

        let center_x = ctx.surface_width() as i32 / 2;
        let center_y = ctx.surface_height() as i32 / 2;

        let (first, second) = result_lines(ctx.game_result);
        match second {
            Some(second) => {
                surface.draw_text(first, center_x, center_y - 20, 3, TextAlign::Center, HEADLINE_COLOR);
                surface.draw_text(second, center_x, center_y + 20, 3, TextAlign::Center, HEADLINE_COLOR);
            }
            None => {
                surface.draw_text(first, center_x, center_y, 3, TextAlign::Center, HEADLINE_COLOR);
            }
        }

        surface.draw_text(
            "WELL DONE, PILOT!",
            center_x,
            center_y + 80,
            2,
            TextAlign::Center,
            CLOSING_COLOR,
        );

        let remaining = remaining_seconds(self.elapsed);
        if remaining > 0 {
            let countdown = format!("NEXT: {remaining}S");
            surface.draw_text(
                &countdown,
                center_x,
                ctx.surface_height() as i32 - 50,
                1,
                TextAlign::Center,
                COUNTDOWN_COLOR,
            );
        }
    }

    fn cleanup(&mut self, _ctx: &mut SceneContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_to_movie_after_fixed_duration() {
        let mut scene = ResultScene::new();
        let mut ctx = SceneContext::new(800, 600);
        scene.init(&mut ctx);
        let input = InputSnapshot::empty();

        for _ in 0..49 {
            assert_eq!(scene.update(0.1, &input, &mut ctx), SceneCommand::None);
        }
        assert_eq!(
            scene.update(0.1, &input, &mut ctx),
            SceneCommand::SwitchTo(GameState::Movie)
        );
    }

    #[test]
    fn lines_follow_recorded_result() {
        assert_eq!(
            result_lines(Some(GameResult::Left)),
            ("YOU DESTROYED THE", Some("LEFT TARGET!"))
        );
        assert_eq!(
            result_lines(Some(GameResult::Right)),
            ("YOU DESTROYED THE", Some("RIGHT TARGET!"))
        );
        assert_eq!(result_lines(None), ("VICTORY!", None));
    }

    #[test]
    fn countdown_floors_at_zero() {
        assert_eq!(remaining_seconds(0.0), 5);
        assert_eq!(remaining_seconds(1.2), 4);
        assert_eq!(remaining_seconds(4.999), 1);
        assert_eq!(remaining_seconds(5.0), 0);
        assert_eq!(remaining_seconds(9.0), 0);
    }

    #[test]
    fn reinit_restarts_timer() {
        let mut scene = ResultScene::new();
        let mut ctx = SceneContext::new(800, 600);
        scene.init(&mut ctx);
        let input = InputSnapshot::empty();
        for _ in 0..60 {
            scene.update(0.1, &input, &mut ctx);
        }

        scene.init(&mut ctx);
        assert_eq!(scene.update(0.1, &input, &mut ctx), SceneCommand::None);
    }
}
