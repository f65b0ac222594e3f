mod backdrop;
mod combat;
mod message;
mod movie;
mod result;
mod start;

use std::cell::RefCell;
use std::rc::Rc;

use engine::{GameState, SceneSet};

use super::assets::SpriteBank;
use combat::CombatScene;
use message::MessageScene;
use movie::MovieScene;
use result::ResultScene;
use start::StartScene;

const SIGN_MESSAGE_LINES: &[&str] = &["THIS IS PRACTICE", "DESTROY ALL", "THREE TARGETS"];
const SIGN_MESSAGE_COLOR: [u8; 4] = [0, 255, 0, 255];
const GAME_MESSAGE_LINES: &[&str] = &["NOW THE REAL THING", "DESTROY ONE OF", "TWO TARGETS"];
const GAME_MESSAGE_COLOR: [u8; 4] = [255, 68, 68, 255];

/// Builds the full scene catalog. With practice disabled the start
/// screen jumps straight to the duel; the practice scenes stay
/// registered either way, they are simply never entered.
pub(crate) fn build_scene_set(sprites: &Rc<RefCell<SpriteBank>>, practice: bool) -> SceneSet {
    let first_stage = if practice {
        GameState::SignMessage
    } else {
        GameState::Game
    };
    SceneSet {
        start: Box::new(StartScene::new(first_stage)),
        sign_message: Box::new(MessageScene::new(
            SIGN_MESSAGE_LINES,
            SIGN_MESSAGE_COLOR,
            GameState::Sign,
        )),
        sign: Box::new(CombatScene::practice(Rc::clone(sprites))),
        game_message: Box::new(MessageScene::new(
            GAME_MESSAGE_LINES,
            GAME_MESSAGE_COLOR,
            GameState::Game,
        )),
        game: Box::new(CombatScene::duel(Rc::clone(sprites))),
        result: Box::new(ResultScene::new()),
        movie: Box::new(MovieScene::new()),
    }
}

#[cfg(test)]
mod tests {
    use engine::{InputAction, InputSnapshot, SceneCommand, SceneContext, SceneMachine};

    use super::*;

    fn machine(practice: bool) -> SceneMachine {
        let sprites = Rc::new(RefCell::new(SpriteBank::new()));
        let scenes = build_scene_set(&sprites, practice);
        let mut machine = SceneMachine::new(scenes, SceneContext::new(800, 600));
        machine.set_state(GameState::Start);
        machine
    }

    fn press_shoot(machine: &mut SceneMachine) -> SceneCommand {
        let released = InputSnapshot::empty();
        let pressed = InputSnapshot::empty().with_action_down(InputAction::Shoot, true);
        machine.update_active(1.0 / 60.0, &released);
        machine.update_active(1.0 / 60.0, &pressed)
    }

    #[test]
    fn start_routes_to_practice_when_enabled() {
        let mut machine = machine(true);
        assert_eq!(
            press_shoot(&mut machine),
            SceneCommand::FullscreenAndSwitchTo(GameState::SignMessage)
        );
    }

    #[test]
    fn start_routes_to_duel_when_practice_disabled() {
        let mut machine = machine(false);
        assert_eq!(
            press_shoot(&mut machine),
            SceneCommand::FullscreenAndSwitchTo(GameState::Game)
        );
    }

    #[test]
    fn message_scenes_chain_into_their_stages() {
        let mut machine = machine(true);
        let idle = InputSnapshot::empty();

        machine.set_state(GameState::SignMessage);
        let mut command = SceneCommand::None;
        for _ in 0..(message::total_seconds() / 0.1) as u32 + 1 {
            command = machine.update_active(0.1, &idle);
            if command != SceneCommand::None {
                break;
            }
        }
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Sign));

        machine.set_state(GameState::GameMessage);
        let mut command = SceneCommand::None;
        for _ in 0..(message::total_seconds() / 0.1) as u32 + 1 {
            command = machine.update_active(0.1, &idle);
            if command != SceneCommand::None {
                break;
            }
        }
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Game));
    }

    #[test]
    fn result_and_movie_close_the_cycle() {
        let mut machine = machine(true);
        let idle = InputSnapshot::empty();

        machine.set_state(GameState::Result);
        let mut command = SceneCommand::None;
        for _ in 0..60 {
            command = machine.update_active(0.1, &idle);
            if command != SceneCommand::None {
                break;
            }
        }
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Movie));

        machine.set_state(GameState::Movie);
        let mut command = SceneCommand::None;
        for _ in 0..110 {
            command = machine.update_active(0.1, &idle);
            if command != SceneCommand::None {
                break;
            }
        }
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Start));
    }
}
