use super::input::InputSnapshot;
use super::rendering::Surface;

/// Identifier for every scene in the fixed game cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Start,
    SignMessage,
    Sign,
    GameMessage,
    Game,
    Result,
    Movie,
}

/// Which of the two duel targets went down first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    SwitchTo(GameState),
    /// Ask the loop to attempt fullscreen promotion before switching.
    /// Promotion failure is logged and otherwise ignored.
    FullscreenAndSwitchTo(GameState),
}

/// Session state shared between the loop and the scenes: the logical
/// surface dimensions, the recorded duel outcome, and the decorative
/// background scroll offset the loop advances every tick.
#[derive(Debug, Clone)]
pub struct SceneContext {
    surface_width: u32,
    surface_height: u32,
    pub game_result: Option<GameResult>,
    pub scroll_offset: f32,
}

impl SceneContext {
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            game_result: None,
            scroll_offset: 0.0,
        }
    }

    pub fn surface_width(&self) -> u32 {
        self.surface_width
    }

    pub fn surface_height(&self) -> u32 {
        self.surface_height
    }
}

pub trait Scene {
    fn init(&mut self, ctx: &mut SceneContext);
    fn update(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        ctx: &mut SceneContext,
    ) -> SceneCommand;
    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext);
    fn cleanup(&mut self, ctx: &mut SceneContext);
}

/// One scene instance per [`GameState`], constructed once at wiring time
/// and reused for the whole session.
pub struct SceneSet {
    pub start: Box<dyn Scene>,
    pub sign_message: Box<dyn Scene>,
    pub sign: Box<dyn Scene>,
    pub game_message: Box<dyn Scene>,
    pub game: Box<dyn Scene>,
    pub result: Box<dyn Scene>,
    pub movie: Box<dyn Scene>,
}

impl SceneSet {
    fn scene_mut(&mut self, state: GameState) -> &mut dyn Scene {
        match state {
            GameState::Start => self.start.as_mut(),
            GameState::SignMessage => self.sign_message.as_mut(),
            GameState::Sign => self.sign.as_mut(),
            GameState::GameMessage => self.game_message.as_mut(),
            GameState::Game => self.game.as_mut(),
            GameState::Result => self.result.as_mut(),
            GameState::Movie => self.movie.as_mut(),
        }
    }

    fn all_mut(&mut self) -> [&mut Box<dyn Scene>; 7] {
        [
            &mut self.start,
            &mut self.sign_message,
            &mut self.sign,
            &mut self.game_message,
            &mut self.game,
            &mut self.result,
            &mut self.movie,
        ]
    }
}

pub struct SceneMachine {
    scenes: Option<SceneSet>,
    active: GameState,
    context: SceneContext,
}

impl SceneMachine {
    pub fn new(scenes: SceneSet, context: SceneContext) -> Self {
        Self {
            scenes: Some(scenes),
            active: GameState::Start,
            context,
        }
    }

    pub fn active_state(&self) -> GameState {
        self.active
    }

    pub fn context(&self) -> &SceneContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.context
    }

    /// Transition: cleanup on the outgoing scene, switch the active
    /// pointer, init on the incoming scene. Exactly once, in that order.
    pub fn set_state(&mut self, next: GameState) {
        let scenes = self
            .scenes
            .as_mut()
            .expect("scene machine used after destroy");
        scenes.scene_mut(self.active).cleanup(&mut self.context);
        self.active = next;
        scenes.scene_mut(next).init(&mut self.context);
    }

    pub fn update_active(&mut self, dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        let scenes = self
            .scenes
            .as_mut()
            .expect("scene machine used after destroy");
        scenes
            .scene_mut(self.active)
            .update(dt_seconds, input, &mut self.context)
    }

    pub fn render_active(&mut self, surface: &mut Surface<'_>) {
        let scenes = self
            .scenes
            .as_mut()
            .expect("scene machine used after destroy");
        scenes.scene_mut(self.active).render(surface, &self.context);
    }

    /// Cleanup every scene and drop the set. Idempotent; the second and
    /// later calls are no-ops.
    pub fn destroy(&mut self) {
        let Some(mut scenes) = self.scenes.take() else {
            return;
        };
        for scene in scenes.all_mut() {
            scene.cleanup(&mut self.context);
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.scenes.is_none()
    }
}
