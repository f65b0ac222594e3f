use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use engine::{
    GameResult, GameState, InputAction, InputSnapshot, Scene, SceneCommand, SceneContext, Sprite,
    Surface, TextAlign,
};
use tracing::{debug, info};

use crate::app::assets::{SpriteBank, EXPLOSION_FRAME_COUNT};

use super::backdrop;

pub(crate) const PLAYER_WIDTH: f32 = 32.0;
const PLAYER_BOTTOM_MARGIN: f32 = 60.0;
/// 5 px per 60 Hz tick.
pub(crate) const PLAYER_SPEED: f32 = 300.0;
pub(crate) const BULLET_WIDTH: f32 = 4.0;
pub(crate) const BULLET_HEIGHT: f32 = 8.0;
/// 8 px per 60 Hz tick, straight up.
pub(crate) const BULLET_SPEED: f32 = 480.0;
pub(crate) const SHOT_COOLDOWN_SECONDS: f32 = 0.2;
const TARGET_SIZE: f32 = 192.0;
const TARGET_RADIUS: f32 = 80.0;
const SWAY_AMPLITUDE: f32 = 15.0;
const SWAY_SPEED: f32 = 1.5;
const PRACTICE_TARGET_HP: i32 = 5;
const DUEL_TARGET_HP: i32 = 10;
const GRACE_DELAY_SECONDS: f32 = 1.0;
const UFO_FIRST_SPAWN_SECONDS: f32 = 3.0;
const UFO_RESPAWN_SECONDS: f32 = 10.0;
const UFO_WIDTH: f32 = 48.0;
const UFO_HEIGHT: f32 = 20.0;
const UFO_SPEED: f32 = 120.0;
const UFO_ALTITUDE: f32 = 40.0;
const BANNER_SECONDS: f32 = 2.0;
const HP_BAR_WIDTH: i32 = 80;
const HP_BAR_HEIGHT: i32 = 8;

const TARGET_LABEL_COLOR: [u8; 4] = [255, 255, 255, 255];
const INSTRUCTION_COLOR: [u8; 4] = [255, 255, 255, 255];
const BANNER_COLOR: [u8; 4] = [255, 255, 0, 255];
const HP_BAR_BACK_COLOR: [u8; 4] = [51, 51, 51, 255];
const HP_BAR_OK_COLOR: [u8; 4] = [0, 255, 0, 255];
const HP_BAR_LOW_COLOR: [u8; 4] = [255, 0, 0, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageMode {
    Practice,
    Duel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollisionShape {
    Box,
    Circle,
}

struct Target {
    label: &'static str,
    base_x: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    hp: i32,
    max_hp: i32,
    active: bool,
    sway_phase: f32,
}

impl Target {
    fn alive(&self) -> bool {
        self.active && self.hp > 0
    }
}

struct Bullet {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    active: bool,
}

struct Player {
    x: f32,
    y: f32,
    vx: f32,
}

struct Ufo {
    x: f32,
    y: f32,
    vx: f32,
    active: bool,
}

struct Banner {
    x: f32,
    y: f32,
    expires_at: f32,
}

/// Shared implementation for the two shooting stages. The practice
/// stage clears three sign boards with box collision; the duel stage
/// decides the run by destroying one of two round targets with circle
/// collision, plus the bonus UFO flyby.
pub(crate) struct CombatScene {
    mode: StageMode,
    sprites: Rc<RefCell<SpriteBank>>,
    player: Player,
    targets: Vec<Target>,
    bullets: Vec<Bullet>,
    ufo: Option<Ufo>,
    ufo_downed: bool,
    next_ufo_spawn_at: f32,
    banner: Option<Banner>,
    elapsed: f32,
    last_shot_at: f32,
    shoot_latched: bool,
    completion_observed_at: Option<f32>,
    player_sprite: Option<Rc<Sprite>>,
    target_sprite: Option<Rc<Sprite>>,
    bullet_sprite: Option<Rc<Sprite>>,
    ufo_sprite: Option<Rc<Sprite>>,
}

impl CombatScene {
    pub(crate) fn practice(sprites: Rc<RefCell<SpriteBank>>) -> Self {
        Self::new(StageMode::Practice, sprites)
    }

    pub(crate) fn duel(sprites: Rc<RefCell<SpriteBank>>) -> Self {
        Self::new(StageMode::Duel, sprites)
    }

    fn new(mode: StageMode, sprites: Rc<RefCell<SpriteBank>>) -> Self {
        Self {
            mode,
            sprites,
            player: Player {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
            },
            targets: Vec::new(),
            bullets: Vec::new(),
            ufo: None,
            ufo_downed: false,
            next_ufo_spawn_at: UFO_FIRST_SPAWN_SECONDS,
            banner: None,
            elapsed: 0.0,
            last_shot_at: -SHOT_COOLDOWN_SECONDS,
            shoot_latched: false,
            completion_observed_at: None,
            player_sprite: None,
            target_sprite: None,
            bullet_sprite: None,
            ufo_sprite: None,
        }
    }

    fn stage_name(&self) -> &'static str {
        match self.mode {
            StageMode::Practice => "sign",
            StageMode::Duel => "game",
        }
    }

    fn low_hp_threshold(&self) -> i32 {
        match self.mode {
            StageMode::Practice => 2,
            StageMode::Duel => 3,
        }
    }

    fn spawn_bullet(&mut self) {
        self.bullets.push(Bullet {
            x: self.player.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
            y: self.player.y,
            vx: 0.0,
            vy: -BULLET_SPEED,
            active: true,
        });
    }

    fn resolve_collisions(&mut self) {
        let shape = match self.mode {
            StageMode::Practice => CollisionShape::Box,
            StageMode::Duel => CollisionShape::Circle,
        };
        for bullet in &mut self.bullets {
            if !bullet.active {
                continue;
            }
            for target in &mut self.targets {
                if !target.alive() {
                    continue;
                }
                let hit = match shape {
                    CollisionShape::Box => bullet_overlaps_box(
                        bullet,
                        target.x,
                        target.y,
                        target.width,
                        target.height,
                    ),
                    CollisionShape::Circle => {
                        let center_x = target.x + target.width / 2.0;
                        let center_y = target.y + target.height / 2.0;
                        bullet_overlaps_circle(bullet, center_x, center_y, TARGET_RADIUS)
                    }
                };
                if hit {
                    // One hit per bullet; the first overlapping target wins.
                    bullet.active = false;
                    target.hp -= 1;
                    if target.hp <= 0 {
                        target.active = false;
                        info!(label = target.label, "target_destroyed");
                    }
                    break;
                }
            }

            if !bullet.active {
                continue;
            }
            if let Some(ufo) = self.ufo.as_mut() {
                if ufo.active && bullet_overlaps_box(bullet, ufo.x, ufo.y, UFO_WIDTH, UFO_HEIGHT) {
                    bullet.active = false;
                    ufo.active = false;
                    self.ufo_downed = true;
                    self.banner = Some(Banner {
                        x: ufo.x + UFO_WIDTH / 2.0,
                        y: ufo.y + UFO_HEIGHT / 2.0,
                        expires_at: self.elapsed + BANNER_SECONDS,
                    });
                    info!("ufo_destroyed");
                }
            }
        }
    }

    fn update_ufo(&mut self, dt_seconds: f32, surface_width: f32) {
        if let Some(ufo) = self.ufo.as_mut() {
            if ufo.active {
                ufo.x += ufo.vx * dt_seconds;
                if ufo.x > surface_width {
                    ufo.active = false;
                    debug!("ufo_escaped");
                }
            }
        }

        let ufo_alive = self.ufo.as_ref().is_some_and(|ufo| ufo.active);
        if !self.ufo_downed && !ufo_alive && self.elapsed >= self.next_ufo_spawn_at {
            self.ufo = Some(Ufo {
                x: -UFO_WIDTH,
                y: UFO_ALTITUDE,
                vx: UFO_SPEED,
                active: true,
            });
            self.next_ufo_spawn_at = self.elapsed + UFO_RESPAWN_SECONDS;
            debug!("ufo_spawned");
        }

        if let Some(banner) = &self.banner {
            if self.elapsed >= banner.expires_at {
                self.banner = None;
            }
        }
    }

    fn completion_command(&mut self, ctx: &mut SceneContext) -> SceneCommand {
        let alive = self.targets.iter().filter(|target| target.alive()).count();
        match self.mode {
            StageMode::Practice => {
                if alive == 0 {
                    info!(stage = self.stage_name(), "stage_complete");
                    return SceneCommand::SwitchTo(GameState::GameMessage);
                }
            }
            StageMode::Duel => {
                if alive <= 1 && self.completion_observed_at.is_none() {
                    self.completion_observed_at = Some(self.elapsed);
                    if alive == 1 {
                        if let Some(destroyed) =
                            self.targets.iter().position(|target| !target.alive())
                        {
                            let result = if destroyed == 0 {
                                GameResult::Left
                            } else {
                                GameResult::Right
                            };
                            ctx.game_result = Some(result);
                            info!(result = ?result, "duel_decided");
                        }
                    }
                }
                if let Some(observed_at) = self.completion_observed_at {
                    // The grace delay lets the final hit land on screen
                    // before the result takes over.
                    if self.elapsed - observed_at >= GRACE_DELAY_SECONDS {
                        return SceneCommand::SwitchTo(GameState::Result);
                    }
                }
            }
        }
        SceneCommand::None
    }
}

fn build_targets(mode: StageMode, surface_width: f32, surface_height: f32) -> Vec<Target> {
    let y = surface_height / 2.0 - TARGET_SIZE / 2.0;
    let specs: &[(&'static str, f32, f32)] = match mode {
        StageMode::Practice => &[
            ("ALPHA", 1.0, 0.0),
            ("BETA", 2.0, PI / 3.0),
            ("GAMMA", 3.0, PI / 6.0),
        ],
        StageMode::Duel => &[("LEFT", 1.0, 0.0), ("RIGHT", 3.0, PI / 3.0)],
    };
    let hp = match mode {
        StageMode::Practice => PRACTICE_TARGET_HP,
        StageMode::Duel => DUEL_TARGET_HP,
    };
    specs
        .iter()
        .map(|(label, quarter, sway_phase)| {
            let base_x = surface_width * quarter / 4.0 - TARGET_SIZE / 2.0;
            Target {
                label,
                base_x,
                x: base_x,
                y,
                width: TARGET_SIZE,
                height: TARGET_SIZE,
                hp,
                max_hp: hp,
                active: true,
                sway_phase: *sway_phase,
            }
        })
        .collect()
}

fn bullet_overlaps_box(bullet: &Bullet, x: f32, y: f32, width: f32, height: f32) -> bool {
    bullet.x < x + width
        && bullet.x + BULLET_WIDTH > x
        && bullet.y < y + height
        && bullet.y + BULLET_HEIGHT > y
}

fn bullet_overlaps_circle(bullet: &Bullet, center_x: f32, center_y: f32, radius: f32) -> bool {
    let bullet_center_x = bullet.x + BULLET_WIDTH / 2.0;
    let bullet_center_y = bullet.y + BULLET_HEIGHT / 2.0;
    let dx = bullet_center_x - center_x;
    let dy = bullet_center_y - center_y;
    dx * dx + dy * dy <= radius * radius
}

impl Scene for CombatScene {
    fn init(&mut self, ctx: &mut SceneContext) {
        let surface_width = ctx.surface_width() as f32;
        let surface_height = ctx.surface_height() as f32;

        self.player = Player {
            x: surface_width / 2.0 - PLAYER_WIDTH / 2.0,
            y: surface_height - PLAYER_BOTTOM_MARGIN,
            vx: 0.0,
        };
        self.targets = build_targets(self.mode, surface_width, surface_height);
        self.bullets.clear();
        self.ufo = None;
        self.ufo_downed = false;
        self.next_ufo_spawn_at = UFO_FIRST_SPAWN_SECONDS;
        self.banner = None;
        self.elapsed = 0.0;
        self.last_shot_at = -SHOT_COOLDOWN_SECONDS;
        self.shoot_latched = false;
        self.completion_observed_at = None;

        if self.mode == StageMode::Duel {
            // Each run records its outcome fresh.
            ctx.game_result = None;
        }

        {
            let mut bank = self.sprites.borrow_mut();
            self.player_sprite = Some(bank.player());
            self.bullet_sprite = Some(bank.bullet());
            self.target_sprite = Some(match self.mode {
                StageMode::Practice => bank.sign_board(),
                StageMode::Duel => bank.duel_target(),
            });
            self.ufo_sprite = match self.mode {
                StageMode::Practice => None,
                StageMode::Duel => Some(bank.ufo()),
            };
        }

        info!(
            stage = self.stage_name(),
            targets = self.targets.len(),
            "scene_loaded"
        );
    }

    fn update(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        ctx: &mut SceneContext,
    ) -> SceneCommand {
        self.elapsed += dt_seconds;
        let surface_width = ctx.surface_width() as f32;
        let surface_height = ctx.surface_height() as f32;

        for target in &mut self.targets {
            if target.alive() {
                target.x = target.base_x
                    + (self.elapsed * SWAY_SPEED + target.sway_phase).sin() * SWAY_AMPLITUDE;
            }
        }

        self.player.vx = 0.0;
        if input.is_down(InputAction::MoveLeft) {
            self.player.vx = -PLAYER_SPEED;
        }
        if input.is_down(InputAction::MoveRight) {
            self.player.vx = PLAYER_SPEED;
        }
        self.player.x = (self.player.x + self.player.vx * dt_seconds)
            .clamp(0.0, surface_width - PLAYER_WIDTH);

        if input.is_down(InputAction::Shoot) {
            if !self.shoot_latched && self.elapsed - self.last_shot_at >= SHOT_COOLDOWN_SECONDS {
                self.spawn_bullet();
                self.last_shot_at = self.elapsed;
                self.shoot_latched = true;
            }
        } else {
            self.shoot_latched = false;
        }

        for bullet in &mut self.bullets {
            bullet.x += bullet.vx * dt_seconds;
            bullet.y += bullet.vy * dt_seconds;
        }
        self.bullets.retain(|bullet| {
            bullet.active
                && bullet.x >= 0.0
                && bullet.x <= surface_width
                && bullet.y >= 0.0
                && bullet.y <= surface_height
        });

        self.resolve_collisions();
        self.bullets.retain(|bullet| bullet.active);

        if self.mode == StageMode::Duel {
            self.update_ufo(dt_seconds, surface_width);
        }

        self.completion_command(ctx)
    }

    fn render(&mut self, surface: &mut Surface<'_>, ctx: &SceneContext) {
        backdrop::draw_static(surface);

        if let Some(sprite) = &self.player_sprite {
            surface.blit(sprite, self.player.x as i32, self.player.y as i32);
        }

        for target in &self.targets {
            if !target.alive() {
                continue;
            }
            if let Some(sprite) = &self.target_sprite {
                surface.blit(sprite, target.x as i32, target.y as i32);
            }
            let center_x = (target.x + target.width / 2.0) as i32;
            let center_y = (target.y + target.height / 2.0) as i32;
            surface.draw_text(
                target.label,
                center_x,
                center_y,
                2,
                TextAlign::Center,
                TARGET_LABEL_COLOR,
            );

            let bar_x = (target.x + (target.width - HP_BAR_WIDTH as f32) / 2.0) as i32;
            let bar_y = (target.y - 15.0) as i32;
            surface.fill_rect(bar_x, bar_y, HP_BAR_WIDTH, HP_BAR_HEIGHT, HP_BAR_BACK_COLOR);
            let fill_width =
                (target.hp.max(0) as f32 / target.max_hp as f32 * HP_BAR_WIDTH as f32) as i32;
            let fill_color = if target.hp > self.low_hp_threshold() {
                HP_BAR_OK_COLOR
            } else {
                HP_BAR_LOW_COLOR
            };
            surface.fill_rect(bar_x, bar_y, fill_width, HP_BAR_HEIGHT, fill_color);
        }

        if let Some(observed_at) = self.completion_observed_at {
            let progress = ((self.elapsed - observed_at) / GRACE_DELAY_SECONDS).clamp(0.0, 1.0);
            let frame = (progress * (EXPLOSION_FRAME_COUNT - 1) as f32) as u8;
            let sprite = self.sprites.borrow_mut().explosion_frame(frame);
            for target in self.targets.iter().filter(|target| !target.alive()) {
                let x = (target.x + target.width / 2.0) as i32 - sprite.width() as i32 / 2;
                let y = (target.y + target.height / 2.0) as i32 - sprite.height() as i32 / 2;
                surface.blit(&sprite, x, y);
            }
        }

        if let (Some(ufo), Some(sprite)) = (&self.ufo, &self.ufo_sprite) {
            if ufo.active {
                surface.blit(sprite, ufo.x as i32, ufo.y as i32);
            }
        }
        if let Some(banner) = &self.banner {
            surface.draw_text(
                "NICE!",
                banner.x as i32,
                banner.y as i32,
                3,
                TextAlign::Center,
                BANNER_COLOR,
            );
        }

        if let Some(sprite) = &self.bullet_sprite {
            for bullet in self.bullets.iter().filter(|bullet| bullet.active) {
                surface.blit(sprite, bullet.x as i32, bullet.y as i32);
            }
        }

        if self.mode == StageMode::Practice {
            let center_x = ctx.surface_width() as i32 / 2;
            surface.draw_text(
                "DESTROY ALL SIGNS TO CONTINUE!",
                center_x,
                40,
                2,
                TextAlign::Center,
                INSTRUCTION_COLOR,
            );
        }
    }

    fn cleanup(&mut self, _ctx: &mut SceneContext) {
        self.bullets.clear();
        self.ufo = None;
        self.banner = None;
        debug!(stage = self.stage_name(), "scene_cleanup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn shared_bank() -> Rc<RefCell<SpriteBank>> {
        Rc::new(RefCell::new(SpriteBank::new()))
    }

    fn duel_scene() -> (CombatScene, SceneContext) {
        let mut scene = CombatScene::duel(shared_bank());
        let mut ctx = SceneContext::new(640, 480);
        scene.init(&mut ctx);
        (scene, ctx)
    }

    fn practice_scene() -> (CombatScene, SceneContext) {
        let mut scene = CombatScene::practice(shared_bank());
        let mut ctx = SceneContext::new(800, 600);
        scene.init(&mut ctx);
        (scene, ctx)
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::empty()
    }

    fn holding(action: InputAction) -> InputSnapshot {
        InputSnapshot::empty().with_action_down(action, true)
    }

    fn tick_n(
        scene: &mut CombatScene,
        ctx: &mut SceneContext,
        input: &InputSnapshot,
        ticks: u32,
        dt: f32,
    ) -> SceneCommand {
        let mut last = SceneCommand::None;
        for _ in 0..ticks {
            last = scene.update(dt, input, ctx);
        }
        last
    }

    fn center_bullet(target: &Target) -> Bullet {
        Bullet {
            x: target.x + target.width / 2.0 - BULLET_WIDTH / 2.0,
            y: target.y + target.height / 2.0 - BULLET_HEIGHT / 2.0,
            vx: 0.0,
            vy: -BULLET_SPEED,
            active: true,
        }
    }

    fn destroy_target(scene: &mut CombatScene, index: usize) {
        let target = &mut scene.targets[index];
        target.hp = 0;
        target.active = false;
    }

    #[test]
    fn player_spawns_centered_above_bottom_margin() {
        let (scene, _ctx) = duel_scene();
        assert_eq!(scene.player.x, 304.0);
        assert_eq!(scene.player.y, 420.0);
    }

    #[test]
    fn player_position_clamps_to_surface_bounds() {
        let (mut scene, mut ctx) = duel_scene();

        tick_n(&mut scene, &mut ctx, &holding(InputAction::MoveLeft), 600, DT);
        assert_eq!(scene.player.x, 0.0);

        tick_n(&mut scene, &mut ctx, &holding(InputAction::MoveRight), 600, DT);
        assert_eq!(scene.player.x, 640.0 - PLAYER_WIDTH);
    }

    #[test]
    fn single_press_spawns_one_bullet_at_muzzle() {
        let (mut scene, mut ctx) = duel_scene();
        scene.update(0.016, &holding(InputAction::Shoot), &mut ctx);

        assert_eq!(scene.bullets.len(), 1);
        let bullet = &scene.bullets[0];
        assert!((bullet.x - 318.0).abs() < 0.001);
        // Spawned at the player's nose and already integrated one tick.
        assert!((bullet.y - (420.0 - BULLET_SPEED * 0.016)).abs() < 0.001);
        assert_eq!(bullet.vy, -BULLET_SPEED);
        assert_eq!(bullet.vx, 0.0);
    }

    #[test]
    fn bullet_leaves_surface_and_active_set_within_sixty_ticks() {
        let (mut scene, mut ctx) = duel_scene();
        scene.update(0.016, &holding(InputAction::Shoot), &mut ctx);
        assert_eq!(scene.bullets.len(), 1);

        tick_n(&mut scene, &mut ctx, &idle(), 59, 0.016);
        assert!(scene.bullets.is_empty());
    }

    #[test]
    fn held_shoot_fires_only_once() {
        let (mut scene, mut ctx) = duel_scene();
        tick_n(&mut scene, &mut ctx, &holding(InputAction::Shoot), 30, DT);

        assert_eq!(scene.bullets.len(), 1);
    }

    #[test]
    fn refire_waits_for_release_and_cooldown() {
        let (mut scene, mut ctx) = duel_scene();
        let pressed = holding(InputAction::Shoot);
        let released = idle();

        scene.update(0.016, &pressed, &mut ctx);
        assert_eq!(scene.bullets.len(), 1);

        scene.update(0.016, &released, &mut ctx);
        scene.update(0.016, &pressed, &mut ctx);
        assert_eq!(scene.bullets.len(), 1, "cooldown still open");

        tick_n(&mut scene, &mut ctx, &released, 15, 0.016);
        scene.update(0.016, &pressed, &mut ctx);
        assert_eq!(scene.bullets.len(), 2);
    }

    #[test]
    fn rapid_fire_is_bounded_by_cooldown() {
        let (mut scene, mut ctx) = duel_scene();
        let pressed = holding(InputAction::Shoot);
        let released = idle();

        let ticks = 62u32;
        let mut spawned = 0usize;
        for tick in 0..ticks {
            let before = scene.bullets.len();
            let input = if tick % 2 == 0 { &pressed } else { &released };
            scene.update(0.016, input, &mut ctx);
            if scene.bullets.len() > before {
                spawned += 1;
            }
        }

        let elapsed = ticks as f32 * 0.016;
        let allowed = (elapsed / SHOT_COOLDOWN_SECONDS).floor() as usize + 1;
        assert!(spawned <= allowed, "{spawned} > {allowed}");
        assert!(spawned >= 2);
    }

    #[test]
    fn bullet_damages_only_first_of_overlapping_targets() {
        let (mut scene, _ctx) = practice_scene();
        let stacked_x = scene.targets[0].x;
        scene.targets[1].base_x = scene.targets[0].base_x;
        scene.targets[1].x = stacked_x;

        let bullet = center_bullet(&scene.targets[0]);
        scene.bullets.push(bullet);
        scene.resolve_collisions();

        assert_eq!(scene.targets[0].hp, PRACTICE_TARGET_HP - 1);
        assert_eq!(scene.targets[1].hp, PRACTICE_TARGET_HP);
        assert!(!scene.bullets[0].active);
    }

    #[test]
    fn collided_bullet_is_removed_from_active_set_on_update() {
        let (mut scene, mut ctx) = practice_scene();
        let bullet = center_bullet(&scene.targets[0]);
        scene.bullets.push(bullet);

        scene.update(DT, &idle(), &mut ctx);
        assert!(scene.bullets.is_empty());
        assert_eq!(scene.targets[0].hp, PRACTICE_TARGET_HP - 1);
    }

    #[test]
    fn circle_collision_misses_the_round_target_corner() {
        let (mut scene, _ctx) = duel_scene();
        let target_x = scene.targets[0].x;
        let target_y = scene.targets[0].y;
        // Inside the bounding box but outside the 80 px radius.
        scene.bullets.push(Bullet {
            x: target_x + 2.0,
            y: target_y + 2.0,
            vx: 0.0,
            vy: -BULLET_SPEED,
            active: true,
        });
        scene.resolve_collisions();

        assert!(scene.bullets[0].active);
        assert_eq!(scene.targets[0].hp, DUEL_TARGET_HP);
    }

    #[test]
    fn ten_center_hits_destroy_left_target_and_record_left() {
        let (mut scene, mut ctx) = duel_scene();
        for _ in 0..10 {
            let bullet = center_bullet(&scene.targets[0]);
            scene.bullets.push(bullet);
            scene.resolve_collisions();
        }
        assert!(!scene.targets[0].alive());
        assert!(scene.targets[1].alive());

        let command = scene.update(DT, &idle(), &mut ctx);
        assert_eq!(command, SceneCommand::None);
        assert_eq!(ctx.game_result, Some(GameResult::Left));

        let command = tick_n(&mut scene, &mut ctx, &idle(), 62, DT);
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Result));
        assert_eq!(ctx.game_result, Some(GameResult::Left));
    }

    #[test]
    fn right_target_destruction_records_right() {
        let (mut scene, mut ctx) = duel_scene();
        destroy_target(&mut scene, 1);

        scene.update(DT, &idle(), &mut ctx);
        assert_eq!(ctx.game_result, Some(GameResult::Right));
    }

    #[test]
    fn grace_delay_holds_the_transition_back() {
        let (mut scene, mut ctx) = duel_scene();
        destroy_target(&mut scene, 0);

        let command = tick_n(&mut scene, &mut ctx, &idle(), 50, DT);
        assert_eq!(command, SceneCommand::None);
    }

    #[test]
    fn zero_targets_alive_transitions_without_result() {
        let (mut scene, mut ctx) = duel_scene();
        destroy_target(&mut scene, 0);
        destroy_target(&mut scene, 1);

        let command = tick_n(&mut scene, &mut ctx, &idle(), 62, DT);
        assert_eq!(command, SceneCommand::SwitchTo(GameState::Result));
        assert_eq!(ctx.game_result, None);
    }

    #[test]
    fn duel_init_clears_stale_result() {
        let (mut scene, mut ctx) = duel_scene();
        ctx.game_result = Some(GameResult::Left);
        scene.init(&mut ctx);
        assert_eq!(ctx.game_result, None);
    }

    #[test]
    fn practice_init_preserves_recorded_result() {
        let bank = shared_bank();
        let mut scene = CombatScene::practice(bank);
        let mut ctx = SceneContext::new(800, 600);
        ctx.game_result = Some(GameResult::Right);
        scene.init(&mut ctx);
        assert_eq!(ctx.game_result, Some(GameResult::Right));
    }

    #[test]
    fn practice_completion_switches_to_game_message_immediately() {
        let (mut scene, mut ctx) = practice_scene();
        for index in 0..3 {
            destroy_target(&mut scene, index);
        }

        let command = scene.update(DT, &idle(), &mut ctx);
        assert_eq!(command, SceneCommand::SwitchTo(GameState::GameMessage));
        assert_eq!(ctx.game_result, None);
    }

    #[test]
    fn sway_stays_within_amplitude_and_actually_moves() {
        let (mut scene, mut ctx) = duel_scene();
        let mut seen_x = Vec::new();
        for _ in 0..120 {
            scene.update(DT, &idle(), &mut ctx);
            seen_x.push(scene.targets[0].x);
            for target in &scene.targets {
                assert!((target.x - target.base_x).abs() <= SWAY_AMPLITUDE + 0.001);
            }
        }
        let min = seen_x.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = seen_x.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 1.0, "targets should visibly sway");
    }

    #[test]
    fn ufo_spawns_after_initial_delay() {
        let (mut scene, mut ctx) = duel_scene();

        tick_n(&mut scene, &mut ctx, &idle(), 179, DT);
        assert!(scene.ufo.is_none());

        tick_n(&mut scene, &mut ctx, &idle(), 2, DT);
        assert!(scene.ufo.as_ref().is_some_and(|ufo| ufo.active));
    }

    #[test]
    fn missed_ufo_escapes_and_respawns_on_interval() {
        let (mut scene, mut ctx) = duel_scene();

        // 9 s in: the first flyby has crossed the surface and escaped.
        tick_n(&mut scene, &mut ctx, &idle(), 540, DT);
        assert!(scene.ufo.as_ref().is_some_and(|ufo| !ufo.active));

        // 13.3 s in: the respawn interval has elapsed.
        tick_n(&mut scene, &mut ctx, &idle(), 260, DT);
        assert!(scene.ufo.as_ref().is_some_and(|ufo| ufo.active));
    }

    #[test]
    fn downed_ufo_never_respawns_and_banner_expires() {
        let (mut scene, mut ctx) = duel_scene();
        tick_n(&mut scene, &mut ctx, &idle(), 200, DT);
        let (ufo_x, ufo_y) = {
            let ufo = scene.ufo.as_ref().expect("ufo in flight");
            assert!(ufo.active);
            (ufo.x, ufo.y)
        };

        scene.bullets.push(Bullet {
            x: ufo_x + UFO_WIDTH / 2.0,
            y: ufo_y + UFO_HEIGHT / 2.0,
            vx: 0.0,
            vy: -BULLET_SPEED,
            active: true,
        });
        scene.resolve_collisions();
        assert!(scene.ufo_downed);
        assert!(scene.banner.is_some());

        // Banner holds for its two-second window, then clears.
        tick_n(&mut scene, &mut ctx, &idle(), 60, DT);
        assert!(scene.banner.is_some());
        tick_n(&mut scene, &mut ctx, &idle(), 70, DT);
        assert!(scene.banner.is_none());

        // Way past every respawn interval: still grounded.
        tick_n(&mut scene, &mut ctx, &idle(), 1800, DT);
        assert!(scene.ufo.as_ref().is_some_and(|ufo| !ufo.active));
    }

    #[test]
    fn practice_stage_never_spawns_a_ufo() {
        let (mut scene, mut ctx) = practice_scene();
        tick_n(&mut scene, &mut ctx, &idle(), 900, DT);
        assert!(scene.ufo.is_none());
    }

    #[test]
    fn cleanup_clears_transient_entities() {
        let (mut scene, mut ctx) = duel_scene();
        scene.update(DT, &holding(InputAction::Shoot), &mut ctx);
        assert!(!scene.bullets.is_empty());

        scene.cleanup(&mut ctx);
        assert!(scene.bullets.is_empty());
        assert!(scene.ufo.is_none());
        assert!(scene.banner.is_none());
    }
}
