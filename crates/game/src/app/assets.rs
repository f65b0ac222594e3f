//! Procedural sprite factory. Every sprite is painted once on first
//! request and cached; repeated calls hand out the same shared handle.

use std::collections::HashMap;
use std::f32::consts::TAU;
use std::rc::Rc;

use engine::Sprite;

pub(crate) const PLAYER_SPRITE_SIZE: u32 = 32;
pub(crate) const TARGET_SPRITE_SIZE: u32 = 192;
pub(crate) const BULLET_SPRITE_WIDTH: u32 = 4;
pub(crate) const BULLET_SPRITE_HEIGHT: u32 = 8;
pub(crate) const UFO_SPRITE_WIDTH: u32 = 48;
pub(crate) const UFO_SPRITE_HEIGHT: u32 = 20;
pub(crate) const EXPLOSION_FRAME_COUNT: u8 = 8;
const EXPLOSION_FRAME_SIZE: u32 = 32;

const PLAYER_HULL_COLOR: [u8; 4] = [0, 255, 0, 255];
const ENGINE_GLOW_COLOR: [u8; 4] = [255, 255, 0, 255];
const TARGET_SHELL_COLOR: [u8; 4] = [126, 134, 158, 255];
const TARGET_BODY_COLOR: [u8; 4] = [74, 82, 112, 255];
const TARGET_CORE_COLOR: [u8; 4] = [255, 140, 0, 255];
const SIGN_POST_COLOR: [u8; 4] = [139, 69, 19, 255];
const SIGN_BOARD_COLOR: [u8; 4] = [210, 180, 140, 255];
const SIGN_PANEL_COLOR: [u8; 4] = [245, 222, 179, 255];
const BULLET_COLOR: [u8; 4] = [0, 255, 255, 255];
const UFO_HULL_COLOR: [u8; 4] = [176, 176, 204, 255];
const UFO_DOME_COLOR: [u8; 4] = [120, 220, 160, 255];
const EXPLOSION_EARLY_COLOR: [u8; 3] = [255, 255, 0];
const EXPLOSION_LATE_COLOR: [u8; 3] = [255, 136, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SpriteKey {
    Player,
    DuelTarget,
    SignBoard,
    Bullet,
    Ufo,
    ExplosionFrame(u8),
}

pub(crate) struct SpriteBank {
    cache: HashMap<SpriteKey, Rc<Sprite>>,
}

impl SpriteBank {
    pub(crate) fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub(crate) fn player(&mut self) -> Rc<Sprite> {
        self.cached(SpriteKey::Player, build_player_sprite)
    }

    pub(crate) fn duel_target(&mut self) -> Rc<Sprite> {
        self.cached(SpriteKey::DuelTarget, build_duel_target_sprite)
    }

    pub(crate) fn sign_board(&mut self) -> Rc<Sprite> {
        self.cached(SpriteKey::SignBoard, build_sign_board_sprite)
    }

    pub(crate) fn bullet(&mut self) -> Rc<Sprite> {
        self.cached(SpriteKey::Bullet, build_bullet_sprite)
    }

    pub(crate) fn ufo(&mut self) -> Rc<Sprite> {
        self.cached(SpriteKey::Ufo, build_ufo_sprite)
    }

    pub(crate) fn explosion_frame(&mut self, frame: u8) -> Rc<Sprite> {
        let frame = frame.min(EXPLOSION_FRAME_COUNT - 1);
        let key = SpriteKey::ExplosionFrame(frame);
        Rc::clone(
            self.cache
                .entry(key)
                .or_insert_with(|| Rc::new(build_explosion_frame(frame))),
        )
    }

    fn cached(&mut self, key: SpriteKey, build: fn() -> Sprite) -> Rc<Sprite> {
        Rc::clone(self.cache.entry(key).or_insert_with(|| Rc::new(build())))
    }
}

fn build_player_sprite() -> Sprite {
    let mut sprite = Sprite::new(PLAYER_SPRITE_SIZE, PLAYER_SPRITE_SIZE);
    let mut painter = sprite.painter();
    // Widening hull rows give the ship its wedge silhouette.
    for row in 0..24i32 {
        let half_width = 2 + row * 12 / 24;
        painter.fill_rect(16 - half_width, 4 + row, half_width * 2, 1, PLAYER_HULL_COLOR);
    }
    painter.fill_rect(14, 24, 4, 4, ENGINE_GLOW_COLOR);
    sprite
}

fn build_duel_target_sprite() -> Sprite {
    let mut sprite = Sprite::new(TARGET_SPRITE_SIZE, TARGET_SPRITE_SIZE);
    let mut painter = sprite.painter();
    let center = TARGET_SPRITE_SIZE as i32 / 2;
    painter.fill_circle(center, center, 80, TARGET_SHELL_COLOR);
    painter.fill_circle(center, center, 64, TARGET_BODY_COLOR);
    painter.fill_circle(center, center, 28, TARGET_CORE_COLOR);
    sprite
}

fn build_sign_board_sprite() -> Sprite {
    let mut sprite = Sprite::new(TARGET_SPRITE_SIZE, TARGET_SPRITE_SIZE);
    let mut painter = sprite.painter();
    painter.fill_rect(86, 120, 20, 72, SIGN_POST_COLOR);
    painter.fill_rect(20, 60, 152, 80, SIGN_BOARD_COLOR);
    painter.outline_rect(20, 60, 152, 80, SIGN_POST_COLOR);
    painter.fill_rect(26, 66, 140, 68, SIGN_PANEL_COLOR);
    sprite
}

fn build_bullet_sprite() -> Sprite {
    let mut sprite = Sprite::new(BULLET_SPRITE_WIDTH, BULLET_SPRITE_HEIGHT);
    sprite.painter().fill_rect(
        0,
        0,
        BULLET_SPRITE_WIDTH as i32,
        BULLET_SPRITE_HEIGHT as i32,
        BULLET_COLOR,
    );
    sprite
}

fn build_ufo_sprite() -> Sprite {
    let mut sprite = Sprite::new(UFO_SPRITE_WIDTH, UFO_SPRITE_HEIGHT);
    let mut painter = sprite.painter();
    painter.fill_circle(24, 8, 9, UFO_DOME_COLOR);
    painter.fill_rect(0, 10, UFO_SPRITE_WIDTH as i32, 7, UFO_HULL_COLOR);
    sprite
}

fn build_explosion_frame(frame: u8) -> Sprite {
    let mut sprite = Sprite::new(EXPLOSION_FRAME_SIZE, EXPLOSION_FRAME_SIZE);
    let mut painter = sprite.painter();
    let spread = 4.0 + frame as f32 * 2.0;
    let alpha = 255 - (frame as u32 * 255 / EXPLOSION_FRAME_COUNT as u32) as u8;
    let [r, g, b] = if frame < EXPLOSION_FRAME_COUNT / 2 {
        EXPLOSION_EARLY_COLOR
    } else {
        EXPLOSION_LATE_COLOR
    };
    for particle in 0..6 {
        let angle = particle as f32 / 6.0 * TAU;
        let px = 16.0 + angle.cos() * spread;
        let py = 16.0 + angle.sin() * spread;
        painter.fill_rect(px as i32 - 2, py as i32 - 2, 4, 4, [r, g, b, alpha]);
    }
    sprite
}
