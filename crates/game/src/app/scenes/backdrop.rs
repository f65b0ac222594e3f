//! Starfield backdrops shared by the scenes. Star positions come from a
//! cheap integer stride so the field looks scattered without an RNG.

use engine::Surface;

pub(crate) const SPACE_COLOR: [u8; 4] = [0, 0, 0, 255];
const STAR_COLOR: [u8; 4] = [255, 255, 255, 255];
const STATIC_STAR_COUNT: i32 = 50;
const SCROLLING_STAR_COUNT: i32 = 100;

pub(crate) fn draw_static(surface: &mut Surface<'_>) {
    surface.clear(SPACE_COLOR);
    let width = (surface.width() as i32).max(1);
    let height = (surface.height() as i32).max(1);
    for star in 0..STATIC_STAR_COUNT {
        let x = (star * 37) % width;
        let y = (star * 73) % height;
        surface.fill_rect(x, y, 1, 1, STAR_COLOR);
    }
}

/// Drifting variant for the victory movie: the scroll offset carries the
/// stars sideways and down, the shimmer clock varies their size.
pub(crate) fn draw_scrolling(surface: &mut Surface<'_>, scroll_px: f32, shimmer_seconds: f32) {
    surface.clear(SPACE_COLOR);
    let width = (surface.width() as f32).max(1.0);
    let height = (surface.height() as f32).max(1.0);
    for star in 0..SCROLLING_STAR_COUNT {
        let x = ((star * 37) as f32 + scroll_px) % width;
        let y = ((star * 73) as f32 + scroll_px * 0.6) % height;
        let size = ((shimmer_seconds + star as f32).sin() * 2.0 + 2.0).max(1.0) as i32;
        surface.fill_rect(x as i32, y as i32, size, size, STAR_COLOR);
    }
}
