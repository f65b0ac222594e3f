use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use super::surface::Surface;

/// Presents a fixed logical frame buffer to the window. Window resizes
/// only rescale the presentation surface; the logical resolution the
/// scenes draw at never changes.
pub struct Renderer {
    pixels: Pixels<'static>,
    surface_width: u32,
    surface_height: u32,
}

impl Renderer {
    pub fn new(
        window: &'static Window,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(surface_width, surface_height, surface_texture)?;
        Ok(Self {
            pixels,
            surface_width,
            surface_height,
        })
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    pub fn resize_window(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub fn frame(&mut self) -> Surface<'_> {
        Surface::new(
            self.pixels.frame_mut(),
            self.surface_width,
            self.surface_height,
        )
    }

    pub fn present(&mut self) -> Result<(), Error> {
        self.pixels.render()
    }
}
