//! Text labels
//!
//! Labels are rendered once when the menu is built and never re-rendered.
//! Each frame only the baked texture is copied.

use crate::error::MenuError;
use crate::text::{draw_simple_text, text_size};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// Rectangle of `width` x `height` whose center is `anchor`
///
/// Zero sizes are bumped to one pixel, the smallest rect SDL2 can hold.
pub fn centered_rect(anchor: Point, width: u32, height: u32) -> Rect {
    Rect::from_center(anchor, width.max(1), height.max(1))
}

/// How label text is drawn
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle {
    pub color: Color,
    /// Bitmap font scale factor
    pub scale: u32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            color: Color::RGB(240, 240, 240),
            scale: 2,
        }
    }
}

/// A pre-rendered piece of text centered on a fixed point
#[derive(Debug)]
pub struct Label<T> {
    image: T,
    rect: Rect,
}

impl<T> Label<T> {
    pub fn new(image: T, anchor: Point, size: (u32, u32)) -> Self {
        Label {
            image,
            rect: centered_rect(anchor, size.0, size.1),
        }
    }
}

impl<'a> Label<Texture<'a>> {
    /// Bakes `text` into a transparent texture centered on `anchor`
    pub fn render_text(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        text: &str,
        anchor: Point,
        style: LabelStyle,
    ) -> Result<Self, MenuError> {
        let (width, height) = text_size(text, style.scale);
        let (width, height) = (width.max(1), height.max(1));

        let mut image = texture_creator
            .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| MenuError::Render(e.to_string()))?;
        image.set_blend_mode(BlendMode::Blend);

        let mut drawn = Ok(());
        canvas
            .with_texture_canvas(&mut image, |target| {
                target.set_draw_color(Color::RGBA(0, 0, 0, 0));
                target.clear();
                drawn = draw_simple_text(target, text, 0, 0, style.color, style.scale);
            })
            .map_err(|e| MenuError::Render(e.to_string()))?;
        drawn.map_err(MenuError::Render)?;

        Ok(Label::new(image, anchor, (width, height)))
    }

    pub fn render<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), String> {
        canvas.copy(&self.image, None, self.rect)
    }
}
