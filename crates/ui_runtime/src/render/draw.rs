//! Draw primitives on the virtual canvas
//!
//! [`Painter`] is the only way the runtime emits quads: every blit goes
//! through [`ScreenTransform::to_physical`] first. Tinting is scoped with
//! [`ColorScope`], which restores "no tint" when it goes out of scope so a
//! tinted sequence can never leak into unrelated draws.

use std::ops::{Deref, DerefMut};

use super::screen::ScreenTransform;
use crate::foundation::math::Color;
use crate::host::{Renderer, ShaderHandle, StretchPic};

/// Texture coordinates for a full, unflipped image
pub const FULL_IMAGE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Texture coordinates that sample a single texel of the white image
const FLAT: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Virtual-canvas drawing front end over a host renderer
pub struct Painter<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    transform: &'a ScreenTransform,
    white: ShaderHandle,
}

impl<'a, R: Renderer + ?Sized> Painter<'a, R> {
    /// Create a painter drawing through `transform`, using `white` for fills
    pub fn new(renderer: &'a mut R, transform: &'a ScreenTransform, white: ShaderHandle) -> Self {
        Self {
            renderer,
            transform,
            white,
        }
    }

    /// Set the tint until the returned scope is dropped
    ///
    /// `None` explicitly selects "no tint" for the scope.
    pub fn scoped_color(&mut self, color: Option<&Color>) -> ColorScope<'_, 'a, R> {
        self.renderer.set_color(color);
        ColorScope { painter: self }
    }

    /// Emit one quad given in virtual coordinates
    pub fn blit(&mut self, x: f32, y: f32, w: f32, h: f32, st: [f32; 4], shader: ShaderHandle) {
        let (x, y, w, h) = self.transform.to_physical(x, y, w, h);
        self.renderer.draw_stretch_pic(StretchPic {
            x,
            y,
            w,
            h,
            s0: st[0],
            t0: st[1],
            s1: st[2],
            t1: st[3],
            shader,
        });
    }

    /// Fill a rectangle with a flat color; `None` draws untinted white
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Option<&Color>) {
        let white = self.white;
        let mut scope = self.scoped_color(color);
        scope.blit(x, y, w, h, FLAT, white);
    }

    /// Outline a rectangle with four one-unit edges
    ///
    /// Each edge is transformed on its own; the bottom and right edges sit
    /// on the rectangle's inner boundary at `h - 1` and `w - 1`.
    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Option<&Color>) {
        let white = self.white;
        let mut scope = self.scoped_color(color);
        scope.blit(x, y, w, 1.0, FLAT, white);
        scope.blit(x, y, 1.0, h, FLAT, white);
        scope.blit(x, y + h - 1.0, w, 1.0, FLAT, white);
        scope.blit(x + w - 1.0, y, 1.0, h, FLAT, white);
    }

    /// Draw an image stretched over a rectangle
    ///
    /// A negative width mirrors the image horizontally and a negative height
    /// mirrors it vertically; the drawn size is always the absolute value.
    pub fn draw_handle_pic(&mut self, x: f32, y: f32, w: f32, h: f32, shader: ShaderHandle) {
        let (w, s0, s1) = if w < 0.0 { (-w, 1.0, 0.0) } else { (w, 0.0, 1.0) };
        let (h, t0, t1) = if h < 0.0 { (-h, 1.0, 0.0) } else { (h, 0.0, 1.0) };
        self.blit(x, y, w, h, [s0, t0, s1, t1], shader);
    }

    /// Resolve an image by name and draw it unflipped
    pub fn draw_named_pic(&mut self, x: f32, y: f32, w: f32, h: f32, name: &str) {
        let shader = self.renderer.register_shader_no_mip(name);
        self.blit(x, y, w, h, FULL_IMAGE, shader);
    }
}

/// Tint that is reset to "no tint" on drop
pub struct ColorScope<'p, 'a, R: Renderer + ?Sized> {
    painter: &'p mut Painter<'a, R>,
}

impl<R: Renderer + ?Sized> ColorScope<'_, '_, R> {
    /// Change the tint without leaving the scope
    pub fn set(&mut self, color: &Color) {
        self.painter.renderer.set_color(Some(color));
    }
}

impl<'a, R: Renderer + ?Sized> Deref for ColorScope<'_, 'a, R> {
    type Target = Painter<'a, R>;

    fn deref(&self) -> &Self::Target {
        &*self.painter
    }
}

impl<R: Renderer + ?Sized> DerefMut for ColorScope<'_, '_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.painter
    }
}

impl<R: Renderer + ?Sized> Drop for ColorScope<'_, '_, R> {
    fn drop(&mut self) {
        self.painter.renderer.set_color(None);
    }
}
