//! # Window Canvas
//!
//! The macroquad-backed [`Canvas`] and the startup checks that guard it.

use crate::rendering::Canvas;
use crate::{PongError, PongResult};
use log::{debug, info};
use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::draw_circle;
use macroquad::texture::{draw_texture_ex, DrawTextureParams, FilterMode, Texture2D};
use macroquad::window::{clear_background, screen_dpi_scale, screen_height, screen_width};

/// Canvas that draws into the macroquad window.
///
/// Rectangles are drawn by stretching a tinted 1x1 white texture.
pub struct MacroquadCanvas {
    /// Window width in logical pixels at startup
    pub screen_width: f32,
    /// Window height in logical pixels at startup
    pub screen_height: f32,
    pixel: Texture2D,
}

impl MacroquadCanvas {
    /// Verifies the display and window, then creates the drawing resources.
    ///
    /// Stages run in order: display, window, renderer. The first failure is
    /// returned and resources acquired by earlier stages are dropped.
    pub fn new() -> PongResult<Self> {
        check_display_scale(screen_dpi_scale())?;
        debug!("Display ready (dpi scale {})", screen_dpi_scale());

        let (width, height) = (screen_width(), screen_height());
        check_window_size(width, height)?;
        debug!("Window ready ({}x{})", width, height);

        let pixel = Texture2D::from_rgba8(1, 1, &[255, 255, 255, 255]);
        pixel.set_filter(FilterMode::Nearest);
        check_pixel_texture(pixel.width(), pixel.height())?;

        info!("Renderer ready");
        Ok(Self {
            screen_width: width,
            screen_height: height,
            pixel,
        })
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_texture_ex(
            &self.pixel,
            x,
            y,
            color,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(x, y, radius, color);
    }
}

/// Fails with [`PongError::DisplayInit`] unless the display reports a usable scale factor.
pub fn check_display_scale(dpi_scale: f32) -> PongResult<()> {
    if dpi_scale.is_finite() && dpi_scale > 0.0 {
        Ok(())
    } else {
        Err(PongError::DisplayInit(format!(
            "display reported scale factor {}",
            dpi_scale
        )))
    }
}

/// Fails with [`PongError::WindowCreation`] unless the window has a drawable area.
pub fn check_window_size(width: f32, height: f32) -> PongResult<()> {
    if width >= 1.0 && height >= 1.0 {
        Ok(())
    } else {
        Err(PongError::WindowCreation(format!(
            "window has no drawable area ({}x{})",
            width, height
        )))
    }
}

/// Fails with [`PongError::RendererCreation`] unless the fill texture came out 1x1.
pub fn check_pixel_texture(width: f32, height: f32) -> PongResult<()> {
    if width == 1.0 && height == 1.0 {
        Ok(())
    } else {
        Err(PongError::RendererCreation(format!(
            "fill texture is {}x{}, expected 1x1",
            width, height
        )))
    }
}
