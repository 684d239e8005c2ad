//! Frame rendering
//!
//! Draws a [`GameSession`] with filled rectangles: visible tiles, the player,
//! the mining target outline, floating texts, the HUD, and whichever panel is
//! open.

use ore_miner::color::Rgb;
use ore_miner::game::ui_manager::{self, UiButton};
use ore_miner::game::{GameSession, UiScreen};
use ore_miner::collision::Collidable;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::text::{self, LINE_HEIGHT};

const SKY: Color = Color::RGB(135, 206, 235);
const PLAYER_COLOR: Color = Color::RGB(255, 100, 100);
const TARGET_OUTLINE: Color = Color::RGB(255, 255, 255);
const HUD_BACKGROUND: Color = Color::RGBA(0, 0, 0, 150);
const OVERLAY_BACKGROUND: Color = Color::RGBA(0, 0, 0, 128);
const PANEL_BACKGROUND: Color = Color::RGBA(50, 50, 50, 230);
const PANEL_BORDER: Color = Color::RGB(255, 255, 255);
const BUTTON_ENABLED: Color = Color::RGB(70, 70, 70);
const BUTTON_DISABLED: Color = Color::RGB(50, 50, 50);
const HELP_TEXT: Color = Color::RGB(128, 128, 128);

const HUD_SCALE: u32 = 1;
const PANEL_SCALE: u32 = 2;

pub fn to_sdl(color: Rgb) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

pub fn render_frame(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    canvas.set_draw_color(SKY);
    canvas.clear();

    render_world(canvas, session)?;
    render_player(canvas, session)?;
    render_floating_texts(canvas, session)?;
    render_hud(canvas, session)?;

    match session.screen() {
        UiScreen::Playing => {}
        UiScreen::Inventory => render_panel(canvas, &session.overlay_lines(), (150, 100, 500, 400))?,
        UiScreen::Shop => {
            render_panel(canvas, &session.overlay_lines(), ui_manager::SHOP_PANEL)?;
            let buttons = session.ui.shop_buttons(&session.shop, &session.player);
            render_buttons(canvas, &buttons)?;
        }
        UiScreen::Paused => render_pause(canvas, session)?,
    }

    canvas.present();
    Ok(())
}

/// Tiles inside the camera view; air is left as sky
fn render_world(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    let grid = &session.world;
    let camera = &session.camera;
    let size = grid.tile_size.ceil() as u32;
    let (min_x, min_y, max_x, max_y) = camera.visible_tile_range(grid);

    for ty in min_y..=max_y {
        for tx in min_x..=max_x {
            let Some(tile) = grid.get_tile(tx, ty) else {
                continue;
            };
            if !tile.solid {
                continue;
            }

            let (wx, wy) = grid.tile_to_world(tx, ty);
            let (sx, sy) = camera.world_to_screen(wx, wy);
            canvas.set_draw_color(to_sdl(tile.shaded_color(ty as usize)));
            canvas.fill_rect(Rect::new(sx, sy, size, size))?;
        }
    }

    Ok(())
}

fn render_player(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    let player = &session.player;
    let camera = &session.camera;
    let grid = &session.world;

    let bounds = player.bounds();
    let (sx, sy) = camera.world_to_screen(bounds.x, bounds.y);
    canvas.set_draw_color(PLAYER_COLOR);
    canvas.fill_rect(Rect::new(sx, sy, bounds.width as u32, bounds.height as u32))?;

    // Pickaxe colour marks the side the player faces
    let (ox, oy) = player.facing.offset();
    let (cx, cy) = bounds.center();
    let (px, py) = camera.world_to_screen(
        cx + ox as f32 * bounds.width / 3.0,
        cy + oy as f32 * bounds.height / 3.0,
    );
    canvas.set_draw_color(to_sdl(player.pickaxe.color()));
    canvas.fill_rect(Rect::new(px - 3, py - 3, 6, 6))?;

    if session.screen() == UiScreen::Playing {
        let (tx, ty) = player.mine_target(grid);
        let (wx, wy) = grid.tile_to_world(tx, ty);
        let (sx, sy) = camera.world_to_screen(wx, wy);
        let size = grid.tile_size as u32;
        canvas.set_draw_color(TARGET_OUTLINE);
        canvas.draw_rect(Rect::new(sx, sy, size, size))?;
    }

    Ok(())
}

fn render_floating_texts(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    for floating in &session.floating_texts {
        let (sx, sy) = session.camera.world_to_screen(floating.x, floating.y);
        let c = floating.color;
        let color = Color::RGBA(c.r, c.g, c.b, floating.alpha());
        text::draw_text_centered(canvas, &floating.text, sx, sy, color, 2)?;
    }
    Ok(())
}

fn render_hud(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    let lines = session.hud_lines();
    let (width, _) = canvas.output_size()?;
    let line_height = LINE_HEIGHT * HUD_SCALE;
    let height = line_height * (lines.len() as u32 + 1) + 10;

    canvas.set_draw_color(HUD_BACKGROUND);
    canvas.fill_rect(Rect::new(0, 0, width, height))?;

    let bottom = text::draw_lines(canvas, &lines, 10, 6, Color::RGB(255, 255, 255), HUD_SCALE)?;
    text::draw_text(canvas, ui_manager::CONTROLS_HELP, 10, bottom, HELP_TEXT, HUD_SCALE)
}

fn render_panel(
    canvas: &mut Canvas<Window>,
    lines: &[String],
    (x, y, width, height): (i32, i32, u32, u32),
) -> Result<(), String> {
    let (screen_w, screen_h) = canvas.output_size()?;
    canvas.set_draw_color(OVERLAY_BACKGROUND);
    canvas.fill_rect(Rect::new(0, 0, screen_w, screen_h))?;

    let panel = Rect::new(x, y, width, height);
    canvas.set_draw_color(PANEL_BACKGROUND);
    canvas.fill_rect(panel)?;
    canvas.set_draw_color(PANEL_BORDER);
    canvas.draw_rect(panel)?;

    // First line is the title
    let Some((title, body)) = lines.split_first() else {
        return Ok(());
    };
    let center_x = x + width as i32 / 2;
    text::draw_text_centered(canvas, title, center_x, y + 16, Color::RGB(255, 255, 255), 3)?;
    text::draw_lines(canvas, body, x + 20, y + 56, Color::RGB(255, 255, 255), PANEL_SCALE)?;
    Ok(())
}

fn render_buttons(canvas: &mut Canvas<Window>, buttons: &[UiButton]) -> Result<(), String> {
    for button in buttons {
        let rect = Rect::new(button.x, button.y, button.width, button.height);
        canvas.set_draw_color(if button.enabled { BUTTON_ENABLED } else { BUTTON_DISABLED });
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(PANEL_BORDER);
        canvas.draw_rect(rect)?;

        let label_color = if button.enabled { Color::RGB(255, 255, 255) } else { HELP_TEXT };
        let text_y = button.y + (button.height as i32 - 7) / 2;
        text::draw_text_centered(canvas, &button.label, rect.center().x(), text_y, label_color, 1)?;
    }
    Ok(())
}

fn render_pause(canvas: &mut Canvas<Window>, session: &GameSession) -> Result<(), String> {
    let (screen_w, screen_h) = canvas.output_size()?;
    canvas.set_draw_color(OVERLAY_BACKGROUND);
    canvas.fill_rect(Rect::new(0, 0, screen_w, screen_h))?;

    let lines = session.overlay_lines();
    let center_x = screen_w as i32 / 2;
    let mut y = screen_h as i32 / 2 - 40;
    for (i, line) in lines.iter().enumerate() {
        let (color, scale) = if i == 0 {
            (Color::RGB(255, 255, 255), 4)
        } else {
            (HELP_TEXT, 2)
        };
        text::draw_text_centered(canvas, line, center_x, y, color, scale)?;
        y += (LINE_HEIGHT * scale) as i32 + 10;
    }
    Ok(())
}
