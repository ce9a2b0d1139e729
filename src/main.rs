mod config;
mod error;
mod game_loop;
mod game_state;
mod gui;
mod input_system;
mod text;

use config::{MENU_CONFIG_PATH, MenuConfig, key_bindings_candidates, load_key_bindings};
use game_loop::{LoopControl, step};
use game_state::{GameState, RepaintTracker, SharedGameState};
use gui::Menu;
use input_system::{InputSystem, KeyBindings};
use log::info;
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas, RenderTarget};
use text::{draw_simple_text, text_size};

/// Backdrop of the placeholder game scene
const GAME_BACKGROUND: Color = Color::RGB(11, 4, 20);

/// Darkening laid over the game scene while a menu is open
const MENU_OVERLAY_ALPHA: u8 = 180;

const FRAME_RATE: u32 = 60;

/// Draws the stand-in for the real game: a backdrop and a hint line
fn draw_game_scene<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    config: &MenuConfig,
    bindings: &KeyBindings,
) -> Result<(), String> {
    canvas.set_draw_color(GAME_BACKGROUND);
    canvas.clear();

    let hint = format!("IN GAME - [{}] PAUSE", bindings.escape.name().to_uppercase());
    let (width, height) = text_size(&hint, config.text_scale);
    draw_simple_text(
        canvas,
        &hint,
        (config.window_width as i32 - width as i32) / 2,
        (config.window_height as i32 - height as i32) / 2,
        config.text_color(),
        config.text_scale,
    )
}

/// Composites one menu frame onto the persistent screen texture
///
/// On a full repaint the game scene is redrawn and darkened first; on every
/// other frame only the menu rectangle is overwritten.
fn compose_menu_frame<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    menu: &Menu<sdl2::render::Texture<'_>>,
    full_repaint: bool,
    config: &MenuConfig,
    bindings: &KeyBindings,
) -> Result<(), String> {
    if full_repaint {
        draw_game_scene(canvas, config, bindings)?;
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, MENU_OVERLAY_ALPHA));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);
    }
    menu.render(canvas)?;
    Ok(())
}

fn main() -> Result<(), String> {
    pretty_env_logger::init();

    let config = MenuConfig::load_or_default(MENU_CONFIG_PATH)?;
    let bindings = load_key_bindings(&key_bindings_candidates())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Menu Overlay", config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .target_texture()
        .build()
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Missing button or background images abort here
    let mut menu = Menu::build(&mut canvas, &texture_creator, &config, &bindings)?;

    // Parent surface the menu is composited onto; survives between frames
    let mut screen = texture_creator
        .create_texture_target(None, config.window_width, config.window_height)
        .map_err(|e| e.to_string())?;

    let input_system = InputSystem::new();
    let game_state = SharedGameState::new(GameState::InMenu);
    let mut repaint = RepaintTracker::new();

    info!("Controls:");
    info!("  {} - play / resume", bindings.confirm.name());
    info!("  {} - instructions", bindings.instructions.name());
    info!("  {} - back", bindings.back.name());
    info!("  {} - main menu (from pause)", bindings.main_menu.name());
    info!("  {} - quit / back / pause / resume", bindings.escape.name());

    'running: loop {
        let input = input_system.poll(&mut event_pump);
        if step(&mut menu, &game_state, &input, &bindings) == LoopControl::Exit {
            break 'running;
        }

        let full_repaint = repaint.needs_full_repaint(game_state.get());
        let mut composed = Ok(());
        match game_state.get() {
            GameState::InMenu => {
                menu.draw(&mut canvas)?;
                canvas
                    .with_texture_canvas(&mut screen, |target| {
                        composed = compose_menu_frame(target, &menu, full_repaint, &config, &bindings);
                    })
                    .map_err(|e| e.to_string())?;
            }
            GameState::InGame => {
                canvas
                    .with_texture_canvas(&mut screen, |target| {
                        composed = draw_game_scene(target, &config, &bindings);
                    })
                    .map_err(|e| e.to_string())?;
            }
        }
        composed?;

        canvas.copy(&screen, None, None)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FRAME_RATE));
    }

    Ok(())
}
