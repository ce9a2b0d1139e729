//! Menu Overlay Component
//!
//! A menu with three screens (main, instructions, paused), exactly one of
//! which is active. The menu owns an offscreen surface that it repaints from
//! the active screen's labels and buttons, and blits that surface onto the
//! parent target at a fixed anchor rectangle.
//!
//! Key presses and button clicks both produce [`MenuIntent`]s. Intents that
//! move between menu screens are applied by the menu itself; the rest are
//! handed back to the owning loop, which decides what "play", "resume" and
//! "quit" actually mean.
//!
//! # Example
//!
//! ```rust
//! let intents = menu.update(&input, &bindings);
//! for intent in intents {
//!     match intent {
//!         MenuIntent::EnterGame | MenuIntent::ResumeGame => { /* ... */ }
//!         MenuIntent::Terminate => break 'running,
//!         _ => unreachable!(),
//!     }
//! }
//! menu.draw(&mut canvas)?;
//! let dirty = menu.render(&mut screen_canvas)?;
//! ```

use super::button::{Button, ImageSize, StateImages};
use super::label::{Label, LabelStyle};
use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::input_system::{FrameInput, KeyBindings, MenuAction};
use log::{debug, info};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which menu screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuState {
    #[default]
    Main,
    Instructions,
    Paused,
}

impl MenuState {
    pub const ALL: [MenuState; 3] = [MenuState::Main, MenuState::Instructions, MenuState::Paused];

    fn index(self) -> usize {
        match self {
            MenuState::Main => 0,
            MenuState::Instructions => 1,
            MenuState::Paused => 2,
        }
    }

    /// Transition table for key actions
    ///
    /// Returns `None` for actions that mean nothing on this screen, which
    /// leaves the state unchanged.
    pub fn on_action(self, action: MenuAction) -> Option<MenuIntent> {
        match (self, action) {
            (MenuState::Main, MenuAction::Instructions) => Some(MenuIntent::EnterInstructions),
            (MenuState::Main, MenuAction::Confirm) => Some(MenuIntent::EnterGame),
            (MenuState::Main, MenuAction::Escape) => Some(MenuIntent::Terminate),

            (MenuState::Instructions, MenuAction::Back | MenuAction::Escape) => {
                Some(MenuIntent::ReturnToMain)
            }

            (MenuState::Paused, MenuAction::Confirm | MenuAction::Escape) => Some(MenuIntent::ResumeGame),
            (MenuState::Paused, MenuAction::MainMenu) => Some(MenuIntent::ReturnToMain),

            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MenuState::Main => "main",
            MenuState::Instructions => "instructions",
            MenuState::Paused => "paused",
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuState {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuState::ALL
            .into_iter()
            .find(|state| state.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MenuError::UnknownState(s.to_string()))
    }
}

/// What a button click or a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    EnterInstructions,
    ReturnToMain,
    EnterGame,
    ResumeGame,
    Terminate,
}

impl MenuIntent {
    /// The menu screen this intent switches to, if it is a menu-internal one
    pub fn target_state(self) -> Option<MenuState> {
        match self {
            MenuIntent::EnterInstructions => Some(MenuState::Instructions),
            MenuIntent::ReturnToMain => Some(MenuState::Main),
            MenuIntent::EnterGame | MenuIntent::ResumeGame | MenuIntent::Terminate => None,
        }
    }
}

/// The fixed widget set of one menu state
#[derive(Debug)]
pub struct MenuScreen<T> {
    labels: Vec<Label<T>>,
    buttons: Vec<Button<T>>,
}

impl<T: ImageSize> MenuScreen<T> {
    pub fn new() -> Self {
        MenuScreen {
            labels: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: Label<T>) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_button(mut self, button: Button<T>) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn buttons(&self) -> &[Button<T>] {
        &self.buttons
    }

    /// Updates every button in declaration order, collecting fired intents
    fn update(&mut self, cursor: Point, primary_down: bool) -> Vec<MenuIntent> {
        self.buttons
            .iter_mut()
            .filter_map(|button| button.update(cursor, primary_down))
            .collect()
    }

    fn reset(&mut self) {
        for button in &mut self.buttons {
            button.reset();
        }
    }
}

impl<T: ImageSize> Default for MenuScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Appearance of the menu surface
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Fill used when there is no background image
    pub background_color: Color,

    pub label: LabelStyle,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            background_color: Color::RGB(0, 0, 0),
            label: LabelStyle::default(),
        }
    }
}

/// A stateful menu overlay drawn through its own offscreen surface
#[derive(Debug)]
pub struct Menu<T> {
    state: MenuState,
    screens: [MenuScreen<T>; 3],
    surface: T,
    background: Option<T>,
    rect: Rect,
    style: MenuStyle,
}

impl<T: ImageSize> Menu<T> {
    /// Creates a menu in the main state
    ///
    /// `surface` is the offscreen target; its size and `position` (top-left
    /// on the parent) form the anchor rectangle.
    pub fn new(
        surface: T,
        position: Point,
        main: MenuScreen<T>,
        instructions: MenuScreen<T>,
        paused: MenuScreen<T>,
    ) -> Self {
        let (width, height) = surface.size();
        Menu {
            state: MenuState::Main,
            screens: [main, instructions, paused],
            surface,
            background: None,
            rect: Rect::new(position.x(), position.y(), width, height),
            style: MenuStyle::default(),
        }
    }

    pub fn with_background(mut self, background: T) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Anchor rectangle on the parent target
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn screen(&self, state: MenuState) -> &MenuScreen<T> {
        &self.screens[state.index()]
    }

    /// Switches screens, resetting the buttons of the screen being entered
    pub fn set_state(&mut self, state: MenuState) {
        if state == self.state {
            return;
        }
        debug!("Menu {} -> {}", self.state, state);
        self.state = state;
        self.screens[state.index()].reset();
    }

    /// Entry into the pause screen, driven by the owning loop
    ///
    /// Resuming leaves the menu in `Paused`, so the pause screen's buttons
    /// are reset here even when the state does not change.
    pub fn pause(&mut self) {
        self.set_state(MenuState::Paused);
        self.screens[MenuState::Paused.index()].reset();
    }

    /// Runs one frame of menu logic
    ///
    /// Key presses are resolved in order, each against the state current at
    /// that moment. Then the active screen's buttons are updated with the
    /// cursor in menu-local coordinates. Returns the intents the menu cannot
    /// handle itself, in the order they fired.
    pub fn update(&mut self, input: &FrameInput, bindings: &KeyBindings) -> Vec<MenuIntent> {
        let mut external = Vec::new();

        for &key in &input.keys {
            let Some(action) = bindings.action_for(key) else {
                continue;
            };
            if let Some(intent) = self.state.on_action(action) {
                self.apply(intent, &mut external);
            }
        }

        let cursor = Point::new(input.cursor.0 - self.rect.x(), input.cursor.1 - self.rect.y());
        let fired = self.screens[self.state.index()].update(cursor, input.primary_down);
        for intent in fired {
            self.apply(intent, &mut external);
        }

        external
    }

    fn apply(&mut self, intent: MenuIntent, external: &mut Vec<MenuIntent>) {
        match intent.target_state() {
            Some(state) => self.set_state(state),
            None => external.push(intent),
        }
    }
}

impl<'a> Menu<Texture<'a>> {
    /// Builds the three standard screens from `config`
    ///
    /// Fails if any button image or the background image cannot be loaded.
    pub fn build(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &MenuConfig,
        bindings: &KeyBindings,
    ) -> Result<Self, MenuError> {
        let width = config.menu_rect.width;
        let height = config.menu_rect.height;
        let style = MenuStyle {
            background_color: config.background_color(),
            label: LabelStyle {
                color: config.text_color(),
                scale: config.text_scale,
            },
        };

        let column = width as i32 / 2;
        let row = |tenths: i32| Point::new(column, height as i32 * tenths / 10);
        let key = |key: sdl2::keyboard::Keycode| key.name().to_uppercase();

        let mut label = |text: &str, anchor: Point| {
            Label::render_text(canvas, texture_creator, text, anchor, style.label)
        };
        let button = |name: &str, anchor: Point, intent: MenuIntent| -> Result<Button<Texture<'a>>, MenuError> {
            let images = StateImages::load(texture_creator, config.button_dir.join(name))?;
            Ok(Button::new(images, anchor, intent))
        };

        let main = MenuScreen::new()
            .with_label(label("MAIN MENU", row(1))?)
            .with_button(button("play_button", row(3), MenuIntent::EnterGame)?)
            .with_button(button("instructions_button", row(5), MenuIntent::EnterInstructions)?)
            .with_button(button("power_button", row(7), MenuIntent::Terminate)?)
            .with_label(label(&format!("[{}] - PLAY", key(bindings.confirm)), row(9))?)
            .with_label(label(
                &format!("[{}] - INSTRUCTIONS", key(bindings.instructions)),
                Point::new(column, height as i32 * 9 / 10 + 20),
            )?);

        let instructions = MenuScreen::new()
            .with_label(label("INSTRUCTIONS", row(1))?)
            .with_label(label("CLICK PLAY TO START", row(3))?)
            .with_label(label(&format!("[{}] - PAUSE", key(bindings.escape)), row(4))?)
            .with_label(label(&format!("[{}] - RESUME", key(bindings.confirm)), row(5))?)
            .with_button(button("back_button", row(7), MenuIntent::ReturnToMain)?)
            .with_label(label(&format!("[{}] - BACK", key(bindings.back)), row(9))?);

        let paused = MenuScreen::new()
            .with_label(label("PAUSED", row(1))?)
            .with_button(button("forward_button", row(4), MenuIntent::ResumeGame)?)
            .with_button(button("exit_button", row(6), MenuIntent::ReturnToMain)?)
            .with_label(label(&format!("[{}] - RESUME", key(bindings.confirm)), row(8))?)
            .with_label(label(&format!("[{}] - MAIN MENU", key(bindings.main_menu)), row(9))?);

        let mut surface = texture_creator
            .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| MenuError::Render(e.to_string()))?;
        surface.set_blend_mode(BlendMode::Blend);

        let position = Point::new(config.menu_rect.x, config.menu_rect.y);
        let mut menu = Menu::new(surface, position, main, instructions, paused).with_style(style);

        if let Some(path) = &config.background_image {
            let background = texture_creator
                .load_texture(path)
                .map_err(|reason| MenuError::AssetLoad {
                    path: path.clone(),
                    reason,
                })?;
            info!("Loaded menu background {}", path.display());
            menu = menu.with_background(background);
        }

        for state in MenuState::ALL {
            info!("{} screen: {} buttons", state, menu.screen(state).buttons().len());
        }
        info!("Menu built at {:?}", menu.rect());
        Ok(menu)
    }

    /// Repaints the offscreen surface from the active screen
    pub fn draw(&mut self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let screen = &self.screens[self.state.index()];
        let background = self.background.as_ref();
        let fill = self.style.background_color;

        let mut drawn = Ok(());
        canvas
            .with_texture_canvas(&mut self.surface, |target| {
                drawn = draw_screen(target, screen, background, fill);
            })
            .map_err(|e| e.to_string())?;
        drawn
    }

    /// Blits the whole surface onto `target` at the anchor rectangle
    ///
    /// Returns the rectangle that changed, so the caller can limit its own
    /// repaint to it.
    pub fn render<T: RenderTarget>(&self, target: &mut Canvas<T>) -> Result<Rect, String> {
        target.copy(&self.surface, None, self.rect)?;
        Ok(self.rect)
    }
}

fn draw_screen<T: RenderTarget>(
    target: &mut Canvas<T>,
    screen: &MenuScreen<Texture<'_>>,
    background: Option<&Texture<'_>>,
    fill: Color,
) -> Result<(), String> {
    target.set_draw_color(fill);
    target.clear();
    if let Some(background) = background {
        target.copy(background, None, None)?;
    }

    for label in &screen.labels {
        label.render(target)?;
    }
    for button in &screen.buttons {
        button.render(target)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::button::ButtonState;
    use sdl2::keyboard::Keycode;

    fn square(position: (i32, i32), intent: MenuIntent) -> Button<(u32, u32)> {
        Button::new(
            StateImages::new((40, 40), (40, 40), (40, 40)),
            Point::new(position.0, position.1),
            intent,
        )
    }

    /// Menu at (100, 50) on the parent, 300x400, with the standard buttons
    fn test_menu() -> Menu<(u32, u32)> {
        let main = MenuScreen::new()
            .with_button(square((150, 100), MenuIntent::EnterGame))
            .with_button(square((150, 200), MenuIntent::EnterInstructions))
            .with_button(square((150, 300), MenuIntent::Terminate));
        let instructions = MenuScreen::new().with_button(square((150, 300), MenuIntent::ReturnToMain));
        let paused = MenuScreen::new()
            .with_button(square((150, 150), MenuIntent::ResumeGame))
            .with_button(square((150, 250), MenuIntent::ReturnToMain));

        Menu::new((300, 400), Point::new(100, 50), main, instructions, paused)
    }

    fn press(menu: &mut Menu<(u32, u32)>, key: Keycode) -> Vec<MenuIntent> {
        menu.update(&FrameInput::at((0, 0)).with_key(key), &KeyBindings::default())
    }

    /// Clicks at a menu-local point: press then release
    fn click(menu: &mut Menu<(u32, u32)>, local: (i32, i32)) -> Vec<MenuIntent> {
        let bindings = KeyBindings::default();
        let at = (local.0 + 100, local.1 + 50);
        let mut intents = menu.update(&FrameInput::at(at).with_primary_down(true), &bindings);
        intents.extend(menu.update(&FrameInput::at(at), &bindings));
        intents
    }

    #[test]
    fn test_starts_in_main() {
        let menu = test_menu();
        assert_eq!(menu.state(), MenuState::Main);
        assert_eq!(menu.rect(), Rect::new(100, 50, 300, 400));
    }

    #[test]
    fn test_instructions_and_back_then_escape_terminates() {
        let mut menu = test_menu();

        assert!(press(&mut menu, Keycode::I).is_empty());
        assert_eq!(menu.state(), MenuState::Instructions);

        assert!(press(&mut menu, Keycode::Backspace).is_empty());
        assert_eq!(menu.state(), MenuState::Main);

        assert_eq!(press(&mut menu, Keycode::Escape), vec![MenuIntent::Terminate]);
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_escape_from_instructions_returns_to_main() {
        let mut menu = test_menu();
        press(&mut menu, Keycode::I);
        assert!(press(&mut menu, Keycode::Escape).is_empty());
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_confirm_from_main_enters_game() {
        let mut menu = test_menu();
        assert_eq!(press(&mut menu, Keycode::Return), vec![MenuIntent::EnterGame]);
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_paused_transitions() {
        let mut menu = test_menu();
        menu.pause();
        assert_eq!(menu.state(), MenuState::Paused);

        assert_eq!(press(&mut menu, Keycode::Escape), vec![MenuIntent::ResumeGame]);
        assert_eq!(press(&mut menu, Keycode::Return), vec![MenuIntent::ResumeGame]);
        assert_eq!(menu.state(), MenuState::Paused);

        assert!(press(&mut menu, Keycode::M).is_empty());
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_unmapped_keys_leave_state_unchanged() {
        for state in MenuState::ALL {
            let mut menu = test_menu();
            menu.set_state(state);
            for key in [Keycode::Z, Keycode::Space, Keycode::F1, Keycode::Tab] {
                assert!(press(&mut menu, key).is_empty());
                assert_eq!(menu.state(), state);
            }
        }
    }

    #[test]
    fn test_transition_table_is_total() {
        let actions = [
            MenuAction::Escape,
            MenuAction::Instructions,
            MenuAction::Confirm,
            MenuAction::Back,
            MenuAction::MainMenu,
        ];
        let expected = [
            (MenuState::Main, MenuAction::Escape, Some(MenuIntent::Terminate)),
            (MenuState::Main, MenuAction::Instructions, Some(MenuIntent::EnterInstructions)),
            (MenuState::Main, MenuAction::Confirm, Some(MenuIntent::EnterGame)),
            (MenuState::Main, MenuAction::Back, None),
            (MenuState::Main, MenuAction::MainMenu, None),
            (MenuState::Instructions, MenuAction::Escape, Some(MenuIntent::ReturnToMain)),
            (MenuState::Instructions, MenuAction::Instructions, None),
            (MenuState::Instructions, MenuAction::Confirm, None),
            (MenuState::Instructions, MenuAction::Back, Some(MenuIntent::ReturnToMain)),
            (MenuState::Instructions, MenuAction::MainMenu, None),
            (MenuState::Paused, MenuAction::Escape, Some(MenuIntent::ResumeGame)),
            (MenuState::Paused, MenuAction::Instructions, None),
            (MenuState::Paused, MenuAction::Confirm, Some(MenuIntent::ResumeGame)),
            (MenuState::Paused, MenuAction::Back, None),
            (MenuState::Paused, MenuAction::MainMenu, Some(MenuIntent::ReturnToMain)),
        ];

        assert_eq!(expected.len(), MenuState::ALL.len() * actions.len());
        for (state, action, intent) in expected {
            assert_eq!(state.on_action(action), intent, "{state} + {action:?}");
        }
    }

    #[test]
    fn test_menu_never_enters_paused_itself() {
        for state in MenuState::ALL {
            for intent in [
                MenuIntent::EnterInstructions,
                MenuIntent::ReturnToMain,
                MenuIntent::EnterGame,
                MenuIntent::ResumeGame,
                MenuIntent::Terminate,
            ] {
                assert_ne!(intent.target_state(), Some(MenuState::Paused), "{state}");
            }
        }
    }

    #[test]
    fn test_keys_resolve_in_order_within_frame() {
        let mut menu = test_menu();
        let input = FrameInput::at((0, 0))
            .with_key(Keycode::I)
            .with_key(Keycode::Backspace)
            .with_key(Keycode::Escape);
        let intents = menu.update(&input, &KeyBindings::default());
        assert_eq!(intents, vec![MenuIntent::Terminate]);
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_custom_bindings() {
        let mut menu = test_menu();
        let bindings = KeyBindings {
            instructions: Keycode::H,
            ..Default::default()
        };

        menu.update(&FrameInput::at((0, 0)).with_key(Keycode::I), &bindings);
        assert_eq!(menu.state(), MenuState::Main);
        menu.update(&FrameInput::at((0, 0)).with_key(Keycode::H), &bindings);
        assert_eq!(menu.state(), MenuState::Instructions);
    }

    #[test]
    fn test_button_click_uses_menu_local_cursor() {
        let mut menu = test_menu();
        assert_eq!(click(&mut menu, (150, 100)), vec![MenuIntent::EnterGame]);

        // Same point in parent coordinates misses once the offset is applied
        let bindings = KeyBindings::default();
        menu.update(&FrameInput::at((150, 100)).with_primary_down(true), &bindings);
        assert!(menu.update(&FrameInput::at((150, 100)), &bindings).is_empty());
    }

    #[test]
    fn test_instructions_button_and_back_button() {
        let mut menu = test_menu();
        assert!(click(&mut menu, (150, 200)).is_empty());
        assert_eq!(menu.state(), MenuState::Instructions);

        assert!(click(&mut menu, (150, 300)).is_empty());
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_power_button_terminates() {
        let mut menu = test_menu();
        assert_eq!(click(&mut menu, (150, 300)), vec![MenuIntent::Terminate]);
    }

    #[test]
    fn test_paused_buttons() {
        let mut menu = test_menu();
        menu.pause();
        assert_eq!(click(&mut menu, (150, 150)), vec![MenuIntent::ResumeGame]);

        assert!(click(&mut menu, (150, 250)).is_empty());
        assert_eq!(menu.state(), MenuState::Main);
    }

    #[test]
    fn test_repause_clears_press_from_last_pause() {
        let mut menu = test_menu();
        let bindings = KeyBindings::default();
        menu.pause();

        // Hold the mouse on Exit and resume by key in the same frame
        let on_exit = (250, 300);
        let input = FrameInput::at(on_exit).with_primary_down(true).with_key(Keycode::Escape);
        assert_eq!(menu.update(&input, &bindings), vec![MenuIntent::ResumeGame]);
        assert_eq!(menu.screen(MenuState::Paused).buttons()[1].state(), ButtonState::Pressed);

        menu.pause();
        assert!(menu.screen(MenuState::Paused).buttons().iter().all(|b| b.state() == ButtonState::Idle));

        // Releasing over Exit is only a hover now
        assert!(menu.update(&FrameInput::at(on_exit), &bindings).is_empty());
        assert_eq!(menu.state(), MenuState::Paused);
    }

    #[test]
    fn test_inactive_screens_not_updated() {
        let mut menu = test_menu();
        let bindings = KeyBindings::default();

        // Hover over the point where the paused screen's Forward button lives
        menu.update(&FrameInput::at((250, 200)), &bindings);

        let paused = menu.screen(MenuState::Paused);
        assert!(paused.buttons().iter().all(|b| b.state() == ButtonState::Idle));
    }

    #[test]
    fn test_entering_screen_resets_its_buttons() {
        let mut menu = test_menu();
        let bindings = KeyBindings::default();

        // Press Play, then leave for instructions by key while still held
        menu.update(&FrameInput::at((250, 150)).with_primary_down(true), &bindings);
        assert_eq!(menu.screen(MenuState::Main).buttons()[0].state(), ButtonState::Pressed);
        press(&mut menu, Keycode::I);
        press(&mut menu, Keycode::Backspace);

        assert_eq!(menu.screen(MenuState::Main).buttons()[0].state(), ButtonState::Idle);
        // Releasing over Play now is only a hover
        assert!(menu.update(&FrameInput::at((250, 150)), &bindings).is_empty());
    }

    #[test]
    fn test_state_round_trip() {
        for state in MenuState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            let restored: MenuState = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, state);

            let mut menu = test_menu();
            menu.set_state(restored);
            assert_eq!(menu.state(), state);
        }
    }

    #[test]
    fn test_state_from_str() {
        assert_eq!("paused".parse::<MenuState>().unwrap(), MenuState::Paused);
        assert_eq!("Instructions".parse::<MenuState>().unwrap(), MenuState::Instructions);
        assert!(matches!(
            "settings".parse::<MenuState>(),
            Err(MenuError::UnknownState(name)) if name == "settings"
        ));
    }

    #[test]
    fn test_unknown_state_fails_to_deserialize() {
        assert!(serde_json::from_str::<MenuState>("\"Settings\"").is_err());
    }
}
