//! Start, pause and postgame menus, laid out relative to the court width.

use game_core::{Rect, SpeedMultipliers, Vector2D};

use crate::controls::{Button, PointerEvent, Slider, Toggle};
use crate::players::{NameField, PlayerNames};

/// Keyboard input relevant to the menus and to pausing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Tab,
    Enter,
    Escape,
    Space,
}

/// What a menu asks the match to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(PlayerNames),
    Exit,
    Resume,
    Reset,
    EndGame,
    PlayAgain,
    MainMenu,
}

/// Look picked in the start menu's settings; the renderer maps it to colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualStyle {
    #[default]
    Classic,
    Neon,
}

impl VisualStyle {
    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::Classic => "Classic",
            VisualStyle::Neon => "Neon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    None,
    Left,
    Right,
}

fn centered(width: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(width / 2.0 - w / 2.0, y, w, h)
}

/// Name entry for both players, with a settings page for the visual style
#[derive(Debug, Clone)]
pub struct StartMenu {
    pub left_name: NameField,
    pub right_name: NameField,
    pub left_rect: Rect,
    pub right_rect: Rect,
    pub start_button: Button,
    pub settings_button: Button,
    pub exit_button: Button,
    pub classic_button: Button,
    pub neon_button: Button,
    pub back_button: Button,
    focus: Focus,
    showing_settings: bool,
    style: VisualStyle,
}

impl StartMenu {
    pub fn new(width: f64) -> Self {
        Self {
            left_name: NameField::new(),
            right_name: NameField::new(),
            left_rect: centered(width, 220.0, 300.0, 50.0),
            right_rect: centered(width, 310.0, 300.0, 50.0),
            start_button: Button::new(centered(width, 380.0, 200.0, 60.0), "Start Game"),
            settings_button: Button::new(centered(width, 460.0, 200.0, 60.0), "Settings"),
            exit_button: Button::new(centered(width, 540.0, 200.0, 60.0), "Exit"),
            classic_button: Button::new(Rect::new(width / 2.0 - 220.0, 300.0, 180.0, 50.0), "Classic"),
            neon_button: Button::new(Rect::new(width / 2.0 + 40.0, 300.0, 180.0, 50.0), "Neon"),
            back_button: Button::new(centered(width, 450.0, 200.0, 60.0), "Back"),
            focus: Focus::None,
            showing_settings: false,
            style: VisualStyle::default(),
        }
    }

    pub fn style(&self) -> VisualStyle {
        self.style
    }

    pub fn is_showing_settings(&self) -> bool {
        self.showing_settings
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.left_name.active = focus == Focus::Left;
        self.right_name.active = focus == Focus::Right;
    }

    pub fn focus_left(&mut self) {
        self.set_focus(Focus::Left);
    }

    fn start(&self) -> MenuAction {
        if self.left_name.is_empty() || self.right_name.is_empty() {
            return MenuAction::None;
        }
        MenuAction::Start(PlayerNames::new(
            self.left_name.text().trim(),
            self.right_name.text().trim(),
        ))
    }

    pub fn handle_key(&mut self, key: Key) -> MenuAction {
        if self.showing_settings {
            if key == Key::Escape {
                self.showing_settings = false;
            }
            return MenuAction::None;
        }

        match (self.focus, key) {
            (Focus::None, _) => return MenuAction::None,
            (Focus::Left, Key::Tab | Key::Enter) => {
                self.set_focus(Focus::Right);
                return MenuAction::None;
            }
            (Focus::Right, Key::Enter) => return self.start(),
            _ => {}
        }

        let field = if self.focus == Focus::Left {
            &mut self.left_name
        } else {
            &mut self.right_name
        };
        match key {
            Key::Backspace => {
                field.backspace();
            }
            Key::Char(c) => {
                field.push_char(c);
            }
            Key::Space => {
                field.push_char(' ');
            }
            Key::Tab | Key::Enter | Key::Escape => {}
        }
        MenuAction::None
    }

    fn handle_settings_pointer(&mut self, event: PointerEvent) -> MenuAction {
        match event {
            PointerEvent::Motion(pointer) => {
                self.classic_button.update_hover(pointer);
                self.neon_button.update_hover(pointer);
                self.back_button.update_hover(pointer);
            }
            PointerEvent::Down(pointer) => {
                if self.classic_button.is_clicked(pointer) {
                    self.style = VisualStyle::Classic;
                } else if self.neon_button.is_clicked(pointer) {
                    self.style = VisualStyle::Neon;
                } else if self.back_button.is_clicked(pointer) {
                    self.showing_settings = false;
                }
                log::debug!("visual style: {}", self.style.label());
            }
            PointerEvent::Up(_) => {}
        }
        MenuAction::None
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> MenuAction {
        if self.showing_settings {
            return self.handle_settings_pointer(event);
        }

        match event {
            PointerEvent::Motion(pointer) => {
                self.start_button.update_hover(pointer);
                self.settings_button.update_hover(pointer);
                self.exit_button.update_hover(pointer);
                MenuAction::None
            }
            PointerEvent::Down(pointer) => {
                if self.start_button.is_clicked(pointer) {
                    return self.start();
                }
                if self.settings_button.is_clicked(pointer) {
                    self.set_focus(Focus::None);
                    self.showing_settings = true;
                    return MenuAction::None;
                }
                if self.exit_button.is_clicked(pointer) {
                    return MenuAction::Exit;
                }
                if self.left_rect.contains(pointer) {
                    self.set_focus(Focus::Left);
                } else if self.right_rect.contains(pointer) {
                    self.set_focus(Focus::Right);
                } else {
                    self.set_focus(Focus::None);
                }
                MenuAction::None
            }
            PointerEvent::Up(_) => MenuAction::None,
        }
    }
}

/// Pause overlay with the live tuning controls
#[derive(Debug, Clone)]
pub struct PauseMenu {
    pub resume_button: Button,
    pub reset_button: Button,
    pub end_button: Button,
    pub game_speed: Slider,
    pub paddle_speed: Slider,
    pub ball_speed: Slider,
    pub acceleration: Toggle,
}

impl PauseMenu {
    pub const SPEED_MIN: f64 = 0.5;
    pub const SPEED_MAX: f64 = 2.0;

    pub fn new(width: f64) -> Self {
        let slider = |y, label| {
            Slider::new(
                width / 2.0 - 150.0,
                y,
                300.0,
                Self::SPEED_MIN,
                Self::SPEED_MAX,
                1.0,
                label,
            )
        };
        Self {
            resume_button: Button::new(centered(width, 180.0, 200.0, 60.0), "Resume"),
            reset_button: Button::new(centered(width, 260.0, 200.0, 60.0), "Reset"),
            end_button: Button::new(centered(width, 340.0, 200.0, 60.0), "End Game"),
            game_speed: slider(440.0, "Game Speed"),
            paddle_speed: slider(510.0, "Paddle Speed"),
            ball_speed: slider(580.0, "Ball Speed"),
            acceleration: Toggle::new(width / 2.0 - Toggle::WIDTH / 2.0, 660.0, "Ball Acceleration", true),
        }
    }

    pub fn multipliers(&self) -> SpeedMultipliers {
        SpeedMultipliers {
            game: self.game_speed.value(),
            paddle: self.paddle_speed.value(),
            ball: self.ball_speed.value(),
        }
    }

    pub fn acceleration_enabled(&self) -> bool {
        self.acceleration.state()
    }

    fn sliders_mut(&mut self) -> [&mut Slider; 3] {
        [&mut self.game_speed, &mut self.paddle_speed, &mut self.ball_speed]
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> MenuAction {
        if let PointerEvent::Down(pointer) = event {
            if self.resume_button.is_clicked(pointer) {
                return MenuAction::Resume;
            }
            if self.reset_button.is_clicked(pointer) {
                return MenuAction::Reset;
            }
            if self.end_button.is_clicked(pointer) {
                return MenuAction::EndGame;
            }
            if self.acceleration.handle_click(pointer) {
                log::debug!("acceleration toggled: {}", self.acceleration.state());
                return MenuAction::None;
            }
        }
        if let PointerEvent::Motion(pointer) = event {
            self.update_hover(pointer);
        }
        for slider in self.sliders_mut() {
            if slider.handle_event(event) {
                log::debug!("{} set to {:.2}", slider.label, slider.value());
            }
        }
        MenuAction::None
    }

    fn update_hover(&mut self, pointer: Vector2D) {
        self.resume_button.update_hover(pointer);
        self.reset_button.update_hover(pointer);
        self.end_button.update_hover(pointer);
    }
}

#[derive(Debug, Clone)]
pub struct PostGameMenu {
    pub play_again_button: Button,
    pub main_menu_button: Button,
}

impl PostGameMenu {
    pub fn new(width: f64) -> Self {
        Self {
            play_again_button: Button::new(Rect::new(width / 2.0 - 220.0, 500.0, 200.0, 60.0), "Play Again"),
            main_menu_button: Button::new(Rect::new(width / 2.0 + 20.0, 500.0, 200.0, 60.0), "Main Menu"),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> MenuAction {
        match event {
            PointerEvent::Down(pointer) if self.play_again_button.is_clicked(pointer) => {
                MenuAction::PlayAgain
            }
            PointerEvent::Down(pointer) if self.main_menu_button.is_clicked(pointer) => {
                MenuAction::MainMenu
            }
            PointerEvent::Motion(pointer) => {
                self.play_again_button.update_hover(pointer);
                self.main_menu_button.update_hover(pointer);
                MenuAction::None
            }
            _ => MenuAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 1080.0;

    fn type_name(menu: &mut StartMenu, name: &str) {
        for c in name.chars() {
            menu.handle_key(Key::Char(c));
        }
    }

    #[test]
    fn test_start_menu_keyboard_flow() {
        let mut menu = StartMenu::new(WIDTH);
        menu.focus_left();
        type_name(&mut menu, "Ann");

        // Enter on the first field moves focus instead of starting
        assert_eq!(menu.handle_key(Key::Enter), MenuAction::None);
        assert!(menu.right_name.active);
        assert!(!menu.left_name.active);

        // Second name still empty
        assert_eq!(menu.handle_key(Key::Enter), MenuAction::None);

        type_name(&mut menu, "Bob");
        assert_eq!(
            menu.handle_key(Key::Enter),
            MenuAction::Start(PlayerNames::new("Ann", "Bob"))
        );
    }

    #[test]
    fn test_start_menu_tab_and_backspace() {
        let mut menu = StartMenu::new(WIDTH);
        menu.focus_left();
        type_name(&mut menu, "Al");
        menu.handle_key(Key::Space);
        type_name(&mut menu, "X");
        menu.handle_key(Key::Backspace);
        assert_eq!(menu.left_name.text(), "Al ");
        menu.handle_key(Key::Tab);
        type_name(&mut menu, "Bo");
        assert_eq!(menu.right_name.text(), "Bo");
        assert_eq!(
            menu.handle_key(Key::Enter),
            MenuAction::Start(PlayerNames::new("Al", "Bo"))
        );
    }

    #[test]
    fn test_start_menu_ignores_keys_without_focus() {
        let mut menu = StartMenu::new(WIDTH);
        type_name(&mut menu, "Zed");
        assert!(menu.left_name.text().is_empty());
    }

    #[test]
    fn test_start_menu_click_focus_and_buttons() {
        let mut menu = StartMenu::new(WIDTH);
        let right_field = menu.right_rect.center();
        menu.handle_pointer(PointerEvent::Down(right_field));
        assert!(menu.right_name.active);

        let start = menu.start_button.rect.center();
        assert_eq!(menu.handle_pointer(PointerEvent::Down(start)), MenuAction::None);

        let exit = menu.exit_button.rect.center();
        assert_eq!(menu.handle_pointer(PointerEvent::Down(exit)), MenuAction::Exit);
    }

    #[test]
    fn test_settings_page_picks_style() {
        let mut menu = StartMenu::new(WIDTH);
        assert_eq!(menu.style(), VisualStyle::Classic);

        let settings = menu.settings_button.rect.center();
        menu.handle_pointer(PointerEvent::Down(settings));
        assert!(menu.is_showing_settings());

        // Typing does nothing while the settings page is up
        menu.handle_key(Key::Char('x'));
        assert!(menu.left_name.text().is_empty());

        let neon = menu.neon_button.rect.center();
        menu.handle_pointer(PointerEvent::Down(neon));
        assert_eq!(menu.style(), VisualStyle::Neon);
        assert_eq!(menu.style().label(), "Neon");

        let back = menu.back_button.rect.center();
        menu.handle_pointer(PointerEvent::Down(back));
        assert!(!menu.is_showing_settings());
        assert_eq!(menu.style(), VisualStyle::Neon);

        menu.handle_pointer(PointerEvent::Down(settings));
        menu.handle_key(Key::Escape);
        assert!(!menu.is_showing_settings());
    }

    #[test]
    fn test_pause_menu_defaults() {
        let menu = PauseMenu::new(WIDTH);
        assert_eq!(menu.multipliers(), SpeedMultipliers::default());
        assert!(menu.acceleration_enabled());
        assert_eq!(menu.game_speed.range(), (0.5, 2.0));
    }

    #[test]
    fn test_pause_menu_buttons() {
        let mut menu = PauseMenu::new(WIDTH);
        let resume = menu.resume_button.rect.center();
        let reset = menu.reset_button.rect.center();
        let end = menu.end_button.rect.center();
        assert_eq!(menu.handle_pointer(PointerEvent::Down(resume)), MenuAction::Resume);
        assert_eq!(menu.handle_pointer(PointerEvent::Down(reset)), MenuAction::Reset);
        assert_eq!(menu.handle_pointer(PointerEvent::Down(end)), MenuAction::EndGame);
    }

    #[test]
    fn test_pause_menu_drag_ball_speed() {
        let mut menu = PauseMenu::new(WIDTH);
        let handle = menu.ball_speed.handle_center();
        menu.handle_pointer(PointerEvent::Down(handle));
        menu.handle_pointer(PointerEvent::Motion(Vector2D::new(10_000.0, handle.y)));
        menu.handle_pointer(PointerEvent::Up(handle));

        let multipliers = menu.multipliers();
        assert_eq!(multipliers.ball, 2.0);
        assert_eq!(multipliers.game, 1.0);
        assert_eq!(multipliers.paddle, 1.0);
    }

    #[test]
    fn test_pause_menu_toggle() {
        let mut menu = PauseMenu::new(WIDTH);
        let toggle = menu.acceleration.rect.center();
        menu.handle_pointer(PointerEvent::Down(toggle));
        assert!(!menu.acceleration_enabled());
    }

    #[test]
    fn test_postgame_menu() {
        let mut menu = PostGameMenu::new(WIDTH);
        let again = menu.play_again_button.rect.center();
        let main = menu.main_menu_button.rect.center();
        assert_eq!(menu.handle_pointer(PointerEvent::Down(again)), MenuAction::PlayAgain);
        assert_eq!(menu.handle_pointer(PointerEvent::Down(main)), MenuAction::MainMenu);
        assert_eq!(
            menu.handle_pointer(PointerEvent::Down(Vector2D::ZERO)),
            MenuAction::None
        );
    }
}
