//! Value objects behind the on-screen controls. They hold the current value
//! and the pointer interaction; drawing them is up to the renderer.

use game_core::{Rect, Vector2D};

/// Pointer input in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vector2D),
    Up(Vector2D),
    Motion(Vector2D),
}

/// Clickable button with hover state
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            hovered: false,
        }
    }

    /// Track hover for highlighting; returns whether the pointer is over it
    pub fn update_hover(&mut self, pointer: Vector2D) -> bool {
        self.hovered = self.rect.contains(pointer);
        self.hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_clicked(&self, pointer: Vector2D) -> bool {
        self.rect.contains(pointer)
    }
}

/// Horizontal slider over [min, max], set by dragging its handle
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub track: Rect,
    pub label: String,
    min: f64,
    max: f64,
    value: f64,
    dragging: bool,
}

impl Slider {
    pub const TRACK_HEIGHT: f64 = 20.0;
    pub const HANDLE_RADIUS: f64 = 10.0;

    pub fn new(x: f64, y: f64, width: f64, min: f64, max: f64, initial: f64, label: impl Into<String>) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            track: Rect::new(x, y, width, Self::TRACK_HEIGHT),
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Position of the value along the track in [0, 1]
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }

    pub fn handle_center(&self) -> Vector2D {
        Vector2D::new(
            self.track.x + self.ratio() * self.track.w,
            self.track.center().y,
        )
    }

    fn handle_rect(&self) -> Rect {
        let center = self.handle_center();
        Rect::new(
            center.x - Self::HANDLE_RADIUS,
            center.y - Self::HANDLE_RADIUS,
            Self::HANDLE_RADIUS * 2.0,
            Self::HANDLE_RADIUS * 2.0,
        )
    }

    /// Returns true when the value changed
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(pointer) => {
                if self.handle_rect().contains(pointer) {
                    self.dragging = true;
                }
                false
            }
            PointerEvent::Up(_) => {
                self.dragging = false;
                false
            }
            PointerEvent::Motion(pointer) if self.dragging => self.drag_to(pointer.x),
            PointerEvent::Motion(_) => false,
        }
    }

    fn drag_to(&mut self, x: f64) -> bool {
        let x = x.clamp(self.track.left(), self.track.right());
        let ratio = if self.track.w > 0.0 {
            (x - self.track.left()) / self.track.w
        } else {
            0.0
        };
        let previous = self.value;
        self.set_value(self.min + ratio * (self.max - self.min));
        self.value != previous
    }
}

/// On/off switch flipped by clicking it
#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    pub rect: Rect,
    pub label: String,
    state: bool,
}

impl Toggle {
    pub const WIDTH: f64 = 60.0;
    pub const HEIGHT: f64 = 30.0;

    pub fn new(x: f64, y: f64, label: impl Into<String>, initial: bool) -> Self {
        Self {
            rect: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            label: label.into(),
            state: initial,
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Flip on a click inside the switch; returns whether it flipped
    pub fn handle_click(&mut self, pointer: Vector2D) -> bool {
        if self.rect.contains(pointer) {
            self.state = !self.state;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> Slider {
        Slider::new(100.0, 400.0, 300.0, 0.5, 2.0, 1.0, "Game Speed")
    }

    #[test]
    fn test_slider_starts_at_initial_value() {
        let slider = slider();
        assert_eq!(slider.value(), 1.0);
        assert!((slider.handle_center().x - 200.0).abs() < 1e-9);
        assert_eq!(slider.handle_center().y, 410.0);
    }

    #[test]
    fn test_slider_drag_sets_value() {
        let mut slider = slider();
        let handle = slider.handle_center();

        slider.handle_event(PointerEvent::Down(handle));
        assert!(slider.is_dragging());

        assert!(slider.handle_event(PointerEvent::Motion(Vector2D::new(400.0, 0.0))));
        assert_eq!(slider.value(), 2.0);

        // Dragging past the track clamps to its ends
        slider.handle_event(PointerEvent::Motion(Vector2D::new(-50.0, 0.0)));
        assert_eq!(slider.value(), 0.5);

        slider.handle_event(PointerEvent::Motion(Vector2D::new(250.0, 0.0)));
        assert!((slider.value() - 1.25).abs() < 1e-9);

        slider.handle_event(PointerEvent::Up(Vector2D::ZERO));
        assert!(!slider.is_dragging());
        assert!(!slider.handle_event(PointerEvent::Motion(Vector2D::new(400.0, 0.0))));
        assert!((slider.value() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_slider_ignores_press_off_handle() {
        let mut slider = slider();
        slider.handle_event(PointerEvent::Down(Vector2D::new(390.0, 410.0)));
        assert!(!slider.is_dragging());
        assert!(!slider.handle_event(PointerEvent::Motion(Vector2D::new(390.0, 410.0))));
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_slider_set_value_clamps() {
        let mut slider = slider();
        slider.set_value(9.0);
        assert_eq!(slider.value(), 2.0);
        slider.set_value(-1.0);
        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.range(), (0.5, 2.0));
    }

    #[test]
    fn test_toggle_click() {
        let mut toggle = Toggle::new(10.0, 10.0, "Ball Acceleration", true);
        assert!(!toggle.handle_click(Vector2D::new(0.0, 0.0)));
        assert!(toggle.state());
        assert!(toggle.handle_click(Vector2D::new(40.0, 25.0)));
        assert!(!toggle.state());
    }

    #[test]
    fn test_button_hover_and_click() {
        let mut button = Button::new(Rect::new(0.0, 0.0, 200.0, 60.0), "Resume");
        assert!(button.update_hover(Vector2D::new(100.0, 30.0)));
        assert!(button.is_hovered());
        assert!(!button.update_hover(Vector2D::new(300.0, 30.0)));
        assert!(button.is_clicked(Vector2D::new(10.0, 10.0)));
        assert!(!button.is_clicked(Vector2D::new(10.0, 70.0)));
    }
}
