use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::view_transform::ViewTransform;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in image coordinates
    pub position: Pos2,
    /// Whether the screen position was within the canvas widget
    pub is_in_canvas: bool,
}

impl InputLocation {
    pub fn new(position: Pos2, is_in_canvas: bool) -> Self {
        Self {
            position,
            is_in_canvas,
        }
    }
}

/// Input events relevant to the annotation canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { location: InputLocation },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
    /// Ctrl+wheel over the canvas. `steps` is positive for zooming in.
    Zoom { anchor: Pos2, steps: f32 },
}

/// Handles converting raw egui input into canvas `InputEvent`s
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2, view: &ViewTransform) -> InputLocation {
        InputLocation::new(view.to_image(pos), self.canvas_rect.contains(pos))
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context, view: &ViewTransform) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let wants_keyboard = ctx.wants_keyboard_input();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos, view),
                    });
                }
                self.last_pointer_pos = Some(pos);

                let scroll = input.raw_scroll_delta.y;
                if input.modifiers.command && scroll != 0.0 && self.canvas_rect.contains(pos) {
                    events.push(InputEvent::Zoom {
                        anchor: pos,
                        steps: scroll.signum(),
                    });
                }
            } else {
                self.last_pointer_pos = None;
            }

            for button in [PointerButton::Primary, PointerButton::Secondary] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = input.pointer.interact_pos() {
                        let location = self.make_location(pos, view);
                        // Presses only start interactions on the canvas itself
                        if location.is_in_canvas {
                            events.push(InputEvent::PointerDown { location, button });
                        }
                    }
                }
                if input.pointer.button_released(button) {
                    if let Some(pos) = input.pointer.latest_pos() {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos, view),
                            button,
                        });
                    }
                }
            }

            if wants_keyboard {
                return;
            }
            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
