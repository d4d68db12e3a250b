/// Physical keys the demo reacts to.
///
/// Anything outside this set is dropped at the translation boundary in the
/// application, so layers never see keys they have no binding for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ControlLeft,
    BracketLeft,
    BracketRight,
}

/// A window or input event with its minimal payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The user asked to close the window.
    WindowClose,
    /// The window was resized to the given dimensions in pixels.
    WindowResize { width: u32, height: u32 },
    /// A key went down.
    KeyPressed { key: Key },
    /// A key came back up.
    KeyReleased { key: Key },
    /// The cursor moved to the given window coordinates.
    MouseMoved { x: f32, y: f32 },
}

/// Discriminant of an [`Event`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    WindowClose,
    WindowResize,
    KeyPressed,
    KeyReleased,
    MouseMoved,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::WindowClose => EventKind::WindowClose,
            Event::WindowResize { .. } => EventKind::WindowResize,
            Event::KeyPressed { .. } => EventKind::KeyPressed,
            Event::KeyReleased { .. } => EventKind::KeyReleased,
            Event::MouseMoved { .. } => EventKind::MouseMoved,
        }
    }
}

/// Per-kind event handling for a layer.
///
/// Each handler defaults to a no-op; a layer overrides the kinds it cares
/// about and routes everything through [`EventHandler::handle`].
pub trait EventHandler {
    fn on_window_close(&mut self) {}
    fn on_window_resize(&mut self, _width: u32, _height: u32) {}
    fn on_key_pressed(&mut self, _key: Key) {}
    fn on_key_released(&mut self, _key: Key) {}
    fn on_mouse_moved(&mut self, _x: f32, _y: f32) {}

    /// Route an event to the handler for its kind.
    fn handle(&mut self, event: &Event) {
        match *event {
            Event::WindowClose => self.on_window_close(),
            Event::WindowResize { width, height } => self.on_window_resize(width, height),
            Event::KeyPressed { key } => self.on_key_pressed(key),
            Event::KeyReleased { key } => self.on_key_released(key),
            Event::MouseMoved { x, y } => self.on_mouse_moved(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<EventKind>,
        last_key: Option<Key>,
        last_size: Option<(u32, u32)>,
    }

    impl EventHandler for Recorder {
        fn on_window_close(&mut self) {
            self.seen.push(EventKind::WindowClose);
        }
        fn on_window_resize(&mut self, width: u32, height: u32) {
            self.seen.push(EventKind::WindowResize);
            self.last_size = Some((width, height));
        }
        fn on_key_pressed(&mut self, key: Key) {
            self.seen.push(EventKind::KeyPressed);
            self.last_key = Some(key);
        }
        fn on_key_released(&mut self, key: Key) {
            self.seen.push(EventKind::KeyReleased);
            self.last_key = Some(key);
        }
        fn on_mouse_moved(&mut self, _x: f32, _y: f32) {
            self.seen.push(EventKind::MouseMoved);
        }
    }

    #[test]
    fn dispatch_routes_every_variant() {
        let events = [
            Event::WindowClose,
            Event::WindowResize {
                width: 800,
                height: 600,
            },
            Event::KeyPressed { key: Key::W },
            Event::KeyReleased { key: Key::Space },
            Event::MouseMoved { x: 4.0, y: 2.0 },
        ];

        let mut recorder = Recorder::default();
        for event in &events {
            recorder.handle(event);
        }

        let kinds: Vec<EventKind> = events.iter().map(Event::kind).collect();
        assert_eq!(recorder.seen, kinds);
        assert_eq!(recorder.last_key, Some(Key::Space));
        assert_eq!(recorder.last_size, Some((800, 600)));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Event::WindowClose.kind(), EventKind::WindowClose);
        assert_eq!(
            Event::KeyPressed { key: Key::A }.kind(),
            EventKind::KeyPressed
        );
        assert_eq!(
            Event::MouseMoved { x: 0.0, y: 0.0 }.kind(),
            EventKind::MouseMoved
        );
    }

    #[test]
    fn unhandled_kinds_are_noops() {
        struct CloseOnly(bool);
        impl EventHandler for CloseOnly {
            fn on_window_close(&mut self) {
                self.0 = true;
            }
        }

        let mut handler = CloseOnly(false);
        handler.handle(&Event::MouseMoved { x: 1.0, y: 1.0 });
        assert!(!handler.0);
        handler.handle(&Event::WindowClose);
        assert!(handler.0);
    }
}
