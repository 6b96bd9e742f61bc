use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use folio_core::FlipDirection;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextPage => self.handle_page_turn(FlipDirection::Forward, &mut effects),
            Message::PreviousPage => self.handle_page_turn(FlipDirection::Backward, &mut effects),
            Message::ZoomIn => self.handle_zoom_step(1.0, &mut effects),
            Message::ZoomOut => self.handle_zoom_step(-1.0, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::SaveBookmark => self.handle_save_bookmark(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::PointerMoved(position) => self.handle_pointer_moved(position, &mut effects),
            Message::WindowCursorMoved(position) => {
                self.handle_window_cursor_moved(position, &mut effects)
            }
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerReleased => self.handle_pointer_released(&mut effects),
            Message::WheelScrolled(delta) => self.handle_wheel_scrolled(delta, &mut effects),
            Message::FlipTick(now) => self.handle_flip_tick(now, &mut effects),
            Message::ReadingTick(_) => self.handle_reading_tick(),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }
}
