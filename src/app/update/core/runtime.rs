use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveBookmark => {
                self.persist_bookmark();
                Task::none()
            }
            Effect::RefreshFrame => {
                self.reader.refresh_frame();
                Task::none()
            }
            Effect::QuitSafely => {
                self.persist_bookmark();
                info!("Safe quit requested");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::CloseRequested) => Some(Message::SafeQuit),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::WindowCursorMoved(position))
        }
        // Releases outside the page area still end a drag.
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
