use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_token(&key)?;

        let bindings = [
            (&self.config.key_next_page, "right", Message::NextPage),
            (&self.config.key_prev_page, "left", Message::PreviousPage),
            (&self.config.key_save_bookmark, "ctrl+b", Message::SaveBookmark),
            (&self.config.key_zoom_in, "=", Message::ZoomIn),
            (&self.config.key_zoom_out, "-", Message::ZoomOut),
            (&self.config.key_toggle_theme, "ctrl+t", Message::ToggleTheme),
            (&self.config.key_safe_quit, "q", Message::SafeQuit),
        ];

        bindings
            .into_iter()
            .find(|(raw, fallback, _)| Self::shortcut_matches(raw, fallback, &pressed, modifiers))
            .map(|(_, _, message)| message)
    }

    fn pressed_token(key: &Key) -> Option<String> {
        let token = match key.as_ref() {
            Key::Named(key::Named::Space) => "space",
            Key::Named(key::Named::ArrowRight) => "right",
            Key::Named(key::Named::ArrowLeft) => "left",
            Key::Named(key::Named::ArrowUp) => "up",
            Key::Named(key::Named::ArrowDown) => "down",
            Key::Named(key::Named::PageDown) => "pagedown",
            Key::Named(key::Named::PageUp) => "pageup",
            Key::Named(key::Named::Escape) => "escape",
            Key::Character(ch) => return Some(ch.to_ascii_lowercase()),
            _ => return None,
        };
        Some(token.to_string())
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in Self::shortcut_tokens(&normalized) {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    /// Split on `+` separators while keeping a trailing `+` as the key itself.
    fn shortcut_tokens(normalized: &str) -> Vec<&str> {
        if normalized == "+" {
            return vec!["+"];
        }
        let (body, plus_key) = match normalized.strip_suffix("++") {
            Some(body) => (body, true),
            None => (normalized, false),
        };
        let mut tokens: Vec<&str> = body
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if plus_key {
            tokens.push("+");
        }
        tokens
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("arrowright", "right")
                .replace("arrowleft", "left")
                .replace("page_down", "pagedown")
                .replace("page_up", "pageup")
        }
    }
}
