use super::messages::Message;
use super::state::{App, CONTROL_BAR_HEIGHT_PX, FOOTER_HEIGHT_PX, PAGE_AREA_PADDING_PX};
use crate::config::ThemeMode;
use folio_core::FlipDirection;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, horizontal_space, image, mouse_area, row, text};
use iced::{ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let prev_button = if self.reader.can_turn(FlipDirection::Backward) {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };

        let next_button = if self.reader.can_turn(FlipDirection::Forward) {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };

        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let zoom_label = format!("{:.0}%", self.reader.document().zoom() * 100.0);

        let controls = row![
            prev_button,
            next_button,
            button("-").on_press(Message::ZoomOut),
            text(zoom_label),
            button("+").on_press(Message::ZoomIn),
            button(theme_label).on_press(Message::ToggleTheme),
            button("Bookmark").on_press(Message::SaveBookmark),
            horizontal_space(),
            text(self.goals.status_label())
        ]
        .spacing(10)
        .padding([0.0, PAGE_AREA_PADDING_PX])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fixed(CONTROL_BAR_HEIGHT_PX));

        let (width, height) = self.page_area();
        let page: Element<'_, Message> = match &self.reader.frame {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Fill)
                .into(),
            None => container(text("Nothing to display"))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let page_area = mouse_area(
            container(page)
                .width(Length::Fixed(width as f32))
                .height(Length::Fixed(height as f32)),
        )
        .on_move(Message::PointerMoved)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_scroll(Message::WheelScrolled);

        let notice = self.notice.clone().unwrap_or_default();
        let footer = row![
            text(self.reader.document().footer_label()),
            horizontal_space(),
            text(notice)
        ]
        .padding([0.0, PAGE_AREA_PADDING_PX])
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT_PX));

        column![
            controls,
            container(page_area).padding(PAGE_AREA_PADDING_PX),
            footer
        ]
        .into()
    }
}
