use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Color, Element, Length, Task,
    widget::{button, column, container, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Start screen: a single heart button leading into the tracker.
#[derive(Debug, Clone)]
pub struct LandingPageScreen;

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Enter,
}

impl Screen for LandingPageScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let heart = button(text("\u{2764}").size(200).color(Color::from_rgb8(0xe0, 0x10, 0x20)))
            .style(button::text)
            .on_press(ScreenMessage::ParentMessage(ParentMessage::Enter));

        let content = column![
            heart,
            text("CLICK THE HEART TO ENTER")
                .size(36)
                .color(Color::from_rgba(1.0, 1.0, 1.0, 0.8)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style::default().background(Color::BLACK))
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
