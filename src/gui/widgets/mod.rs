mod map;

pub use map::map_view;

use iced::{
    Element, Length, border,
    widget::{container, row},
};
use iced::widget::container::bordered_box;

/// Sidebar on the left (one fifth), main content on the right.
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(sidebar.into())
            .style(|theme| bordered_box(theme).border(border::width(1)))
            .padding(15)
            .width(Length::FillPortion(1))
            .height(Length::Fill),
        container(main_content.into())
            .padding(10)
            .width(Length::FillPortion(4))
            .height(Length::Fill),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
