pub mod landing_page;
pub mod tracker_page;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    TrackerPage(tracker_page::TrackerPageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view(state).map(Message::LandingPage),
            ScreenData::TrackerPage(screen) => screen.view(state).map(Message::TrackerPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::LandingPage(_), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(never) => match never {},
                ScreenMessage::ParentMessage(landing_page::ParentMessage::Enter) => {
                    state.tracker.enter(&mut state.session);
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::TrackerPage(tracker_page::TrackerPageScreen),
                    )))
                }
            },
            (ScreenData::TrackerPage(page), Message::TrackerPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::TrackerPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(tracker_page::ParentMessage::ReturnToStart) => {
                    state.tracker.return_to_start(&mut state.session);
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::LandingPage(landing_page::LandingPageScreen),
                    )))
                }
            },
            // Stale message from a screen that is no longer shown.
            _ => Task::none(),
        }
    }
}
