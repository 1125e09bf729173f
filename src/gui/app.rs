use iced::{Element, Task};

use super::screens::{Screen, ScreenData, ScreenMessage, landing_page::LandingPageScreen};
use super::{AppState, Message};

pub struct VisitMapApp {
    state: AppState,
    screen: ScreenData,
}

impl VisitMapApp {
    pub fn new(state: AppState) -> (Self, Task<Message>) {
        (
            Self {
                state,
                screen: ScreenData::LandingPage(LandingPageScreen),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let progress = self.state.tracker.progress();
        format!("Visited Countries Tracker ({})", progress)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_root)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(unwrap_root)
    }
}

fn unwrap_root(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
