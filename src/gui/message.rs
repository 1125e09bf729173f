use crate::gui::screens::{
    ScreenData, ScreenMessage, landing_page::LandingPageScreen, tracker_page::TrackerPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    TrackerPage(ScreenMessage<TrackerPageScreen>),
    ChangeScreen(ScreenData),
}
