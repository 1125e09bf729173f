use iced::{
    Color, Element, Length, Task,
    widget::{button, column, progress_bar, row, text},
};

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{layout, map_view},
    },
    models::VisitStatus,
};

/// Sidebar controls next to the world map.
#[derive(Debug, Clone)]
pub struct TrackerPageScreen;

#[derive(Debug, Clone)]
pub enum TrackerPageMessage {
    PickRandom,
    Mark(VisitStatus),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    ReturnToStart,
}

const VISITED_COLOR: Color = Color {
    r: 0.18,
    g: 0.8,
    b: 0.44,
    a: 1.0,
};

const NOT_VISITED_COLOR: Color = Color {
    r: 0.95,
    g: 0.61,
    b: 0.07,
    a: 1.0,
};

const ERROR_COLOR: Color = Color {
    r: 0.9,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

impl Screen for TrackerPageScreen {
    type Message = TrackerPageMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let tracker = &state.tracker;

        let mut sidebar = column![
            button("Back to start")
                .on_press(ScreenMessage::ParentMessage(ParentMessage::ReturnToStart)),
            text("Controls").size(22),
            button("Pick a random country")
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(TrackerPageMessage::PickRandom)),
        ]
        .spacing(12);

        if let Some(country) = state.session.selected() {
            let status = tracker.status_of(country);
            let status_line = match status {
                VisitStatus::Visited => text("Status: VISITED").color(VISITED_COLOR),
                VisitStatus::NotVisited => text("Status: NOT VISITED").color(NOT_VISITED_COLOR),
            };
            sidebar = sidebar
                .push(text(country).size(24))
                .push(status_line)
                .push(
                    row![
                        button("Mark visited").on_press(ScreenMessage::ScreenMessage(
                            TrackerPageMessage::Mark(VisitStatus::Visited)
                        )),
                        button("Mark not visited").on_press(ScreenMessage::ScreenMessage(
                            TrackerPageMessage::Mark(VisitStatus::NotVisited)
                        )),
                    ]
                    .spacing(8),
                );
        }

        let progress = tracker.progress();
        sidebar = sidebar
            .push(text(format!("Progress: {}.", progress)))
            .push(progress_bar(0.0..=1.0, progress.ratio()));

        if let Some(error) = &state.last_error {
            sidebar = sidebar.push(text(error.as_str()).color(ERROR_COLOR));
        }

        let spec = tracker.render(&state.dataset, &state.session);
        let main_content = column![
            text("World Map - Visit Tracker").size(28),
            map_view(&state.dataset, spec),
        ]
        .spacing(10);

        layout(sidebar, main_content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            TrackerPageMessage::PickRandom => {
                state.tracker.pick_random(&mut state.session, &mut state.rng);
                state.last_error = None;
            }
            TrackerPageMessage::Mark(status) => {
                state.last_error = state
                    .tracker
                    .mark(&state.session, status)
                    .err()
                    .map(|e| e.to_string());
            }
        }
        Task::none()
    }
}
