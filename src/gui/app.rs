use iced::{Element, Task};
use tracing::{debug, warn};

use super::{Message, ParentMessage, PortfolioScreen, Screen, ScreenMessage};
use crate::catalog::PROFILE;
use crate::models::Selection;

pub struct PortfolioApp {
    screen: PortfolioScreen,
}

impl PortfolioApp {
    pub fn new(initial: Selection) -> (Self, Task<Message>) {
        (
            Self {
                screen: PortfolioScreen::new(initial),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("{} - {}", PROFILE.name, PROFILE.eyebrow)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Portfolio(ScreenMessage::ScreenMessage(msg)) => {
                self.screen.update(msg).map(Message::Portfolio)
            }
            Message::Portfolio(ScreenMessage::ParentMessage(ParentMessage::OpenLink(url))) => {
                open_link(url)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(Message::Portfolio)
    }

    pub fn screen(&self) -> &PortfolioScreen {
        &self.screen
    }
}

/// Hand `url` to the system browser, or put it on the clipboard when that fails.
fn open_link(url: &'static str) -> Task<Message> {
    match webbrowser::open(url) {
        Ok(()) => {
            debug!(url, "opened link in browser");
            Task::none()
        }
        Err(err) => {
            warn!(url, error = %err, "could not open link, copying it to the clipboard");
            iced::clipboard::write(url.to_string())
        }
    }
}

/// Open the portfolio window with `initial` preselected. Blocks until the window closes.
pub fn run(initial: Selection) -> anyhow::Result<()> {
    iced::application(
        move || PortfolioApp::new(initial),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .window_size((1100.0, 900.0))
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run portfolio window: {}", e))
}
