mod app;
mod message;
mod screens;
mod widgets;

pub use app::{PortfolioApp, run};
pub use message::Message;
pub use screens::portfolio::{ParentMessage, PortfolioMessage, PortfolioScreen};
pub use screens::{Screen, ScreenMessage};
