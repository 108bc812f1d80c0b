use crate::gui::screens::{ScreenMessage, portfolio::PortfolioScreen};

#[derive(Debug, Clone)]
pub enum Message {
    Portfolio(ScreenMessage<PortfolioScreen>),
}
