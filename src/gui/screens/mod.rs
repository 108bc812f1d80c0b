pub mod portfolio;

use iced::{Element, Task};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

/// A page of the application.
///
/// Messages a screen cannot handle itself (opening links, for instance) are
/// sent up as `ParentMessage`s for the application to act on.
pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>>;
}
