use iced::{
    Color, Element, Length, Theme, border,
    widget::{Row, button, column, container, container::Style, text},
};
use iced_widget::container::bordered_box;

/// Visual weight of a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Strong,
    Soft,
}

impl Tone {
    fn style(self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let palette = theme.palette();
            let style = bordered_box(theme).border(border::rounded(12).width(1));
            match self {
                Tone::Strong => style.background(palette.primary.scale_alpha(0.3)),
                // darker than the page background
                Tone::Soft => {
                    let mut color_rgba = palette.background.into_rgba8();
                    color_rgba[0] /= 2;
                    color_rgba[1] /= 2;
                    color_rgba[2] /= 2;
                    style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
                }
            }
        }
    }
}

pub fn pill<'a, Message: 'a>(label: &'a str, tone: Tone) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 10])
        .style(tone.style())
        .into()
}

pub fn pill_row<'a, Message: 'a>(
    labels: impl IntoIterator<Item = &'a str>,
    tone: Tone,
) -> Element<'a, Message> {
    Row::with_children(labels.into_iter().map(|label| pill(label, tone)))
        .spacing(8)
        .wrap()
        .into()
}

/// Filter button; the active one is drawn with the primary style.
pub fn chip<'a, Message: Clone + 'a>(label: &'a str, active: bool, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(14))
        .style(if active { button::primary } else { button::secondary })
        .padding([6, 14])
        .on_press(on_press)
        .into()
}

pub fn link<'a, Message: Clone + 'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(14))
        .style(button::text)
        .padding(0)
        .on_press(on_press)
        .into()
}

pub fn section<'a, Message: 'a>(
    title: &'a str,
    subtitle: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        text(title).size(26),
        text(subtitle).size(15),
        content.into(),
    ]
    .spacing(12)
    .width(Length::Fill)
    .into()
}

pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fixed(320.0))
        .style(bordered_box)
        .into()
}
