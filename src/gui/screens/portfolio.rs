use std::path::PathBuf;

use iced::{
    Element, Length, Task,
    widget::{Column, Row, button, column, container, row, scrollable, text},
};
use rfd::AsyncFileDialog;
use tracing::warn;

use crate::{
    catalog::{self, CONTACT, PROFILE, SKILLS_PRIMARY, SKILLS_SECONDARY, TIMELINE, copy},
    filter::FilterState,
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{Tone, card, chip, link, pill_row, section},
    },
    models::{Project, Selection},
    render,
};

type Msg = ScreenMessage<PortfolioScreen>;

/// The single page: hero, skills, filterable projects, timeline and contact.
#[derive(Debug, Clone)]
pub struct PortfolioScreen {
    filter: FilterState<'static>,
    year: i32,
    export_status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PortfolioMessage {
    SelectTech(Selection),
    ExportPage,
    ExportTo(Option<PathBuf>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenLink(&'static str),
}

impl Default for PortfolioScreen {
    fn default() -> Self {
        Self::new(Selection::All)
    }
}

impl PortfolioScreen {
    pub fn new(initial: Selection) -> Self {
        Self {
            filter: FilterState::default().with_selection(initial),
            year: catalog::current_year(),
            export_status: None,
        }
    }

    pub fn filter(&self) -> &FilterState<'static> {
        &self.filter
    }

    pub fn export_status(&self) -> Option<&str> {
        self.export_status.as_deref()
    }

    fn hero(&self) -> Element<'_, Msg> {
        column![
            text(PROFILE.eyebrow).size(14),
            text(PROFILE.name).size(40),
            text(format!(
                "{}{}{}",
                PROFILE.subtitle_lead, PROFILE.subtitle_stack, PROFILE.subtitle_tail
            ))
            .size(17),
            button(text(copy::GITHUB_PROFILE))
                .style(button::primary)
                .on_press(open(PROFILE.github_url)),
        ]
        .spacing(12)
        .into()
    }

    fn skills(&self) -> Element<'_, Msg> {
        let groups = row![
            column![
                text(SKILLS_PRIMARY.heading).size(18),
                pill_row(SKILLS_PRIMARY.skills.iter().copied(), Tone::Strong),
            ]
            .spacing(8)
            .width(Length::FillPortion(1)),
            column![
                text(SKILLS_SECONDARY.heading).size(18),
                pill_row(SKILLS_SECONDARY.skills.iter().copied(), Tone::Soft),
            ]
            .spacing(8)
            .width(Length::FillPortion(1)),
        ]
        .spacing(24);

        section(copy::SKILLS_TITLE, copy::SKILLS_SUBTITLE, groups)
    }

    fn projects(&self) -> Element<'_, Msg> {
        let chips = Row::with_children(Selection::CHIPS.into_iter().map(|selection| {
            chip(
                selection.label(),
                self.filter.is_active(selection),
                Msg::ScreenMessage(PortfolioMessage::SelectTech(selection)),
            )
        }))
        .spacing(8)
        .wrap();

        let mut toolbar = column![
            row![
                text(copy::FILTER_LABEL).size(14),
                chips,
            ]
            .spacing(12),
            button(text("Export HTML").size(14))
                .style(button::secondary)
                .on_press(Msg::ScreenMessage(PortfolioMessage::ExportPage)),
        ]
        .spacing(10);
        if let Some(status) = &self.export_status {
            toolbar = toolbar.push(text(status.as_str()).size(13));
        }

        let grid: Element<'_, Msg> = match self.filter.empty_message() {
            Some(message) => text(message).into(),
            None => Row::with_children(self.filter.visible().into_iter().map(project_card))
                .spacing(16)
                .wrap()
                .into(),
        };

        section(
            copy::PROJECTS_TITLE,
            copy::PROJECTS_SUBTITLE,
            column![toolbar, grid].spacing(20),
        )
    }

    fn timeline(&self) -> Element<'_, Msg> {
        let entries = Column::with_children(TIMELINE.iter().map(|entry| {
            column![text(entry.heading).size(18), text(entry.body).size(14)]
                .spacing(4)
                .into()
        }))
        .spacing(16);

        section(copy::LEARNING_TITLE, copy::LEARNING_SUBTITLE, entries)
    }

    fn contact(&self) -> Element<'_, Msg> {
        let rows = column![
            row![text("Email:").size(14), link(CONTACT.email, open(CONTACT.mailto))].spacing(8),
            row![
                text("LinkedIn:").size(14),
                link(CONTACT.linkedin_url, open(CONTACT.linkedin_url)),
            ]
            .spacing(8),
        ]
        .spacing(8);

        section(copy::CONTACT_TITLE, CONTACT.headline, rows)
    }
}

fn open(url: &'static str) -> Msg {
    Msg::ParentMessage(ParentMessage::OpenLink(url))
}

fn project_card(project: &'static Project) -> Element<'static, Msg> {
    let highlights = Column::with_children(
        project
            .highlights
            .iter()
            .map(|highlight| text(format!("• {}", highlight)).size(14).into()),
    )
    .spacing(4);

    let mut body = column![
        text(project.title).size(20),
        text(project.meta()).size(13),
        text(project.description).size(14),
        pill_row(project.tech_stack.iter().map(|tech| tech.label()), Tone::Soft),
        highlights,
    ]
    .spacing(10);

    if project.has_links() {
        let mut links = Row::new().spacing(16);
        if let Some(url) = project.github_url {
            links = links.push(link(copy::VIEW_CODE, open(url)));
        }
        if let Some(url) = project.live_url {
            links = links.push(link(copy::LIVE_DEMO, open(url)));
        }
        body = body.push(links);
    }

    card(body)
}

impl Screen for PortfolioScreen {
    type Message = PortfolioMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            self.hero(),
            self.skills(),
            self.projects(),
            self.timeline(),
            self.contact(),
            text(catalog::footer(self.year)).size(12),
        ]
        .spacing(48)
        .padding(32)
        .max_width(1040);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            PortfolioMessage::SelectTech(selection) => {
                self.filter.select(selection);
                Task::none()
            }
            PortfolioMessage::ExportPage => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Export Portfolio Page")
                    .add_filter("HTML page", &["html"])
                    .set_file_name("portfolio.html")
                    .save_file(),
                |handle| {
                    ScreenMessage::ScreenMessage(PortfolioMessage::ExportTo(
                        handle.map(|data| data.path().to_path_buf()),
                    ))
                },
            ),
            PortfolioMessage::ExportTo(None) => Task::none(),
            PortfolioMessage::ExportTo(Some(path)) => {
                let status = match render::write_page(&path, &self.filter, self.year) {
                    Ok(()) => format!("Saved {}", path.display()),
                    Err(err) => {
                        warn!(error = %err, "page export failed");
                        format!("Export failed: {:#}", err)
                    }
                };
                self.export_status = Some(status);
                Task::none()
            }
        }
    }
}
