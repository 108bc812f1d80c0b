//! Non-interactive front-ends: the HTML page export and the terminal listing.

mod html;
mod text;

pub use html::{Chip, PageTemplate, render_page, write_page};
pub use text::{render_json, render_list};
