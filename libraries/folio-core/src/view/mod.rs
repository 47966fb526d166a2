//! HTML rendering of the portfolio page.
//!
//! Every section is a pure function of the portfolio record plus the
//! small amount of view state in [`PageState`]. All interpolated text
//! goes through [`escape`].

mod contact;
mod layout;
mod projects;
mod sections;

use crate::contact::ContactForm;
use crate::filter::CategoryFilter;
use crate::shell::HeaderState;
use crate::types::PortfolioRecord;
use chrono::Datelike;

/// View state the page is rendered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub header: HeaderState,
    pub filter: CategoryFilter,
    pub form: ContactForm,

    /// Year printed in the footer copyright line
    pub year: i32,
}

impl PageState {
    /// Fresh page: filter on "All", empty idle form
    pub fn new(year: i32) -> Self {
        Self {
            header: HeaderState::default(),
            filter: CategoryFilter::All,
            form: ContactForm::new(),
            year,
        }
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(chrono::Utc::now().year())
    }
}

/// Render the whole page: header, main sections, footer
pub fn render_page(record: &PortfolioRecord, state: &PageState) -> String {
    let mut html = Html::new();

    html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")
        .raw("<meta charset=\"utf-8\">\n")
        .raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")
        .raw("<title>")
        .text(&record.personal.name)
        .raw(" | ")
        .text(&record.personal.title)
        .raw("</title>\n</head>\n<body>\n");

    layout::header(&mut html, record, &state.header);

    html.raw("<main>\n");
    layout::hero(&mut html, record);
    sections::about(&mut html, record);
    sections::experience(&mut html, record);
    projects::projects(&mut html, record, state.filter);
    sections::skills(&mut html, record);
    contact::contact(&mut html, record, &state.form, state.filter);
    html.raw("</main>\n");

    layout::footer(&mut html, record, state.year);
    layout::script(&mut html, &state.header);

    html.raw("</body>\n</html>\n");
    html.into_string()
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Append-only HTML buffer
pub(crate) struct Html(String);

impl Html {
    pub(crate) fn new() -> Self {
        Self(String::with_capacity(32 * 1024))
    }

    /// Append trusted markup
    pub(crate) fn raw(&mut self, markup: &str) -> &mut Self {
        self.0.push_str(markup);
        self
    }

    /// Append escaped text
    pub(crate) fn text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&escape(text));
        self
    }

    /// `<tag class="class">text</tag>`
    pub(crate) fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.raw("<")
            .raw(tag)
            .raw(" class=\"")
            .raw(class)
            .raw("\">")
            .text(text)
            .raw("</")
            .raw(tag)
            .raw(">\n")
    }

    /// `<a href="href" ...>text</a>`, external links open in a new context
    pub(crate) fn link(
        &mut self,
        href: &str,
        class: &str,
        text: &str,
        external: bool,
    ) -> &mut Self {
        self.raw("<a href=\"")
            .text(href)
            .raw("\" class=\"")
            .raw(class)
            .raw("\"");
        if external {
            self.raw(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }
        self.raw(">").text(text).raw("</a>\n")
    }

    /// `<ul class="class">` of escaped items
    pub(crate) fn list(&mut self, class: &str, items: &[String]) -> &mut Self {
        self.raw("<ul class=\"").raw(class).raw("\">\n");
        for item in items {
            self.raw("<li>").text(item).raw("</li>\n");
        }
        self.raw("</ul>\n")
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}
