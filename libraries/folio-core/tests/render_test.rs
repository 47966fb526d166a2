//! Rendered page tests

use folio_core::{
    record, render_page, CategoryFilter, ContactAck, ContactForm, ContactSubmission, FolioError,
    PageState, ProjectCategory, NAV_ITEMS,
};

fn page(state: &PageState) -> String {
    render_page(record::portfolio(), state)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn every_nav_anchor_has_a_target() {
    let html = page(&PageState::new(2025));
    for item in NAV_ITEMS {
        let target = format!("id=\"{}\"", item.target_id());
        assert!(html.contains(&target), "missing section {}", item.href);
        assert!(html.contains(&format!("href=\"{}\"", item.href)));
    }
}

#[test]
fn all_filter_renders_every_project() {
    let html = page(&PageState::new(2025));
    assert_eq!(count(&html, "class=\"card project"), 3);
    assert!(html.contains("filter-option selected\" aria-current=\"true\">All</a>"));
}

#[test]
fn category_filter_narrows_grid() {
    let state = PageState::new(2025).with_filter(CategoryFilter::Only(ProjectCategory::AiMl));
    let html = page(&state);

    assert_eq!(count(&html, "class=\"card project"), 1);
    assert!(html.contains("Automated Short News Video Production System"));
    assert!(!html.contains("Analysis of Earthquake Data"));
    assert!(html.contains("aria-current=\"true\">AI/ML</a>"));
    // Filter survives a form post
    assert!(html.contains("name=\"category\" value=\"AI/ML\""));
}

#[test]
fn outbound_links() {
    let html = page(&PageState::new(2025));
    let personal = &record::portfolio().personal;

    assert!(html.contains(&format!("href=\"mailto:{}\"", personal.email)));
    assert!(html.contains("href=\"tel:(+91)7674042832\""));
    assert!(html.contains(&format!(
        "href=\"{}\" class=\"btn-circular\" target=\"_blank\" rel=\"noopener noreferrer\"",
        personal.github
    )));
}

#[test]
fn idle_form_is_enabled_and_required() {
    let html = page(&PageState::new(2025));
    assert_eq!(count(&html, " required>"), 4);
    assert!(html.contains("<button type=\"submit\" class=\"btn btn-primary\">Send Message"));
    assert!(!html.contains("form-status"));
}

#[test]
fn submitting_form_disables_button() {
    let mut form =
        ContactForm::with_fields(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"));
    form.begin_submit().unwrap();

    let html = page(&PageState::new(2025).with_form(form));
    assert!(html.contains("class=\"btn btn-primary\" disabled>Sending..."));
}

#[test]
fn succeeded_form_shows_message_and_empty_fields() {
    let mut form =
        ContactForm::with_fields(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"));
    form.begin_submit().unwrap();
    form.finish(Ok(ContactAck::delivered()));

    let html = page(&PageState::new(2025).with_form(form));
    assert!(html.contains("form-status success"));
    assert!(html.contains("Thank you for your message! I&#39;ll get back to you soon."));
    assert!(html.contains("name=\"name\" value=\"\" required>"));
}

#[test]
fn failed_form_keeps_values() {
    let mut form =
        ContactForm::with_fields(ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello"));
    form.begin_submit().unwrap();
    form.finish(Err(FolioError::delivery("down")));

    let html = page(&PageState::new(2025).with_form(form));
    assert!(html.contains("form-status error"));
    assert!(html.contains("Failed to send message. Please try again."));
    assert!(html.contains("name=\"name\" value=\"Jane\" required>"));
    assert!(html.contains(">Hello</textarea>"));
}

#[test]
fn user_input_is_escaped() {
    let form = ContactForm::with_fields(ContactSubmission::new(
        "\"><script>alert(1)</script>",
        "x@y.z",
        "Hi",
        "</textarea>",
    ));

    let html = page(&PageState::new(2025).with_form(form));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;/textarea&gt;</textarea>"));
}

#[test]
fn footer_carries_year_and_counts() {
    let html = page(&PageState::new(2031));
    assert!(html.contains("© 2031 Likith Ganmarapu."));
    assert!(html.contains("3+ Projects"));
    assert!(html.contains("3+ Experiences"));
}

#[test]
fn script_applies_header_classes() {
    let html = page(&PageState::new(2025));
    let script = &html[html.find("<script>").unwrap()..];

    assert!(script.contains("window.scrollY > 50 ? 'header header-scrolled' : 'header'"));
    assert!(script.contains("open ? 'mobile-menu open' : 'mobile-menu'"));
    assert!(script.contains("var menuOpen = false;"));
    assert!(html.contains("<ul id=\"mobile-menu\" class=\"mobile-menu\">"));
}
