/// Header, hero, footer and the client script
use super::contact::{SENDING_LABEL, SEND_LABEL};
use super::Html;
use crate::shell::{HeaderState, NAV_ITEMS, SCROLL_THRESHOLD};
use crate::types::PortfolioRecord;

pub(crate) fn header(html: &mut Html, record: &PortfolioRecord, state: &HeaderState) {
    let personal = &record.personal;

    html.raw("<header id=\"top\" class=\"")
        .raw(state.css_class())
        .raw("\">\n<nav class=\"nav\">\n");

    html.raw("<a href=\"#top\" class=\"brand\">")
        .text(&personal.name)
        .raw("</a>\n");
    if personal.is_available() {
        html.raw("<span class=\"availability-dot\" title=\"")
            .text(&personal.availability)
            .raw("\"></span>\n");
    }

    html.raw("<ul class=\"nav-links\">\n");
    for item in NAV_ITEMS {
        html.raw("<li>").link(item.href, "nav-link", item.name, false).raw("</li>\n");
    }
    html.raw("</ul>\n");
    html.link(&personal.mailto(), "btn btn-primary", "Contact Me", false);

    html.raw("<button type=\"button\" class=\"menu-toggle\" aria-expanded=\"")
        .raw(if state.menu_open() { "true" } else { "false" })
        .raw("\" aria-controls=\"mobile-menu\">Menu</button>\n");

    html.raw("<ul id=\"mobile-menu\" class=\"")
        .raw(state.menu_class())
        .raw("\">\n");
    for item in NAV_ITEMS {
        html.raw("<li>").link(item.href, "mobile-link", item.name, false).raw("</li>\n");
    }
    html.raw("</ul>\n</nav>\n</header>\n");
}

pub(crate) fn hero(html: &mut Html, record: &PortfolioRecord) {
    let personal = &record.personal;

    html.raw("<section id=\"hero\" class=\"hero\">\n");
    html.element("h1", "hero-name", &personal.name)
        .element("h2", "hero-title", &personal.title)
        .element("p", "hero-bio", &personal.bio);

    html.raw("<div class=\"hero-meta\">\n")
        .element("span", "location", &personal.location)
        .element("span", "availability", &personal.availability)
        .raw("</div>\n");

    html.raw("<div class=\"hero-actions\">\n")
        .link(&personal.mailto(), "btn btn-primary", "Get in Touch", false)
        .link("#projects", "btn btn-secondary", "View Projects", false)
        .raw("</div>\n");

    html.raw("<div class=\"hero-social\">\n");
    for social in personal.social_links() {
        html.link(social.url, "btn-circular", social.label, true);
    }
    html.link(&personal.mailto(), "btn-circular", "Email", false)
        .link(&personal.tel(), "btn-circular", "Phone", false)
        .raw("</div>\n");

    html.link("#about", "scroll-hint", "Scroll to explore", false)
        .raw("</section>\n");
}

pub(crate) fn footer(html: &mut Html, record: &PortfolioRecord, year: i32) {
    let personal = &record.personal;
    let stats = record.stats();

    html.raw("<footer class=\"footer\">\n<div class=\"footer-grid\">\n");

    html.raw("<div class=\"footer-about\">\n")
        .element("h3", "footer-name", &personal.name)
        .element("p", "footer-title", &personal.title)
        .raw("<div class=\"footer-stats\">\n")
        .element("span", "stat", &format!("{}+ Projects", stats.projects))
        .element("span", "stat", &format!("{}+ Experiences", stats.experiences))
        .raw("</div>\n</div>\n");

    html.raw("<div class=\"footer-links\">\n")
        .element("h4", "footer-heading", "Quick Links")
        .raw("<ul>\n");
    for item in NAV_ITEMS {
        html.raw("<li>").link(item.href, "footer-link", item.name, false).raw("</li>\n");
    }
    html.raw("</ul>\n</div>\n");

    html.raw("<div class=\"footer-contact\">\n")
        .element("h4", "footer-heading", "Get In Touch")
        .link(&personal.mailto(), "footer-link", &personal.email, false)
        .link(&personal.tel(), "footer-link", &personal.phone, false)
        .element("span", "footer-location", &personal.location)
        .element("h4", "footer-heading", "Connect");
    for social in personal.social_links() {
        html.link(social.url, "btn-circular", social.label, true);
    }
    html.raw("</div>\n</div>\n");

    html.raw("<div class=\"footer-bottom\">\n")
        .element(
            "p",
            "copyright",
            &format!("© {} {}. All rights reserved.", year, personal.name),
        )
        .link("#top", "back-to-top", "Back to top", false)
        .raw("</div>\n</footer>\n");
}

/// Header classes at the top of the page and past the scroll threshold
fn scroll_classes() -> (&'static str, &'static str) {
    let mut header = HeaderState::default();
    let top = header.css_class();
    header.on_scroll(SCROLL_THRESHOLD + 1);
    (top, header.css_class())
}

/// Mobile menu classes when closed and when open
fn menu_classes() -> (&'static str, &'static str) {
    let mut header = HeaderState::default();
    let closed = header.menu_class();
    header.toggle_menu();
    (closed, header.menu_class())
}

/// Client script: scrolled header style, menu toggle, smooth scrolling
/// and the contact form's in-flight lock
pub(crate) fn script(html: &mut Html, state: &HeaderState) {
    let (top, scrolled) = scroll_classes();
    let (closed, open) = menu_classes();

    html.raw("<script>\n")
        .raw("(function () {\n")
        .raw("  var header = document.querySelector('header');\n")
        .raw("  var menu = document.getElementById('mobile-menu');\n")
        .raw("  var toggle = document.querySelector('.menu-toggle');\n")
        .raw("  var menuOpen = ")
        .raw(if state.menu_open() { "true" } else { "false" })
        .raw(";\n")
        .raw("  function onScroll() {\n")
        .raw("    header.className = window.scrollY > ")
        .raw(&SCROLL_THRESHOLD.to_string())
        .raw(" ? '")
        .raw(scrolled)
        .raw("' : '")
        .raw(top)
        .raw("';\n  }\n")
        .raw("  function setMenu(open) {\n")
        .raw("    menuOpen = open;\n")
        .raw("    menu.className = open ? '")
        .raw(open)
        .raw("' : '")
        .raw(closed)
        .raw("';\n")
        .raw("    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');\n")
        .raw("  }\n")
        .raw("  window.addEventListener('scroll', onScroll);\n")
        .raw("  onScroll();\n")
        .raw("  toggle.addEventListener('click', function () { setMenu(!menuOpen); });\n")
        .raw("  document.querySelectorAll('a[href^=\"#\"]').forEach(function (link) {\n")
        .raw("    link.addEventListener('click', function (event) {\n")
        .raw("      var target = document.querySelector(link.getAttribute('href'));\n")
        .raw("      if (!target) { return; }\n")
        .raw("      event.preventDefault();\n")
        .raw("      target.scrollIntoView({ behavior: 'smooth' });\n")
        .raw("      setMenu(false);\n")
        .raw("    });\n")
        .raw("  });\n")
        .raw("  var form = document.querySelector('.contact-form');\n")
        .raw("  if (form) {\n")
        .raw("    var submit = form.querySelector('button[type=\"submit\"]');\n")
        .raw("    form.addEventListener('submit', function (event) {\n")
        .raw("      if (submit.disabled) { event.preventDefault(); return; }\n")
        .raw("      submit.disabled = true;\n")
        .raw("      submit.textContent = '")
        .raw(SENDING_LABEL)
        .raw("';\n")
        .raw("    });\n")
        .raw("    window.addEventListener('pageshow', function (event) {\n")
        .raw("      if (!event.persisted) { return; }\n")
        .raw("      submit.disabled = false;\n")
        .raw("      submit.textContent = '")
        .raw(SEND_LABEL)
        .raw("';\n")
        .raw("    });\n")
        .raw("  }\n")
        .raw("})();\n")
        .raw("</script>\n");
}
