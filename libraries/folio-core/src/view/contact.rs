/// Contact section: details and the contact form
use super::Html;
use crate::contact::{ContactForm, FormField, FormStatus};
use crate::filter::CategoryFilter;
use crate::types::PortfolioRecord;

pub(crate) fn contact(
    html: &mut Html,
    record: &PortfolioRecord,
    form: &ContactForm,
    filter: CategoryFilter,
) {
    let personal = &record.personal;

    html.raw("<section id=\"contact\" class=\"section\">\n")
        .element("h2", "section-title", "Get In Touch");

    html.raw("<div class=\"contact-info\">\n")
        .element("h3", "subsection-title", "Contact Information")
        .raw("<div class=\"contact-method\">\n")
        .element("h4", "card-title", "Email")
        .link(&personal.mailto(), "text-link", &personal.email, false)
        .raw("</div>\n<div class=\"contact-method\">\n")
        .element("h4", "card-title", "Phone")
        .link(&personal.tel(), "text-link", &personal.phone, false)
        .raw("</div>\n<div class=\"contact-method\">\n")
        .element("h4", "card-title", "Location")
        .element("span", "meta", &personal.location)
        .raw("</div>\n");

    html.element("h4", "subsection-title", "Connect on Social");
    for social in personal.social_links() {
        html.link(social.url, "btn-circular", social.label, true);
    }
    html.raw("<div class=\"availability-card\">\n")
        .element("h4", "card-title", "Currently Available")
        .element("p", "card-body", &personal.availability)
        .raw("</div>\n</div>\n");

    contact_form(html, form, filter);
    html.raw("</section>\n");
}

/// Submit button label of an idle form
pub(crate) const SEND_LABEL: &str = "Send Message";

/// Submit button label while a message is in flight
pub(crate) const SENDING_LABEL: &str = "Sending...";

fn contact_form(html: &mut Html, form: &ContactForm, filter: CategoryFilter) {
    html.raw("<form class=\"contact-form\" method=\"post\" action=\"/contact#contact\">\n");

    if filter != CategoryFilter::All {
        html.raw("<input type=\"hidden\" name=\"category\" value=\"")
            .text(filter.label())
            .raw("\">\n");
    }

    for field in FormField::ALL {
        html.raw("<label for=\"")
            .raw(field.name())
            .raw("\">")
            .text(field.label())
            .raw("</label>\n");

        match field {
            FormField::Message => {
                html.raw("<textarea id=\"message\" name=\"message\" rows=\"6\" required>")
                    .text(form.value(field))
                    .raw("</textarea>\n");
            }
            _ => {
                let input_type = if field == FormField::Email { "email" } else { "text" };
                html.raw("<input type=\"")
                    .raw(input_type)
                    .raw("\" id=\"")
                    .raw(field.name())
                    .raw("\" name=\"")
                    .raw(field.name())
                    .raw("\" value=\"")
                    .text(form.value(field))
                    .raw("\" required>\n");
            }
        }
    }

    let (disabled, label) = if form.submit_disabled() {
        (" disabled", SENDING_LABEL)
    } else {
        ("", SEND_LABEL)
    };
    html.raw("<button type=\"submit\" class=\"btn btn-primary\"")
        .raw(disabled)
        .raw(">")
        .raw(label)
        .raw("</button>\n");

    if let Some(msg) = form.status().message() {
        let (class, role) = match form.status() {
            FormStatus::Succeeded(_) => ("success", "status"),
            _ => ("error", "alert"),
        };
        html.raw("<p class=\"form-status ")
            .raw(class)
            .raw("\" role=\"")
            .raw(role)
            .raw("\">")
            .text(msg)
            .raw("</p>\n");
    }

    html.raw("</form>\n");
}
