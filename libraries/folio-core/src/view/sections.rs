/// About, experience and skills sections
use super::Html;
use crate::types::PortfolioRecord;

pub(crate) fn about(html: &mut Html, record: &PortfolioRecord) {
    html.raw("<section id=\"about\" class=\"section\">\n")
        .element("h2", "section-title", "About Me")
        .element("p", "section-lead", &record.personal.bio);

    html.raw("<div class=\"education\">\n")
        .element("h3", "subsection-title", "Education");
    for edu in &record.education {
        html.raw("<article class=\"card\" data-id=\"")
            .text(edu.id.as_str())
            .raw("\">\n")
            .element("h4", "card-title", &edu.degree)
            .element("p", "card-subtitle", &edu.institution)
            .element("span", "meta", &edu.location)
            .element("span", "meta", &edu.duration)
            .element("span", "score", &edu.score);
        if let Some(status) = &edu.status {
            html.element("span", "badge badge-green", status);
        }
        html.raw("</article>\n");
    }
    html.raw("</div>\n");

    html.raw("<div class=\"patents\">\n")
        .element("h3", "subsection-title", "Patents");
    for patent in &record.patents {
        html.raw("<article class=\"card\" data-id=\"")
            .text(patent.id.as_str())
            .raw("\">\n")
            .element("h4", "card-title", &patent.title)
            .element("span", "meta", &patent.patent_number)
            .element("span", "meta", &patent.publish_date)
            .element("p", "card-body", &patent.description)
            .raw("</article>\n");
    }
    html.raw("</div>\n");

    html.raw("<div class=\"awards\">\n")
        .element("h3", "subsection-title", "Awards & Achievements");
    for award in &record.awards {
        html.raw("<article class=\"card\" data-id=\"")
            .text(award.id.as_str())
            .raw("\">\n")
            .element("h4", "card-title", &award.title)
            .element("p", "card-body", &award.description)
            .element("span", "meta", &award.year)
            .raw("</article>\n");
    }
    html.raw("</div>\n</section>\n");
}

pub(crate) fn experience(html: &mut Html, record: &PortfolioRecord) {
    html.raw("<section id=\"experience\" class=\"section\">\n")
        .element("h2", "section-title", "Experience")
        .raw("<ol class=\"timeline\">\n");

    for exp in &record.experience {
        html.raw("<li class=\"timeline-entry\" data-id=\"")
            .text(exp.id.as_str())
            .raw("\">\n")
            .element("h3", "card-title", &exp.position)
            .element("p", "card-subtitle", &exp.company)
            .element("span", "meta", &exp.location)
            .element("span", "meta", &exp.duration)
            .element("span", &format!("badge {}", exp.kind.css_class()), exp.kind.label())
            .list("achievements", &exp.achievements)
            .raw("</li>\n");
    }
    html.raw("</ol>\n");

    html.raw("<div class=\"section-stats\">\n")
        .element(
            "span",
            "stat",
            &format!("{}+ Positions", record.experience.len()),
        )
        .raw("</div>\n</section>\n");
}

pub(crate) fn skills(html: &mut Html, record: &PortfolioRecord) {
    let stats = record.stats();

    html.raw("<section id=\"skills\" class=\"section\">\n")
        .element("h2", "section-title", "Technical Skills")
        .raw("<div class=\"skills-grid\">\n");

    for group in record.skills.groups() {
        html.raw("<div class=\"skill-group\">\n")
            .element("h3", "card-title", group.title)
            .list("skill-tags", group.skills)
            .raw("</div>\n");
    }
    html.raw("</div>\n");

    html.raw("<div class=\"certifications\">\n")
        .element("h3", "subsection-title", "Certifications");
    for cert in &record.certifications {
        html.raw("<article class=\"card\" data-id=\"")
            .text(cert.id.as_str())
            .raw("\">\n")
            .element("h4", "card-title", &cert.title)
            .element("p", "card-subtitle", &cert.issuer)
            .element("span", "meta", &cert.date)
            .element("p", "card-body", &cert.description)
            .raw("</article>\n");
    }
    html.raw("</div>\n");

    html.raw("<div class=\"section-stats\">\n")
        .element("h3", "subsection-title", "Technical Expertise")
        .element("span", "stat", &format!("{}+ Languages", stats.languages))
        .element("span", "stat", &format!("{}+ Libraries", stats.libraries))
        .element("span", "stat", &format!("{}+ Tools", stats.developer_tools))
        .element(
            "span",
            "stat",
            &format!("{}+ Certifications", stats.certifications),
        )
        .raw("</div>\n</section>\n");
}
