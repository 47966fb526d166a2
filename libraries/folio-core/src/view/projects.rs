/// Filterable project gallery
use super::Html;
use crate::filter::{CategoryFilter, ProjectFilter};
use crate::types::PortfolioRecord;
use url::form_urlencoded;

/// Query string selecting `filter`, anchored at the gallery
pub(crate) fn filter_href(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "/#projects".to_string(),
        CategoryFilter::Only(_) => {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("category", filter.label())
                .finish();
            format!("/?{}#projects", query)
        }
    }
}

pub(crate) fn projects(html: &mut Html, record: &PortfolioRecord, selected: CategoryFilter) {
    html.raw("<section id=\"projects\" class=\"section\">\n")
        .element("h2", "section-title", "Featured Projects");

    html.raw("<nav class=\"filter-bar\" aria-label=\"Project categories\">\n");
    for option in CategoryFilter::options() {
        let class = if option == selected {
            "filter-option selected"
        } else {
            "filter-option"
        };
        html.raw("<a href=\"")
            .text(&filter_href(option))
            .raw("\" class=\"")
            .raw(class)
            .raw("\"");
        if option == selected {
            html.raw(" aria-current=\"true\"");
        }
        html.raw(">").text(option.label()).raw("</a>\n");
    }
    html.raw("</nav>\n");

    html.raw("<div class=\"project-grid\">\n");
    for project in ProjectFilter::new(selected).apply(&record.projects) {
        let card_class = if project.featured {
            "card project featured"
        } else {
            "card project"
        };
        html.raw("<article class=\"")
            .raw(card_class)
            .raw("\" data-id=\"")
            .text(project.id.as_str())
            .raw("\" data-category=\"")
            .text(project.category.label())
            .raw("\">\n")
            .element(
                "span",
                &format!("badge {}", project.category.css_class()),
                project.category.label(),
            )
            .element("h3", "card-title", &project.title)
            .element("span", "meta", &project.duration)
            .element("p", "card-body", &project.description)
            .list("tech-tags", &project.technologies)
            .list("achievements", &project.achievements)
            .raw("</article>\n");
    }
    html.raw("</div>\n</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectCategory;

    #[test]
    fn test_filter_href() {
        assert_eq!(filter_href(CategoryFilter::All), "/#projects");
        assert_eq!(
            filter_href(CategoryFilter::Only(ProjectCategory::AiMl)),
            "/?category=AI%2FML#projects"
        );
        assert_eq!(
            filter_href(CategoryFilter::Only(ProjectCategory::DataScience)),
            "/?category=Data+Science#projects"
        );
    }
}
