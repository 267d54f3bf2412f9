//! Project card fragments.

use crate::model::project::Project;
use crate::render::node::Node;

pub const CARD_CLASS: &str = "project-card";
pub const TAG_CLASS: &str = "project-tag";
const DEMO_LABEL: &str = "Live Demo";
const CODE_LABEL: &str = "View Code";

/// Builds one self-contained card for `project`.
///
/// Layout: image, then a content block with title, description, tag list
/// (one span per tag, declared order) and the demo/code action links.
pub fn render_project_card(project: &Project) -> Node {
    let tags = project
        .tags
        .iter()
        .map(|tag| Node::element("span").class(TAG_CLASS).with_text(tag.as_str()));

    let content = Node::element("div")
        .class("project-content")
        .child(
            Node::element("h3")
                .class("project-title")
                .with_text(project.title.as_str()),
        )
        .child(
            Node::element("p")
                .class("project-description")
                .with_text(project.description.as_str()),
        )
        .child(Node::element("div").class("project-tags").children(tags))
        .child(
            Node::element("div")
                .class("project-links")
                .child(
                    Node::element("a")
                        .attr("href", project.demo_link.as_str())
                        .class("project-link")
                        .with_text(DEMO_LABEL),
                )
                .child(
                    Node::element("a")
                        .attr("href", project.code_link.as_str())
                        .class("project-link outline")
                        .with_text(CODE_LABEL),
                ),
        );

    Node::element("div")
        .class(CARD_CLASS)
        .child(
            Node::element("img")
                .attr("src", project.image.as_str())
                .attr("alt", project.title.as_str())
                .class("project-img"),
        )
        .child(content)
}

/// Builds the cards for `projects` in input order.
pub fn render_project_grid(projects: &[Project]) -> Vec<Node> {
    projects.iter().map(render_project_card).collect()
}
