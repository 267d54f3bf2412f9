//! Project grid renderer.

use crate::model::page::Page;
use crate::model::project::Project;
use crate::render::cards::render_project_grid;
use log::debug;

/// Replaces the grid contents with one card per project, in input order.
///
/// Returns the number of rendered cards.
pub fn render_projects(page: &mut Page, projects: &[Project]) -> usize {
    page.projects_grid.clear();
    page.projects_grid.extend(render_project_grid(projects));
    debug!(
        "event=projects_render module=projects status=ok count={}",
        page.projects_grid.len()
    );
    page.projects_grid.len()
}
