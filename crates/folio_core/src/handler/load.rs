//! Initial page load.

use crate::handler::projects::render_projects;
use crate::model::page::Page;
use crate::model::project::Project;
use log::info;

/// Fills the footer year, renders the project grid and resets progress.
pub fn on_load(page: &mut Page, projects: &[Project], year: i32) {
    page.year_text = Some(year.to_string());
    page.progress_width = 0.0;
    let cards = render_projects(page, projects);
    info!(
        "event=page_load module=load status=ok cards={} year={}",
        cards, year
    );
}
