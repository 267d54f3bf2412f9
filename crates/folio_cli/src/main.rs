//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage.
//! - Print the rendered project grid for the default or a given catalog.
//!
//! Usage: `folio_cli [catalog.json]`

use folio_core::{Catalog, PageController, PageConfig, PageEvent};
use std::process::ExitCode;

const PREVIEW_YEAR: i32 = 2026;

fn main() -> ExitCode {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let catalog = match std::env::args().nth(1) {
        Some(path) => match Catalog::load(path.as_str()) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::default(),
    };

    let mut controller = PageController::new(PageConfig::default(), catalog);
    controller.handle(PageEvent::Load { year: PREVIEW_YEAR });
    println!("projects={}", controller.page().projects_grid.len());
    println!("{}", controller.page().projects_grid_node().to_html());
    ExitCode::SUCCESS
}
