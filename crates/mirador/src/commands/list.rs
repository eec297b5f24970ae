use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use mirador_core::{Rect, Surface, SurfaceKind, SurfaceRegistry, WindowProvider};

/// Lists all surfaces on the current platform, back to front.
#[cfg(windows)]
pub fn execute(include_status_bar: bool) {
    let registry = mirador_windows::WindowsSurfaceRegistry::new();
    print_surfaces(&registry, include_status_bar);
}

/// There is no surface registry implementation for this platform.
#[cfg(not(windows))]
pub fn execute(_include_status_bar: bool) {
    eprintln!("Error: no surface registry implementation for this platform.");
    std::process::exit(1);
}

// Only instantiated on platforms with a registry implementation.
#[cfg_attr(not(windows), allow(dead_code))]
fn print_surfaces<R: SurfaceRegistry>(registry: &R, include_status_bar: bool) {
    let provider = WindowProvider::with_all_surfaces(registry, include_status_bar);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Handle"),
            Cell::new("Level").set_alignment(CellAlignment::Right),
            Cell::new("Kind"),
            Cell::new("Title"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    let mut count = 0;
    for surface in provider.surface_sequence() {
        let title = surface.title().unwrap_or_default();
        let frame = surface.frame().unwrap_or(Rect::new(0, 0, 0, 0));
        let kind = match surface.kind() {
            SurfaceKind::Application => "app",
            SurfaceKind::StatusBar => "status bar",
        };

        table.add_row(vec![
            Cell::new(format!("0x{:X}", surface.id().0)),
            Cell::new(surface.level()).set_alignment(CellAlignment::Right),
            Cell::new(kind),
            Cell::new(title),
            Cell::new(frame.width).set_alignment(CellAlignment::Right),
            Cell::new(frame.height).set_alignment(CellAlignment::Right),
        ]);
        count += 1;
    }

    println!("{table}");
    println!("\n{count} surfaces, back to front");
}
