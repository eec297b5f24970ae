use mirador_core::{SurfaceRegistry, log_warn};

use crate::enumerate;
use crate::surface::WindowSurface;

/// [`SurfaceRegistry`] backed by the live Win32 window list.
///
/// Every query is a fresh synchronous read of OS state. Per the provider
/// contract, registry reads are infallible: an enumeration failure
/// degrades to an empty snapshot (with a warning in the log), never an
/// error to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsSurfaceRegistry;

impl WindowsSurfaceRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceRegistry for WindowsSurfaceRegistry {
    type Surface = WindowSurface;

    fn registered_surfaces(&self) -> Vec<WindowSurface> {
        match enumerate::enumerate_surfaces() {
            Ok(surfaces) => surfaces,
            Err(e) => {
                log_warn!("window enumeration failed: {e}");
                Vec::new()
            }
        }
    }

    fn status_bar(&self) -> Option<WindowSurface> {
        enumerate::find_status_bar()
    }
}
