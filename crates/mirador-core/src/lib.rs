pub mod config;
pub mod log;
pub mod provider;
pub mod rect;
pub mod registry;
pub mod surface;
pub mod synthetic;

pub use provider::{SurfaceSequence, WindowProvider};
pub use rect::Rect;
pub use registry::SurfaceRegistry;
pub use surface::{Surface, SurfaceId, SurfaceKind, SurfaceResult};
