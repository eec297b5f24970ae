//! Windows platform implementation for Mirador.
//!
//! Everything here is gated on `cfg(windows)` so the workspace still
//! builds on other hosts; there the crate is empty.

/// Win32 window enumeration and z-order level synthesis.
#[cfg(windows)]
pub mod enumerate;

/// `SurfaceRegistry` over the live Win32 window list.
#[cfg(windows)]
pub mod registry;

/// Surface type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod surface;

#[cfg(windows)]
pub use registry::WindowsSurfaceRegistry;
#[cfg(windows)]
pub use surface::WindowSurface;
