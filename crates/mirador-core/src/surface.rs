use crate::Rect;

/// A boxed error type for per-surface metadata queries.
///
/// Only `title` and `frame` can fail — the platform may refuse to report
/// metadata for a surface that disappeared between snapshot and query.
/// Membership and ordering queries never produce errors.
pub type SurfaceResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Identity of a surface within its platform registry.
///
/// Wraps the platform's pointer-sized handle value. Two surfaces with the
/// same id refer to the same platform window, which is what deduplication
/// in the provider relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

/// The role a surface plays in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// An ordinary application window.
    Application,
    /// The system status overlay (always drawn above application content).
    StatusBar,
}

/// Platform-agnostic surface trait.
///
/// A surface is an opaque handle to a platform-owned, layered display
/// region. Each platform crate (e.g. `mirador-windows`) provides its own
/// implementation; the provider never owns or mutates platform surfaces,
/// it only reads their stacking metadata.
pub trait Surface {
    /// Returns the surface identity, used for deduplication.
    fn id(&self) -> SurfaceId;

    /// Returns the stacking level. Higher levels draw on top.
    fn level(&self) -> i32;

    /// Returns whether this is an application surface or the status bar.
    fn kind(&self) -> SurfaceKind;

    /// Returns the surface title.
    fn title(&self) -> SurfaceResult<String>;

    /// Returns the surface bounding rectangle.
    fn frame(&self) -> SurfaceResult<Rect>;

    /// Returns whether the surface is currently visible.
    fn is_visible(&self) -> bool;
}
