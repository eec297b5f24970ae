//! In-memory surface registry for tests and platform-less environments.
//!
//! The provider takes its platform access as an injected
//! [`SurfaceRegistry`], and this module is the substitute implementation:
//! a registry whose surface set is plain data under the caller's control.
//! Interior mutability lets a test mutate the set while a provider holds a
//! shared borrow, which is exactly the "surfaces appear between two
//! enumerations" scenario.

use std::cell::RefCell;

use crate::rect::Rect;
use crate::registry::SurfaceRegistry;
use crate::surface::{Surface, SurfaceId, SurfaceKind, SurfaceResult};

/// A synthetic surface backed by plain fields instead of platform state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSurface {
    id: SurfaceId,
    level: i32,
    kind: SurfaceKind,
    title: String,
    frame: Rect,
    visible: bool,
}

impl SyntheticSurface {
    /// Creates a visible application surface with the given id and level.
    pub fn new(id: usize, level: i32) -> Self {
        Self {
            id: SurfaceId(id),
            level,
            kind: SurfaceKind::Application,
            title: format!("surface-{id}"),
            frame: Rect::new(0, 0, 800, 600),
            visible: true,
        }
    }

    /// Creates a status bar surface with the given id and level.
    pub fn status_bar(id: usize, level: i32) -> Self {
        Self {
            kind: SurfaceKind::StatusBar,
            title: "status-bar".into(),
            ..Self::new(id, level)
        }
    }

    /// Sets the title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the frame (builder style).
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    /// Sets visibility (builder style).
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Surface for SyntheticSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn level(&self) -> i32 {
        self.level
    }

    fn kind(&self) -> SurfaceKind {
        self.kind
    }

    fn title(&self) -> SurfaceResult<String> {
        Ok(self.title.clone())
    }

    fn frame(&self) -> SurfaceResult<Rect> {
        Ok(self.frame)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// An in-memory [`SurfaceRegistry`].
///
/// Surfaces are reported in registration order, matching the contract of
/// the trait. The status bar lives in its own slot and is never part of
/// the registered set unless explicitly registered as well.
#[derive(Debug, Default)]
pub struct SyntheticRegistry {
    surfaces: RefCell<Vec<SyntheticSurface>>,
    status_bar: RefCell<Option<SyntheticSurface>>,
}

impl SyntheticRegistry {
    /// Creates an empty registry with no status bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface at the end of the registration order.
    pub fn register(&self, surface: SyntheticSurface) {
        self.surfaces.borrow_mut().push(surface);
    }

    /// Removes a surface by id. Removing an unknown id is a no-op.
    pub fn remove(&self, id: SurfaceId) {
        self.surfaces.borrow_mut().retain(|s| s.id() != id);
    }

    /// Sets the status bar surface.
    pub fn set_status_bar(&self, surface: SyntheticSurface) {
        *self.status_bar.borrow_mut() = Some(surface);
    }
}

impl SurfaceRegistry for SyntheticRegistry {
    type Surface = SyntheticSurface;

    fn registered_surfaces(&self) -> Vec<SyntheticSurface> {
        self.surfaces.borrow().clone()
    }

    fn status_bar(&self) -> Option<SyntheticSurface> {
        self.status_bar.borrow().clone()
    }
}
