use crate::surface::Surface;

/// The platform-query capability a [`crate::WindowProvider`] resolves
/// surfaces through.
///
/// This is an injected dependency rather than an ambient singleton so that
/// tests can substitute a synthetic surface set (see [`crate::synthetic`])
/// for the real platform registry.
///
/// Both queries are treated as infallible reads of current platform state:
/// a registry with nothing to report returns an empty vector or `None`,
/// never an error.
pub trait SurfaceRegistry {
    /// The platform's surface handle type.
    type Surface: Surface + Clone;

    /// Returns a snapshot of all currently registered application
    /// surfaces, in registration order.
    ///
    /// Each call is an independent snapshot — surfaces may appear or
    /// disappear between two calls.
    fn registered_surfaces(&self) -> Vec<Self::Surface>;

    /// Returns the status bar surface, if the platform has one.
    fn status_bar(&self) -> Option<Self::Surface>;
}
