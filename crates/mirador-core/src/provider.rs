use crate::registry::SurfaceRegistry;
use crate::surface::{Surface, SurfaceKind};

/// How a provider obtains its surface set.
///
/// Exactly one mode is active for the lifetime of a provider. There is
/// deliberately no default: an "empty by accident" provider is a
/// construction bug, so every constructor states its mode explicitly.
enum Mode<S> {
    /// A caller-supplied set captured at construction time, preserved in
    /// the caller's order.
    Fixed(Vec<S>),
    /// Resolve the live registry set fresh on every enumeration.
    ResolveAll { include_status_bar: bool },
}

/// Produces a back-to-front ordered sequence of surfaces for a
/// view-hierarchy traversal to start from.
///
/// A provider is constructed once per traversal, enumerated, and
/// discarded. It holds a non-owning reference to the platform registry;
/// surface lifetime is governed entirely by the platform.
pub struct WindowProvider<'a, R: SurfaceRegistry> {
    registry: &'a R,
    mode: Mode<R::Surface>,
}

impl<'a, R: SurfaceRegistry> WindowProvider<'a, R> {
    /// Creates a provider fixed to the given surfaces.
    ///
    /// The set is captured now and yielded verbatim on every enumeration —
    /// no ordering is imposed on a caller-supplied set, and `surfaces` may
    /// be empty.
    pub fn with_surfaces(registry: &'a R, surfaces: Vec<R::Surface>) -> Self {
        Self {
            registry,
            mode: Mode::Fixed(surfaces),
        }
    }

    /// Creates a provider over all surfaces registered with the platform.
    ///
    /// Resolution is deferred to enumeration time, so the provider never
    /// holds a stale snapshot: surfaces that appear or disappear after
    /// construction are reflected in the next enumeration.
    pub fn with_all_surfaces(registry: &'a R, include_status_bar: bool) -> Self {
        Self {
            registry,
            mode: Mode::ResolveAll { include_status_bar },
        }
    }

    /// General constructor.
    ///
    /// With `None` or an empty list this behaves as [`Self::with_all_surfaces`]
    /// — callers who pass nothing almost always want "current window
    /// state". With a non-empty list it behaves as [`Self::with_surfaces`],
    /// and if `include_status_bar` is set the registry's status bar is
    /// appended to the captured set (unless already present, by id).
    /// Prefer the named constructors to make the intent explicit.
    pub fn new(
        registry: &'a R,
        surfaces: Option<Vec<R::Surface>>,
        include_status_bar: bool,
    ) -> Self {
        match surfaces.filter(|s| !s.is_empty()) {
            None => Self::with_all_surfaces(registry, include_status_bar),
            Some(mut surfaces) => {
                if include_status_bar
                    && let Some(bar) = registry.status_bar()
                    && !surfaces.iter().any(|s| s.id() == bar.id())
                {
                    // The status bar stacks above application content, so
                    // it goes at the end of the back-to-front set.
                    surfaces.push(bar);
                }
                Self::with_surfaces(registry, surfaces)
            }
        }
    }

    /// Resolves all surfaces currently registered with the platform,
    /// ordered by stacking level from back (lowest) to front (highest).
    ///
    /// The sort is stable: surfaces with equal levels keep their
    /// registration order. With `include_status_bar` the status bar
    /// appears exactly once — it is skipped if the registered set already
    /// contains it (matched by id), otherwise appended before the sort so
    /// it takes its place in level order and ties break after application
    /// surfaces. Without it, any status bar surface in the registered set
    /// is excluded.
    ///
    /// An empty registry yields an empty vector, not an error.
    pub fn resolve_all_surfaces(registry: &R, include_status_bar: bool) -> Vec<R::Surface> {
        let mut surfaces = registry.registered_surfaces();

        if include_status_bar {
            if let Some(bar) = registry.status_bar()
                && !surfaces.iter().any(|s| s.id() == bar.id())
            {
                surfaces.push(bar);
            }
        } else {
            surfaces.retain(|s| s.kind() != SurfaceKind::StatusBar);
        }

        // Vec::sort_by_key is stable, which is what preserves
        // registration order between equal levels.
        surfaces.sort_by_key(|s| s.level());
        surfaces
    }

    /// Returns a fresh back-to-front sequence over the provider's
    /// surface set.
    ///
    /// In fixed mode every call yields the same captured set. In
    /// resolve-all mode every call re-resolves, so each sequence is an
    /// independent snapshot of current platform state. Obtaining a
    /// sequence never mutates the provider, and sequences are independent
    /// of one another.
    pub fn surface_sequence(&self) -> SurfaceSequence<R::Surface> {
        let surfaces = match &self.mode {
            Mode::Fixed(surfaces) => surfaces.clone(),
            Mode::ResolveAll { include_status_bar } => {
                Self::resolve_all_surfaces(self.registry, *include_status_bar)
            }
        };
        SurfaceSequence {
            inner: surfaces.into_iter(),
        }
    }
}

/// A finite, one-shot sequence of surfaces in back-to-front order.
///
/// Produced by [`WindowProvider::surface_sequence`]; request a new one
/// from the provider to restart iteration.
pub struct SurfaceSequence<S> {
    inner: std::vec::IntoIter<S>,
}

impl<S> Iterator for SurfaceSequence<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for SurfaceSequence<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::{SyntheticRegistry, SyntheticSurface};

    fn levels(surfaces: impl IntoIterator<Item = SyntheticSurface>) -> Vec<i32> {
        surfaces.into_iter().map(|s| s.level()).collect()
    }

    #[test]
    fn fixed_mode_preserves_caller_order() {
        // Arrange — deliberately not sorted by level.
        let registry = SyntheticRegistry::new();
        let surfaces = vec![
            SyntheticSurface::new(1, 30),
            SyntheticSurface::new(2, 10),
            SyntheticSurface::new(3, 20),
        ];

        // Act
        let provider = WindowProvider::with_surfaces(&registry, surfaces);

        // Assert — caller-supplied order is yielded verbatim.
        assert_eq!(levels(provider.surface_sequence()), vec![30, 10, 20]);
    }

    #[test]
    fn fixed_mode_allows_empty_set() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));

        // Act
        let provider = WindowProvider::with_surfaces(&registry, vec![]);

        // Assert — explicitly fixed to empty, not resolve-all.
        assert_eq!(provider.surface_sequence().count(), 0);
    }

    #[test]
    fn resolve_all_sorts_back_to_front() {
        // Arrange — registration order differs from level order.
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 10));
        registry.register(SyntheticSurface::new(2, 0));
        registry.register(SyntheticSurface::new(3, 5));

        // Act
        let resolved = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, false);

        // Assert
        assert_eq!(levels(resolved), vec![0, 5, 10]);
    }

    #[test]
    fn equal_levels_keep_registration_order() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 5));
        registry.register(SyntheticSurface::new(2, 5));
        registry.register(SyntheticSurface::new(3, 0));

        // Act
        let resolved = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, false);
        let ids: Vec<_> = resolved.iter().map(|s| s.id().0).collect();

        // Assert — stable sort: 1 registered before 2 stays before 2.
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn status_bar_included_in_level_order() {
        // Arrange — the example from the ordering contract: levels
        // [0, 10, 5] with a status bar at 1000.
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));
        registry.register(SyntheticSurface::new(2, 10));
        registry.register(SyntheticSurface::new(3, 5));
        registry.set_status_bar(SyntheticSurface::status_bar(99, 1000));

        // Act / Assert
        let with_bar = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, true);
        assert_eq!(levels(with_bar), vec![0, 5, 10, 1000]);

        let without_bar =
            WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, false);
        assert_eq!(levels(without_bar), vec![0, 5, 10]);
    }

    #[test]
    fn status_bar_excluded_even_when_registered() {
        // Arrange — platform reports the status bar among the registered
        // surfaces, as some platforms do.
        let registry = SyntheticRegistry::new();
        let bar = SyntheticSurface::status_bar(99, 1000);
        registry.register(SyntheticSurface::new(1, 0));
        registry.register(bar.clone());
        registry.set_status_bar(bar);

        // Act
        let resolved = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, false);

        // Assert
        assert!(resolved.iter().all(|s| s.kind() == SurfaceKind::Application));
    }

    #[test]
    fn status_bar_never_duplicated() {
        // Arrange — status bar already present in the registered set.
        let registry = SyntheticRegistry::new();
        let bar = SyntheticSurface::status_bar(99, 1000);
        registry.register(SyntheticSurface::new(1, 0));
        registry.register(bar.clone());
        registry.set_status_bar(bar);

        // Act — twice in a row, same provider semantics both times.
        let first = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, true);
        let second = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, true);

        // Assert — exactly one status bar in each independent snapshot.
        for resolved in [first, second] {
            let bars = resolved
                .iter()
                .filter(|s| s.kind() == SurfaceKind::StatusBar)
                .count();
            assert_eq!(bars, 1);
        }
    }

    #[test]
    fn status_bar_ties_after_equal_level_surfaces() {
        // Arrange — an application surface at the same level as the bar.
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 1000));
        registry.set_status_bar(SyntheticSurface::status_bar(99, 1000));

        // Act
        let resolved = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, true);
        let ids: Vec<_> = resolved.iter().map(|s| s.id().0).collect();

        // Assert — appended last, so the tie breaks after the app surface.
        assert_eq!(ids, vec![1, 99]);
    }

    #[test]
    fn status_bar_sorts_between_application_levels() {
        // Arrange — the bar's level falls between two application levels.
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));
        registry.register(SyntheticSurface::new(2, 10));
        registry.set_status_bar(SyntheticSurface::status_bar(99, 5));

        // Act
        let resolved = WindowProvider::<SyntheticRegistry>::resolve_all_surfaces(&registry, true);

        // Assert — inserted at its level position, not appended at the end.
        assert_eq!(levels(resolved), vec![0, 5, 10]);
    }

    /// Registry whose window set shrinks between the two platform reads
    /// of a single resolution, as live windows owned by other processes
    /// can.
    struct ClosingWindowsRegistry {
        surfaces: std::cell::RefCell<Vec<SyntheticSurface>>,
    }

    impl SurfaceRegistry for ClosingWindowsRegistry {
        type Surface = SyntheticSurface;

        fn registered_surfaces(&self) -> Vec<SyntheticSurface> {
            self.surfaces.borrow().clone()
        }

        fn status_bar(&self) -> Option<SyntheticSurface> {
            // Two windows close after the set was snapshotted.
            let mut surfaces = self.surfaces.borrow_mut();
            let keep = surfaces.len().saturating_sub(2);
            surfaces.truncate(keep);
            Some(SyntheticSurface::status_bar(99, i32::MAX))
        }
    }

    #[test]
    fn status_bar_stays_front_most_when_windows_close_mid_resolution() {
        // Arrange
        let registry = ClosingWindowsRegistry {
            surfaces: std::cell::RefCell::new(vec![
                SyntheticSurface::new(1, 0),
                SyntheticSurface::new(2, 1),
                SyntheticSurface::new(3, 2),
            ]),
        };

        // Act
        let resolved =
            WindowProvider::<ClosingWindowsRegistry>::resolve_all_surfaces(&registry, true);

        // Assert — the bar's level comes from the registry, never from a
        // second read of a set that shrank, so it still sorts after the
        // front-most window of the snapshot.
        assert_eq!(resolved.len(), 4);
        assert_eq!(resolved.last().unwrap().kind(), SurfaceKind::StatusBar);
    }

    #[test]
    fn empty_registry_yields_empty_sequence() {
        // Arrange
        let registry = SyntheticRegistry::new();

        // Act
        let provider = WindowProvider::with_all_surfaces(&registry, true);
        let mut sequence = provider.surface_sequence();

        // Assert — empty is valid, not an error.
        assert_eq!(sequence.len(), 0);
        assert!(sequence.next().is_none());
    }

    #[test]
    fn dynamic_sequences_are_independent_snapshots() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));
        let provider = WindowProvider::with_all_surfaces(&registry, false);

        // Act — a surface appears between two enumerations.
        let first: Vec<_> = provider.surface_sequence().collect();
        registry.register(SyntheticSurface::new(2, 5));
        let second: Vec<_> = provider.surface_sequence().collect();

        // Assert — only the second snapshot sees the addition.
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn fixed_mode_ignores_registry_changes() {
        // Arrange
        let registry = SyntheticRegistry::new();
        let captured = vec![SyntheticSurface::new(1, 0)];
        let provider = WindowProvider::with_surfaces(&registry, captured);

        // Act
        registry.register(SyntheticSurface::new(2, 5));

        // Assert — the captured set never changes.
        assert_eq!(provider.surface_sequence().count(), 1);
    }

    #[test]
    fn general_constructor_defaults_to_resolve_all() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));

        // Act — None and Some(empty) both mean "current window state".
        let from_none = WindowProvider::new(&registry, None, false);
        let from_empty = WindowProvider::new(&registry, Some(vec![]), false);

        // Assert
        assert_eq!(from_none.surface_sequence().count(), 1);
        assert_eq!(from_empty.surface_sequence().count(), 1);
    }

    #[test]
    fn general_constructor_appends_status_bar_to_fixed_set() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.set_status_bar(SyntheticSurface::status_bar(99, 1000));
        let surfaces = vec![SyntheticSurface::new(1, 20), SyntheticSurface::new(2, 10)];

        // Act
        let provider = WindowProvider::new(&registry, Some(surfaces), true);

        // Assert — caller order untouched, bar appended at the end.
        assert_eq!(levels(provider.surface_sequence()), vec![20, 10, 1000]);
    }

    #[test]
    fn general_constructor_does_not_duplicate_status_bar() {
        // Arrange — the caller already included the bar in its list.
        let registry = SyntheticRegistry::new();
        let bar = SyntheticSurface::status_bar(99, 1000);
        registry.set_status_bar(bar.clone());

        // Act
        let provider = WindowProvider::new(&registry, Some(vec![bar]), true);

        // Assert
        assert_eq!(provider.surface_sequence().count(), 1);
    }

    #[test]
    fn sequence_is_restartable_from_the_provider() {
        // Arrange
        let registry = SyntheticRegistry::new();
        registry.register(SyntheticSurface::new(1, 0));
        registry.register(SyntheticSurface::new(2, 5));
        let provider = WindowProvider::with_all_surfaces(&registry, false);

        // Act — exhaust one sequence, then request a fresh one.
        let consumed = provider.surface_sequence().count();
        let fresh = provider.surface_sequence().count();

        // Assert
        assert_eq!(consumed, 2);
        assert_eq!(fresh, 2);
    }
}
