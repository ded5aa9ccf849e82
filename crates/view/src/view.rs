//! Tri-state view value with stale-while-revalidate semantics.
//!
//! `View` is an explicit tagged union rather than three independently
//! nullable fields, so "a reload never blanks existing data" is enforced by
//! the type instead of by convention.

/// The rendering state of an asynchronously fetched value.
///
/// - `Loading` carries the last known-good payload as `stale`, so the UI can
///   keep rendering it while a refresh is in flight
/// - `Ready` is a fresh, fully authoritative payload
/// - `Failed` carries the failure and, like `Loading`, the stale payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View<T, E> {
    /// A fetch is outstanding; `stale` is the previous payload, if any.
    Loading { stale: Option<T> },
    /// The last fetch succeeded.
    Ready(T),
    /// The last fetch failed; `stale` is the previous payload, if any.
    Failed { error: E, stale: Option<T> },
}

impl<T, E> Default for View<T, E> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T, E> View<T, E> {
    /// Creates the initial loading state with no stale payload.
    #[inline]
    pub fn loading() -> Self {
        View::Loading { stale: None }
    }

    /// Returns the renderable payload: fresh if ready, stale otherwise.
    pub fn data(&self) -> Option<&T> {
        match self {
            View::Ready(data) => Some(data),
            View::Loading { stale } | View::Failed { stale, .. } => stale.as_ref(),
        }
    }

    /// Returns the last failure, if the view is failed.
    pub fn error(&self) -> Option<&E> {
        match self {
            View::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns true while a fetch is outstanding.
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, View::Loading { .. })
    }

    /// Returns true if the payload is fresh.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, View::Ready(_))
    }

    /// Returns true if the last fetch failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, View::Failed { .. })
    }

    /// Consumes the view, returning the payload (fresh or stale).
    pub fn into_data(self) -> Option<T> {
        match self {
            View::Ready(data) => Some(data),
            View::Loading { stale } | View::Failed { stale, .. } => stale,
        }
    }

    /// Transitions into `Loading`, carrying the current payload as stale.
    ///
    /// A pending failure is dropped here; the reload supersedes it.
    pub fn begin_load(self) -> Self {
        View::Loading {
            stale: self.into_data(),
        }
    }

    /// Transitions into `Failed`, carrying the current payload as stale.
    pub fn fail(self, error: E) -> Self {
        View::Failed {
            error,
            stale: self.into_data(),
        }
    }
}
