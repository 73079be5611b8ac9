//! Partial accessors.

use std::fmt;
use std::sync::Arc;

use crate::{Every, Lens};

type GetFn<S, A> = Arc<dyn Fn(&S) -> Option<A> + Send + Sync>;
type SetFn<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;

/// A partial accessor: an `S` may or may not contain an `A`.
///
/// A read on a missing focus returns `None`; a write on a missing focus
/// returns the source unchanged. Absence is an ordinary outcome, not an
/// error, so no operation here panics or returns a `Result`.
pub struct Optional<S, A> {
    get: GetFn<S, A>,
    set: SetFn<S, A>,
}

impl<S, A> Clone for Optional<S, A> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Optional<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static> Optional<S, A> {
    pub fn new(
        get: impl Fn(&S) -> Option<A> + Send + Sync + 'static,
        set: impl Fn(S, A) -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the focus, or `None` when `source` has no focus.
    pub fn get(&self, source: &S) -> Option<A> {
        (self.get)(source)
    }

    /// Replace the focus when present; identity otherwise.
    pub fn set(&self, source: S, focus: A) -> S {
        (self.set)(source, focus)
    }

    /// Transform the focus with `f` when present; identity otherwise.
    pub fn modify(&self, source: S, f: impl FnOnce(A) -> A) -> S {
        match (self.get)(&source) {
            Some(focus) => (self.set)(source, f(focus)),
            None => source,
        }
    }

    /// Compose with another partial accessor; the result is partial.
    pub fn compose<B: 'static>(&self, other: &Optional<A, B>) -> Optional<S, B> {
        let outer_get = self.get.clone();
        let inner_get = other.get.clone();
        let get =
            move |source: &S| (outer_get)(source).and_then(|middle| (inner_get)(&middle));

        let outer_get = self.get.clone();
        let outer_set = self.set.clone();
        let inner_set = other.set.clone();
        let set = move |source: S, focus: B| match (outer_get)(&source) {
            Some(middle) => (outer_set)(source, (inner_set)(middle, focus)),
            None => source,
        };

        Optional {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Compose with a total accessor; the result stays partial.
    pub fn compose_lens<B: 'static>(&self, other: &Lens<A, B>) -> Optional<S, B> {
        self.compose(&other.to_optional())
    }

    /// Compose with a bulk accessor; the result is bulk.
    pub fn compose_every<B: 'static>(&self, other: &Every<A, B>) -> Every<S, B> {
        self.to_every().compose(other)
    }

    /// Weaken to a bulk accessor with zero or one focus.
    pub fn to_every(&self) -> Every<S, A> {
        let get = self.get.clone();
        let for_each = move |source: &S, f: &mut dyn FnMut(&A)| {
            if let Some(focus) = (get)(source) {
                f(&focus);
            }
        };

        let get = self.get.clone();
        let set = self.set.clone();
        let modify = move |source: S, f: &mut dyn FnMut(A) -> A| match (get)(&source) {
            Some(focus) => (set)(source, f(focus)),
            None => source,
        };

        Every::new(for_each, modify)
    }
}

impl<S: Clone + 'static> Optional<S, S> {
    /// The identity accessor: focuses the whole source, always present.
    pub fn id() -> Self {
        Optional::new(|source: &S| Some(source.clone()), |_, focus| focus)
    }
}
