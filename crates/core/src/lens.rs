//! Total accessors.

use std::fmt;
use std::sync::Arc;

use crate::{Every, Optional};

type GetFn<S, A> = Arc<dyn Fn(&S) -> A + Send + Sync>;
type SetFn<S, A> = Arc<dyn Fn(S, A) -> S + Send + Sync>;

/// A total accessor: every `S` contains exactly one `A`.
///
/// Both reading and writing always succeed. A `Lens` is an immutable value;
/// cloning it is cheap and applying it never mutates the lens itself.
pub struct Lens<S, A> {
    get: GetFn<S, A>,
    set: SetFn<S, A>,
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static> Lens<S, A> {
    pub fn new(
        get: impl Fn(&S) -> A + Send + Sync + 'static,
        set: impl Fn(S, A) -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the focus out of `source`.
    pub fn get(&self, source: &S) -> A {
        (self.get)(source)
    }

    /// Replace the focus, returning the rebuilt source.
    pub fn set(&self, source: S, focus: A) -> S {
        (self.set)(source, focus)
    }

    /// Transform the focus with `f`.
    pub fn modify(&self, source: S, f: impl FnOnce(A) -> A) -> S {
        let focus = (self.get)(&source);
        (self.set)(source, f(focus))
    }

    /// Compose with another lens; the result is again total.
    pub fn compose<B: 'static>(&self, other: &Lens<A, B>) -> Lens<S, B> {
        let outer_get = self.get.clone();
        let inner_get = other.get.clone();
        let get = move |source: &S| (inner_get)(&(outer_get)(source));

        let outer_get = self.get.clone();
        let outer_set = self.set.clone();
        let inner_set = other.set.clone();
        let set = move |source: S, focus: B| {
            let middle = (outer_get)(&source);
            (outer_set)(source, (inner_set)(middle, focus))
        };

        Lens {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Compose with a partial accessor; the result is partial.
    pub fn compose_optional<B: 'static>(&self, other: &Optional<A, B>) -> Optional<S, B> {
        self.to_optional().compose(other)
    }

    /// Compose with a bulk accessor; the result is bulk.
    pub fn compose_every<B: 'static>(&self, other: &Every<A, B>) -> Every<S, B> {
        self.to_every().compose(other)
    }

    /// Weaken to a partial accessor that always hits.
    pub fn to_optional(&self) -> Optional<S, A> {
        let get = self.get.clone();
        let set = self.set.clone();
        Optional::new(
            move |source: &S| Some((get)(source)),
            move |source, focus| (set)(source, focus),
        )
    }

    /// Weaken to a bulk accessor with exactly one focus.
    pub fn to_every(&self) -> Every<S, A> {
        self.to_optional().to_every()
    }
}

impl<S: Clone + 'static> Lens<S, S> {
    /// The identity accessor: the focus is the whole source.
    pub fn id() -> Self {
        Lens::new(|source: &S| source.clone(), |_, focus| focus)
    }
}
