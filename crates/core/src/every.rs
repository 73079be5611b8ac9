//! Bulk accessors.

use std::fmt;
use std::sync::Arc;

use crate::{Lens, Monoid, Optional};

type ForEachFn<S, A> = Arc<dyn Fn(&S, &mut dyn FnMut(&A)) + Send + Sync>;
type ModifyFn<S, A> = Arc<dyn Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync>;

/// A bulk accessor: an `S` contains zero or more `A` foci.
///
/// Reads fold over every focus in source order; `modify` transforms every
/// focus independently and rebuilds the container preserving its shape and
/// order. A source with no foci folds to the monoid identity and is left
/// unchanged by writes.
pub struct Every<S, A> {
    for_each: ForEachFn<S, A>,
    modify: ModifyFn<S, A>,
}

impl<S, A> Clone for Every<S, A> {
    fn clone(&self) -> Self {
        Self {
            for_each: self.for_each.clone(),
            modify: self.modify.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Every<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Every").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static> Every<S, A> {
    pub fn new(
        for_each: impl Fn(&S, &mut dyn FnMut(&A)) + Send + Sync + 'static,
        modify: impl Fn(S, &mut dyn FnMut(A) -> A) -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            for_each: Arc::new(for_each),
            modify: Arc::new(modify),
        }
    }

    /// Visit every focus in source order.
    pub fn for_each(&self, source: &S, mut f: impl FnMut(&A)) {
        (self.for_each)(source, &mut f);
    }

    /// Fold every focus into a single result through a [`Monoid`].
    pub fn fold_map<R: Monoid>(&self, source: &S, mut f: impl FnMut(&A) -> R) -> R {
        let mut acc = R::empty();
        (self.for_each)(source, &mut |focus| {
            let mapped = f(focus);
            acc = std::mem::replace(&mut acc, R::empty()).combine(mapped);
        });
        acc
    }

    /// Collect every focus, in source order.
    pub fn get_all(&self, source: &S) -> Vec<A>
    where
        A: Clone,
    {
        let mut all = Vec::new();
        (self.for_each)(source, &mut |focus| all.push(focus.clone()));
        all
    }

    /// Number of foci in `source`.
    pub fn size(&self, source: &S) -> usize {
        self.fold_map(source, |_| 1usize)
    }

    /// Whether `source` has no foci.
    pub fn is_empty(&self, source: &S) -> bool {
        self.size(source) == 0
    }

    /// Transform every focus with `f`; identity where no focus exists.
    pub fn modify(&self, source: S, mut f: impl FnMut(A) -> A) -> S {
        (self.modify)(source, &mut f)
    }

    /// Replace every focus with `focus`.
    pub fn set(&self, source: S, focus: A) -> S
    where
        A: Clone,
    {
        self.modify(source, move |_| focus.clone())
    }

    /// Compose with another bulk accessor.
    pub fn compose<B: 'static>(&self, other: &Every<A, B>) -> Every<S, B> {
        let outer_each = self.for_each.clone();
        let inner_each = other.for_each.clone();
        let for_each = move |source: &S, f: &mut dyn FnMut(&B)| {
            (outer_each)(source, &mut |middle: &A| (inner_each)(middle, &mut *f));
        };

        let outer_modify = self.modify.clone();
        let inner_modify = other.modify.clone();
        let modify = move |source: S, f: &mut dyn FnMut(B) -> B| {
            (outer_modify)(source, &mut |middle: A| (inner_modify)(middle, &mut *f))
        };

        Every {
            for_each: Arc::new(for_each),
            modify: Arc::new(modify),
        }
    }

    /// Compose with a total accessor; the result stays bulk.
    pub fn compose_lens<B: 'static>(&self, other: &Lens<A, B>) -> Every<S, B> {
        self.compose(&other.to_every())
    }

    /// Compose with a partial accessor; the result stays bulk.
    pub fn compose_optional<B: 'static>(&self, other: &Optional<A, B>) -> Every<S, B> {
        self.compose(&other.to_every())
    }
}
