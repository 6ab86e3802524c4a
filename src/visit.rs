//! Visitation: dispatching a callable to the concrete alternative(s) held
//! by one or more variants, without the caller matching on the tag.
//!
//! The engine works against small capability traits rather than the `Fn*`
//! traits directly, so that both plain closures and hand-written visitor
//! objects can be used:
//!
//! - a closure `FnMut(&T) -> R` visits variants whose alternatives all
//!   coerce to the same parameter type (the homogeneous case);
//! - a visitor struct implementing [`Visit<Ti, R>`] once per alternative
//!   covers heterogeneous variants.
//!
//! The result type `R` is an ordinary type parameter: every reachable
//! branch must produce the same `R`, and the compiler rejects the visit
//! otherwise. There is no implicit common-type inference.
//!
//! ```rust
//! use oneof::{OneOf2, Visit};
//!
//! struct Describe;
//!
//! impl Visit<i32, &'static str> for Describe {
//!   fn visit(&mut self, _: &i32) -> &'static str {
//!     "number"
//!   }
//! }
//!
//! impl Visit<bool, &'static str> for Describe {
//!   fn visit(&mut self, _: &bool) -> &'static str {
//!     "flag"
//!   }
//! }
//!
//! let v: OneOf2<i32, bool> = OneOf2::of(false);
//! assert_eq!(v.visit(Describe), Ok("flag"));
//! ```
//!
//! Visiting several variants at once is defined recursively: the first
//! variant's match fixes one alternative, then hands the partially-bound
//! callable to the next variant through the [`VisitRest`] (two variants)
//! or [`VisitMiddle`]/[`VisitLast`] (three variants) plumbing traits. Only
//! one path is taken at runtime: one match per variant, chained.

use crate::error::BadAccessError;

/// Shared-reference visitation of a single alternative type.
///
/// Blanket-implemented for closures, so `FnMut(&T) -> R` works wherever a
/// `Visit<T, R>` bound appears.
pub trait Visit<T, R> {
  fn visit(&mut self, value: &T) -> R;
}

impl<F, T, R> Visit<T, R> for F
where
  F: FnMut(&T) -> R,
{
  #[inline(always)]
  fn visit(&mut self, value: &T) -> R {
    self(value)
  }
}

/// Mutable-reference counterpart of [`Visit`].
pub trait VisitMut<T, R> {
  fn visit_mut(&mut self, value: &mut T) -> R;
}

impl<F, T, R> VisitMut<T, R> for F
where
  F: FnMut(&mut T) -> R,
{
  #[inline(always)]
  fn visit_mut(&mut self, value: &mut T) -> R {
    self(value)
  }
}

/// Consuming counterpart of [`Visit`]; the visitor and the payload are
/// both taken by value.
pub trait VisitOnce<T, R> {
  fn visit_once(self, value: T) -> R;
}

impl<F, T, R> VisitOnce<T, R> for F
where
  F: FnOnce(T) -> R,
{
  #[inline(always)]
  fn visit_once(self, value: T) -> R {
    self(value)
  }
}

/// Binary visitation: one callable over a pair of alternatives.
///
/// `OneOfN::visit2` requires `Visit2<Ti, Uj, R>` for every reachable pair,
/// the cross product of both alternative sets. Blanket-implemented for
/// `FnMut(&A, &B) -> R` closures.
pub trait Visit2<A, B, R> {
  fn visit2(&mut self, first: &A, second: &B) -> R;
}

impl<F, A, B, R> Visit2<A, B, R> for F
where
  F: FnMut(&A, &B) -> R,
{
  #[inline(always)]
  fn visit2(&mut self, first: &A, second: &B) -> R {
    self(first, second)
  }
}

/// Ternary visitation, the three-variant analogue of [`Visit2`].
pub trait Visit3<A, B, C, R> {
  fn visit3(&mut self, first: &A, second: &B, third: &C) -> R;
}

impl<F, A, B, C, R> Visit3<A, B, C, R> for F
where
  F: FnMut(&A, &B, &C) -> R,
{
  #[inline(always)]
  fn visit3(&mut self, first: &A, second: &B, third: &C) -> R {
    self(first, second, third)
  }
}

/// Recursion step for two-variant visitation: the *second* variant
/// dispatches a callable already bound to the first variant's alternative
/// `A`. Implemented by every `OneOfN`.
pub trait VisitRest<F, A, R> {
  fn visit_rest(&self, f: &mut F, first: &A) -> Result<R, BadAccessError>;
}

/// Recursion step for three-variant visitation: the *middle* variant fixes
/// its own alternative and forwards to the last variant `W`.
pub trait VisitMiddle<W, F, A, R> {
  fn visit_middle(
    &self,
    last: &W,
    f: &mut F,
    first: &A,
  ) -> Result<R, BadAccessError>;
}

/// Recursion step for three-variant visitation: the *last* variant invokes
/// the callable with the two already-bound alternatives `A` and `B`.
pub trait VisitLast<F, A, B, R> {
  fn visit_last(
    &self,
    f: &mut F,
    first: &A,
    second: &B,
  ) -> Result<R, BadAccessError>;
}
