//! The alternative registry: the compile-time mapping between each
//! alternative type of a variant and its stable position.
//!
//! Every `OneOfN` enum implements [`Alternative<T, Ix<N>>`] once per
//! position `N`, tying the alternative type `T` to the zero-sized selector
//! [`Ix<N>`]. Selecting a type that is not in the alternative set, or an
//! index beyond the declared arity, simply has no impl and is rejected by
//! the compiler; there is no runtime "unsupported type" condition.
//!
//! The two selector directions mirror each other:
//!
//! - **by type**: name `T` and let the compiler infer the position, which
//!   only succeeds when `T` occurs at exactly one position;
//! - **by index**: name `Ix<N>` (through the `*_at` methods) and let the
//!   compiler infer the type, which always succeeds for in-range `N`.
//!
//! ```rust
//! use oneof::{Alternative, Ix, OneOf3};
//!
//! type V = OneOf3<u8, bool, u8>;
//!
//! // `u8` occurs twice, so the by-index selector disambiguates:
//! let v = V::of_at::<2, _>(7u8);
//! assert_eq!(v.index(), Some(2));
//! assert_eq!(<V as Alternative<u8, Ix<2>>>::INDEX, 2);
//!
//! // `bool` occurs once, so by-type selection infers the position:
//! let v = V::of(true);
//! assert_eq!(v.index(), Some(1));
//! ```

use crate::error::BadAccessError;

/// Zero-sized by-index selector for the alternative at position `N`.
///
/// `Ix` never appears in stored data; it only disambiguates which
/// [`Alternative`] impl a generic call resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ix<const N: usize>;

/// Registers `T` as the alternative at position `I` of the implementing
/// variant, and provides the tag-checked primitive operations on it.
///
/// Implemented by the `OneOfN` enums for every position; not meant to be
/// implemented outside this crate. The inherent methods on the enums
/// (`get`, `emplace`, …) are thin wrappers that pick the impl via type or
/// index inference.
pub trait Alternative<T, I>: Sized {
  /// Declared position of this alternative, equal to the `N` in `Ix<N>`.
  const INDEX: usize;

  /// Wraps `value` into a variant holding this alternative.
  fn inject(value: T) -> Self;

  /// Drops the current payload (if any), stores `value` as this
  /// alternative, and returns a reference to the stored value. The tag and
  /// payload change together; no intermediate state is observable.
  fn replace(&mut self, value: T) -> &mut T;

  /// Tag-checked shared access to the payload.
  fn alt_ref(&self) -> Result<&T, BadAccessError>;

  /// Tag-checked mutable access to the payload.
  fn alt_mut(&mut self) -> Result<&mut T, BadAccessError>;

  /// Tag-checked move of the payload out of the variant. The variant is
  /// consumed either way; on a tag mismatch the held value is dropped.
  fn into_alt(self) -> Result<T, BadAccessError>;

  /// Shared access that reports a tag mismatch as `None` instead of an
  /// error; never fails.
  fn peek(&self) -> Option<&T>;

  /// Mutable counterpart of [`peek`](Alternative::peek).
  fn peek_mut(&mut self) -> Option<&mut T>;

  /// Returns `true` iff the variant currently holds this alternative.
  fn holds(&self) -> bool;
}
