//! The `OneOfN` family: stack-only closed sum types.
//!
//! A `OneOfN` value holds exactly one value out of `N` alternative types
//! fixed at compile time, plus the reserved [`Empty`](OneOf2::Empty) state
//! that a value is left in after [`take`](OneOf2::take) moves its payload
//! out. The enums are plain values: no heap allocation, no internal
//! synchronization, size and alignment equal to the largest alternative
//! plus the discriminant.
//!
//! Every structural guarantee the type makes (one live payload matching
//! the discriminant, destruction exactly once, tag and payload committed
//! together) is carried by the enum representation itself and enforced by
//! the compiler; accessors and visitation only ever read the discriminant.
//!
//! ## Examples
//!
//! Constructing, inspecting, and re-pointing a variant:
//!
//! ```rust
//! use oneof::OneOf2;
//!
//! let mut v: OneOf2<i32, String> = OneOf2::of(42);
//! assert_eq!(v.index(), Some(0));
//! assert_eq!(v.get::<i32, _>(), Ok(&42));
//! assert_eq!(v.get_if::<String, _>(), None);
//!
//! v.emplace(String::from("hi"));
//! assert_eq!(v.index(), Some(1));
//! assert_eq!(v.get::<String, _>().unwrap(), "hi");
//! ```
//!
//! Whole-variant capabilities follow the alternatives: a `OneOfN` is
//! `Clone` only if every alternative is `Clone`, `Ord` only if every
//! alternative is `Ord`, and so on for `Copy`, `Eq`, `Hash`, `Debug`,
//! `Display` and the serde traits.

use core::fmt;
use core::fmt::Display;
use core::mem;

use crate::alt::Alternative;
use crate::alt::Ix;
use crate::error::BadAccessError;
use crate::visit::Visit;
use crate::visit::Visit2;
use crate::visit::Visit3;
use crate::visit::VisitLast;
use crate::visit::VisitMiddle;
use crate::visit::VisitMut;
use crate::visit::VisitOnce;
use crate::visit::VisitRest;

/// Generates one `OneOfN` enum together with its registry impls,
/// accessors, visitation, and comparison layer.
///
/// The `default:` line repeats the first alternative; it drives the
/// `Default` impl, which default-constructs the first declared type.
/// `Empty` is always declared first so that the derived ordering places
/// valueless variants before every live alternative.
/// Generates the per-position [`Alternative`] impls for one `OneOfN`
/// enum, peeling one variant per recursion step. Split out of [`one_of!`]
/// because the generic parameter list cannot be repeated inside the
/// per-variant repetition of a single macro.
macro_rules! one_of_alts {
  ($name:ident<$($ty:ident),+> {}) => {};
  (
    $name:ident<$($ty:ident),+> {
      $var:ident($vty:ident) = $idx:literal
      $(, $rvar:ident($rvty:ident) = $ridx:literal)* $(,)?
    }
  ) => {
    impl<$($ty),+> Alternative<$vty, Ix<$idx>> for $name<$($ty),+> {
      const INDEX: usize = $idx;

      #[inline]
      fn inject(value: $vty) -> Self {
        Self::$var(value)
      }

      #[inline]
      fn replace(&mut self, value: $vty) -> &mut $vty {
        *self = Self::$var(value);
        match self {
          Self::$var(slot) => slot,
          // just written above
          _ => unreachable!(),
        }
      }

      #[inline]
      fn alt_ref(&self) -> Result<&$vty, BadAccessError> {
        match self {
          Self::$var(value) => Ok(value),
          other => Err(BadAccessError::mismatch($idx, other.index())),
        }
      }

      #[inline]
      fn alt_mut(&mut self) -> Result<&mut $vty, BadAccessError> {
        match self {
          Self::$var(value) => Ok(value),
          other => Err(BadAccessError::mismatch($idx, other.index())),
        }
      }

      #[inline]
      fn into_alt(self) -> Result<$vty, BadAccessError> {
        match self {
          Self::$var(value) => Ok(value),
          other => Err(BadAccessError::mismatch($idx, other.index())),
        }
      }

      #[inline]
      fn peek(&self) -> Option<&$vty> {
        match self {
          Self::$var(value) => Some(value),
          _ => None,
        }
      }

      #[inline]
      fn peek_mut(&mut self) -> Option<&mut $vty> {
        match self {
          Self::$var(value) => Some(value),
          _ => None,
        }
      }

      #[inline]
      fn holds(&self) -> bool {
        matches!(self, Self::$var(_))
      }
    }

    one_of_alts! {
      $name<$($ty),+> {
        $($rvar($rvty) = $ridx),*
      }
    }
  };
}

macro_rules! one_of {
  (
    $(#[$meta:meta])*
    $name:ident<$($ty:ident),+> {
      default: $fvar:ident($fty:ident),
      $($var:ident($vty:ident) = $idx:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
    #[cfg_attr(feature = "unwrap", derive(derive_more::Unwrap))]
    pub enum $name<$($ty),+> {
      /// No live value. Reachable only through [`take`](Self::take) or a
      /// panicking [`emplace_with`](Self::emplace_with) closure; every
      /// operation except payload access handles it without failing.
      Empty,
      $(
        #[doc = concat!(
          "The alternative at position ", stringify!($idx), "."
        )]
        $var($vty),
      )+
    }

    impl<$($ty),+> $name<$($ty),+> {
      /// Number of declared alternatives (`Empty` not included).
      pub const ALTERNATIVES: usize = [$(stringify!($var)),+].len();

      /// Constructs a variant from a value of one alternative type.
      ///
      /// The position is inferred from `T`, so `T` must occur exactly once
      /// in the alternative set; otherwise use [`of_at`](Self::of_at).
      /// Types outside the set are rejected at compile time.
      #[inline]
      pub fn of<T, I>(value: T) -> Self
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::inject(value)
      }

      /// Constructs a variant holding the alternative at position `N`.
      #[inline]
      pub fn of_at<const N: usize, T>(value: T) -> Self
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::inject(value)
      }

      /// Position of the live alternative, or `None` when valueless.
      #[inline]
      pub fn index(&self) -> Option<usize> {
        match self {
          Self::Empty => None,
          $(Self::$var(_) => Some($idx),)+
        }
      }

      /// Returns `true` when the variant holds no value.
      #[inline]
      pub fn valueless(&self) -> bool {
        matches!(self, Self::Empty)
      }

      /// Tag-checked shared access to the alternative `T`.
      #[inline]
      pub fn get<T, I>(&self) -> Result<&T, BadAccessError>
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::alt_ref(self)
      }

      /// Tag-checked mutable access to the alternative `T`.
      #[inline]
      pub fn get_mut<T, I>(&mut self) -> Result<&mut T, BadAccessError>
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::alt_mut(self)
      }

      /// Tag-checked move of the alternative `T` out of the variant.
      #[inline]
      pub fn into_alt<T, I>(self) -> Result<T, BadAccessError>
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::into_alt(self)
      }

      /// Tag-checked shared access to the alternative at position `N`.
      #[inline]
      pub fn get_at<const N: usize, T>(&self) -> Result<&T, BadAccessError>
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::alt_ref(self)
      }

      /// Tag-checked mutable access to the alternative at position `N`.
      #[inline]
      pub fn get_mut_at<const N: usize, T>(
        &mut self,
      ) -> Result<&mut T, BadAccessError>
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::alt_mut(self)
      }

      /// Moves the alternative at position `N` out of the variant.
      #[inline]
      pub fn into_alt_at<const N: usize, T>(self) -> Result<T, BadAccessError>
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::into_alt(self)
      }

      /// Like [`get`](Self::get), but reports a tag mismatch as `None`.
      #[inline]
      pub fn get_if<T, I>(&self) -> Option<&T>
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::peek(self)
      }

      /// Mutable counterpart of [`get_if`](Self::get_if).
      #[inline]
      pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::peek_mut(self)
      }

      /// By-index counterpart of [`get_if`](Self::get_if).
      #[inline]
      pub fn get_if_at<const N: usize, T>(&self) -> Option<&T>
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::peek(self)
      }

      /// By-index counterpart of [`get_if_mut`](Self::get_if_mut).
      #[inline]
      pub fn get_if_mut_at<const N: usize, T>(&mut self) -> Option<&mut T>
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::peek_mut(self)
      }

      /// Returns `true` iff the variant currently holds the alternative
      /// `T`.
      #[inline]
      pub fn holds<T, I>(&self) -> bool
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::holds(self)
      }

      /// Returns `true` iff the variant currently holds the alternative
      /// at position `N`. Out-of-range `N` fails to compile.
      #[inline]
      pub fn holds_at<const N: usize, T>(&self) -> bool
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::holds(self)
      }

      /// Drops the current payload (if any) and stores `value` as the
      /// alternative `T`, returning a reference to the stored value.
      #[inline]
      pub fn emplace<T, I>(&mut self, value: T) -> &mut T
      where
        Self: Alternative<T, I>,
      {
        <Self as Alternative<T, I>>::replace(self, value)
      }

      /// By-index counterpart of [`emplace`](Self::emplace).
      #[inline]
      pub fn emplace_at<const N: usize, T>(&mut self, value: T) -> &mut T
      where
        Self: Alternative<T, Ix<N>>,
      {
        <Self as Alternative<T, Ix<N>>>::replace(self, value)
      }

      /// Destructive emplacement: drops the current payload *before*
      /// running `make`, then stores the produced value.
      ///
      /// If `make` panics the variant is left `Empty`: the old value is
      /// already gone and nothing is rolled back. Callers wanting the old
      /// value preserved on failure should build the new value first and
      /// use [`emplace`](Self::emplace).
      #[inline]
      pub fn emplace_with<T, I, F>(&mut self, make: F) -> &mut T
      where
        F: FnOnce() -> T,
        Self: Alternative<T, I>,
      {
        *self = Self::Empty;
        <Self as Alternative<T, I>>::replace(self, make())
      }

      /// By-index counterpart of [`emplace_with`](Self::emplace_with).
      #[inline]
      pub fn emplace_with_at<const N: usize, T, F>(&mut self, make: F) -> &mut T
      where
        F: FnOnce() -> T,
        Self: Alternative<T, Ix<N>>,
      {
        *self = Self::Empty;
        <Self as Alternative<T, Ix<N>>>::replace(self, make())
      }

      /// Moves the payload out, leaving this variant `Empty`.
      ///
      /// This is the one normal-use door into the valueless state; it
      /// stands in for the moved-from variant of the C++ lineage, which
      /// Rust's ownership rules otherwise make unrepresentable.
      #[inline]
      pub fn take(&mut self) -> Self {
        mem::replace(self, Self::Empty)
      }

      /// Exchanges the contents of two variants. Plain value exchange;
      /// concurrent observers must be excluded by the caller, as with any
      /// `&mut` operation.
      #[inline]
      pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
      }

      /// Applies `f` to the live alternative and returns its result.
      ///
      /// `f` must handle every alternative type: a closure when all
      /// alternatives share one parameter type, or a visitor struct with
      /// one [`Visit`] impl per alternative. Dispatch is a single match on
      /// the discriminant. Visiting a valueless variant fails with
      /// [`BadAccessError::Valueless`] before `f` is consulted.
      #[inline]
      pub fn visit<R, F>(&self, mut f: F) -> Result<R, BadAccessError>
      where
        F: $(Visit<$ty, R> +)+
      {
        match self {
          $(Self::$var(v) => Ok(<F as Visit<$vty, R>>::visit(&mut f, v)),)+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }

      /// Mutable-reference counterpart of [`visit`](Self::visit).
      #[inline]
      pub fn visit_mut<R, F>(&mut self, mut f: F) -> Result<R, BadAccessError>
      where
        F: $(VisitMut<$ty, R> +)+
      {
        match self {
          $(
            Self::$var(v) => {
              Ok(<F as VisitMut<$vty, R>>::visit_mut(&mut f, v))
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }

      /// Consuming counterpart of [`visit`](Self::visit); the payload is
      /// passed to `f` by value.
      #[inline]
      pub fn into_visit<R, F>(self, f: F) -> Result<R, BadAccessError>
      where
        F: $(VisitOnce<$ty, R> +)+
      {
        match self {
          $(
            Self::$var(v) => {
              Ok(<F as VisitOnce<$vty, R>>::visit_once(f, v))
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }

      /// Visits this variant and `second` simultaneously: `f` receives
      /// the pair of live alternatives, one combination out of the cross
      /// product of both alternative sets.
      ///
      /// Dispatch is recursive: this match fixes the first alternative,
      /// then `second` dispatches the partially-bound callable, so only
      /// one path runs: one match per variant, chained. Either operand
      /// being valueless fails the visit before `f` runs.
      #[inline]
      pub fn visit2<R, W, F>(
        &self,
        second: &W,
        mut f: F,
      ) -> Result<R, BadAccessError>
      where
        W: $(VisitRest<F, $ty, R> +)+
      {
        match self {
          $(
            Self::$var(first) => {
              <W as VisitRest<F, $vty, R>>::visit_rest(second, &mut f, first)
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }

      /// Three-variant counterpart of [`visit2`](Self::visit2).
      #[inline]
      pub fn visit3<R, W2, W3, F>(
        &self,
        second: &W2,
        third: &W3,
        mut f: F,
      ) -> Result<R, BadAccessError>
      where
        W2: $(VisitMiddle<W3, F, $ty, R> +)+
      {
        match self {
          $(
            Self::$var(first) => {
              <W2 as VisitMiddle<W3, F, $vty, R>>::visit_middle(
                second, third, &mut f, first,
              )
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }
    }

    impl<$($ty),+> Default for $name<$($ty),+>
    where
      $fty: Default,
    {
      /// Defaults to the first declared alternative, default-constructed.
      #[inline]
      fn default() -> Self {
        Self::$fvar(<$fty>::default())
      }
    }

    impl<$($ty: Display),+> Display for $name<$($ty),+> {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
          $(Self::$var(v) => write!(f, "{v}"),)+
          Self::Empty => f.write_str("(empty)"),
        }
      }
    }

    one_of_alts! {
      $name<$($ty),+> {
        $($var($vty) = $idx),+
      }
    }

    impl<F, A, R, $($ty),+> VisitRest<F, A, R> for $name<$($ty),+>
    where
      F: $(Visit2<A, $ty, R> +)+
    {
      fn visit_rest(&self, f: &mut F, first: &A) -> Result<R, BadAccessError> {
        match self {
          $(
            Self::$var(second) => {
              Ok(<F as Visit2<A, $vty, R>>::visit2(f, first, second))
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }
    }

    impl<W, F, A, R, $($ty),+> VisitMiddle<W, F, A, R> for $name<$($ty),+>
    where
      W: $(VisitLast<F, A, $ty, R> +)+
    {
      fn visit_middle(
        &self,
        last: &W,
        f: &mut F,
        first: &A,
      ) -> Result<R, BadAccessError> {
        match self {
          $(
            Self::$var(second) => {
              <W as VisitLast<F, A, $vty, R>>::visit_last(last, f, first, second)
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }
    }

    impl<F, A, B, R, $($ty),+> VisitLast<F, A, B, R> for $name<$($ty),+>
    where
      F: $(Visit3<A, B, $ty, R> +)+
    {
      fn visit_last(
        &self,
        f: &mut F,
        first: &A,
        second: &B,
      ) -> Result<R, BadAccessError> {
        match self {
          $(
            Self::$var(third) => {
              Ok(<F as Visit3<A, B, $vty, R>>::visit3(f, first, second, third))
            }
          )+
          Self::Empty => Err(BadAccessError::Valueless),
        }
      }
    }
  };
}

one_of! {
  /// A value holding exactly one of two alternative types.
  ///
  /// The workhorse of the family; see the [module docs](self) for the
  /// shared behavior and `OneOf3` through `OneOf8` for wider sets.
  ///
  /// # Examples
  ///
  /// ```rust
  /// use oneof::OneOf2;
  ///
  /// let mut v: OneOf2<i32, String> = OneOf2::default();
  /// assert_eq!(v, OneOf2::of(0));
  ///
  /// v.emplace(String::from("text"));
  /// assert!(v.holds::<String, _>());
  /// assert_eq!(v.index(), Some(1));
  /// ```
  ///
  /// Moving the payload out leaves the variant valueless:
  ///
  /// ```rust
  /// use oneof::OneOf2;
  ///
  /// let mut v: OneOf2<i32, String> = OneOf2::of(5);
  /// let moved = v.take();
  /// assert!(v.valueless());
  /// assert_eq!(v.index(), None);
  /// assert_eq!(moved.into_alt::<i32, _>(), Ok(5));
  /// ```
  OneOf2<T0, T1> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
  }
}

one_of! {
  /// A value holding exactly one of three alternative types.
  OneOf3<T0, T1, T2> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
  }
}

one_of! {
  /// A value holding exactly one of four alternative types.
  OneOf4<T0, T1, T2, T3> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
    D(T3) = 3,
  }
}

one_of! {
  /// A value holding exactly one of five alternative types.
  OneOf5<T0, T1, T2, T3, T4> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
    D(T3) = 3,
    E(T4) = 4,
  }
}

one_of! {
  /// A value holding exactly one of six alternative types.
  OneOf6<T0, T1, T2, T3, T4, T5> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
    D(T3) = 3,
    E(T4) = 4,
    F(T5) = 5,
  }
}

one_of! {
  /// A value holding exactly one of seven alternative types.
  OneOf7<T0, T1, T2, T3, T4, T5, T6> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
    D(T3) = 3,
    E(T4) = 4,
    F(T5) = 5,
    G(T6) = 6,
  }
}

one_of! {
  /// A value holding exactly one of eight alternative types, the widest
  /// arity in the family.
  OneOf8<T0, T1, T2, T3, T4, T5, T6, T7> {
    default: A(T0),
    A(T0) = 0,
    B(T1) = 1,
    C(T2) = 2,
    D(T3) = 3,
    E(T4) = 4,
    F(T5) = 5,
    G(T6) = 6,
    H(T7) = 7,
  }
}

#[cfg(test)]
mod tests {
  use alloc::rc::Rc;
  use alloc::string::String;
  use alloc::string::ToString;
  use alloc::vec::Vec;
  use core::cell::Cell;
  use core::cell::RefCell;

  use super::*;

  /// Increments a shared counter when dropped; for exactly-once
  /// destruction checks.
  #[derive(Clone)]
  struct Tracked(Rc<Cell<usize>>);

  impl Drop for Tracked {
    fn drop(&mut self) {
      self.0.set(self.0.get() + 1);
    }
  }

  /// Appends to a shared event log when dropped; for destruction-order
  /// checks.
  struct Logged {
    log: Rc<RefCell<Vec<&'static str>>>,
    name: &'static str,
  }

  impl Drop for Logged {
    fn drop(&mut self) {
      self.log.borrow_mut().push(self.name);
    }
  }

  #[test]
  fn default_is_the_first_alternative() {
    let v: OneOf2<i32, String> = OneOf2::default();
    assert_eq!(v.index(), Some(0));
    assert_eq!(v, OneOf2::of(0));

    let w: OneOf3<u8, bool, u16> = OneOf3::default();
    assert_eq!(w, OneOf3::of(0u8));
  }

  #[test]
  fn construct_and_read_back_the_int_string_scenario() {
    let mut v: OneOf2<i32, String> = OneOf2::of(42);
    assert_eq!(v.index(), Some(0));
    assert_eq!(v.get::<i32, _>(), Ok(&42));
    assert_eq!(v.get_if::<String, _>(), None);

    v.emplace(String::from("hi"));
    assert_eq!(v.index(), Some(1));
    assert_eq!(v.get::<String, _>().unwrap(), "hi");
    assert_eq!(v.get_if::<i32, _>(), None);
  }

  #[test]
  fn arity_constant_matches_the_declared_count() {
    assert_eq!(OneOf2::<u8, u8>::ALTERNATIVES, 2);
    assert_eq!(OneOf5::<u8, u8, u8, u8, u8>::ALTERNATIVES, 5);
    assert_eq!(
      OneOf8::<u8, u8, u8, u8, u8, u8, u8, u8>::ALTERNATIVES,
      8
    );
  }

  #[test]
  fn wrong_index_access_reports_both_positions() {
    let v: OneOf2<i32, String> = OneOf2::of(42);
    assert_eq!(
      v.get_at::<1, String>(),
      Err(BadAccessError::Mismatch { expected: 1, held: 0 })
    );
    assert_eq!(v.get_if_at::<1, String>(), None);
  }

  #[test]
  fn mutable_access_edits_the_payload() {
    let mut v: OneOf3<u8, i64, bool> = OneOf3::of(5i64);
    *v.get_mut::<i64, _>().unwrap() += 1;
    assert_eq!(v.get::<i64, _>(), Ok(&6));
    if let Some(b) = v.get_if_mut::<bool, _>() {
      *b = true;
      panic!("variant does not hold a bool");
    }
  }

  #[test]
  fn into_alt_moves_the_payload_or_reports_the_mismatch() {
    let v: OneOf2<i32, String> = OneOf2::of(String::from("owned"));
    assert_eq!(v.into_alt::<String, _>(), Ok(String::from("owned")));

    let v: OneOf2<i32, String> = OneOf2::of(3);
    assert_eq!(
      v.into_alt::<String, _>(),
      Err(BadAccessError::Mismatch { expected: 1, held: 0 })
    );
  }

  #[test]
  fn holds_checks_type_and_index() {
    let v: OneOf3<u8, bool, u16> = OneOf3::of(true);
    assert!(v.holds::<bool, _>());
    assert!(!v.holds::<u8, _>());
    assert!(v.holds_at::<1, _>());
    assert!(!v.holds_at::<2, _>());
  }

  #[test]
  fn take_leaves_the_variant_valueless() {
    let mut v: OneOf2<i32, String> = OneOf2::of(String::from("x"));
    let moved = v.take();
    assert!(v.valueless());
    assert_eq!(v.index(), None);
    assert_eq!(moved.index(), Some(1));
    // structural operations on a valueless variant stay safe
    assert_eq!(v.get::<String, _>(), Err(BadAccessError::Valueless));
    assert_eq!(v.clone(), v);
    v.emplace(7);
    assert_eq!(v.index(), Some(0));
  }

  #[test]
  fn cloning_a_valueless_variant_stays_valueless() {
    let empty = OneOf2::<i32, String>::Empty;
    let copy = empty.clone();
    assert!(copy.valueless());
  }

  #[test]
  fn payload_is_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    {
      let v: OneOf2<Tracked, u8> = OneOf2::of(Tracked(drops.clone()));
      let _ = &v;
    }
    assert_eq!(drops.get(), 1);
  }

  #[test]
  fn clone_and_move_round_trips_drop_each_copy_once() {
    let drops = Rc::new(Cell::new(0));
    {
      let a: OneOf2<Tracked, u8> = OneOf2::of(Tracked(drops.clone()));
      let b = a.clone();
      let c = b; // move, no new value
      assert_eq!(c.index(), Some(0));
      drop(a);
      assert_eq!(drops.get(), 1);
    }
    assert_eq!(drops.get(), 2);
  }

  #[test]
  fn taking_the_payload_does_not_double_drop() {
    let drops = Rc::new(Cell::new(0));
    let mut v: OneOf2<Tracked, u8> = OneOf2::of(Tracked(drops.clone()));
    let moved = v.take();
    drop(v);
    assert_eq!(drops.get(), 0);
    drop(moved);
    assert_eq!(drops.get(), 1);
  }

  #[test]
  fn emplace_drops_the_old_value_before_constructing_the_new() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut v: OneOf2<Logged, Logged> = OneOf2::of_at::<0, _>(Logged {
      log: log.clone(),
      name: "drop old",
    });

    let outer = log.clone();
    v.emplace_with_at::<1, _, _>(|| {
      outer.borrow_mut().push("construct new");
      Logged { log: outer.clone(), name: "drop new" }
    });
    assert_eq!(&*log.borrow(), &["drop old", "construct new"]);
    assert_eq!(v.index(), Some(1));

    drop(v);
    assert_eq!(&*log.borrow(), &["drop old", "construct new", "drop new"]);
  }

  #[test]
  fn emplace_with_panic_leaves_the_variant_valueless() {
    let mut v: OneOf2<i32, String> = OneOf2::of(1);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      v.emplace_with::<i32, _, _>(|| panic!("construction failed"));
    }));
    assert!(result.is_err());
    assert!(v.valueless());
  }

  #[test]
  fn equality_follows_tag_then_value() {
    type V = OneOf2<i32, String>;

    assert_eq!(V::Empty, V::Empty);
    assert_ne!(V::Empty, V::of(0));
    assert_ne!(V::of(1), V::of(String::from("1")));
    assert_ne!(V::of(1), V::of(2));
    assert_eq!(V::of(2), V::of(2));
    assert_eq!(V::default(), V::default());
  }

  #[test]
  fn equal_duplicate_types_at_different_positions_are_unequal() {
    let lo: OneOf2<u8, u8> = OneOf2::of_at::<0, _>(1);
    let hi: OneOf2<u8, u8> = OneOf2::of_at::<1, _>(1);
    assert_ne!(lo, hi);
  }

  #[test]
  fn ordering_is_by_tag_before_payload() {
    type V = OneOf2<u8, u8>;

    // lower tag wins regardless of payload
    let a: V = OneOf2::of_at::<0, _>(200);
    let b: V = OneOf2::of_at::<1, _>(1);
    assert!(a < b);
    assert!(b > a);

    // valueless orders before every live alternative, and not before
    // itself
    assert!(V::Empty < a);
    assert!(!(V::Empty < V::Empty));
    assert!(V::Empty <= V::Empty);

    // equal tags delegate to the payload
    let c: V = OneOf2::of_at::<0, _>(5);
    let d: V = OneOf2::of_at::<0, _>(9);
    assert!(c < d);
  }

  #[test]
  fn swap_exchanges_the_contents() {
    let mut a: OneOf2<i32, String> = OneOf2::of(1);
    let mut b: OneOf2<i32, String> = OneOf2::of(String::from("a"));
    a.swap(&mut b);
    assert_eq!(a.get::<String, _>().unwrap(), "a");
    assert_eq!(b.get::<i32, _>(), Ok(&1));
  }

  #[test]
  fn display_delegates_to_the_live_alternative() {
    let v: OneOf2<i32, String> = OneOf2::of(42);
    assert_eq!(v.to_string(), "42");
    let v: OneOf2<i32, String> = OneOf2::of(String::from("hi"));
    assert_eq!(v.to_string(), "hi");
    assert_eq!(OneOf2::<i32, String>::Empty.to_string(), "(empty)");
  }

  #[test]
  fn wide_arities_index_and_access() {
    let v: OneOf8<u8, u16, u32, u64, i8, i16, i32, i64> = OneOf8::of(-1i64);
    assert_eq!(v.index(), Some(7));
    assert_eq!(v.get_at::<7, i64>(), Ok(&-1));
    assert!(v.holds_at::<7, _>());

    let w: OneOf8<u8, u16, u32, u64, i8, i16, i32, i64> =
      OneOf8::of_at::<4, _>(-2i8);
    assert_eq!(w.index(), Some(4));
    assert!(v > w || v < w);
  }

  #[cfg(feature = "is_variant")]
  #[test]
  fn is_variant_predicates_follow_the_tag() {
    let v: OneOf2<i32, String> = OneOf2::of(1);
    assert!(v.is_a());
    assert!(!v.is_b());
    assert!(!v.is_empty());
    assert!(OneOf2::<i32, String>::Empty.is_empty());
  }

  #[cfg(feature = "unwrap")]
  #[test]
  fn unwrap_extracts_the_named_alternative() {
    let v: OneOf2<i32, String> = OneOf2::of(String::from("x"));
    assert_eq!(v.unwrap_b(), "x");
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serde_round_trips_the_live_alternative() {
    let v: OneOf2<i32, String> = OneOf2::of(String::from("hi"));
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"B":"hi"}"#);
    let back: OneOf2<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);

    let json = serde_json::to_string(&OneOf2::<i32, String>::Empty).unwrap();
    assert_eq!(json, r#""Empty""#);
  }
}
