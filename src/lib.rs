//! # oneof
//!
//! ### Stack-only closed sum types with checked access and visitation
//!
//! This crate provides the `OneOfN` family of types ([`OneOf2`] through
//! [`OneOf8`]): plain values that hold exactly one value out of a fixed,
//! closed set of alternative types, selected at compile time. They are
//! tagged unions the way Rust natively spells them (enums with one
//! payload variant per alternative), so the compiler, not the library,
//! guarantees that the live value always matches the tag, is destroyed
//! exactly once, and never needs the heap.
//!
//! ---
//!
//! ## Construction & access
//!
//! Alternatives are addressed **by type** (when the type occurs once in
//! the set) or **by index** (always unambiguous), both checked at compile
//! time through the [`Alternative`] registry trait; reading through the
//! wrong alternative fails at runtime with a [`BadAccessError`] that names
//! the expected and held positions.
//!
//! ```rust
//! use oneof::OneOf2;
//!
//! let mut v: OneOf2<i32, String> = OneOf2::of(42);
//! assert_eq!(v.index(), Some(0));
//! assert_eq!(v.get::<i32, _>(), Ok(&42));
//!
//! v.emplace(String::from("hi"));
//! assert_eq!(v.get_at::<1, String>().unwrap(), "hi");
//! ```
//!
//! ## Visitation
//!
//! [`visit`](OneOf2::visit) dispatches a callable to the live alternative
//! without the caller matching on the tag; [`visit2`](OneOf2::visit2) and
//! [`visit3`](OneOf2::visit3) do the same across the cross product of two
//! or three variants at once. See the [`visit`](crate::visit) module.
//!
//! ## The valueless state
//!
//! [`take`](OneOf2::take) moves the payload out and leaves the variant
//! `Empty`: a legitimate, observable state that every structural operation
//! (assignment, comparison, drop) handles without failing, while payload
//! access and visitation report it as [`BadAccessError::Valueless`].
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The types are plain stack values and perform no allocation and no I/O;
//! the crate is `no_std` by default and suitable for embedded use.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When
//!   disabled, which is the default, the crate operates in `no_std` mode.
//! - `serde`†: Serialization and deserialization of variants whose
//!   alternatives support it.
//! - `is_variant`†: Per-alternative `is_*` predicates via `derive_more`.
//! - `unwrap`†: Panicking `unwrap_*` extractors via `derive_more`.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod alt;
pub mod error;
pub mod one_of;
pub mod visit;

pub use alt::*;
pub use error::*;
pub use one_of::*;
pub use visit::*;
