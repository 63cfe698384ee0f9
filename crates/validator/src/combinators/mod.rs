//! Combinators for composing validators.
//!
//! | Combinator | Input seen by each step | On failure |
//! |------------|-------------------------|------------|
//! | [`Pipe`]   | previous step's output  | stop, keep earlier warnings |
//! | [`All`]    | original input          | run everything, collect all issues |
//! | [`Any`]    | original input          | try the next alternative |
//! | [`Optional`] | original input, skipped for `null` | delegate |
//! | [`When`]   | original input, skipped when the predicate is false | delegate |
//! | [`Transform`] | original input     | pass failure through |
//! | [`WithPath`] | original input, deeper field path | delegate |
//! | [`Each`]   | each array element, under its index | collect all element issues |
//!
//! Binary forms are built with [`ValidateExt`](crate::foundation::ValidateExt)
//! methods or the free functions below; runtime lists of boxed validators
//! use [`pipe_all`], [`all_of`] and [`any_of`].

pub mod all;
pub mod any;
pub mod each;
pub mod optional;
pub mod pass;
pub mod pipe;
pub mod transform;
pub mod when;
pub mod with_path;

pub use all::{All, AllOf, all, all_of};
pub use any::{Any, AnyOf, any, any_of};
pub use each::{Each, each};
pub use optional::{Optional, optional};
pub use pass::{PassThrough, pass_through};
pub use pipe::{Pipe, PipeAll, pipe, pipe_all};
pub use transform::{Transform, transform};
pub use when::{When, when};
pub use with_path::{WithPath, with_path};
