#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the EDU PATH workspace.
//!
//! * [`macro@main`] boots an `async fn main` on a runtime profile from `edupath-runtime`.
//! * [`macro@edupath_error`] turns a plain enum into a `thiserror` error with context support.
//! * [`macro@feature_slice`] turns a struct into a cheaply clonable feature slice handle.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros in
//! doctests; the consuming crates carry the real tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro that runs an `async fn main` on a configured Tokio runtime.
///
/// # Arguments
///
/// * `cooperative` - Single-threaded scheduler (the default for UI and tooling).
/// * `high_performance` - Multi-threaded scheduler sized to the host.
/// * `default` - Same as `cooperative`.
///
/// # Examples
///
/// ```rust,ignore
/// #[edupath_runtime::main(cooperative)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines a domain error enum wired into the workspace conventions.
///
/// # Features
///
/// * Adds `#[derive(Debug, thiserror::Error)]` unless already present.
/// * Generates a companion `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * Implements `From<Source>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[edupath_derive::edupath_error]
/// pub enum PaymentError {
///     #[error("Invalid phone number{}: {message}", format_context(.context))]
///     InvalidPhone { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal payment error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn edupath_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it
/// and implements `edupath_kernel::domain::registry::FeatureSlice`.
///
/// # Example
///
/// ```rust,ignore
/// #[edupath_derive::feature_slice]
/// pub struct Matching {
///     pub catalog: Catalog,
/// }
///
/// let slice = Matching::new(MatchingInner { catalog: Catalog::kenya() });
/// assert_eq!(slice.name(), "Matching");
/// ```
#[proc_macro_attribute]
pub fn feature_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
