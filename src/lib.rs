//! # Introduction
//!
//! `bracefmt` substitutes `{n}`-style positional placeholders in a template
//! string with stringified argument values, recovering malformed or
//! incomplete placeholders as literal text instead of failing on ordinary
//! prose.
//!
//! ## Substitution pipeline
//!
//! ```text
//! Template + Values → Scanner → Output string → (optional) Printer / log
//! ```
//!
//! 1. [`value`] — the tagged [`value::Value`] argument model and its
//!    universal stringification rule (`null` for [`value::Value::Null`]).
//! 2. [`interp`] — the placeholder scanner; the only failure it reports is
//!    [`interp::errors::InterpError::IndexOutOfRange`] for a fully-formed
//!    `{n}` with no matching argument.
//! 3. [`print`] — helpers that route interpolated text to an output sink or
//!    the `log` facade, with an explicit separator configuration.
//!
//! ## Recognised tokens
//!
//! `{digits}` resolves to the argument at that zero-based index. The empty
//! token `{}` passes through literally. Everything else, including
//! unterminated and interrupted placeholders, stays literal text.

pub mod interp;
pub mod print;
pub mod value;
