//! Template interpolation engine
//!
//! This module provides the core substitution logic:
//! - [`scanner`]: the positional-placeholder scanner (template → text)
//! - [`errors`]: the engine's error type
//!
//! # Grammar
//!
//! A placeholder is `{`, one or more ASCII digits, `}`; the digits are a
//! zero-based index into the argument list. The two-character token `{}`
//! passes through literally. Everything that fails to parse as either
//! recovers to literal text rather than failing:
//! - a `{` as the final character
//! - a digit run cut off by end of input
//! - a digit run interrupted by any non-digit, non-`}` character
//!
//! Strictness is reserved for placeholders that do parse: a complete `{n}`
//! whose index has no matching argument aborts with an error, since that
//! is a template/argument mismatch at the call site.

pub mod errors;
pub mod scanner;
