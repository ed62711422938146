//! Positional-placeholder scanner
//!
//! Walks a template string character by character and substitutes `{n}`
//! argument references with the stringified value at that position.
//! Malformed placeholders never fail: an unterminated `{`, a digit run
//! interrupted by a stray character, or non-numeric brace content all
//! degrade to literal text. The only failure is a syntactically complete
//! placeholder whose index falls outside the argument list.
//!
//! # Recovery
//!
//! When a digit scan is cancelled, the held `{` and any accumulated digits
//! are emitted as plain text and the interrupting character is re-read as
//! if freshly encountered outside a placeholder. A second `{` therefore
//! restarts placeholder scanning, so `{0{1}}` resolves the inner `{1}`
//! while the outer fragment stays literal.
//!
//! The empty token `{}` is a deliberate literal passthrough, not an
//! argument reference.

use super::errors::InterpError;
use crate::value::Value;

/// Interpolate `template` against `args`, resolving `{n}` placeholders.
///
/// ```
/// use bracefmt::args;
/// use bracefmt::interp::scanner::interpolate;
///
/// let out = interpolate("{0} {1}!", &args!["Hello", "World"]).unwrap();
/// assert_eq!(out, "Hello World!");
/// ```
pub fn interpolate(template: &str, args: &[Value]) -> Result<String, InterpError> {
    Interpolator::new(template, args).run()
}

/// Single-pass scanner over one template
///
/// All state is local to one call: the cursor, the pending-index buffer,
/// and the output buffer are created in [`Interpolator::new`] and consumed
/// by [`Interpolator::run`]. Nothing is shared across calls.
pub struct Interpolator<'a> {
    input: Vec<char>,
    position: usize,
    args: &'a [Value],
    output: String,
}

impl<'a> Interpolator<'a> {
    /// Create a scanner for the given template and argument list.
    pub fn new(template: &str, args: &'a [Value]) -> Self {
        Self {
            input: template.chars().collect(),
            position: 0,
            args,
            output: String::with_capacity(template.len()),
        }
    }

    /// Scan the entire template and return the substituted text.
    pub fn run(mut self) -> Result<String, InterpError> {
        while let Some(ch) = self.advance() {
            if ch == '{' {
                self.open_brace()?;
            } else {
                self.output.push(ch);
            }
        }
        Ok(self.output)
    }

    /// Handle a `{` just consumed outside any placeholder.
    ///
    /// Loops because a cancelled digit scan may itself end on a `{`, which
    /// gets the full outside treatment again (end-of-input check, empty
    /// escape check, fresh index scan).
    fn open_brace(&mut self) -> Result<(), InterpError> {
        loop {
            match self.peek() {
                // A `{` as the last character stays literal
                None => {
                    self.output.push('{');
                    return Ok(());
                }
                // `{}` is the empty-placeholder escape, passed through
                Some('}') => {
                    self.advance();
                    self.output.push_str("{}");
                    return Ok(());
                }
                Some(_) => {}
            }

            if !self.scan_index()? {
                return Ok(());
            }
        }
    }

    /// Consume digits after a held `{` until the placeholder resolves,
    /// cancels, or the input ends.
    ///
    /// Returns `true` only when the cancelling character was itself a `{`,
    /// which the caller re-processes from the outside state.
    fn scan_index(&mut self) -> Result<bool, InterpError> {
        let mut pending = String::new();

        while let Some(ch) = self.advance() {
            if ch.is_ascii_digit() {
                pending.push(ch);
                continue;
            }

            if ch == '}' {
                // A digit run too long for usize is out of range for any
                // argument list, so saturating is the honest answer.
                let index = pending.parse::<usize>().unwrap_or(usize::MAX);
                if index >= self.args.len() {
                    return Err(InterpError::IndexOutOfRange {
                        index,
                        len: self.args.len(),
                    });
                }
                self.output.push_str(&self.args[index].to_string());
                return Ok(false);
            }

            // Cancelled: the held `{` and accumulated digits degrade to
            // literal text, and `ch` is re-read as ordinary input
            self.output.push('{');
            self.output.push_str(&pending);
            if ch == '{' {
                return Ok(true);
            }
            self.output.push(ch);
            return Ok(false);
        }

        // End of input with the placeholder still open: flush it literal
        self.output.push('{');
        self.output.push_str(&pending);
        Ok(false)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }
}
