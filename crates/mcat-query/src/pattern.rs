//! Regular expression matching with a single-slot compiled pattern cache.
//!
//! A search compares every record against the same right operand, so remembering the last
//! compiled pattern avoids recompiling it once per record. The slot is thread-local, which
//! keeps concurrent record scans from contending on it.

use std::cell::RefCell;

use regex::Regex;

/// The most recently compiled pattern, keyed by its source text and anchoring.
struct Slot {
    /// Pattern text as supplied by the caller.
    source: String,
    /// Whether the pattern was wrapped to match the whole input.
    anchored: bool,
    /// The compiled expression.
    regex: Regex,
}

thread_local! {
    static LAST_PATTERN: RefCell<Option<Slot>> = const { RefCell::new(None) };
}

/// Compiles a pattern, optionally anchored to match the whole input.
///
/// The bare pattern must compile on its own before it is wrapped, so an unbalanced `)` cannot
/// close the anchoring group early.
pub fn compile(pattern: &str, anchored: bool) -> Result<Regex, regex::Error> {
    let regex = Regex::new(pattern)?;
    if anchored {
        Regex::new(&format!(r"^(?:{pattern})\z"))
    } else {
        Ok(regex)
    }
}

/// Tests `haystack` against `pattern`, reusing the cached compilation when possible.
///
/// With `anchored` set the whole haystack must match; otherwise any match counts. Returns
/// `Err` if the pattern does not compile.
pub fn is_match(pattern: &str, haystack: &str, anchored: bool) -> Result<bool, regex::Error> {
    LAST_PATTERN.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(cached) = slot.as_ref()
            && cached.anchored == anchored
            && cached.source == pattern
        {
            return Ok(cached.regex.is_match(haystack));
        }

        let regex = compile(pattern, anchored)?;
        let matched = regex.is_match(haystack);
        *slot = Some(Slot {
            source: pattern.to_string(),
            anchored,
            regex,
        });
        Ok(matched)
    })
}
