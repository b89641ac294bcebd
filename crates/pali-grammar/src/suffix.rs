// Verb-stem suffixation with the minimum-length guard
//
// A deletion ending applied to a very short stem can collapse it to one or
// two letters. Such forms are never attested, so they are dropped instead
// of being shown. This is a heuristic filter: a long enough form is not
// thereby a correct one.

use pali_core::character::char_len;
use pali_core::ending::Ending;
use pali_core::sandhi::SandhiKind;

/// Shortest surface form a table generator keeps, in letters.
pub const MIN_FORM_LENGTH: usize = 3;

/// Joins `ending` to a verb stem through root sandhi. Returns `None` when the
/// result is shorter than `min_len` letters.
///
/// ```
/// use pali_core::ending::Ending;
/// use pali_grammar::suffix::{MIN_FORM_LENGTH, verb_form};
///
/// let ti: Ending = "ti".parse().unwrap();
/// assert_eq!(verb_form("paca", &ti, MIN_FORM_LENGTH).as_deref(), Some("pacati"));
/// ```
pub fn verb_form(stem: &str, ending: &Ending, min_len: usize) -> Option<String> {
    let form = ending.attach(stem, SandhiKind::Root);
    if char_len(&form) < min_len {
        tracing::trace!(stem, %ending, form = %form, "dropped degenerate form");
        return None;
    }
    Some(form)
}
