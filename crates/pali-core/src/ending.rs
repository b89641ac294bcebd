// Inflectional ending encoding
//
// Paradigm tables store endings in a compact notation:
//
//   "0"     -- no ending, the bare stem is the form
//   "-2ṃ"   -- drop the last 2 chars of the stem, then add "ṃ"
//   "ati"   -- join "ati" to the stem through sandhi
//
// Endings are parsed once when a table is loaded, so a malformed deletion
// prefix is reported at load time instead of during table generation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::VocabularyError;
use crate::character::{char_len, drop_last_chars};
use crate::sandhi::SandhiKind;

/// A parsed inflectional ending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Ending {
    /// `0`: the stem itself.
    Bare,
    /// `-N<tail>`: delete `count` chars from the stem, then join `tail`.
    Delete { count: usize, tail: String },
    /// Any other text, joined to the stem through sandhi.
    Append(String),
}

impl Ending {
    /// Builds the surface form for `stem`.
    ///
    /// A deletion longer than the stem leaves the stem untouched and only
    /// joins the tail.
    ///
    /// ```
    /// use pali_core::ending::Ending;
    /// use pali_core::sandhi::SandhiKind;
    ///
    /// let e: Ending = "-2xyz".parse().unwrap();
    /// assert_eq!(e.attach("dhamma", SandhiKind::Word), "dhamxyz");
    /// ```
    pub fn attach(&self, stem: &str, sandhi: SandhiKind) -> String {
        match self {
            Ending::Bare => stem.to_string(),
            Ending::Delete { count, tail } => {
                let base = if char_len(stem) >= *count {
                    drop_last_chars(stem, *count)
                } else {
                    stem
                };
                sandhi.join(base, tail)
            }
            Ending::Append(text) => sandhi.join(stem, text),
        }
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Ending::Delete { .. })
    }
}

impl FromStr for Ending {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0" {
            return Ok(Ending::Bare);
        }
        let Some(rest) = s.strip_prefix('-') else {
            return Ok(Ending::Append(s.to_string()));
        };
        let mut chars = rest.chars();
        let count = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| VocabularyError::MalformedEnding(s.to_string()))?;
        Ok(Ending::Delete {
            count: count as usize,
            tail: chars.as_str().to_string(),
        })
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ending::Bare => f.write_str("0"),
            Ending::Delete { count, tail } => write!(f, "-{count}{tail}"),
            Ending::Append(text) => f.write_str(text),
        }
    }
}

impl From<Ending> for String {
    fn from(ending: Ending) -> String {
        ending.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_forms() {
        assert_eq!("0".parse::<Ending>().unwrap(), Ending::Bare);
        assert_eq!(
            "-2ṃ".parse::<Ending>().unwrap(),
            Ending::Delete { count: 2, tail: "ṃ".into() }
        );
        assert_eq!(
            "-1".parse::<Ending>().unwrap(),
            Ending::Delete { count: 1, tail: String::new() }
        );
        assert_eq!("ati".parse::<Ending>().unwrap(), Ending::Append("ati".into()));
    }

    #[test]
    fn malformed_deletion_is_rejected() {
        assert!("-".parse::<Ending>().is_err());
        assert!("-xa".parse::<Ending>().is_err());
    }

    #[test]
    fn deletion_then_sandhi() {
        let e: Ending = "-2xyz".parse().unwrap();
        assert_eq!(e.attach("dhamma", SandhiKind::Root), "dhamxyz");
        let e: Ending = "-1ā".parse().unwrap();
        assert_eq!(e.attach("gacchanta", SandhiKind::Word), "gacchantā");
    }

    #[test]
    fn deletion_longer_than_stem_keeps_stem() {
        let e: Ending = "-5a".parse().unwrap();
        assert_eq!(e.attach("ka", SandhiKind::Root), "kā");
    }

    #[test]
    fn bare_and_append() {
        assert_eq!(Ending::Bare.attach("paca", SandhiKind::Root), "paca");
        let e: Ending = "ti".parse().unwrap();
        assert_eq!(e.attach("paca", SandhiKind::Root), "pacati");
    }

    #[test]
    fn display_round_trips() {
        for text in ["0", "-2ṃ", "āya", "-3ntā"] {
            let e: Ending = text.parse().unwrap();
            assert_eq!(e.to_string(), text);
        }
    }

    proptest! {
        #[test]
        fn attach_is_total(stem in "[a-zāīūṃ]{0,8}", spec in "(0|-[0-9][a-zā]{0,3}|[a-zāīū]{0,4})") {
            let e: Ending = spec.parse().unwrap();
            let _ = e.attach(&stem, SandhiKind::Root);
            let _ = e.attach(&stem, SandhiKind::Word);
        }
    }
}
