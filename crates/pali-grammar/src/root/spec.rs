// Root stem specification parsing
//
// A root carries three compact strings:
//
//   main        paca.0|paca.0|paca.0|papaca.0|apaca.0|apaci.0|pacissa.0|apacissa.0
//               one `|` segment per tense/mood, each a comma list of
//               `stem.paradigm.paradigm...` entries (`0` = generic)
//   other       pacciy;pāc
//               passive stems ; causative bases, both comma lists
//   derivation  -;-;-;-;pakk;pacitvā
//               one `;` field per derivational suffix: `x` suppresses,
//               text longer than one char lists stems, anything else
//               derives automatically
//
// The parsers here only split and validate shape; stem generation lives in
// the parent module and in `derived`.

use pali_core::enums::{DeriPaccaya, TenseMood};
use pali_tables::GENERIC_PARADIGM;

/// One `stem.paradigm...` entry of the main specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemEntry<'a> {
    pub stem: &'a str,
    pub paradigms: Vec<&'a str>,
}

/// Active-voice entries per tense/mood, indexed by [`TenseMood::index`].
pub type MainSpec<'a> = [Vec<StemEntry<'a>>; TenseMood::COUNT];

pub fn parse_main(spec: &str) -> Result<MainSpec<'_>, String> {
    let segments: Vec<&str> = spec.split('|').collect();
    if segments.len() != TenseMood::COUNT {
        return Err(format!(
            "main stems need {} tense segments, found {}",
            TenseMood::COUNT,
            segments.len()
        ));
    }
    let mut result = MainSpec::default();
    for (slot, segment) in result.iter_mut().zip(segments) {
        *slot = segment
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_entry)
            .collect();
    }
    Ok(result)
}

fn parse_entry(entry: &str) -> StemEntry<'_> {
    let mut parts = entry.split('.');
    let stem = parts.next().unwrap_or_default();
    let paradigms = parts
        .filter(|p| !p.is_empty())
        .map(|p| if p == "0" { GENERIC_PARADIGM } else { p })
        .collect();
    StemEntry { stem, paradigms }
}

/// Passive stems and causative bases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherVoiceSpec<'a> {
    pub passive: Vec<&'a str>,
    pub causative_bases: Vec<&'a str>,
}

/// A field only counts when longer than one char, so `-` or `0` stand for
/// "not formed".
fn listed(field: &str) -> Vec<&str> {
    if field.chars().count() <= 1 {
        return Vec::new();
    }
    field
        .split(',')
        .map(str::trim)
        .filter(|s| s.chars().count() > 1)
        .collect()
}

pub fn parse_other(spec: &str) -> Result<OtherVoiceSpec<'_>, String> {
    let fields: Vec<&str> = spec.split(';').collect();
    let [passive, causative] = fields.as_slice() else {
        return Err(format!(
            "other-voice stems need 2 fields, found {}",
            fields.len()
        ));
    };
    Ok(OtherVoiceSpec {
        passive: listed(passive),
        causative_bases: listed(causative),
    })
}

/// How a derivational suffix is formed for a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DerivationField<'a> {
    /// Derive from the voice's present stems.
    #[default]
    Auto,
    /// Not formed.
    Suppressed,
    /// Use these stems.
    Literal(Vec<&'a str>),
}

/// Derivation fields, indexed by [`DeriPaccaya::index`].
pub type DerivationSpec<'a> = [DerivationField<'a>; DeriPaccaya::COUNT];

pub fn parse_derivation(spec: &str) -> Result<DerivationSpec<'_>, String> {
    let fields: Vec<&str> = spec.split(';').collect();
    if fields.len() != DeriPaccaya::COUNT {
        return Err(format!(
            "derivation needs {} fields, found {}",
            DeriPaccaya::COUNT,
            fields.len()
        ));
    }
    let mut result = DerivationSpec::default();
    for (slot, field) in result.iter_mut().zip(fields) {
        let field = field.trim();
        *slot = if field == "x" {
            DerivationField::Suppressed
        } else if field.chars().count() > 1 {
            DerivationField::Literal(listed(field))
        } else {
            DerivationField::Auto
        };
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_spec_entries() {
        let spec = parse_main("paca.0|paca.0.vgena|a|b|c,d.x|e|f|g").unwrap();
        assert_eq!(spec[0], [StemEntry { stem: "paca", paradigms: vec!["generic"] }]);
        assert_eq!(spec[1][0].paradigms, ["generic", "vgena"]);
        assert!(spec[2][0].paradigms.is_empty());
        assert_eq!(spec[4].len(), 2);
        assert_eq!(spec[4][1], StemEntry { stem: "d", paradigms: vec!["x"] });
    }

    #[test]
    fn main_spec_needs_eight_segments() {
        assert!(parse_main("a|b|c").is_err());
        assert!(parse_main("a|b|c|d|e|f|g|h|i").is_err());
    }

    #[test]
    fn empty_tense_segment_has_no_stems() {
        let spec = parse_main("paca.0||||||paci.0|").unwrap();
        assert!(spec[1].is_empty());
        assert!(spec[7].is_empty());
        assert_eq!(spec[6][0].stem, "paci");
    }

    #[test]
    fn other_voice_fields() {
        let spec = parse_other("pacciy,paciy;pāc").unwrap();
        assert_eq!(spec.passive, ["pacciy", "paciy"]);
        assert_eq!(spec.causative_bases, ["pāc"]);

        let spec = parse_other("-;-").unwrap();
        assert!(spec.passive.is_empty());
        assert!(spec.causative_bases.is_empty());

        assert!(parse_other("pacciy").is_err());
        assert!(parse_other("a;b;c").is_err());
    }

    #[test]
    fn derivation_fields() {
        let spec = parse_derivation("x;-;;gam,gant;pakk;pacitvā").unwrap();
        assert_eq!(spec[0], DerivationField::Suppressed);
        assert_eq!(spec[1], DerivationField::Auto);
        assert_eq!(spec[2], DerivationField::Auto);
        assert_eq!(spec[3], DerivationField::Literal(vec!["gam", "gant"]));
        assert_eq!(spec[4], DerivationField::Literal(vec!["pakk"]));
        assert!(parse_derivation("-;-;-").is_err());
    }
}
