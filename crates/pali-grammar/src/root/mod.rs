// Verb roots and their stems
//
// A root is parsed once from its three specification strings (see `spec`)
// into per-voice stem tables:
//
// - stems per tense/mood, in listed order
// - the paradigm names each stem follows
// - derived stems per derivational suffix (see `derived`)
//
// The active voice is always present. Passive, causative and causal-passive
// exist only when the root forms them, and never for the perfect or the
// imperfect.

pub mod catalog;
pub mod derived;
pub mod spec;

use indexmap::{IndexMap, IndexSet};
use pali_core::character::last_char;
use pali_core::enums::{DeriPaccaya, RootGroup, TenseMood, Voice};
use pali_core::sandhi::root_sandhi;
use serde::Serialize;

use crate::error::GrammarError;
use derived::{DerivedStems, derive_stems};
use spec::{parse_derivation, parse_main, parse_other};

pub use catalog::RootCatalog;

/// Causative stem endings, joined to a causative base by root sandhi.
const CAUSATIVE_ENDINGS: [&str; 4] = ["e", "ay", "āpe", "āpay"];

/// Causal-passive stem endings, parallel to [`CAUSATIVE_ENDINGS`].
const CAUSAL_PASSIVE_ENDINGS: [&str; 4] = ["iy", "ayiy", "āpiy", "āpayiy"];

/// Synthetic paradigms of generated stems.
const PARADIGM_E_STEM: &str = "vgene";
const PARADIGM_A_STEM: &str = "vgena";

// ---------------------------------------------------------------------------
// Per-voice stems
// ---------------------------------------------------------------------------

/// Stems of one voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoiceStems {
    tenses: [Vec<String>; TenseMood::COUNT],
    paradigms: IndexMap<String, IndexSet<String>>,
}

impl VoiceStems {
    /// Candidate stems for a tense/mood, in listed order.
    pub fn stems(&self, tense: TenseMood) -> &[String] {
        &self.tenses[tense.index()]
    }

    /// Paradigm names of a stem, in first-seen order. Empty for unknown stems.
    pub fn paradigms(&self, stem: &str) -> Vec<&str> {
        self.paradigms
            .get(stem)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn add(&mut self, tense: TenseMood, stem: &str, paradigms: &[&str]) {
        self.tenses[tense.index()].push(stem.to_string());
        let set = self.paradigms.entry(stem.to_string()).or_default();
        set.extend(paradigms.iter().map(|p| p.to_string()));
    }

    /// Stems of a generated voice: every tense formed outside the active,
    /// plus augmented `a-` variants in the aorist and conditional.
    fn generated(stems: &[String]) -> Self {
        let mut voice = VoiceStems::default();
        for tense in TenseMood::ALL {
            if !tense.formed_in_derived_voices() {
                continue;
            }
            for stem in stems {
                voice.add(tense, stem, &[generated_paradigm(stem)]);
            }
            if tense.takes_augment() {
                for stem in stems {
                    let augmented = format!("a{stem}");
                    voice.add(tense, &augmented, &[generated_paradigm(stem)]);
                }
            }
        }
        voice
    }

    #[cfg(test)]
    pub(crate) fn with_present(stems: &[&str]) -> Self {
        let mut voice = VoiceStems::default();
        for stem in stems {
            voice.add(TenseMood::Vat, stem, &[]);
        }
        voice
    }
}

fn generated_paradigm(stem: &str) -> &'static str {
    if last_char(stem) == Some('e') {
        PARADIGM_E_STEM
    } else {
        PARADIGM_A_STEM
    }
}

/// Causative and causal-passive stems built from causative bases.
///
/// A base ending in long ā skips the first two endings of each set.
fn causative_stems(bases: &[&str]) -> (Vec<String>, Vec<String>) {
    let mut causative = Vec::new();
    let mut causal_passive = Vec::new();
    for base in bases {
        let skip = if last_char(base) == Some('ā') { 2 } else { 0 };
        causative.extend(CAUSATIVE_ENDINGS[skip..].iter().map(|e| root_sandhi(base, e)));
        causal_passive.extend(
            CAUSAL_PASSIVE_ENDINGS[skip..]
                .iter()
                .map(|e| root_sandhi(base, e)),
        );
    }
    (causative, causal_passive)
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// A verb root with its parsed stems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Root {
    id: u32,
    text: String,
    group: RootGroup,
    pub pali_meaning: String,
    pub eng_meaning: String,
    pub root_remark: String,
    pub meaning_remark: String,
    voices: [Option<VoiceStems>; Voice::COUNT],
    derived: DerivedStems,
}

impl Root {
    /// Parses a root from its main, other-voice and derivation strings.
    ///
    /// ```
    /// use pali_core::enums::{RootGroup, TenseMood, Voice};
    /// use pali_grammar::root::Root;
    ///
    /// let root = Root::parse(
    ///     1, "pac", RootGroup::I,
    ///     "paca.0|paca.0|paca.0|papaca.0|apaca.0|apaci.0|pacissa.0|apacissa.0",
    ///     "pacciy;pāc",
    ///     "-;-;-;-;pakk;pacitvā",
    /// ).unwrap();
    /// assert_eq!(root.stems(Voice::Active, TenseMood::Vat), ["paca"]);
    /// assert!(!root.has_tense_stems(Voice::Causative, TenseMood::Hiy));
    /// ```
    pub fn parse(
        id: u32,
        text: &str,
        group: RootGroup,
        main: &str,
        other: &str,
        derivation: &str,
    ) -> Result<Self, GrammarError> {
        let invalid = |reason: String| GrammarError::StemSpec {
            root: text.to_string(),
            reason,
        };
        let main = parse_main(main).map_err(invalid)?;
        let other = parse_other(other).map_err(invalid)?;
        let derivation = parse_derivation(derivation).map_err(invalid)?;

        let mut active = VoiceStems::default();
        for (tense, entries) in TenseMood::ALL.into_iter().zip(&main) {
            for entry in entries {
                active.add(tense, entry.stem, &entry.paradigms);
            }
        }

        let passive: Vec<String> = other.passive.iter().map(|s| s.to_string()).collect();
        let (causative, causal_passive) = causative_stems(&other.causative_bases);
        let generated = |stems: &[String]| (!stems.is_empty()).then(|| VoiceStems::generated(stems));

        let voices = [
            Some(active),
            generated(&passive),
            generated(&causative),
            generated(&causal_passive),
        ];
        let derived = derive_stems(&derivation, &voices);

        Ok(Root {
            id,
            text: text.to_string(),
            group,
            pali_meaning: String::new(),
            eng_meaning: String::new(),
            root_remark: String::new(),
            meaning_remark: String::new(),
            voices,
            derived,
        })
    }

    /// An ad-hoc root for a typed stem: the generic paradigm in every tense,
    /// a passive in `-iy`, the stem itself as causative base and regular
    /// derived stems.
    pub fn experimental(stem: &str, with_augment: bool) -> Result<Self, GrammarError> {
        let plain = format!("{stem}.0");
        let augmented = if with_augment {
            format!("{plain},a{stem}.0")
        } else {
            plain.clone()
        };
        let main = TenseMood::ALL
            .into_iter()
            .map(|t| if t.is_augmentable() { augmented.as_str() } else { plain.as_str() })
            .collect::<Vec<_>>()
            .join("|");
        let other = format!("{stem}iy;{stem}");
        let derivation = format!("-;-;{stem}anīy;{stem}it;{stem}it;{stem}itvā");
        Root::parse(0, stem, RootGroup::I, &main, &other, &derivation)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn group(&self) -> RootGroup {
        self.group
    }

    /// Stems of a voice, or `None` when the root does not form it.
    pub fn voice(&self, voice: Voice) -> Option<&VoiceStems> {
        self.voices[voice.index()].as_ref()
    }

    /// The first active present stem, the root's citation stem.
    pub fn stem(&self) -> Option<&str> {
        self.stems(Voice::Active, TenseMood::Vat)
            .first()
            .map(String::as_str)
    }

    /// Candidate stems; empty when the voice or tense is not formed.
    pub fn stems(&self, voice: Voice, tense: TenseMood) -> &[String] {
        self.voice(voice).map(|v| v.stems(tense)).unwrap_or_default()
    }

    /// Paradigm names for a stem of a voice.
    pub fn paradigms(&self, voice: Voice, stem: &str) -> Vec<&str> {
        self.voice(voice)
            .map(|v| v.paradigms(stem))
            .unwrap_or_default()
    }

    /// Whether the voice has any stem in any tense/mood.
    pub fn has_stems(&self, voice: Voice) -> bool {
        self.voice(voice)
            .is_some_and(|v| v.tenses.iter().any(|t| !t.is_empty()))
    }

    /// Whether the voice has stems for a tense/mood.
    pub fn has_tense_stems(&self, voice: Voice, tense: TenseMood) -> bool {
        !self.stems(voice, tense).is_empty()
    }

    /// Derived stems for a suffix; empty when not formed.
    pub fn derived_stems(&self, voice: Voice, paccaya: DeriPaccaya) -> &[String] {
        &self.derived[voice.index()][paccaya.index()]
    }

    /// Whether the voice has any derived stem.
    pub fn has_derived_stems(&self, voice: Voice) -> bool {
        self.derived[voice.index()].iter().any(|s| !s.is_empty())
    }

    pub fn has_paccaya_stems(&self, voice: Voice, paccaya: DeriPaccaya) -> bool {
        !self.derived_stems(voice, paccaya).is_empty()
    }
}
