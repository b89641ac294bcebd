// Derived stems for participles and the absolutive
//
// Each voice derives its stems from its own present (Vattamānā) stems. The
// rules are per voice and per suffix, keyed on whether the base stem ends in
// a vowel or a consonant. Any voice/suffix pair without a rule stays empty.

use pali_core::character::{drop_last_chars, is_consonant, is_vowel, last_char};
use pali_core::enums::{DeriPaccaya, TenseMood, Voice};

use super::VoiceStems;
use super::spec::{DerivationField, DerivationSpec};

/// Derived stems per voice and suffix.
pub type DerivedStems = [[Vec<String>; DeriPaccaya::COUNT]; Voice::COUNT];

/// Final letter class of a base stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Final {
    Vowel(char),
    Consonant,
    Other,
}

fn final_of(stem: &str) -> Final {
    match last_char(stem) {
        Some(c) if is_vowel(c) => Final::Vowel(c),
        Some(c) if is_consonant(c) => Final::Consonant,
        _ => Final::Other,
    }
}

fn push_unique(list: &mut Vec<String>, stem: String) {
    if !list.contains(&stem) {
        list.push(stem);
    }
}

/// Builds every voice's derived stems from the parsed derivation fields and
/// the already-populated voice stems.
pub(crate) fn derive_stems(
    spec: &DerivationSpec<'_>,
    voices: &[Option<VoiceStems>; Voice::COUNT],
) -> DerivedStems {
    let mut out = DerivedStems::default();
    active(spec, present(voices, Voice::Active), &mut out[Voice::Active.index()]);
    passive(spec, present(voices, Voice::Passive), &mut out[Voice::Passive.index()]);
    causative(present(voices, Voice::Causative), &mut out[Voice::Causative.index()]);
    causal_passive(
        present(voices, Voice::CausalPassive),
        present(voices, Voice::Causative),
        &mut out[Voice::CausalPassive.index()],
    );
    out
}

fn present(voices: &[Option<VoiceStems>; Voice::COUNT], voice: Voice) -> &[String] {
    voices[voice.index()]
        .as_ref()
        .map(|v| v.stems(TenseMood::Vat))
        .unwrap_or_default()
}

type Slots = [Vec<String>; DeriPaccaya::COUNT];

/// Adds the stems listed for `paccaya`, each followed by its literal stub.
fn literal(spec: &DerivationSpec<'_>, paccaya: DeriPaccaya, slots: &mut Slots) {
    let DerivationField::Literal(stems) = &spec[paccaya.index()] else {
        return;
    };
    for stem in stems {
        push_unique(
            &mut slots[paccaya.index()],
            format!("{stem}{}", paccaya.literal_stub()),
        );
    }
}

fn active(spec: &DerivationSpec<'_>, base: &[String], slots: &mut Slots) {
    for paccaya in [DeriPaccaya::Nta, DeriPaccaya::Mana] {
        match &spec[paccaya.index()] {
            DerivationField::Suppressed => {}
            DerivationField::Literal(_) => literal(spec, paccaya, slots),
            DerivationField::Auto => {
                for stem in base {
                    let derived = match (paccaya, final_of(stem)) {
                        (DeriPaccaya::Nta, Final::Vowel('ā')) => {
                            format!("{}ant", drop_last_chars(stem, 1))
                        }
                        (DeriPaccaya::Nta, Final::Vowel(_)) => format!("{stem}nt"),
                        (DeriPaccaya::Mana, Final::Vowel(_)) => {
                            format!("{}amān", drop_last_chars(stem, 1))
                        }
                        (_, _) => format!("{stem}a{}", paccaya.stem_part()),
                    };
                    push_unique(&mut slots[paccaya.index()], derived);
                }
            }
        }
    }
    // Past participle and absolutive are only ever listed.
    literal(spec, DeriPaccaya::Ta, slots);
    literal(spec, DeriPaccaya::Tva, slots);
}

fn passive(spec: &DerivationSpec<'_>, base: &[String], slots: &mut Slots) {
    for stem in base {
        push_unique(&mut slots[DeriPaccaya::Mana.index()], format!("{stem}amān"));
        push_unique(&mut slots[DeriPaccaya::Ta.index()], format!("{stem}it"));
        push_unique(&mut slots[DeriPaccaya::Tva.index()], format!("{stem}itvā"));
    }
    // Potential participles are passive in sense and listed with the root.
    literal(spec, DeriPaccaya::Aniya, slots);
    literal(spec, DeriPaccaya::Tabba, slots);
}

fn causative(base: &[String], slots: &mut Slots) {
    for stem in base {
        let fin = final_of(stem);
        let nta = match fin {
            Final::Vowel(_) => format!("{stem}nt"),
            _ => format!("{stem}ant"),
        };
        push_unique(&mut slots[DeriPaccaya::Nta.index()], nta);

        if fin == Final::Consonant {
            push_unique(&mut slots[DeriPaccaya::Mana.index()], format!("{stem}amān"));
        }

        let ta = match fin {
            Final::Vowel('e') => format!("{}it", drop_last_chars(stem, 1)),
            Final::Vowel(_) => format!("{stem}t"),
            _ => format!("{stem}it"),
        };
        push_unique(&mut slots[DeriPaccaya::Ta.index()], ta);

        let tva = match fin {
            Final::Vowel(_) => format!("{stem}tvā"),
            _ => format!("{stem}itvā"),
        };
        push_unique(&mut slots[DeriPaccaya::Tva.index()], tva);
    }
}

fn causal_passive(base: &[String], causative_base: &[String], slots: &mut Slots) {
    for stem in base {
        let fin = final_of(stem);
        if fin == Final::Consonant {
            push_unique(&mut slots[DeriPaccaya::Mana.index()], format!("{stem}amān"));
        }
        for (paccaya, part) in [(DeriPaccaya::Ta, "t"), (DeriPaccaya::Tva, "tvā")] {
            let derived = match fin {
                Final::Vowel(_) => format!("{stem}{part}"),
                // -iy is replaced by a bare -i
                _ => format!("{}i{part}", drop_last_chars(stem, 2)),
            };
            push_unique(&mut slots[paccaya.index()], derived);
        }
    }
    // Potential participles of the causal passive come from causative stems.
    for stem in causative_base {
        let fin = final_of(stem);
        if fin == Final::Consonant {
            push_unique(&mut slots[DeriPaccaya::Aniya.index()], format!("{stem}anīy"));
        }
        let tabba = match fin {
            Final::Vowel(_) => format!("{stem}tabb"),
            _ => format!("{stem}itabb"),
        };
        push_unique(&mut slots[DeriPaccaya::Tabba.index()], tabba);
    }
}
