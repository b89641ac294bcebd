// Comparative and superlative degrees of adjectives
//
// Degrees are built by template, not through paradigm tables:
//
//   comparative  <base><ending>tara, <base>iya, ati<base><ending>, adhi<base><ending>
//   superlative  <base><ending>tama, <base>iṭṭha, ativiya<base><ending>
//
// where base is stem + insertion and the -tara/-tama/-iya/-iṭṭha suffixes
// take the gender's final vowel.

use pali_core::enums::Gender;

use super::{Word, transform_ending};

impl Word {
    /// Whether comparative and superlative forms apply: adjectives not in
    /// -t or -r, and not numerals.
    pub fn has_degree(&self) -> bool {
        self.is_adjective()
            && !matches!(self.last(), Some('t' | 'r'))
            && !self.is_number()
    }

    fn degree_base(&self, gender: Gender) -> (String, &str) {
        (
            format!("{}{}", self.stem, self.insertion(gender)),
            self.ending(gender),
        )
    }

    /// Comparative forms for `gender`.
    ///
    /// ```
    /// use pali_core::enums::Gender;
    /// use pali_grammar::word::Word;
    ///
    /// let mut w = Word::new("papa");
    /// w.add_pos_info("adj.");
    /// assert_eq!(
    ///     w.comparative(Gender::Feminine),
    ///     ["papātarā", "papiyā", "atipapā", "adhipapā"]
    /// );
    /// ```
    pub fn comparative(&self, gender: Gender) -> [String; 4] {
        let (base, ending) = self.degree_base(gender);
        [
            format!("{base}{ending}{}", transform_ending("tara", gender)),
            format!("{base}{}", transform_ending("iya", gender)),
            format!("ati{base}{ending}"),
            format!("adhi{base}{ending}"),
        ]
    }

    /// Superlative forms for `gender`.
    pub fn superlative(&self, gender: Gender) -> [String; 3] {
        let (base, ending) = self.degree_base(gender);
        [
            format!("{base}{ending}{}", transform_ending("tama", gender)),
            format!("{base}{}", transform_ending("iṭṭha", gender)),
            format!("ativiya{base}{ending}"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjective(term: &str) -> Word {
        let mut w = Word::new(term);
        w.add_pos_info("adj.");
        w
    }

    #[test]
    fn masculine_degrees() {
        let w = adjective("paṇīta");
        assert_eq!(
            w.comparative(Gender::Masculine),
            ["paṇītatara", "paṇītiya", "atipaṇīta", "adhipaṇīta"]
        );
        assert_eq!(
            w.superlative(Gender::Masculine),
            ["paṇītatama", "paṇītiṭṭha", "ativiyapaṇīta"]
        );
    }

    #[test]
    fn feminine_in_i_uses_insertion() {
        let w = adjective("medhāvī");
        assert_eq!(w.superlative(Gender::Feminine)[0], "medhāvinītamā");
        assert_eq!(w.superlative(Gender::Feminine)[1], "medhāviniṭṭhā");
    }

    #[test]
    fn degree_availability() {
        assert!(adjective("paṇīta").has_degree());
        assert!(!adjective("guṇavant").has_degree());
        assert!(!adjective("kattar").has_degree());
        assert!(!Word::typed("dhamma").has_degree());
        let mut number = adjective("pañca");
        number.add_paradigm("number18");
        assert!(!number.has_degree());
    }
}
