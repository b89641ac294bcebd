// Root catalog
//
// Two files describe roots:
//
//   roots.csv     id:root:group:main:other:derivation
//                 the conjugable roots with their stem specifications
//   rootlist.csv  id:root[remark]:paliMeaning[remark]:english:group
//                 glosses, matched to catalog roots by id
//
// Root text may carry a `+` joining a prefix (`saṃ+kar`), which is why
// search also matches right after a `+`.

use indexmap::IndexMap;
use pali_core::enums::RootGroup;
use pali_tables::format::data_lines;

use super::Root;
use crate::data::{ROOT_GLOSS_FILE, ROOTS_FILE};
use crate::error::GrammarError;

/// Roots keyed by root text, in file order.
#[derive(Debug, Clone, Default)]
pub struct RootCatalog {
    roots: IndexMap<String, Root>,
}

impl RootCatalog {
    /// Parses a root catalog file.
    pub fn from_text(text: &str) -> Result<Self, GrammarError> {
        let mut roots = IndexMap::new();
        for (line, entry) in data_lines(text) {
            let root = parse_root_line(line, entry)?;
            roots.insert(root.text().to_string(), root);
        }
        tracing::debug!(roots = roots.len(), "loaded root catalog");
        Ok(RootCatalog { roots })
    }

    /// Attaches glosses from a gloss list to the roots with matching ids.
    /// Returns how many roots received a gloss.
    pub fn attach_glosses(&mut self, text: &str) -> Result<usize, GrammarError> {
        let mut by_id: IndexMap<u32, RootGloss> = IndexMap::new();
        for (line, entry) in data_lines(text) {
            let gloss = RootGloss::parse(line, entry)?;
            by_id.insert(gloss.id, gloss);
        }
        let mut attached = 0;
        for root in self.roots.values_mut() {
            if let Some(gloss) = by_id.get(&root.id()) {
                root.pali_meaning.clone_from(&gloss.pali_meaning);
                root.eng_meaning.clone_from(&gloss.eng_meaning);
                root.root_remark.clone_from(&gloss.root_remark);
                root.meaning_remark.clone_from(&gloss.meaning_remark);
                attached += 1;
            }
        }
        tracing::debug!(glosses = by_id.len(), attached, "attached root glosses");
        Ok(attached)
    }

    pub fn get(&self, text: &str) -> Option<&Root> {
        self.roots.get(text)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Root> {
        self.roots.values().find(|r| r.id() == id)
    }

    /// Roots whose text starts with `filter` or has `filter` right after a
    /// `+`, ordered by id. An empty filter lists every root.
    pub fn search(&self, filter: &str) -> Vec<&Root> {
        let prefixed = format!("+{filter}");
        let mut found: Vec<&Root> = self
            .roots
            .values()
            .filter(|r| r.text().starts_with(filter) || r.text().contains(&prefixed))
            .collect();
        found.sort_by_key(|r| r.id());
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &Root> {
        self.roots.values()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

fn catalog_error(file: &'static str, line: usize, reason: impl Into<String>) -> GrammarError {
    GrammarError::Catalog {
        file,
        line,
        reason: reason.into(),
    }
}

fn parse_id(file: &'static str, line: usize, field: &str) -> Result<u32, GrammarError> {
    field
        .trim()
        .parse()
        .map_err(|_| catalog_error(file, line, format!("bad root id {field:?}")))
}

fn parse_group(file: &'static str, line: usize, field: &str) -> Result<RootGroup, GrammarError> {
    field
        .trim()
        .parse()
        .map_err(|e: pali_core::VocabularyError| catalog_error(file, line, e.to_string()))
}

fn parse_root_line(line: usize, entry: &str) -> Result<Root, GrammarError> {
    let fields: Vec<&str> = entry.split(':').collect();
    let [id, text, group, main, other, derivation] = fields.as_slice() else {
        return Err(catalog_error(
            ROOTS_FILE,
            line,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    };
    let id = parse_id(ROOTS_FILE, line, id)?;
    let group = parse_group(ROOTS_FILE, line, group)?;
    Root::parse(id, text, group, main, other, derivation)
}

/// One line of the gloss list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RootGloss {
    id: u32,
    pali_meaning: String,
    eng_meaning: String,
    root_remark: String,
    meaning_remark: String,
}

impl RootGloss {
    fn parse(line: usize, entry: &str) -> Result<Self, GrammarError> {
        let fields: Vec<&str> = entry.split(':').collect();
        let [id, text, pali, eng, group] = fields.as_slice() else {
            return Err(catalog_error(
                ROOT_GLOSS_FILE,
                line,
                format!("expected 5 fields, found {}", fields.len()),
            ));
        };
        parse_group(ROOT_GLOSS_FILE, line, group)?;
        let (_, root_remark) = split_remark(text);
        let (pali_meaning, meaning_remark) = split_remark(pali);
        Ok(RootGloss {
            id: parse_id(ROOT_GLOSS_FILE, line, id)?,
            pali_meaning,
            eng_meaning: eng.to_string(),
            root_remark,
            meaning_remark,
        })
    }
}

/// Splits `text[remark]rest` into `("textrest", "remark")`.
fn split_remark(field: &str) -> (String, String) {
    let Some((head, tail)) = field.split_once('[') else {
        return (field.to_string(), String::new());
    };
    match tail.split_once(']') {
        Some((remark, rest)) => (format!("{head}{rest}"), remark.to_string()),
        None => (head.to_string(), tail.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pali_core::enums::{TenseMood, Voice};

    const ROOTS: &str = "\
# id:root:group:main:other:derivation
1:pac:I:paca.0|paca.0|paca.0|papaca.0|apaca.0|apaci.0|pacissa.0|apacissa.0:pacciy;pāc:-;-;-;-;pakk;pacitvā
7:saṃ+bhū:I:sambhava.0|sambhava.0|sambhave.0|||sambhavi.0|sambhavissa.0|:-;-:-;-;-;-;-;-
3:bhuj:VII:bhuñja.0|bhuñja.0|bhuñje.0|||bhuñji.0|bhuñjissa.0|:bhuñjiy;bhojāp:-;-;-;-;bhutt;bhutvā
";

    #[test]
    fn loads_roots_by_text() {
        let catalog = RootCatalog::from_text(ROOTS).unwrap();
        assert_eq!(catalog.len(), 3);
        let pac = catalog.get("pac").unwrap();
        assert_eq!(pac.id(), 1);
        assert_eq!(pac.group(), RootGroup::I);
        assert_eq!(pac.stems(Voice::Active, TenseMood::Vat), ["paca"]);
        assert_eq!(catalog.find_by_id(3).unwrap().text(), "bhuj");
        assert!(catalog.get("gam").is_none());
    }

    #[test]
    fn search_by_prefix_and_after_plus() {
        let catalog = RootCatalog::from_text(ROOTS).unwrap();
        let texts = |f: &str| catalog.search(f).into_iter().map(Root::text).collect::<Vec<_>>();
        assert_eq!(texts("bh"), ["bhuj", "saṃ+bhū"]);
        assert_eq!(texts("pa"), ["pac"]);
        assert_eq!(texts(""), ["pac", "bhuj", "saṃ+bhū"]);
        assert!(texts("x").is_empty());
    }

    #[test]
    fn glosses_attach_by_id() {
        let mut catalog = RootCatalog::from_text(ROOTS).unwrap();
        let glosses = "1:pac[rare]:pāke[cooking]:to cook:I\n99:gam:gamane:to go:I\n";
        assert_eq!(catalog.attach_glosses(glosses).unwrap(), 1);
        let pac = catalog.get("pac").unwrap();
        assert_eq!(pac.pali_meaning, "pāke");
        assert_eq!(pac.meaning_remark, "cooking");
        assert_eq!(pac.root_remark, "rare");
        assert_eq!(pac.eng_meaning, "to cook");
        assert!(catalog.get("bhuj").unwrap().eng_meaning.is_empty());
    }

    #[test]
    fn malformed_lines_report_file_and_line() {
        let err = RootCatalog::from_text("# c\n1:pac:I:paca.0").unwrap_err();
        assert!(matches!(
            err,
            GrammarError::Catalog { file: ROOTS_FILE, line: 2, .. }
        ));
        let err = RootCatalog::from_text("x:pac:I:a|b|c|d|e|f|g|h:-;-:-;-;-;-;-;-").unwrap_err();
        assert!(err.to_string().contains("bad root id"));
        let err = RootCatalog::from_text("1:pac:IX:a|b|c|d|e|f|g|h:-;-:-;-;-;-;-;-").unwrap_err();
        assert!(matches!(err, GrammarError::Catalog { line: 1, .. }));
        let err = RootCatalog::default().attach_glosses("1:pac:x").unwrap_err();
        assert!(matches!(err, GrammarError::Catalog { file: ROOT_GLOSS_FILE, .. }));
    }

    #[test]
    fn remarks() {
        assert_eq!(split_remark("pāke"), ("pāke".into(), String::new()));
        assert_eq!(split_remark("pāke[x] y"), ("pāke y".into(), "x".into()));
        assert_eq!(split_remark("pac[rare"), ("pac".into(), "rare".into()));
    }
}
