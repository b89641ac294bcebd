// pali-decline: Declension tables of Pali nouns, adjectives and pronouns.
//
// A catalog pronoun is declined with its own paradigm. Any other word is
// classified by its ending, unless --pos or --paradigm says otherwise.
//
// Usage:
//   pali-decline [-d DATA_PATH] [OPTIONS] WORD...
//
// Options:
//   -d, --data-path PATH   Data directory containing paradn.csv
//   --gender GENDER        Only this gender (m, f, nt)
//   --pos TAGS             Part-of-speech tags, e.g. "adj." or "m.;nt."
//   --paradigm NAME        Paradigm to decline with (0 for generic)
//   --json                 Print JSON
//   -h, --help             Print help

use pali_core::enums::{Case, Gender, Number};
use pali_grammar::{DeclensionTable, GrammarData, Word};
use serde_json::json;

fn main() {
    pali_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, mut args) =
        pali_cli::parse_data_path(&args).unwrap_or_else(|e| pali_cli::fatal(&e));

    if pali_cli::wants_help(&args) {
        println!("pali-decline: Declension tables of Pali nouns, adjectives and pronouns.");
        println!();
        println!("Usage: pali-decline [-d DATA_PATH] [OPTIONS] WORD...");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing paradn.csv");
        println!("  --gender GENDER        Only this gender (m, f, nt)");
        println!("  --pos TAGS             Part-of-speech tags, e.g. \"adj.\" or \"m.;nt.\"");
        println!("  --paradigm NAME        Paradigm to decline with (0 for generic)");
        println!("  --json                 Print JSON");
        println!("  -h, --help             Print this help");
        return;
    }

    let json_out = pali_cli::take_flag(&mut args, &["--json"]);
    let gender: Option<Gender> =
        pali_cli::take_option(&mut args, "--gender").unwrap_or_else(|e| pali_cli::fatal(&e));
    let pos: Option<String> =
        pali_cli::take_option(&mut args, "--pos").unwrap_or_else(|e| pali_cli::fatal(&e));
    let paradigm: Option<String> =
        pali_cli::take_option(&mut args, "--paradigm").unwrap_or_else(|e| pali_cli::fatal(&e));
    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        pali_cli::fatal(&format!("unknown option {unknown}"));
    }
    if args.is_empty() {
        pali_cli::fatal("no word given (see --help)");
    }

    let data = pali_cli::load_data(data_path.as_deref()).unwrap_or_else(|e| pali_cli::fatal(&e));

    let mut json_entries = Vec::new();
    for term in &args {
        let word = build_word(&data, term, pos.as_deref(), paradigm.as_deref());
        let genders: Vec<Gender> = word
            .genders()
            .iter()
            .copied()
            .filter(|g| gender.is_none_or(|only| only == *g))
            .collect();
        if genders.is_empty() {
            eprintln!("{term}: no gender to decline");
            continue;
        }
        let tables: Vec<DeclensionTable> = genders
            .iter()
            .map(|&g| data.declension(&word, g))
            .collect();

        if json_out {
            let degrees: Vec<_> = if word.has_degree() {
                genders
                    .iter()
                    .map(|&g| {
                        json!({
                            "gender": g,
                            "comparative": word.comparative(g),
                            "superlative": word.superlative(g),
                        })
                    })
                    .collect()
            } else {
                Vec::new()
            };
            json_entries.push(json!({
                "term": word.term(),
                "pos": word.pos_string(),
                "paradigms": word.paradigms(),
                "tables": tables,
                "degrees": degrees,
            }));
            continue;
        }

        println!("{} ({}) [{}]", word.term(), word.pos_string(), word.paradigms().join(", "));
        for table in &tables {
            print_table(table);
            if word.has_degree() {
                println!("    comparative  {}", word.comparative(table.gender).join(", "));
                println!("    superlative  {}", word.superlative(table.gender).join(", "));
            }
        }
    }

    if json_out {
        pali_cli::print_json(&json_entries);
    }
}

fn build_word(data: &GrammarData, term: &str, pos: Option<&str>, paradigm: Option<&str>) -> Word {
    if pos.is_none() && paradigm.is_none() {
        if let Some(pronoun) = data.pronouns().get(term) {
            return pronoun.clone();
        }
        return Word::typed(term);
    }
    let mut word = Word::new(term);
    word.add_pos_info(pos.unwrap_or("n."));
    word.add_paradigm(paradigm.unwrap_or("0"));
    word
}

fn print_table(table: &DeclensionTable) {
    println!("  {}", table.gender.name());
    if table.is_empty() {
        println!("    (no forms)");
        return;
    }
    for case in Case::ALL {
        println!(
            "    {:<5} {:<28} {}",
            case.abbr(),
            table.forms(case, Number::Singular).join(", "),
            table.forms(case, Number::Plural).join(", ")
        );
    }
}
