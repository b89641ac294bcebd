// pali-numeral: Pali names of numbers and their case forms.
//
// Cardinals decline in the gender and number their value fixes; ordinals
// are adjectives and get a full table per gender.
//
// Usage:
//   pali-numeral [-d DATA_PATH] [OPTIONS] VALUE...
//
// Options:
//   -d, --data-path PATH   Data directory containing numerals.csv
//   --ordinal              Ordinal instead of cardinal
//   --json                 Print JSON
//   -h, --help             Print help

use pali_core::enums::{Case, Gender, Number};
use pali_grammar::word::numeral::MAX_COMPOSED;
use pali_grammar::{GrammarData, Word, compute_numeral_declension};
use serde_json::{Value, json};

fn main() {
    pali_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, mut args) =
        pali_cli::parse_data_path(&args).unwrap_or_else(|e| pali_cli::fatal(&e));

    if pali_cli::wants_help(&args) {
        println!("pali-numeral: Pali names of numbers and their case forms.");
        println!();
        println!("Usage: pali-numeral [-d DATA_PATH] [OPTIONS] VALUE...");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing numerals.csv");
        println!("  --ordinal              Ordinal instead of cardinal");
        println!("  --json                 Print JSON");
        println!("  -h, --help             Print this help");
        return;
    }

    let json_out = pali_cli::take_flag(&mut args, &["--json"]);
    let ordinal = pali_cli::take_flag(&mut args, &["--ordinal"]);
    let values: Vec<u32> = args
        .iter()
        .map(|a| {
            a.parse::<u32>()
                .map_err(|_| format!("not a number: {a}"))
                .and_then(|v| {
                    if v == 0 || v > MAX_COMPOSED {
                        Err(format!("{v} is outside 1..={MAX_COMPOSED}"))
                    } else {
                        Ok(v)
                    }
                })
        })
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| pali_cli::fatal(&e));
    if values.is_empty() {
        pali_cli::fatal("no value given (see --help)");
    }

    let data = pali_cli::load_data(data_path.as_deref()).unwrap_or_else(|e| pali_cli::fatal(&e));
    if data.numerals().words().next().is_none() {
        tracing::warn!("numeral catalog is empty, no names can be formed");
    }

    let mut json_entries = Vec::new();
    for value in values {
        let words = data.numerals().numeral_words(value, ordinal);
        if words.is_empty() {
            eprintln!("{value}: no name known");
            continue;
        }
        if json_out {
            let terms: Vec<Value> = words.iter().map(|w| word_json(&data, w, ordinal)).collect();
            json_entries.push(json!({ "value": value, "ordinal": ordinal, "terms": terms }));
            continue;
        }
        println!("{value}");
        for word in &words {
            print_word(&data, word, ordinal);
        }
    }

    if json_out {
        pali_cli::print_json(&json_entries);
    }
}

/// Case forms of a cardinal in `gender`, one list per case.
fn cardinal_forms(data: &GrammarData, word: &Word, gender: Gender) -> Vec<Vec<String>> {
    Case::ALL
        .into_iter()
        .map(|case| compute_numeral_declension(data.nouns(), word, gender, case))
        .collect()
}

fn word_json(data: &GrammarData, word: &Word, ordinal: bool) -> Value {
    let declension: Vec<Value> = word
        .genders()
        .iter()
        .map(|&gender| {
            if ordinal {
                json!(data.declension(word, gender))
            } else {
                json!({ "gender": gender, "cases": cardinal_forms(data, word, gender) })
            }
        })
        .collect();
    json!({
        "term": word.term(),
        "paradigms": word.paradigms(),
        "declension": declension,
    })
}

fn print_word(data: &GrammarData, word: &Word, ordinal: bool) {
    println!("  {} [{}]", word.term(), word.paradigms().join(", "));
    for &gender in word.genders() {
        println!("    {}", gender.name());
        if ordinal {
            let table = data.declension(word, gender);
            for case in Case::ALL {
                println!(
                    "      {:<5} {:<28} {}",
                    case.abbr(),
                    table.forms(case, Number::Singular).join(", "),
                    table.forms(case, Number::Plural).join(", ")
                );
            }
            continue;
        }
        for (case, forms) in Case::ALL.into_iter().zip(cardinal_forms(data, word, gender)) {
            println!("      {:<5} {}", case.abbr(), forms.join(", "));
        }
    }
}
