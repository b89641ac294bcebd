// pali-conjugate: Conjugation tables of Pali verb roots.
//
// Prints, for each root, the forms of every voice and tense/mood it forms
// (or only those selected), stem by stem. With --derived, prints the
// participles and absolutives instead.
//
// Usage:
//   pali-conjugate [-d DATA_PATH] [OPTIONS] ROOT...
//
// Options:
//   -d, --data-path PATH   Data directory containing paradv.csv
//   --voice VOICE          Only this voice (active, passive, causative, caupas)
//   --tense TENSE          Only this tense/mood (vat, pan, sat, par, hiy, ajj, bha, kal)
//   --augment              Include a- augmented stems
//   --derived              Print participles and absolutives
//   -x, --experimental     Treat each ROOT as a typed stem
//   --json                 Print JSON
//   -h, --help              Print help

use pali_core::enums::{Case, DeriPaccaya, Number, Pada, Person, TenseMood, Voice};
use pali_grammar::{ConjugationOptions, DerivedForms, GrammarData, Root, StemConjugation};
use serde_json::{Value, json};

fn main() {
    pali_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, mut args) =
        pali_cli::parse_data_path(&args).unwrap_or_else(|e| pali_cli::fatal(&e));

    if pali_cli::wants_help(&args) {
        println!("pali-conjugate: Conjugation tables of Pali verb roots.");
        println!();
        println!("Usage: pali-conjugate [-d DATA_PATH] [OPTIONS] ROOT...");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Data directory containing paradv.csv");
        println!("  --voice VOICE          Only this voice (active, passive, causative, caupas)");
        println!("  --tense TENSE          Only this tense/mood (vat, pan, sat, par, hiy, ajj, bha, kal)");
        println!("  --augment              Include a- augmented stems");
        println!("  --derived              Print participles and absolutives");
        println!("  -x, --experimental     Treat each ROOT as a typed stem");
        println!("  --json                 Print JSON");
        println!("  -h, --help             Print this help");
        return;
    }

    let json_out = pali_cli::take_flag(&mut args, &["--json"]);
    let augment = pali_cli::take_flag(&mut args, &["--augment"]);
    let derived = pali_cli::take_flag(&mut args, &["--derived"]);
    let experimental = pali_cli::take_flag(&mut args, &["-x", "--experimental"]);
    let voice: Option<Voice> =
        pali_cli::take_option(&mut args, "--voice").unwrap_or_else(|e| pali_cli::fatal(&e));
    let tense: Option<TenseMood> =
        pali_cli::take_option(&mut args, "--tense").unwrap_or_else(|e| pali_cli::fatal(&e));
    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        pali_cli::fatal(&format!("unknown option {unknown}"));
    }
    if args.is_empty() {
        pali_cli::fatal("no root given (see --help)");
    }

    let data = pali_cli::load_data(data_path.as_deref()).unwrap_or_else(|e| pali_cli::fatal(&e));
    let options = ConjugationOptions {
        show_augmented: augment,
        ..Default::default()
    };
    let voices: Vec<Voice> = voice.map_or_else(|| Voice::ALL.to_vec(), |v| vec![v]);
    let tenses: Vec<TenseMood> = tense.map_or_else(|| TenseMood::ALL.to_vec(), |t| vec![t]);

    let mut json_entries = Vec::new();
    for text in &args {
        let root = if experimental {
            Root::experimental(text, augment).unwrap_or_else(|e| pali_cli::fatal(&e.to_string()))
        } else {
            match data.root(text) {
                Some(root) => root.clone(),
                None => {
                    eprintln!("{text}: not in the root catalog (try -x)");
                    continue;
                }
            }
        };

        if derived {
            let derived = derived_of(&data, &root, &voices);
            if json_out {
                json_entries.push(derived_json(&root, &derived));
            } else {
                print_derived(&root, &derived);
            }
            continue;
        }

        if !json_out {
            print_heading(&root);
        }
        for &voice in &voices {
            for &tense in &tenses {
                let table = data.conjugation(&root, voice, tense, &options);
                if table.is_empty() {
                    continue;
                }
                if json_out {
                    json_entries.push(json!({
                        "root": root.text(),
                        "voice": voice,
                        "tense": tense.code(),
                        "stems": table,
                    }));
                } else {
                    print_table(voice, tense, &table);
                }
            }
        }
    }

    if json_out {
        pali_cli::print_json(&json_entries);
    }
}

fn print_heading(root: &Root) {
    if root.eng_meaning.is_empty() {
        println!("{} ({})", root.text(), root.group());
    } else {
        println!("{} ({}) {}", root.text(), root.group(), root.eng_meaning);
    }
}

fn print_table(voice: Voice, tense: TenseMood, table: &[StemConjugation]) {
    println!("  {} {} ({})", voice.name(), tense.pali_name(), tense.abbr());
    for stem in table {
        println!("    {}", stem.stem);
        for pada in Pada::ALL.into_iter().filter(|&p| stem.has_pada(p)) {
            for person in Person::ALL {
                let cells: Vec<String> = Number::ALL
                    .into_iter()
                    .map(|n| stem.cell_text(pada, person, n))
                    .collect();
                println!(
                    "      {} {:<4} {:<28} {}",
                    pada.abbr(),
                    person.abbr(),
                    cells[0],
                    cells[1]
                );
            }
        }
    }
}

/// Every non-empty derived form of `root`, by voice and suffix.
fn derived_of(data: &GrammarData, root: &Root, voices: &[Voice]) -> Vec<(Voice, DeriPaccaya, DerivedForms)> {
    let mut result = Vec::new();
    for &voice in voices {
        for paccaya in DeriPaccaya::ALL {
            let forms = data.derived(root, voice, paccaya);
            if !forms.is_empty() {
                result.push((voice, paccaya, forms));
            }
        }
    }
    result
}

fn derived_json(root: &Root, derived: &[(Voice, DeriPaccaya, DerivedForms)]) -> Value {
    let forms: Vec<Value> = derived
        .iter()
        .map(|(voice, paccaya, forms)| {
            json!({ "voice": voice, "paccaya": paccaya.name(), "derived": forms })
        })
        .collect();
    json!({ "root": root.text(), "derived": forms })
}

fn print_derived(root: &Root, derived: &[(Voice, DeriPaccaya, DerivedForms)]) {
    print_heading(root);
    for (voice, paccaya, forms) in derived {
        println!("  {} -{}", voice.name(), paccaya.name());
        match forms {
            DerivedForms::Indeclinable(terms) => println!("    {}", terms.join(", ")),
            DerivedForms::Declined(stems) => {
                for stem in stems {
                    let nominatives: Vec<String> = stem
                        .tables
                        .iter()
                        .map(|t| t.forms(Case::Nom, Number::Singular).join(", "))
                        .collect();
                    println!("    {}: {}", stem.stem, nominatives.join(" | "));
                }
            }
        }
    }
}
