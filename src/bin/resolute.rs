//! Command-line entailment queries against a propositional knowledge base

use resolute::{
    entails_with, parse_kb_file, parse_sentence, EngineConfig, Interner, KnowledgeBase,
};
use serde::Serialize;

#[derive(Serialize)]
struct QueryReport {
    sentence: String,
    entailed: bool,
}

#[derive(Serialize)]
struct Report {
    kb: String,
    clauses: usize,
    queries: Vec<QueryReport>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <kb_file> --query <sentence> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --query <sentence>   Sentence to test for entailment (repeatable)");
        eprintln!("  --max-rounds <n>     Abort a query after n resolution rounds (0 = no limit)");
        eprintln!("  --max-clauses <n>    Abort a query after n retained clauses (0 = no limit)");
        eprintln!("  --json               Emit the report as JSON");
        std::process::exit(1);
    }

    let filename = &args[1];
    let mut queries: Vec<String> = Vec::new();
    let mut config = EngineConfig::default();
    let mut json = false;

    // Parse command line options
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--query" => {
                if i + 1 < args.len() {
                    queries.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--max-rounds" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        config.max_rounds = n;
                    }
                    i += 1;
                }
            }
            "--max-clauses" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        config.max_clauses = n;
                    }
                    i += 1;
                }
            }
            "--json" => {
                json = true;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if queries.is_empty() {
        eprintln!("No --query given");
        std::process::exit(1);
    }

    let mut interner = Interner::new();
    let sentences = match parse_kb_file(filename, &mut interner) {
        Ok(sentences) => sentences,
        Err(e) => {
            eprintln!("Error loading {}: {}", filename, e);
            std::process::exit(1);
        }
    };

    let mut kb = KnowledgeBase::new();
    let sentence_count = sentences.len();
    kb.tell_all(sentences);

    if !json {
        println!(
            "loaded {}: {} sentences, {} clauses",
            filename,
            sentence_count,
            kb.len()
        );
    }

    let mut report = Report {
        kb: filename.clone(),
        clauses: kb.len(),
        queries: Vec::new(),
    };

    for sentence in &queries {
        let formula = match parse_sentence(sentence, &mut interner) {
            Ok(formula) => formula,
            Err(e) => {
                eprintln!("Bad query: {}", e);
                std::process::exit(1);
            }
        };
        let entailed = match entails_with(&kb, &formula, &config) {
            Ok(entailed) => entailed,
            Err(e) => {
                eprintln!("{}: {}", sentence, e);
                std::process::exit(2);
            }
        };
        if !json {
            println!(
                "{}: {}",
                sentence,
                if entailed { "entailed" } else { "not entailed" }
            );
        }
        report.queries.push(QueryReport {
            sentence: sentence.clone(),
            entailed,
        });
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error writing report: {}", e);
                std::process::exit(1);
            }
        }
    }
}
