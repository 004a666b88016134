use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use gumdrop::Options;
use serde::Serialize;

use consispell::checker::{CheckerConfig, SuggestionRecord, TextChecker};
use consispell::context::ContextConfig;
use consispell::lexicon::{
    FileWordListSource, HttpWordListSource, Lexicon, KNOWN_CORRECT_DEFAULTS,
};
use consispell::speller::suggestion::Suggestion;
use consispell::speller::{LexiconSpeller, Speller, SpellerConfig};
use consispell::tokenizer::Tokenize;

trait OutputWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool);
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn write_records(&mut self, records: &[SuggestionRecord]);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if is_correct { "CORRECT" } else { "INCORRECT" }
        );
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        for sugg in suggestions {
            println!("{}\t\t{}", sugg.value(), sugg.weight());
        }
        println!();
    }

    fn write_records(&mut self, records: &[SuggestionRecord]) {
        if records.is_empty() {
            println!("No spelling mistakes found!");
            return;
        }

        for record in records {
            match &record.correction {
                Some(correction) => println!(
                    "{:>4}: \"{}\" -> \"{}\" [{:?}]",
                    record.offset, record.surface, correction, record.rationale
                ),
                None => println!(
                    "{:>4}: \"{}\" -> no suggestion [{:?}]",
                    record.offset, record.surface, record.rationale
                ),
            }
        }
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonWriter {
    results: Vec<SuggestionRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    records: Vec<SuggestionRecord>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter {
            results: vec![],
            records: vec![],
        }
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            is_correct,
            suggestions: vec![],
        });
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        let i = self.results.len() - 1;
        self.results[i].suggestions = suggestions.to_vec();
    }

    fn write_records(&mut self, records: &[SuggestionRecord]) {
        self.records = records.to_vec();
    }

    fn finish(&mut self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap());
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "check a document for misspellings and inconsistent variants")]
    Check(CheckArgs),

    #[options(help = "get ranked suggestions for provided words")]
    Suggest(SuggestArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list file to use instead of the remote list")]
    wordlist: Option<PathBuf>,

    #[options(no_short, long = "no-cluster", help = "disable variant clustering")]
    disable_clustering: bool,

    #[options(
        no_short,
        long = "no-context",
        help = "disable name-context suppression"
    )]
    disable_context: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be checked")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list file to use instead of the remote list")]
    wordlist: Option<PathBuf>,

    #[options(short = "S", help = "always show suggestions even if word is correct")]
    always_suggest: bool,

    #[options(help = "maximum edit distance for suggestions")]
    distance: Option<usize>,

    #[options(help = "maximum number of results")]
    nbest: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_inputs(inputs: Vec<String>) -> anyhow::Result<String> {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(inputs.join(" "))
    }
}

fn load_lexicon(wordlist: Option<PathBuf>) -> Arc<Lexicon> {
    let exempt = KNOWN_CORRECT_DEFAULTS.iter().copied();

    let lexicon = match wordlist {
        Some(path) => Lexicon::load(&FileWordListSource::new(path), exempt),
        None => Lexicon::load(&HttpWordListSource::default(), exempt),
    };

    if lexicon.is_fallback() {
        eprintln!("Word list unavailable; running with the embedded fallback.");
    }

    Arc::new(lexicon)
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let text = read_inputs(args.inputs)?;
    let lexicon = load_lexicon(args.wordlist);

    let config = CheckerConfig {
        clustering: !args.disable_clustering,
        context_suppression: !args.disable_context,
        ..CheckerConfig::default()
    };

    let checker = TextChecker::with_config(lexicon, ContextConfig::default(), config);
    let records = checker.check(&text);

    writer.write_records(&records);
    writer.finish();

    Ok(())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let mut suggest_cfg = SpellerConfig::default();

    if let Some(v) = args.distance {
        suggest_cfg.max_distance = v;
    }

    if let Some(v) = args.nbest {
        suggest_cfg.n_best = v;
    }

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words: Vec<String> = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
            .trim()
            .split('\n')
            .map(|x| x.trim().to_string())
            .collect()
    } else {
        args.inputs
    };

    let lexicon = load_lexicon(args.wordlist);
    let speller = LexiconSpeller::new(lexicon);

    for word in words {
        let is_correct = speller.is_correct(&word);
        writer.write_correction(&word, is_correct);

        if args.always_suggest || !is_correct {
            let suggestions = speller.suggest_with_config(&word, &suggest_cfg);
            writer.write_suggestions(&word, &suggestions);
        }
    }

    writer.finish();

    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs = read_inputs(args.inputs)?;

    if args.is_words_only {
        for (index, token) in inputs.word_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    } else {
        for token in inputs.word_tokens() {
            println!("{:>4}: \"{}\" ({})", token.offset, token.surface, token.normalized);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
