//! Command-line interface for fixity
//! Inspects how a language configuration tokenizes and parses source files.
//!
//! Usage:
//!   fixity [--config `<file>`] tokens `<path>`                                  - Print the token stream
//!   fixity [--config `<file>`] parse `<path>` [--format `<format>`] [--expression] - Print the syntax tree
//!   fixity check-config `<file>`                                              - Validate a language configuration
//!
//! Without `--config` the bundled sample language is used.

use clap::{Arg, ArgAction, ArgMatches, Command};
use fixity::{AstNode, Error, Language, LanguageConfig};

fn main() {
    let matches = Command::new("fixity")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize and parse source files with a table-driven precedence parser")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Language configuration (YAML or JSON); defaults to the sample language"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the syntax tree of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["sexpr", "json", "yaml"])
                        .default_value("sexpr"),
                )
                .arg(
                    Arg::new("expression")
                        .long("expression")
                        .short('e')
                        .action(ArgAction::SetTrue)
                        .help("Parse the file as a single expression instead of a program"),
                ),
        )
        .subcommand(
            Command::new("check-config")
                .about("Validate a language configuration and summarize it")
                .arg(
                    Arg::new("file")
                        .help("Path to the configuration")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(&matches, sub),
        Some(("parse", sub)) => handle_parse_command(&matches, sub),
        Some(("check-config", sub)) => handle_check_config_command(sub),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// The language named by `--config`, or the sample language.
fn load_language(matches: &ArgMatches, sub: &ArgMatches) -> Result<Language, Error> {
    let config = sub
        .get_one::<String>("config")
        .or_else(|| matches.get_one::<String>("config"));
    match config {
        Some(path) => LanguageConfig::from_path(path)?.build(),
        None => Ok(Language::sample().clone()),
    }
}

fn read_source(sub: &ArgMatches) -> Result<String, Error> {
    let path = sub
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default();
    Ok(std::fs::read_to_string(path)?)
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches, sub: &ArgMatches) -> Result<(), Error> {
    let language = load_language(matches, sub)?;
    let source = read_source(sub)?;
    for token in language.tokenize(&source)? {
        println!("{}", token);
    }
    Ok(())
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, sub: &ArgMatches) -> Result<(), Error> {
    let language = load_language(matches, sub)?;
    let source = read_source(sub)?;
    let tree = if sub.get_flag("expression") {
        language.parse_expression(&source)?
    } else {
        language.parse(&source)?
    };

    let format = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("sexpr");
    print!("{}", render(&tree, format)?);
    Ok(())
}

fn render(tree: &AstNode, format: &str) -> Result<String, Error> {
    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(tree)?)),
        "yaml" => Ok(serde_yaml::to_string(tree)?),
        _ => Ok(format!("{}\n", tree)),
    }
}

/// Handle the check-config command
fn handle_check_config_command(sub: &ArgMatches) -> Result<(), Error> {
    let path = sub
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or_default();
    let language = LanguageConfig::from_path(path)?.build()?;
    let parser = language.parser();

    println!("{}: ok", path);
    println!("  lex rules:       {}", language.tokenizer().rules().count());
    println!("  operators:       {}", parser.table().len());
    println!("  lead tokens:     {}", parser.table().lead_tokens().join(" "));
    println!("  statement rules: {}", parser.rules().len());
    for rule in parser.rules() {
        println!("    {}", rule);
    }
    Ok(())
}
