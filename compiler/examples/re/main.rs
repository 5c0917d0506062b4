use std::process::ExitCode;

use clap::Parser;

use thompson_compiler::compile;
use thompson_runtime::run;

/// Decides whether a pattern fully matches a subject string.
#[derive(Parser)]
#[command(name = "re")]
struct Cli {
    /// The pattern to compile.
    regex: String,

    /// The string to match against the pattern.
    str_to_match: String,

    /// Prints a sentence describing the outcome.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Prints only the boolean outcome.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let nfa = match compile(&cli.regex) {
        Ok(nfa) => nfa,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    let matched = run(&nfa, &cli.str_to_match);

    if cli.verbose {
        if matched {
            println!(
                "The string {} matches the pattern {}.",
                cli.str_to_match, cli.regex
            );
        } else {
            println!(
                "The string {} does not match the pattern {}.",
                cli.str_to_match, cli.regex
            );
        }
    } else if cli.quiet {
        println!("{}", matched);
    } else {
        println!("Match {} to {} = {}", cli.str_to_match, cli.regex, matched);
    }

    ExitCode::SUCCESS
}
