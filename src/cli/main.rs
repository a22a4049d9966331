#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use clap::Parser;

use otter_norms::{
    config::{Config, Equality},
    context::Context,
    reports::Report,
    types::err::{self},
};

/// Searches for a derivation of a conditional norm from premises.
///
/// Prints 's Proved' if a derivation is found.
/// Otherwise, prints 's Unproved' followed by a line 'm (input, output)' for each premise which would complete the derivation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A file containing a problem.
    problem: PathBuf,

    /// Use the same notion of equality for every rule when matching premises.
    #[arg(short, long, value_enum)]
    matching: Option<Equality>,

    /// Do not include negations in candidate pools.
    #[arg(long)]
    no_negations: bool,

    /// Do not weaken outputs or strengthen inputs.
    #[arg(long)]
    no_completion: bool,

    /// Display the premises used by the derivation.
    #[arg(short, long)]
    premises: bool,

    /// Display the configuration and counts from the search.
    #[arg(short, long)]
    stats: bool,

    /// Display the final proof graph, in the DOT language.
    #[arg(long)]
    dot: bool,
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();
    if let Some(equality) = args.matching {
        config.set_matching(equality);
    }
    if args.no_negations {
        config.negated_candidates.value = false;
    }
    if args.no_completion {
        config.completion.value = false;
    }
    config
}

fn load_problem(context: &mut Context, path: &Path) -> Result<(), err::ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(err::ErrorKind::from(err::ParseError::NoFile)),
    };
    context.read_problem(BufReader::new(file))
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut the_context = Context::from_config(config_from_args(&args));

    if let Err(e) = load_problem(&mut the_context, &args.problem) {
        println!("c Error loading problem: {e}");
        std::process::exit(1);
    }

    let the_report = match the_context.search() {
        Ok(report) => report,
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(1);
        }
    };

    if args.stats {
        for line in the_context.config.summary() {
            println!("c {line}");
        }
        let counters = &the_context.counters;
        println!("c OR-split nodes:         {}", counters.or_split_nodes);
        println!("c AND-split nodes:        {}", counters.and_split_nodes);
        println!("c Weakened nodes:         {}", counters.weaken_nodes);
        println!("c Strengthened nodes:     {}", counters.strengthen_nodes);
        println!("c Premise matches:        {}", counters.premise_matches);
        println!(
            "c Candidates:             {} inputs, {} outputs",
            counters.candidates.0, counters.candidates.1
        );
        println!("c Rounds:                 {}", counters.rounds);
        println!("c Nodes introduced:       {}", counters.total_nodes());
        println!("c Nodes in graph:         {}", the_context.graph.len());
        println!("c Time:                   {:.2?}", counters.time);
    }

    if args.premises {
        for (norm, operation) in the_context.used_premises() {
            println!("p {operation} {}", norm.display(&the_context.atom_db));
        }
    }

    if args.dot {
        println!("{}", the_context.graph.dot(&the_context.atom_db));
    }

    match the_report {
        Report::Proved => {
            println!("s Proved");
            std::process::exit(10)
        }

        Report::Unproved => {
            println!("s Unproved");
            if let Ok(missing) = the_context.missing_premises() {
                for norm in missing {
                    println!("m {}", norm.display(&the_context.atom_db));
                }
            }
            std::process::exit(20)
        }

        Report::Unknown => {
            println!("s Unknown");
            std::process::exit(0)
        }
    }
}
