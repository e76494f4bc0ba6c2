use std::io::{self, BufRead, Write};

use clap::Parser;

use truth_table::render::Style;
use truth_table::table::row_count;

const LONG_ABOUT: &str = "\
Print the truth table of a propositional formula. Fixed values for \
propositions can be set by comma separated <proposition>=<value> pairs.

Symbols:
  propositions   a letter followed by letters, digits and underscores
                 (not starting with \"v\", and not \"tmp\")
  not            ¬
  and            ^
  or             v
  conditional    ->
  biconditional  <->

Binary operations must always be nested in parentheses: \"(p v q v r)\" must be
written as either \"((p v q) v r)\" or \"(p v (q v r))\". There must always be a
space between the symbol of the operation and each of the operands.

Examples:
  ¬p
  (p v q)
  ¬(p -> q)
  (p ^ ¬q), p=True
  (¬p <-> q), p=True, q=False";

#[derive(Debug, Parser)]
#[command(author, version, about = "Print the truth table of a propositional formula", long_about = LONG_ABOUT)]
struct Cli {
    /// Formula, optionally followed by fixed values. Prompted for when absent.
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Minimum column width.
    #[arg(long, value_name = "INT", default_value = "5")]
    width: usize,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let line = match args.expression {
        Some(line) => line,
        None => {
            println!("Please enter an expression:");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    match truth_table::truth_table(&line) {
        Ok(table) => {
            log::debug!("{} free, {} rows", table.free().len(), row_count(table.free().len()));
            print!("{}", table.render(&Style::default().with_column_width(args.width)));
            Ok(())
        }
        Err(e) => {
            log::debug!("{}", e);
            println!("Bad expression.");
            std::process::exit(1);
        }
    }
}
