use calcyard::{calc_with, Strategy};
use calcyard::parsing::ParseStrategyError;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

/// A simple calculator for infix mathematical expressions. Supports
/// the operators + - * / ^ and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Evaluator algorithm: pc for precedence climbing, sh for the
  /// shunting yard.
  #[arg(short, long, default_value = "pc", value_parser = parse_strategy)]
  algo: Strategy,

  /// Expression to evaluate. Multiple arguments are joined together.
  /// A leading `-` is read as part of the expression.
  #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
  expression: Vec<String>,
}

fn parse_strategy(s: &str) -> Result<Strategy, ParseStrategyError> {
  s.parse()
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
  if std::env::var_os("RUST_LOG").is_some() {
    tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .with_writer(std::io::stderr)
      .init();
  }
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let args = Args::parse();

  let expression = args.expression.iter().join("");
  let result = calc_with(&expression, args.algo)
    .with_context(|| format!("Failed to evaluate '{expression}'"))?;
  println!("{result}");
  Ok(())
}
