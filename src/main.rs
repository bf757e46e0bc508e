//! Command-line front end for the deskcalc engine.
//!
//! The binary is the "event dispatcher" side of the calculator: it
//! tokenizes input, maps each token to one or more engine actions, and
//! renders display text and transient error messages. All calculator
//! logic lives in the library.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deskcalc::engine::{Action, Calculator, Operator, UnaryFunction};
use deskcalc::error::CalcResult;
use deskcalc::{constants, convert, stats};

#[derive(Parser)]
#[command(name = "deskcalc", version, about = "A scientific desk calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a stream of calculator tokens and print the result
    ///
    /// Example: deskcalc eval 50 + 3 =
    Eval {
        tokens: Vec<String>,
        /// Print display value and history as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a value between units (length, mass, temperature)
    Convert { value: f64, from: String, to: String },
    /// Show the constants table, or look up one constant by name
    Const {
        name: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Descriptive statistics over the given values
    Stats {
        #[arg(required = true)]
        values: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => repl(),
        Some(Command::Eval { tokens, json }) => eval(&tokens, json),
        Some(Command::Convert { value, from, to }) => {
            let result = convert::convert(value, &from, &to)?;
            println!("{result}");
            Ok(())
        }
        Some(Command::Const { name, json }) => show_constants(name.as_deref(), json),
        Some(Command::Stats { values, json }) => show_stats(&values, json),
    }
}

/// One-shot evaluation of a token stream.
fn eval(tokens: &[String], json: bool) -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    for token in tokens {
        for action in parse_token(token).with_context(|| format!("token '{token}'"))? {
            calc.apply(action)
                .with_context(|| format!("token '{token}'"))?;
        }
    }

    if json {
        let out = serde_json::json!({
            "display": calc.display_value(),
            "history": calc.history(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", calc.display_value());
    }
    Ok(())
}

/// Interactive session: one whitespace-separated token per action,
/// errors shown transiently without disturbing the engine state.
fn repl() -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("deskcalc — digits, + - * /, =, c, del, sqrt/sin/..., ms mr mc m+ m-, hist, q");
    prompt(&calc, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut quit = false;

        for token in line.split_whitespace() {
            match token {
                "q" | "quit" | "exit" => {
                    quit = true;
                    break;
                }
                "hist" => print_history(&calc),
                _ => match parse_token(token) {
                    Ok(actions) => {
                        for action in actions {
                            if let Err(err) = calc.apply(action) {
                                // Transient: report and keep going
                                println!("error: {err}");
                                break;
                            }
                        }
                    }
                    Err(err) => println!("error: {err}"),
                },
            }
        }

        if quit {
            break;
        }
        prompt(&calc, &mut stdout)?;
    }
    Ok(())
}

fn prompt(calc: &Calculator, stdout: &mut impl Write) -> anyhow::Result<()> {
    let memory = if calc.memory_indicator() { " M" } else { "" };
    write!(
        stdout,
        "[{}]{} {} > ",
        calc.history_label(),
        memory,
        calc.display_value()
    )?;
    stdout.flush()?;
    Ok(())
}

fn print_history(calc: &Calculator) {
    if calc.history().is_empty() {
        println!("(history empty)");
        return;
    }
    for entry in calc.history() {
        println!("{} = {}", entry.expression, entry.result);
    }
}

/// Map one CLI token to engine actions. Number tokens expand to a digit
/// sequence so `50` behaves exactly like pressing `5` then `0`.
fn parse_token(token: &str) -> CalcResult<Vec<Action>> {
    let action = match token {
        "+" => Action::Operator(Operator::Add),
        "-" => Action::Operator(Operator::Sub),
        "*" | "x" => Action::Operator(Operator::Mul),
        "/" => Action::Operator(Operator::Div),
        "=" => Action::Equals,
        "c" | "clear" => Action::Clear,
        "del" | "back" => Action::Backspace,
        "ms" => Action::MemoryStore,
        "mr" => Action::MemoryRecall,
        "mc" => Action::MemoryClear,
        "m+" => Action::MemoryAdd,
        "m-" => Action::MemorySubtract,
        "ch" => Action::ClearHistory,
        _ => {
            if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return token
                    .chars()
                    .map(|c| {
                        if c == '.' {
                            Ok(Action::DecimalPoint)
                        } else {
                            Ok(Action::Digit(c))
                        }
                    })
                    .collect();
            }
            Action::Function(UnaryFunction::from_str(token)?)
        }
    };
    Ok(vec![action])
}

fn show_constants(name: Option<&str>, json: bool) -> anyhow::Result<()> {
    match name {
        Some(name) => {
            let c = constants::lookup(name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(c)?);
            } else {
                println!("{} ({}) = {} {}", c.name, c.symbol, c.value, c.unit);
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(constants::all())?);
            } else {
                for c in constants::all() {
                    println!("{:<18} {:<3} {} {}", c.name, c.symbol, c.value, c.unit);
                }
            }
        }
    }
    Ok(())
}

fn show_stats(values: &[f64], json: bool) -> anyhow::Result<()> {
    let mean = stats::mean(values)?;
    let median = stats::median(values)?;
    let min = stats::min(values)?;
    let max = stats::max(values)?;
    // Std dev needs two samples; report null/dash for a single value
    let std_dev = stats::std_dev(values).ok();

    if json {
        let out = serde_json::json!({
            "count": values.len(),
            "mean": mean,
            "median": median,
            "min": min,
            "max": max,
            "std_dev": std_dev,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("count   {}", values.len());
        println!("mean    {mean}");
        println!("median  {median}");
        println!("min     {min}");
        println!("max     {max}");
        match std_dev {
            Some(sd) => println!("std dev {sd}"),
            None => println!("std dev -"),
        }
    }
    Ok(())
}
