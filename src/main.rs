use std::{collections::HashMap, io::BufRead};

use clap::Parser;
use exprfn::compile;

/// exprfn compiles arithmetic expressions into executable numeric functions
/// and evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate in one shot; omit it to start an interactive
    /// session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => {
            let mut variables = HashMap::new();
            if !evaluate(&expression, None, &mut variables) {
                std::process::exit(1);
            }
        },
        None => interactive_session(),
    }
}

fn interactive_session() {
    println!("Type \"list\" to view available variables");
    println!("Type `expression` to calculate it");
    println!("Type `variable` = `expression` to assign expression result to a variable");

    let mut variables: HashMap<String, f64> = HashMap::new();

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };

        if line.trim() == "list" {
            let mut stored: Vec<_> = variables.iter().collect();
            stored.sort_by_key(|&(name, _)| name.clone());
            for (name, value) in stored {
                println!("{name}: {value}");
            }
            continue;
        }

        match split_assignment(&line) {
            Some((name, expression)) => {
                evaluate(expression, Some(name), &mut variables);
            },
            None => {
                evaluate(&line, None, &mut variables);
            },
        }
    }
}

/// Splits `variable = expression` input into its two halves.
///
/// The left-hand side must be a single word (letters, digits, underscores);
/// anything else falls through to plain evaluation, where a stray `=` fails
/// lexically.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (name, expression) = line.split_once('=')?;
    let name = name.trim();

    if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Some((name, expression))
    } else {
        None
    }
}

/// Compiles and evaluates one input, resolving free variables from the store.
///
/// On success the result is printed, and stored under `assign_to` when the
/// input was an assignment. Returns whether evaluation succeeded; failures
/// are rendered to stderr with their category's own message.
fn evaluate(expression: &str, assign_to: Option<&str>, variables: &mut HashMap<String, f64>) -> bool {
    let function = match compile(expression) {
        Ok(function) => function,
        Err(error) => {
            eprintln!("{error}");
            return false;
        },
    };

    match function.call_bound(variables) {
        Ok(result) => {
            match assign_to {
                Some(name) => {
                    variables.insert(name.to_string(), result);
                    println!("{name}: {} = {result}", expression.trim());
                },
                None => println!("{} = {result}", expression.trim()),
            }
            true
        },
        Err(error) => {
            eprintln!("{error}");
            false
        },
    }
}
