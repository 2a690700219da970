use clap::{Parser, Subcommand, ValueEnum};
use multiprec::{BigInt, Fraction, factorial};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bigtool", version, about = "multiprec CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an integer operation on two arbitrary-precision operands
    Arith {
        lhs: String,
        #[arg(value_enum)]
        op: IntOp,
        rhs: String,
    },
    /// Evaluate a rational operation on two fractions (N or N/D form)
    Frac {
        lhs: String,
        #[arg(value_enum)]
        op: FracOp,
        rhs: String,
    },
    /// Compute n! and report its size and timing
    Factorial {
        n: u32,
        /// Print only the digit count, not the full value
        #[arg(long)]
        digits_only: bool,
    },
    /// Show the internal representation of a decimal value
    Inspect { value: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum IntOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
}

#[derive(Clone, Copy, ValueEnum)]
enum FracOp {
    Add,
    Sub,
    Mul,
    Div,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Arith { lhs, op, rhs } => arith_cmd(&lhs, op, &rhs),
        Command::Frac { lhs, op, rhs } => frac_cmd(&lhs, op, &rhs),
        Command::Factorial { n, digits_only } => factorial_cmd(n, digits_only),
        Command::Inspect { value } => inspect_cmd(&value),
    }
}

fn arith_cmd(lhs: &str, op: IntOp, rhs: &str) {
    let a: BigInt = match lhs.parse() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to parse {lhs:?}: {err}");
            return;
        }
    };

    // Shift distances are plain bit counts, not big integers.
    if let IntOp::Shl | IntOp::Shr = op {
        let bits: u32 = match rhs.parse() {
            Ok(bits) => bits,
            Err(err) => {
                eprintln!("Failed to parse shift distance {rhs:?}: {err}");
                return;
            }
        };
        let result = match op {
            IntOp::Shl => &a << bits,
            _ => &a >> bits,
        };
        println!("{result}");
        return;
    }

    let b: BigInt = match rhs.parse() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to parse {rhs:?}: {err}");
            return;
        }
    };

    match op {
        IntOp::Add => println!("{}", &a + &b),
        IntOp::Sub => println!("{}", &a - &b),
        IntOp::Mul => println!("{}", &a * &b),
        IntOp::Div => match a.checked_div(&b) {
            Ok(quotient) => println!("{quotient}"),
            Err(err) => eprintln!("{err}"),
        },
        IntOp::Rem => match a.checked_rem(&b) {
            Ok(remainder) => println!("{remainder}"),
            Err(err) => eprintln!("{err}"),
        },
        IntOp::Shl | IntOp::Shr => unreachable!(),
    }
}

fn frac_cmd(lhs: &str, op: FracOp, rhs: &str) {
    let a: Fraction = match lhs.parse() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to parse {lhs:?}: {err}");
            return;
        }
    };
    let b: Fraction = match rhs.parse() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Failed to parse {rhs:?}: {err}");
            return;
        }
    };

    let result = match op {
        FracOp::Add => &a + &b,
        FracOp::Sub => &a - &b,
        FracOp::Mul => &a * &b,
        FracOp::Div => {
            if b.is_zero() {
                eprintln!("division by zero");
                return;
            }
            &a / &b
        }
    };
    println!("{result} (~{:.6})", result.to_f64());
}

fn factorial_cmd(n: u32, digits_only: bool) {
    let start = Instant::now();
    let value = factorial(n);
    let elapsed = start.elapsed();

    let text = value.to_string();
    if digits_only {
        println!("{}! has {} decimal digits", n, text.len());
    } else {
        println!("{text}");
    }
    println!(
        "cells={} bits={} computed in {:.2?}",
        value.cell_count(),
        value.bit_len(),
        elapsed
    );
}

fn inspect_cmd(value: &str) {
    let parsed: BigInt = match value.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("Failed to parse {value:?}: {err}");
            return;
        }
    };

    println!("value     = {parsed}");
    println!("sign      = {}", parsed.signum());
    println!("cells     = {}", parsed.cell_count());
    println!("bits      = {}", parsed.bit_len());
    for (i, cell) in parsed.cells().iter().enumerate() {
        println!("  cell[{i}] = {cell:#010x}");
    }
    println!("to_u64    = {}", parsed.to_u64());
    println!("to_i64    = {}", parsed.to_i64());
    println!("to_f64    = {:e}", parsed.to_f64());
}
