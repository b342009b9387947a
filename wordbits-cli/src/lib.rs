pub mod command;
pub mod error;

use std::{
    collections::HashMap,
    fmt::Display,
    io::{self, BufRead, Write},
    path::Path,
};

use tracing::{debug, warn};
use wordbits_core::{BitVec, Bits, FixedBitVec};

use crate::{
    command::{Action, BitOp, Command, CompareOp, Direction, DyadicOp, Target, parse_line},
    error::{ScriptError, ScriptErrorKind},
};

#[derive(Debug, Clone)]
enum Value {
    Dynamic(BitVec),
    Fixed(FixedBitVec),
}

/// Named bit vectors that persist across the lines of a script or REPL session.
#[derive(Debug, Default)]
pub struct Runner {
    vectors: HashMap<String, Value>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes one line, returning the text it prints, if any.
    pub fn run_line(&mut self, source: &str, line: usize) -> Result<Option<String>, ScriptError> {
        let Some(command) = parse_line(source, line)? else {
            return Ok(None);
        };
        debug!(line, ?command, "execute");
        self.execute(command).map_err(|kind| kind.at(line))
    }

    fn lookup(&self, name: &str) -> Result<&Value, ScriptErrorKind> {
        self.vectors
            .get(name)
            .ok_or_else(|| ScriptErrorKind::UndefinedVector(name.to_string()))
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Value, ScriptErrorKind> {
        self.vectors
            .get_mut(name)
            .ok_or_else(|| ScriptErrorKind::UndefinedVector(name.to_string()))
    }

    fn execute(&mut self, command: Command<'_>) -> Result<Option<String>, ScriptErrorKind> {
        match command {
            Command::New { name, capacity } => {
                let value = match capacity {
                    Some(len) => Value::Fixed(FixedBitVec::new(len)),
                    None => Value::Dynamic(BitVec::new()),
                };
                self.vectors.insert(name.to_string(), value);
                Ok(None)
            }
            Command::Clone { dst, src } => {
                let value = self.lookup(src)?.clone();
                self.vectors.insert(dst.to_string(), value);
                Ok(None)
            }
            Command::Dyadic { op, lhs, rhs } => {
                let rhs = self.lookup(rhs)?.clone();
                match (self.lookup_mut(lhs)?, &rhs) {
                    (Value::Dynamic(a), Value::Dynamic(b)) => dyadic(a, b, op),
                    (Value::Fixed(a), Value::Fixed(b)) => dyadic(a, b, op),
                    _ => return Err(ScriptErrorKind::VariantMismatch),
                }
                Ok(None)
            }
            Command::Compare { op, lhs, rhs } => {
                let result = match (self.lookup(lhs)?, self.lookup(rhs)?) {
                    (Value::Dynamic(a), Value::Dynamic(b)) => compare(a, b, op),
                    (Value::Fixed(a), Value::Fixed(b)) => compare(a, b, op),
                    _ => return Err(ScriptErrorKind::VariantMismatch),
                };
                Ok(Some(result.to_string()))
            }
            Command::Apply { name, action } => match self.lookup_mut(name)? {
                Value::Dynamic(bits) => apply(bits, action),
                Value::Fixed(bits) => apply(bits, action),
            },
        }
    }
}

fn dyadic<B: Bits>(a: &mut B, b: &B, op: DyadicOp) {
    match op {
        DyadicOp::Union => a.union_with(b),
        DyadicOp::Intersect => a.intersect_with(b),
        DyadicOp::Difference => a.difference_with(b),
        DyadicOp::SymmetricDifference => a.symmetric_difference_with(b),
    }
}

fn compare<B: Bits + PartialEq>(a: &B, b: &B, op: CompareOp) -> bool {
    match op {
        CompareOp::Equal => a == b,
        CompareOp::SuperSet => a.is_superset(b),
        CompareOp::SubSet => a.is_subset(b),
    }
}

fn position(pos: Option<usize>) -> String {
    match pos {
        Some(pos) => pos.to_string(),
        None => "none".to_string(),
    }
}

/// Runs a single-vector action against either variant.
fn apply<B>(bits: &mut B, action: Action) -> Result<Option<String>, ScriptErrorKind>
where
    B: Bits + Display,
    ScriptErrorKind: From<B::Error>,
{
    let output = match action {
        Action::Mutate { op, target } => {
            match (op, target) {
                (BitOp::Set, Target::Bit(i)) => bits.try_set(i)?,
                (BitOp::Clear, Target::Bit(i)) => bits.try_clear(i)?,
                (BitOp::Toggle, Target::Bit(i)) => bits.try_toggle(i)?,
                (BitOp::Set, Target::Range(r)) => bits.try_set_range(r)?,
                (BitOp::Clear, Target::Range(r)) => bits.try_clear_range(r)?,
                (BitOp::Toggle, Target::Range(r)) => bits.try_toggle_range(r)?,
            }
            return Ok(None);
        }
        Action::Get { target } => match target {
            Target::Bit(i) => bits.try_get(i)?,
            Target::Range(r) => bits.try_all_range(r)?,
        }
        .to_string(),
        Action::Any { range } => match range {
            Some(r) => bits.try_any_range(r)?,
            None => bits.any(),
        }
        .to_string(),
        Action::None { range } => match range {
            Some(r) => bits.try_none_range(r)?,
            None => bits.none(),
        }
        .to_string(),
        Action::Len => bits.len().to_string(),
        Action::Count => bits.cardinality().to_string(),
        Action::Next { pos } => position(match pos {
            Some(pos) => bits.next_set(pos),
            None => bits.first_set(),
        }),
        Action::Prev { pos } => position(match pos {
            Some(pos) => bits.prev_set(pos),
            None => bits.last_set(),
        }),
        Action::Complement => {
            bits.complement();
            return Ok(None);
        }
        Action::Shift { direction, n } => {
            match direction {
                Direction::Left => bits.shift_left(n),
                Direction::Right => bits.shift_right(n),
            }
            return Ok(None);
        }
        Action::Print => bits.to_string(),
    };
    Ok(Some(output))
}

/// Runs every line of `source`, writing results and errors to `out`.
///
/// Script errors are reported and execution continues with the next line.
pub fn run_source(runner: &mut Runner, source: &str, out: &mut impl Write) -> io::Result<()> {
    for (index, line) in source.lines().enumerate() {
        match runner.run_line(line, index + 1) {
            Ok(Some(output)) => writeln!(out, "{output}")?,
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "script error");
                writeln!(out, "error: {error}")?;
            }
        }
    }
    Ok(())
}

pub fn run_file(path: &Path) -> io::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let mut runner = Runner::new();

    run_source(&mut runner, &source, &mut io::stdout().lock())?;

    Ok(())
}

pub fn run_repl() -> io::Result<()> {
    let mut runner = Runner::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_no = 0;

    loop {
        let mut line = String::new();
        print!("> ");
        stdout.flush()?;

        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(..) => {}
            Err(e) => return Err(e),
        }
        line_no += 1;

        match runner.run_line(&line, line_no) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "script error");
                println!("error: {error}");
            }
        }
    }

    println!();

    Ok(())
}
