use std::{ops::Range, str::SplitWhitespace};

use crate::error::{ScriptError, ScriptErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Bit(usize),
    Range(Range<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOp {
    Set,
    Clear,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DyadicOp {
    Union,
    Intersect,
    Difference,
    SymmetricDifference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    SuperSet,
    SubSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A command that reads or changes a single named vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Mutate { op: BitOp, target: Target },
    Get { target: Target },
    Any { range: Option<Range<usize>> },
    None { range: Option<Range<usize>> },
    Len,
    Count,
    Next { pos: Option<usize> },
    Prev { pos: Option<usize> },
    Complement,
    Shift { direction: Direction, n: usize },
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'src> {
    New {
        name: &'src str,
        capacity: Option<usize>,
    },
    Clone {
        dst: &'src str,
        src: &'src str,
    },
    Apply {
        name: &'src str,
        action: Action,
    },
    Dyadic {
        op: DyadicOp,
        lhs: &'src str,
        rhs: &'src str,
    },
    Compare {
        op: CompareOp,
        lhs: &'src str,
        rhs: &'src str,
    },
}

struct Args<'src> {
    words: SplitWhitespace<'src>,
}

impl<'src> Args<'src> {
    fn name(&mut self) -> Result<&'src str, ScriptErrorKind> {
        self.words
            .next()
            .ok_or(ScriptErrorKind::MissingArgument("vector name"))
    }

    fn number(&mut self, what: &'static str) -> Result<usize, ScriptErrorKind> {
        let word = self
            .words
            .next()
            .ok_or(ScriptErrorKind::MissingArgument(what))?;
        parse_number(word)
    }

    fn optional_number(&mut self) -> Result<Option<usize>, ScriptErrorKind> {
        self.words.next().map(parse_number).transpose()
    }

    fn target(&mut self) -> Result<Target, ScriptErrorKind> {
        let word = self
            .words
            .next()
            .ok_or(ScriptErrorKind::MissingArgument("index or range"))?;
        if word.contains("..") {
            parse_range(word).map(Target::Range)
        } else {
            parse_number(word).map(Target::Bit)
        }
    }

    fn optional_range(&mut self) -> Result<Option<Range<usize>>, ScriptErrorKind> {
        self.words.next().map(parse_range).transpose()
    }

    fn finish(mut self) -> Result<(), ScriptErrorKind> {
        match self.words.next() {
            Some(extra) => Err(ScriptErrorKind::TrailingArgument(extra.to_string())),
            None => Ok(()),
        }
    }
}

fn parse_number(word: &str) -> Result<usize, ScriptErrorKind> {
    word.parse()
        .map_err(|_| ScriptErrorKind::InvalidNumber(word.to_string()))
}

fn parse_range(word: &str) -> Result<Range<usize>, ScriptErrorKind> {
    let invalid = || ScriptErrorKind::InvalidRange(word.to_string());
    let (start, end) = word.split_once("..").ok_or_else(invalid)?;
    let start = start.parse().map_err(|_| invalid())?;
    let end = end.parse().map_err(|_| invalid())?;
    Ok(start..end)
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(source: &str, line: usize) -> Result<Option<Command<'_>>, ScriptError> {
    let code = match source.split_once('#') {
        Some((code, _comment)) => code,
        None => source,
    };
    let mut words = code.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let mut args = Args { words };

    parse_command(keyword, &mut args)
        .and_then(|command| args.finish().map(|()| Some(command)))
        .map_err(|kind| kind.at(line))
}

fn parse_command<'src>(
    keyword: &'src str,
    args: &mut Args<'src>,
) -> Result<Command<'src>, ScriptErrorKind> {
    let command = match keyword {
        "new" => Command::New {
            name: args.name()?,
            capacity: args.optional_number()?,
        },
        "clone" => Command::Clone {
            dst: args.name()?,
            src: args.name()?,
        },
        "union" | "intersect" | "difference" | "symdiff" => Command::Dyadic {
            op: match keyword {
                "union" => DyadicOp::Union,
                "intersect" => DyadicOp::Intersect,
                "difference" => DyadicOp::Difference,
                _ => DyadicOp::SymmetricDifference,
            },
            lhs: args.name()?,
            rhs: args.name()?,
        },
        "equal" | "superset" | "subset" => Command::Compare {
            op: match keyword {
                "equal" => CompareOp::Equal,
                "superset" => CompareOp::SuperSet,
                _ => CompareOp::SubSet,
            },
            lhs: args.name()?,
            rhs: args.name()?,
        },
        "set" | "clear" | "toggle" | "get" | "any" | "none" | "len" | "count" | "next" | "prev"
        | "complement" | "shl" | "shr" | "print" => Command::Apply {
            name: args.name()?,
            action: parse_action(keyword, args)?,
        },
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn parse_action(keyword: &str, args: &mut Args<'_>) -> Result<Action, ScriptErrorKind> {
    let action = match keyword {
        "set" | "clear" | "toggle" => Action::Mutate {
            op: match keyword {
                "set" => BitOp::Set,
                "clear" => BitOp::Clear,
                _ => BitOp::Toggle,
            },
            target: args.target()?,
        },
        "get" => Action::Get {
            target: args.target()?,
        },
        "any" => Action::Any {
            range: args.optional_range()?,
        },
        "none" => Action::None {
            range: args.optional_range()?,
        },
        "len" => Action::Len,
        "count" => Action::Count,
        "next" => Action::Next {
            pos: args.optional_number()?,
        },
        "prev" => Action::Prev {
            pos: args.optional_number()?,
        },
        "complement" => Action::Complement,
        "shl" | "shr" => Action::Shift {
            direction: if keyword == "shl" {
                Direction::Left
            } else {
                Direction::Right
            },
            n: args.number("shift amount")?,
        },
        "print" => Action::Print,
        other => return Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    };
    Ok(action)
}
