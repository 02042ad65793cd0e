//! Interactive command grammar.
//!
//! Commands dispatch on their leading letter. The letter may be followed by
//! an axis and/or an integer argument; when the argument is missing the
//! caller prompts for it. Every input maps to some [`Command`], so parsing
//! never fails.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, eof, map_opt, map_res, opt, recognize, rest, value},
    sequence::{delimited, pair, terminated},
    IResult,
};

use crate::projection::ViewAxis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `vx`, `vy`, `vz`
    SetView(ViewAxis),
    /// `v` without a valid axis letter
    PromptView,
    /// `c<axis><n>`: absolute camera position
    SetCamera(ViewAxis, i64),
    /// `c<axis>`: ask for an absolute position, reporting bad answers
    PromptCamera(ViewAxis),
    /// `x`, `y`, `z`: ask for an absolute position, quietly using 0 on bad answers
    PromptPosition(ViewAxis),
    /// `c<axis>` followed by something that is not an integer
    InvalidCameraValue,
    /// `c` without a valid axis letter
    InvalidAxis,
    /// `s<n>`
    SetScale(i64),
    /// `s`
    PromptScale,
    /// `s` followed by something that is not an integer
    InvalidScale,
    /// `x<n>`: relative camera move
    OffsetCamera(ViewAxis, i64),
    /// `x` followed by something that is not an integer
    InvalidOffset,
    /// `b`
    NextVertex,
    /// `q`, `quit`, `exit`
    Quit,
    Unknown,
}

/// Argument text trailing a command letter
enum Argument {
    Missing,
    Integer(i64),
    Invalid,
}

impl Argument {
    fn classify(text: &str) -> Self {
        if text.is_empty() {
            Argument::Missing
        } else {
            parse_integer(text).map_or(Argument::Invalid, Argument::Integer)
        }
    }
}

/// Parse one line of user input. Case and surrounding whitespace are ignored.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match parse_command_impl(&line) {
        Ok((_, command)) => command,
        Err(_) => Command::Unknown,
    }
}

/// Parse an optionally signed decimal integer, allowing surrounding whitespace.
///
/// Returns `None` for anything else, including values outside the `i64` range.
pub fn parse_integer(text: &str) -> Option<i64> {
    all_consuming(delimited(multispace0, integer, multispace0))(text)
        .ok()
        .map(|(_, n)| n)
}

fn parse_command_impl(input: &str) -> IResult<&str, Command> {
    alt((view, camera, scale, offset, exact))(input)
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse::<i64>)(input)
}

fn axis(input: &str) -> IResult<&str, ViewAxis> {
    map_opt(one_of("xyz"), ViewAxis::from_char)(input)
}

fn view(input: &str) -> IResult<&str, Command> {
    let (input, _) = char('v')(input)?;
    let (input, axis) = opt(axis)(input)?;
    Ok((input, axis.map_or(Command::PromptView, Command::SetView)))
}

fn camera(input: &str) -> IResult<&str, Command> {
    let (input, _) = char('c')(input)?;
    let (input, axis) = opt(axis)(input)?;
    let (input, argument) = rest(input)?;

    let command = match axis {
        None => Command::InvalidAxis,
        Some(axis) => match Argument::classify(argument) {
            Argument::Missing => Command::PromptCamera(axis),
            Argument::Integer(n) => Command::SetCamera(axis, n),
            Argument::Invalid => Command::InvalidCameraValue,
        },
    };
    Ok((input, command))
}

fn scale(input: &str) -> IResult<&str, Command> {
    let (input, _) = char('s')(input)?;
    let (input, argument) = rest(input)?;

    let command = match Argument::classify(argument) {
        Argument::Missing => Command::PromptScale,
        Argument::Integer(n) => Command::SetScale(n),
        Argument::Invalid => Command::InvalidScale,
    };
    Ok((input, command))
}

// Only `x` takes a relative suffix; `y` and `z` are exact commands.
fn offset(input: &str) -> IResult<&str, Command> {
    let (input, _) = char('x')(input)?;
    let (input, argument) = rest(input)?;

    let command = match Argument::classify(argument) {
        Argument::Missing => Command::PromptPosition(ViewAxis::X),
        Argument::Integer(n) => Command::OffsetCamera(ViewAxis::X, n),
        Argument::Invalid => Command::InvalidOffset,
    };
    Ok((input, command))
}

fn exact(input: &str) -> IResult<&str, Command> {
    terminated(
        alt((
            value(Command::PromptPosition(ViewAxis::Y), tag("y")),
            value(Command::PromptPosition(ViewAxis::Z), tag("z")),
            value(Command::NextVertex, tag("b")),
            value(Command::Quit, alt((tag("quit"), tag("exit"), tag("q")))),
        )),
        eof,
    )(input)
}
