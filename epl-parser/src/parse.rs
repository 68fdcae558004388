use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, one_of, u32 as parse_u32},
    combinator::{eof, opt},
    sequence::{delimited, preceded},
};

use crate::commands::{Command, EplCommand, LineMode};

fn quoted_token(input: &str) -> IResult<&str, String> {
    let (input, inner) = delimited(char('"'), take_while(|c| c != '"'), char('"')).parse(input)?;
    Ok((input, format!("\"{inner}\"")))
}

fn bare_token(input: &str) -> IResult<&str, String> {
    let (input, token) = take_while(|c: char| c != ',').parse(input)?;
    Ok((input, token.to_string()))
}

fn comma(input: &str) -> IResult<&str, char> {
    char(',').parse(input)
}

/// Comma separated argument tokens. Quoted tokens may contain commas and
/// keep their surrounding quote characters.
fn parse_args(input: &str) -> IResult<&str, Vec<String>> {
    let mut args = Vec::new();
    let mut rest = input;
    loop {
        let (after, token) = alt((quoted_token, bare_token)).parse(rest)?;
        args.push(token);
        rest = after;
        match comma(rest) {
            Ok((after, _)) => rest = after,
            Err(_) => break,
        }
    }
    Ok((rest, args))
}

fn text_command(input: &str) -> IResult<&str, EplCommand> {
    let line = input;
    let (input, _) = tag("A").parse(input)?;
    let (input, args) = parse_args(input)?;
    Ok((input, EplCommand::Text(Command::new(line, args))))
}

fn barcode_command(input: &str) -> IResult<&str, EplCommand> {
    let line = input;
    let (input, _) = tag("B").parse(input)?;
    let (input, args) = parse_args(input)?;
    Ok((input, EplCommand::Barcode(Command::new(line, args))))
}

fn box_command(input: &str) -> IResult<&str, EplCommand> {
    let line = input;
    let (input, _) = tag("X").parse(input)?;
    let (input, args) = parse_args(input)?;
    Ok((input, EplCommand::Box(Command::new(line, args))))
}

fn line_command(input: &str) -> IResult<&str, EplCommand> {
    let line = input;
    let (input, _) = tag("L").parse(input)?;
    let (input, variant) = one_of("EOSW").parse(input)?;
    let (input, args) = parse_args(input)?;
    let mode = match variant {
        'E' => LineMode::Invert,
        'O' => LineMode::Solid,
        _ => LineMode::Segment,
    };
    Ok((
        input,
        EplCommand::Line {
            mode,
            command: Command::new(line, args),
        },
    ))
}

fn clear_command(input: &str) -> IResult<&str, EplCommand> {
    let (input, _) = tag("N").parse(input)?;
    let (input, _) = eof(input)?;
    Ok((input, EplCommand::ClearBuffer))
}

fn width_command(input: &str) -> IResult<&str, EplCommand> {
    let (input, width) = preceded(tag("q"), parse_u32).parse(input)?;
    Ok((input, EplCommand::LabelWidth(width)))
}

fn length_command(input: &str) -> IResult<&str, EplCommand> {
    let (input, length) = preceded(tag("Q"), parse_u32).parse(input)?;
    let (input, _gap) = opt(preceded(char(','), parse_u32)).parse(input)?;
    Ok((input, EplCommand::LabelLength(length)))
}

fn print_command(input: &str) -> IResult<&str, EplCommand> {
    let (input, copies) = preceded(tag("P"), opt(parse_u32)).parse(input)?;
    Ok((input, EplCommand::Print(copies.unwrap_or(1))))
}

fn parse_line(line: &str) -> EplCommand {
    let result: IResult<&str, EplCommand> = alt((
        text_command,
        barcode_command,
        box_command,
        line_command,
        clear_command,
        width_command,
        length_command,
        print_command,
    ))
    .parse(line);

    match result {
        Ok((_, command)) => command,
        Err(_) => EplCommand::Unknown(line.to_string()),
    }
}

/// Tokenizes a whole EPL2 program, one command per line. Lines that do not
/// start a recognized command come back as [`EplCommand::Unknown`] so the
/// caller can decide how loudly to skip them.
pub fn parse_epl(input: &str) -> Vec<EplCommand> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}
