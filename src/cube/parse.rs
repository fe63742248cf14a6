use anyhow::Context;
use regex::Regex;

use crate::error::PuzzleError;
use crate::grid::SIDE;
use crate::orientation::Twist;
use crate::Result;

/// Columns and rows are stored 0-indexed; the text form is 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Face,
    Col(usize),
    Row(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub line: usize,
    pub target: Target,
    pub verb: String,
    pub magnitude: i64,
}

#[derive(Debug)]
pub struct Puzzle {
    pub instructions: Vec<Instruction>,
    pub twists: Vec<Twist>,
}

impl Target {
    pub fn cells_touched(&self) -> i64 {
        let side = SIDE as i64;
        match self {
            Target::Face => side * side,
            Target::Col(_) | Target::Row(_) => side,
        }
    }
}

fn parse_index(s: &str) -> std::result::Result<usize, PuzzleError> {
    let out_of_range = || PuzzleError::IndexOutOfRange {
        index: s.to_string(),
        side: SIDE,
    };
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::MalformedTarget(s.to_string()));
    }
    let index: usize = s.parse().map_err(|_| out_of_range())?;
    if index < 1 || index > SIDE {
        return Err(out_of_range());
    }
    Ok(index - 1)
}

pub fn parse_target(s: &str) -> std::result::Result<Target, PuzzleError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    match tokens.as_slice() {
        ["FACE"] => Ok(Target::Face),
        ["COL", n] => Ok(Target::Col(parse_index(n)?)),
        ["ROW", n] => Ok(Target::Row(parse_index(n)?)),
        _ => Err(PuzzleError::MalformedTarget(s.to_string())),
    }
}

pub struct InstructionParser {
    re: Regex,
}

impl InstructionParser {
    pub fn new() -> Result<InstructionParser> {
        let re = Regex::new(
            r"^(?P<target>.+?) - (?P<verb>\S+) (?P<magnitude>[+-]?[0-9]+)$",
        )?;
        Ok(InstructionParser { re })
    }

    pub fn parse(
        &self,
        line_number: usize,
        line: &str,
    ) -> std::result::Result<Instruction, PuzzleError> {
        let captures = self
            .re
            .captures(line)
            .ok_or_else(|| PuzzleError::MalformedInstruction(line.to_string()))?;
        let target = parse_target(&captures["target"])?;
        let magnitude: i64 = captures["magnitude"]
            .parse()
            .map_err(|_| PuzzleError::MalformedInstruction(line.to_string()))?;

        Ok(Instruction {
            line: line_number,
            target,
            verb: captures["verb"].to_string(),
            magnitude,
        })
    }
}

pub fn parse_twist(ch: char) -> std::result::Result<Twist, PuzzleError> {
    match ch {
        'U' => Ok(Twist::U),
        'L' => Ok(Twist::L),
        'D' => Ok(Twist::D),
        'R' => Ok(Twist::R),
        _ => Err(PuzzleError::UnknownTwist(ch)),
    }
}

pub fn parse_twists(s: &str) -> std::result::Result<Vec<Twist>, PuzzleError> {
    s.trim().chars().map(parse_twist).collect()
}

pub fn parse_puzzle(s: &str) -> Result<Puzzle> {
    let normalized = s.replace("\r\n", "\n");
    let (instruction_block, twist_block) = normalized
        .split_once("\n\n")
        .unwrap_or((normalized.as_str(), ""));

    let parser = InstructionParser::new()?;
    let mut instructions = Vec::new();

    for (line_number, line) in instruction_block.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let instruction = parser
            .parse(line_number + 1, line)
            .with_context(|| format!("line {}", line_number + 1))?;
        instructions.push(instruction);
    }

    let twist_line = instruction_block.lines().count() + 2;
    let twists = parse_twists(twist_block).with_context(|| format!("line {}", twist_line))?;

    Ok(Puzzle {
        instructions,
        twists,
    })
}
