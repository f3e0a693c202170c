use std::path::Path;
use std::str::FromStr;

use crate::digraph::Digraph;

use super::error::ParseError;

/// A transport mode of the link format, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Taxi,
    Bus,
    UBahn,
}

impl Mode {
    /// The fixed edge weight of this mode.
    pub fn weight(self) -> f64 {
        match self {
            Mode::Taxi => 2.0,
            Mode::Bus => 3.0,
            Mode::UBahn => 5.0,
        }
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Taxi" => Ok(Mode::Taxi),
            "Bus" => Ok(Mode::Bus),
            "UBahn" => Ok(Mode::UBahn),
            _ => Err(ParseError::UnknownMode(s.to_string())),
        }
    }
}

/// Reads link lines `<from> <to> <mode>` into a weighted digraph.
///
/// Links are symmetric: each line inserts both `from --> to` and
/// `to --> from`. When several modes connect the same pair, the cheapest
/// applicable weight wins: a taxi link always takes the edge, a bus link
/// only when it is strictly cheaper than the present weight, and an
/// underground link only when the pair is not connected yet. Blank lines
/// are skipped.
pub fn digraph_from_str(input: &str) -> Result<Digraph<u32>, ParseError> {
    let mut graph = Digraph::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(from), Some(to), Some(mode), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(ParseError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            });
        };
        let from = parse_id(from, index)?;
        let to = parse_id(to, index)?;
        insert_link(&mut graph, from, to, mode.parse()?);
    }
    Ok(graph)
}

/// [`digraph_from_str`] over the contents of a file.
pub fn digraph_from_path(path: impl AsRef<Path>) -> Result<Digraph<u32>, ParseError> {
    digraph_from_str(&std::fs::read_to_string(path)?)
}

fn parse_id(field: &str, index: usize) -> Result<u32, ParseError> {
    field.parse().map_err(|source| ParseError::InvalidField {
        line: index + 1,
        source,
    })
}

fn insert_link(graph: &mut Digraph<u32>, from: u32, to: u32, mode: Mode) {
    let applicable = match mode {
        Mode::Taxi => true,
        Mode::Bus => match graph.weight(&from, &to) {
            Ok(current) => current > Mode::Bus.weight(),
            Err(_) => true,
        },
        Mode::UBahn => !graph.contains_edge(&from, &to),
    };
    if applicable {
        graph.add_edge(from, to, mode.weight());
        graph.add_edge(to, from, mode.weight());
    }
}
