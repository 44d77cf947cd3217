use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::Coord2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" => Command::Quit,
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words)?),
            other => bail!("unknown command {other:?}, expected reveal, flag or quit"),
        };

        if words.next().is_some() {
            bail!("too many arguments");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |axis: &str| -> anyhow::Result<u8> {
        let word = words.next().with_context(|| format!("missing {axis}"))?;
        word.parse::<u8>()
            .with_context(|| format!("invalid {axis} coordinate {word:?}"))
    };
    let x = next("x")?;
    let y = next("y")?;
    Ok((x, y))
}
