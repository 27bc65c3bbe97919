//! Text format parsing and serialization.

use std::io::{BufRead, Read, Write};

use anyhow::{anyhow, Context, Result};

use crate::models::{Cell, Problem, Trip};
use crate::state::Solution;

/// Parses a problem instance from its plain-text description.
///
/// The grammar is a whitespace-separated integer stream: a six-integer
/// header `rows cols vehicles trips bonus steps`, followed by six integers
/// per trip: `src_row src_col dst_row dst_col earliest_start latest_finish`.
///
/// # Examples
///
/// ```
/// use fleet_anneal::io::read_problem;
///
/// let input = "3 4 1 1 2 10\n0 0 0 3 0 5\n";
/// let problem = read_problem(input.as_bytes()).unwrap();
/// assert_eq!(problem.num_trips(), 1);
/// assert_eq!(problem.bonus(), 2);
/// ```
pub fn read_problem<R: BufRead>(reader: R) -> Result<Problem> {
    let mut tokens = Tokens::new(reader)?;

    let rows = tokens.next_int().context("reading rows")?;
    let cols = tokens.next_int().context("reading cols")?;
    let num_vehicles = tokens.next_int().context("reading vehicle count")? as usize;
    let num_trips = tokens.next_int().context("reading trip count")? as usize;
    let bonus = tokens.next_int().context("reading bonus")?;
    let num_steps = tokens.next_int().context("reading step count")?;

    let mut trips = Vec::with_capacity(num_trips);
    for i in 0..num_trips {
        let src_row = tokens.next_int().with_context(|| format!("trip {i}"))?;
        let src_col = tokens.next_int().with_context(|| format!("trip {i}"))?;
        let dst_row = tokens.next_int().with_context(|| format!("trip {i}"))?;
        let dst_col = tokens.next_int().with_context(|| format!("trip {i}"))?;
        let earliest_start = tokens.next_int().with_context(|| format!("trip {i}"))?;
        let latest_finish = tokens.next_int().with_context(|| format!("trip {i}"))?;

        trips.push(Trip::new(
            Cell::new(src_row, src_col),
            Cell::new(dst_row, dst_col),
            earliest_start,
            latest_finish,
        ));
    }

    Ok(Problem::new(rows, cols, num_vehicles, bonus, num_steps, trips))
}

/// Writes the assignment: one line per vehicle with the trip count followed
/// by the trip ids in dispatch order.
pub fn write_assignment<W: Write>(mut writer: W, solution: &Solution) -> std::io::Result<()> {
    for route in solution.routes() {
        write!(writer, "{}", route.len())?;
        for &id in route {
            write!(writer, " {id}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Whitespace-token integer stream over a buffered reader.
struct Tokens {
    values: std::vec::IntoIter<i32>,
}

impl Tokens {
    fn new<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("reading problem text")?;

        let values = text
            .split_ascii_whitespace()
            .map(|token| {
                token
                    .parse::<i32>()
                    .with_context(|| format!("invalid integer token {token:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            values: values.into_iter(),
        })
    }

    fn next_int(&mut self) -> Result<i32> {
        self.values
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input"))
    }
}
