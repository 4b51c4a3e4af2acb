use indexmap::IndexMap;
use log::debug;

use crate::{
    circuit::{AndGate, Circuit, Header, Latch, Role},
    constants::AAG_MAGIC,
    error::{Error, Result},
    lit::Lit,
};

/// Parses an ASCII AIGER (`aag`) file into its typed sections.
///
/// Blank lines are skipped and every line is trimmed before it is interpreted. The header
/// counts are taken as exact section lengths; whatever follows the AND gates is scanned for
/// symbol table entries (`i<k> name`, `o<k> name`, `l<k> name`) until the comment section.
pub fn parse_aag(data: &[u8]) -> Result<Circuit> {
    let text = std::str::from_utf8(data).map_err(|e| {
        let line = data[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        Error::format(line, "circuit is not valid UTF-8")
    })?;
    let mut lines = LineCursor::new(text);

    let (line, header_text) = lines
        .next()
        .ok_or_else(|| Error::format(1, "missing 'aag' header line"))?;
    let header = parse_header(line, header_text)?;
    let max_lit = header.max_lit();

    debug!(
        "Header declares {} body line(s) before the symbol table",
        header.num_body_lines()
    );

    // Sections are collected from the lines actually present, never sized from the header.
    let inputs = lines
        .take_section(header.num_inputs, "input")?
        .into_iter()
        .map(|(line, text)| Ok(parse_literals(line, text, "input", 1, 1, max_lit)?[0]))
        .collect::<Result<Vec<_>>>()?;

    let latches = lines
        .take_section(header.num_latches, "latch")?
        .into_iter()
        .map(|(line, text)| {
            let lits = parse_literals(line, text, "latch", 2, 3, max_lit)?;
            Ok(Latch {
                lit: lits[0],
                next: lits[1],
                reset: lits.get(2).copied(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let outputs = lines
        .take_section(header.num_outputs, "output")?
        .into_iter()
        .map(|(line, text)| Ok(parse_literals(line, text, "output", 1, 1, max_lit)?[0]))
        .collect::<Result<Vec<_>>>()?;

    let gates = lines
        .take_section(header.num_ands, "and-gate")?
        .into_iter()
        .map(|(line, text)| {
            let lits = parse_literals(line, text, "and-gate", 3, 3, max_lit)?;
            Ok(AndGate {
                lhs: lits[0],
                rhs0: lits[1],
                rhs1: lits[2],
                line,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut symbols = IndexMap::new();
    let mut comments = Vec::new();
    while let Some((line, text)) = lines.next() {
        if text == "c" {
            comments.extend(lines.by_ref().map(|(_, text)| text.to_string()));
            break;
        }

        match parse_symbol(text) {
            Some((role, index, name)) => {
                symbols.insert((role, index), name.to_string());
            }
            None => debug!("Ignoring line {}: {:?}", line, text),
        }
    }

    debug!(
        "Parsed circuit ({}) with {} symbol(s) and {} comment line(s)",
        header,
        symbols.len(),
        comments.len()
    );

    Ok(Circuit {
        header,
        inputs,
        latches,
        outputs,
        gates,
        symbols,
        comments,
    })
}

fn parse_header(line: usize, text: &str) -> Result<Header> {
    let mut fields = text.split_whitespace();
    if fields.next() != Some(AAG_MAGIC) {
        return Err(Error::format(
            line,
            format!("expected ASCII AIGER header starting with '{}'", AAG_MAGIC),
        ));
    }

    let counts = fields
        .map(|field| {
            field
                .parse::<usize>()
                .map_err(|_| Error::format(line, format!("invalid header count {:?}", field)))
        })
        .collect::<Result<Vec<_>>>()?;

    match counts[..] {
        [num_vars, num_inputs, num_latches, num_outputs, num_ands] => Ok(Header {
            num_vars,
            num_inputs,
            num_latches,
            num_outputs,
            num_ands,
        }),
        _ => Err(Error::format(
            line,
            format!("expected 5 header counts (M I L O A), found {}", counts.len()),
        )),
    }
}

/// Parses a whitespace separated list of `min..=max` literals, each at most `max_lit`.
fn parse_literals(
    line: usize,
    text: &str,
    section: &str,
    min: usize,
    max: usize,
    max_lit: Lit,
) -> Result<Vec<Lit>> {
    let lits = text
        .split_whitespace()
        .map(|field| {
            field.parse::<Lit>().map_err(|_| {
                Error::format(line, format!("invalid literal {:?} in {} line", field, section))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if lits.len() < min || lits.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(Error::format(
            line,
            format!(
                "{} line takes {} literal(s), found {}",
                section,
                expected,
                lits.len()
            ),
        ));
    }

    if let Some(lit) = lits.iter().find(|&&lit| lit > max_lit) {
        return Err(Error::format(
            line,
            format!(
                "literal {} exceeds the declared maximum variable index {}",
                lit,
                max_lit.var()
            ),
        ));
    }

    Ok(lits)
}

/// Splits `<marker><index> <name>` into its parts. The name may contain spaces.
fn parse_symbol(text: &str) -> Option<(Role, usize, &str)> {
    let marker = text.chars().next()?;
    let role = Role::from_marker(marker)?;
    let (index, name) = text[marker.len_utf8()..].split_once(' ')?;
    let index = index.parse::<usize>().ok()?;
    Some((role, index, name))
}

/// Iterates over the non-blank, trimmed lines of a text together with their 1-based line numbers.
struct LineCursor<'a> {
    inner: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        LineCursor {
            inner: text.lines(),
            line_no: 0,
        }
    }

    /// Takes exactly `len` lines, failing if the text ends before that.
    fn take_section(&mut self, len: usize, section: &str) -> Result<Vec<(usize, &'a str)>> {
        let lines: Vec<_> = self.by_ref().take(len).collect();
        if lines.len() < len {
            return Err(Error::format(
                self.line_no,
                format!(
                    "expected {} {} line(s), found only {}",
                    len,
                    section,
                    lines.len()
                ),
            ));
        }
        Ok(lines)
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.inner.next()?;
            self.line_no += 1;
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some((self.line_no, trimmed));
            }
        }
    }
}
