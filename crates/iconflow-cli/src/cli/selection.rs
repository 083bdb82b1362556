use std::ops::RangeInclusive;
use std::str::FromStr;

/// Indices picked out of a preview list, as typed by a user.
///
/// Accepts `all`, `none`, or a comma separated list of indices and
/// inclusive ranges such as `0,2,5-7`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    Ranges(Vec<RangeInclusive<usize>>),
}

impl Selection {
    /// Expands the selection against `len` previews.
    ///
    /// Ranges are cut at `len`. An index at or past `len` is kept once so the
    /// export still reports it as out of range.
    pub fn resolve(&self, len: usize) -> Vec<usize> {
        match self {
            Self::All => (0..len).collect(),
            Self::Ranges(ranges) => ranges
                .iter()
                .flat_map(|range| {
                    let (start, end) = (*range.start(), *range.end());
                    start..=end.min(len).max(start)
                })
                .collect(),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::Ranges(Vec::new()));
        }

        let mut ranges = Vec::new();
        for part in s.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    let start = parse_index(start)?;
                    let end = parse_index(end)?;
                    if start > end {
                        return Err(format!("range '{part}' runs backwards"));
                    }
                    ranges.push(start..=end);
                }
                None => {
                    let index = parse_index(part)?;
                    ranges.push(index..=index);
                }
            }
        }
        Ok(Self::Ranges(ranges))
    }
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("'{}' is not an index", s.trim()))
}
