//! Parsing of literal edge and vertex lists given on the command line or in
//! edge-list files.
//!
//! Entries are separated by commas or newlines. Blank entries and lines
//! starting with `#` are skipped.

use crate::types::{GraphError, GraphResult, Weight, WeightedEdge, DEFAULT_WEIGHT};

/// Parse directed entries of the form `SRC-DST` or `SRC-DST:WEIGHT`.
///
/// Weights are parsed as signed integers; whether they are acceptable is the
/// graph's decision, not the parser's.
pub fn parse_directed_edges(input: &str) -> GraphResult<Vec<WeightedEdge>> {
    entries(input).map(parse_directed_entry).collect()
}

/// Parse undirected entries of the form `U-V`, or a two-character token
/// `UV` naming two single-character vertices.
pub fn parse_undirected_edges(input: &str) -> GraphResult<Vec<(String, String)>> {
    entries(input).map(parse_undirected_entry).collect()
}

/// Parse a comma- or whitespace-separated list of vertex indices.
pub fn parse_indices(input: &str) -> GraphResult<Vec<usize>> {
    tokens(input).map(|t| parse_index(t, t)).collect()
}

/// Parse a comma- or whitespace-separated list of vertex labels.
pub fn parse_labels(input: &str) -> Vec<String> {
    tokens(input).map(str::to_string).collect()
}

fn entries(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_directed_entry(entry: &str) -> GraphResult<WeightedEdge> {
    let (pair, weight) = match entry.split_once(':') {
        Some((pair, weight)) => (pair, parse_weight(entry, weight)?),
        None => (entry, DEFAULT_WEIGHT),
    };
    let (src, dst) = pair
        .split_once('-')
        .ok_or_else(|| parse_error(entry, "expected SRC-DST[:WEIGHT]"))?;
    Ok(WeightedEdge::new(
        parse_index(entry, src)?,
        parse_index(entry, dst)?,
        weight,
    ))
}

fn parse_undirected_entry(entry: &str) -> GraphResult<(String, String)> {
    if let Some((u, v)) = entry.split_once('-') {
        let (u, v) = (u.trim(), v.trim());
        if u.is_empty() || v.is_empty() {
            return Err(parse_error(entry, "empty vertex label"));
        }
        return Ok((u.to_string(), v.to_string()));
    }

    let mut chars = entry.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(u), Some(v), None) => Ok((u.to_string(), v.to_string())),
        _ => Err(parse_error(entry, "expected U-V or a two-character pair")),
    }
}

fn parse_index(entry: &str, token: &str) -> GraphResult<usize> {
    token
        .trim()
        .parse()
        .map_err(|_| parse_error(entry, &format!("{:?} is not a vertex index", token.trim())))
}

fn parse_weight(entry: &str, token: &str) -> GraphResult<Weight> {
    token
        .trim()
        .parse()
        .map_err(|_| parse_error(entry, &format!("{:?} is not an integer weight", token.trim())))
}

fn parse_error(entry: &str, reason: &str) -> GraphError {
    GraphError::Parse {
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}
