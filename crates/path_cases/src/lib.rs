//! Case files and built-in demonstration graphs shared by `path_cli`.

use anyhow::{bail, Context, Result};
use path_core::{PathError, PathResult, Problem};
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Rendered form of an unreachable outcome in `expect` fields.
pub const UNREACHABLE: &str = "unreachable";

pub const DEFAULT_MAX_NODES: usize = 10_000;

/// One graph to solve: nodes in order (first = source, last = sink) and
/// `SRC-DST` edge tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseDef {
    pub name: String,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<String>,
    /// Expected rendered path (`A-B-C`) or `"unreachable"`.
    #[serde(default)]
    pub expect: Option<String>,
}

impl CaseDef {
    pub fn problem(&self) -> Problem {
        Problem::new(&self.nodes, &self.edges)
    }
}

#[derive(Debug, Deserialize)]
pub struct CaseFile {
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Caller-side bound on graph size; larger cases are refused at load.
    pub max_nodes: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub result: Result<PathResult, PathError>,
    pub expected: Option<String>,
}

impl CaseOutcome {
    /// `A-B-C` for a found path, `"unreachable"` when there is none, and the
    /// error message for anything else.
    pub fn rendered(&self) -> String {
        match &self.result {
            Ok(path) => path.to_string(),
            Err(PathError::Unreachable { .. }) => UNREACHABLE.to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// True when there is no expectation or the outcome matches it.
    pub fn matches(&self) -> bool {
        self.expected
            .as_deref()
            .map_or(true, |want| want == self.rendered())
    }
}

/// Validates case-file invariants, returning the first problem found.
pub fn validate_cases(cases: &[CaseDef], config: &RunConfig) -> Result<()> {
    let mut seen = HashSet::new();
    for case in cases {
        if case.name.is_empty() {
            bail!("case name must not be empty");
        }
        if !seen.insert(case.name.as_str()) {
            bail!("duplicate case name '{}'", case.name);
        }
        if case.nodes.is_empty() {
            bail!("case '{}' has no nodes", case.name);
        }
        if case.nodes.len() > config.max_nodes {
            bail!(
                "case '{}' has {} nodes, limit is {}",
                case.name,
                case.nodes.len(),
                config.max_nodes,
            );
        }
    }
    Ok(())
}

pub fn load_cases(path: &Path, config: &RunConfig) -> Result<CaseFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading case file: {}", path.display()))?;
    let file: CaseFile = serde_json::from_str(&json)
        .with_context(|| format!("parsing case file: {}", path.display()))?;
    validate_cases(&file.cases, config)
        .with_context(|| format!("validating case file: {}", path.display()))?;
    debug!(cases = file.cases.len(), path = %path.display(), "case file loaded");
    Ok(file)
}

/// Validates `cases` against `config`, then solves each one independently in
/// parallel. Output order follows input.
pub fn run_cases(cases: &[CaseDef], config: &RunConfig) -> Result<Vec<CaseOutcome>> {
    validate_cases(cases, config)?;
    let outcomes: Vec<CaseOutcome> = cases
        .par_iter()
        .map(|case| CaseOutcome {
            name: case.name.clone(),
            result: case.problem().solve(),
            expected: case.expect.clone(),
        })
        .collect();
    for outcome in outcomes.iter().filter(|o| !o.matches()) {
        warn!(
            case = %outcome.name,
            got = %outcome.rendered(),
            expected = outcome.expected.as_deref().unwrap_or_default(),
            "case outcome does not match expectation"
        );
    }
    Ok(outcomes)
}

fn case(name: &str, nodes: &[&str], edges: &[&str], expect: &str) -> CaseDef {
    CaseDef {
        name: name.to_string(),
        nodes: nodes.iter().map(ToString::to_string).collect(),
        edges: edges.iter().map(ToString::to_string).collect(),
        expect: Some(expect.to_string()),
    }
}

/// Demonstration graphs: a straight line, a direct shortcut, a cycle, and a
/// longer chain with a shortcut.
pub fn builtin_cases() -> Vec<CaseDef> {
    vec![
        case(
            "linear",
            &["A", "B", "C", "D"],
            &["A-B", "B-C", "C-D"],
            "A-B-C-D",
        ),
        case(
            "shortcut",
            &["A", "B", "C", "D", "E"],
            &["A-B", "B-C", "C-D", "D-E", "A-E"],
            "A-E",
        ),
        case("cycle", &["A", "B", "C"], &["A-B", "B-C", "C-A"], "A-B-C"),
        case(
            "long_shortcut",
            &["A", "B", "C", "D", "E", "F"],
            &["A-B", "B-C", "C-D", "D-E", "E-F", "A-F"],
            "A-F",
        ),
    ]
}
