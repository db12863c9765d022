//! Text forms accepted by callers: `A-B` edge tokens and the flat problem
//! array `["3", "A", "B", "C", "A-B", "B-C"]`.

use crate::{compute, NodeName, PathError, PathResult, TokenError, PATH_DELIMITER};

/// A directed edge written as `SRC-DST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeToken {
    pub src: NodeName,
    pub dst: NodeName,
}

impl EdgeToken {
    /// Parses `SRC-DST`. Empty pieces are skipped and anything after the
    /// second piece is ignored, so `A--B` and `A-B-C` both yield `A -> B`.
    /// Whitespace is part of the name, as it is in the node list.
    /// Returns `None` when fewer than two names are present.
    pub fn parse(token: &str) -> Option<Self> {
        let mut pieces = token.split(PATH_DELIMITER).filter(|piece| !piece.is_empty());
        let src = pieces.next()?;
        let dst = pieces.next()?;
        Some(Self {
            src: NodeName::from(src),
            dst: NodeName::from(dst),
        })
    }

    fn into_pair(self) -> (NodeName, NodeName) {
        (self.src, self.dst)
    }
}

impl std::fmt::Display for EdgeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{PATH_DELIMITER}{}", self.src, self.dst)
    }
}

/// Node list plus edge list, ready for [`compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub nodes: Vec<NodeName>,
    pub edges: Vec<(NodeName, NodeName)>,
}

impl Problem {
    /// Builds a problem from node names and `SRC-DST` edge tokens.
    ///
    /// Tokens that do not name two nodes are skipped.
    pub fn new<N, T>(nodes: &[N], edge_tokens: &[T]) -> Self
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            nodes: nodes.iter().map(|n| NodeName::from(n.as_ref())).collect(),
            edges: parse_edges(edge_tokens),
        }
    }

    /// Parses the flat array form: a node count `N`, then `N` names, then
    /// edge tokens.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Result<Self, TokenError> {
        let (count, rest) = tokens.split_first().ok_or(TokenError::MissingCount)?;
        let count = count.as_ref().trim();
        let n: usize = match count.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(TokenError::InvalidCount {
                    token: count.to_string(),
                })
            }
        };
        if rest.len() < n {
            return Err(TokenError::MissingNodes {
                expected: n,
                found: rest.len(),
            });
        }
        let (nodes, edge_tokens) = rest.split_at(n);
        Ok(Self::new(nodes, edge_tokens))
    }

    pub fn solve(&self) -> Result<PathResult, PathError> {
        compute(&self.nodes, &self.edges)
    }
}

fn parse_edges<T: AsRef<str>>(tokens: &[T]) -> Vec<(NodeName, NodeName)> {
    tokens
        .iter()
        .filter_map(|t| EdgeToken::parse(t.as_ref()))
        .map(EdgeToken::into_pair)
        .collect()
}
