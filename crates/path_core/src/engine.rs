use tracing::{debug, trace};

use crate::{Graph, NodeIndex, PathError, PathResult};

/// Minimum-hop path from the first name in `names` to the last.
///
/// The endpoint convention is part of the contract: `names[0]` is the source
/// and `names[names.len() - 1]` is the sink. Edges naming an unknown node are
/// ignored; a repeated name is rejected before any search runs.
pub fn compute<N, E>(names: &[N], edges: &[(E, E)]) -> Result<PathResult, PathError>
where
    N: AsRef<str>,
    E: AsRef<str>,
{
    let graph = Graph::build(names, edges)?;
    shortest_path(&graph)
}

/// Dijkstra over unit weights from [`Graph::source`] to [`Graph::sink`].
///
/// Among unvisited nodes with equal distance the lowest index is expanded
/// first, so results are deterministic for a given input order.
pub fn shortest_path(graph: &Graph) -> Result<PathResult, PathError> {
    let n = graph.len();
    let source = graph.source();
    let sink = graph.sink();

    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = Some(0);

    for _ in 1..n {
        let Some(u) = closest_unvisited(&dist, &visited) else {
            break;
        };
        visited[u] = true;
        // `u` was selected because its distance is finite.
        let Some(du) = dist[u] else { break };
        trace!(node = %graph.name(u), distance = du, "visit");

        let candidate = du + 1;
        for &v in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            if dist[v].map_or(true, |dv| candidate < dv) {
                dist[v] = Some(candidate);
                prev[v] = Some(u);
            }
        }
    }

    let Some(distance) = dist[sink] else {
        debug!(from = %graph.name(source), to = %graph.name(sink), "sink unreachable");
        return Err(PathError::Unreachable {
            from: graph.name(source).clone(),
            to: graph.name(sink).clone(),
        });
    };

    let path = reconstruct_path(&prev, source, sink)
        .into_iter()
        .map(|node| graph.name(node).clone())
        .collect();
    debug!(distance, "path found");
    Ok(PathResult { path, distance })
}

/// Unvisited node with the smallest finite distance, lowest index on ties.
fn closest_unvisited(dist: &[Option<usize>], visited: &[bool]) -> Option<NodeIndex> {
    dist.iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (_, done))| !**done)
        .filter_map(|(i, (d, _))| d.map(|d| (d, i)))
        .min()
        .map(|(_, i)| i)
}

/// Walk the predecessor chain from sink back to source.
fn reconstruct_path(
    prev: &[Option<NodeIndex>],
    source: NodeIndex,
    sink: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        match prev[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
