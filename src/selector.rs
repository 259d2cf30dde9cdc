use crate::forest::DisjointSetForest;
use crate::{GraphDescription, Solution, SolutionEdge};

/// Builds the minimum spanning tree of the described graph under the
/// extended edge cost `w_e + w_u + w_v`.
///
/// Every candidate edge is annotated with its effective cost once, then the
/// candidates are sorted by effective cost ascending; the sort is stable, so
/// edges of equal cost keep their input order and the result is
/// deterministic. Edges are accepted greedily whenever their endpoints still
/// belong to separate components, and selection stops as soon as the tree is
/// complete.
///
/// # Arguments
///
/// * `description` - The parsed vertex/edge-weighted graph.
///
/// # Returns
///
/// [`Solution::Tree`] with the summed effective cost and the accepted edges
/// in acceptance order, or [`Solution::Disconnected`] when the edge set does
/// not span all vertices. A graph with at most one vertex needs no edges and
/// yields an empty tree of cost zero.
pub fn solve(description: &GraphDescription) -> Solution {
    let vertex_count = description.vertex_count();
    if vertex_count <= 1 {
        return Solution::Tree {
            total_cost: 0,
            edges: Vec::new(),
        };
    }

    let mut candidates: Vec<SolutionEdge> = description
        .edges
        .iter()
        .map(|edge| {
            let u_weight = description.vertex_weights[edge.u];
            let v_weight = description.vertex_weights[edge.v];
            SolutionEdge {
                u: edge.u,
                v: edge.v,
                weight: edge.weight,
                u_weight,
                v_weight,
                effective_cost: edge.weight + u_weight + v_weight,
            }
        })
        .collect();
    candidates.sort_by_key(|candidate| candidate.effective_cost);

    let mut forest = DisjointSetForest::new(vertex_count);
    let mut edges = Vec::with_capacity(vertex_count - 1);
    let mut total_cost = 0;
    for candidate in candidates {
        if edges.len() == vertex_count - 1 {
            break;
        }
        if !forest.union_set(candidate.u, candidate.v) {
            log::debug!(
                "Skipping edge {}-{}, endpoints already connected",
                candidate.u,
                candidate.v
            );
            continue;
        }
        total_cost += candidate.effective_cost;
        edges.push(candidate);
    }

    if edges.len() < vertex_count - 1 {
        log::warn!(
            "Selected only {} of {} tree edges, graph is disconnected",
            edges.len(),
            vertex_count - 1
        );
        return Solution::Disconnected;
    }

    Solution::Tree { total_cost, edges }
}
