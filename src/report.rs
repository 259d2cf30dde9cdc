use crate::{Solution, SolutionEdge};
use std::io::{self, Write};

/// Total-cost value reported when no spanning tree exists.
const DISCONNECTED_SENTINEL: i64 = -1;

/// Serializes a [`Solution`] into the fixed textual report format.
///
/// The report opens with `TOTAL_COST:` followed by the summed effective cost,
/// then lists the accepted edges between `MST_EDGES_START` and
/// `MST_EDGES_END`, one per line as `u_idx,v_idx,w_e,w_u,w_v,C_e` in
/// acceptance order. A disconnected graph reports the `-1` sentinel with an
/// empty, still bracketed, edge block.
pub fn write_report<W: Write>(solution: &Solution, writer: &mut W) -> io::Result<()> {
    let (total_cost, edges): (i64, &[SolutionEdge]) = match solution {
        Solution::Disconnected => (DISCONNECTED_SENTINEL, &[]),
        Solution::Tree { total_cost, edges } => (*total_cost, edges),
    };

    writeln!(writer, "TOTAL_COST:{total_cost}")?;
    writeln!(writer, "MST_EDGES_START")?;
    for edge in edges {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            edge.u, edge.v, edge.weight, edge.u_weight, edge.v_weight, edge.effective_cost
        )?;
    }
    writeln!(writer, "MST_EDGES_END")
}
