//! Triangle mesh construction from vertex and simplex tables.
//!
//! The vertex table has one row per vertex: `x, y` followed by optional
//! weight columns. The simplex table has one row per triangle: three vertex
//! indices followed by an optional triangle weight. The merged table has
//! three rows per triangle, one per corner, in a consistent winding order.

use ndarray::{s, Array2, ArrayView2, Axis};
use tracing::debug;

use crate::error::{RasterError, Result};

/// Merge vertices and simplices into a flat per-triangle vertex table.
///
/// Winding is detected from the first triangle: if its corners run
/// counter-clockwise (non-negative cross product) every triangle is emitted
/// in `[0, 2, 1]` order, otherwise in `[0, 1, 2]` order.
///
/// If the vertices carry no weight column, the triangle weight (fourth
/// simplex column) is appended to each of the triangle's three rows.
pub fn mesh(
    vertices: ArrayView2<'_, f64>,
    simplices: ArrayView2<'_, f64>,
) -> Result<Array2<f64>> {
    let (n_vertices, vertex_cols) = vertices.dim();
    let (n_triangles, simplex_cols) = simplices.dim();

    if vertex_cols < 2 {
        return Err(RasterError::invalid(
            "vertices",
            "At least two vertex columns (x, y) are required",
        ));
    }
    if simplex_cols < 3 {
        return Err(RasterError::invalid(
            "simplices",
            "At least three vertex columns are required for the triangle definition",
        ));
    }
    let verts_have_weights = vertex_cols > 2;
    if !verts_have_weights && simplex_cols < 4 {
        return Err(RasterError::invalid(
            "simplices",
            "If no vertex weight column is provided, a triangle weight column is required",
        ));
    }

    let corners = vertex_indices(simplices.slice(s![.., ..3]), n_vertices)?;

    let winding = match corners.first() {
        Some(first) if counter_clockwise(vertices, first) => [0, 2, 1],
        _ => [0, 1, 2],
    };

    let out_cols = if verts_have_weights {
        vertex_cols
    } else {
        vertex_cols + 1
    };
    let mut out = Array2::<f64>::zeros((n_triangles * 3, out_cols));

    for (t, triangle) in corners.iter().enumerate() {
        for (k, &w) in winding.iter().enumerate() {
            let row = t * 3 + k;
            out.slice_mut(s![row, ..vertex_cols])
                .assign(&vertices.index_axis(Axis(0), triangle[w]));
            if !verts_have_weights {
                out[[row, vertex_cols]] = simplices[[t, 3]];
            }
        }
    }

    debug!(
        operation = "mesh",
        triangles = n_triangles,
        vertices = n_vertices,
        winding = ?winding,
        "Built triangle mesh"
    );

    Ok(out)
}

/// Convert the index columns to `usize`, rejecting non-integral or
/// out-of-range values
fn vertex_indices(indices: ArrayView2<'_, f64>, n_vertices: usize) -> Result<Vec<[usize; 3]>> {
    indices
        .outer_iter()
        .map(|row| {
            let mut triangle = [0usize; 3];
            for (slot, &value) in triangle.iter_mut().zip(row.iter()) {
                if value.fract() != 0.0 || value < 0.0 {
                    return Err(RasterError::invalid(
                        "simplices",
                        format!(
                            "Simplices must be integral vertex indices, got {}. \
                             Cast simplices to integers first",
                            value
                        ),
                    ));
                }
                let index = value as usize;
                if index >= n_vertices {
                    return Err(RasterError::invalid(
                        "simplices",
                        format!(
                            "Vertex index {} out of range for {} vertices",
                            index, n_vertices
                        ),
                    ));
                }
                *slot = index;
            }
            Ok(triangle)
        })
        .collect()
}

fn counter_clockwise(vertices: ArrayView2<'_, f64>, triangle: &[usize; 3]) -> bool {
    let point = |i: usize| (vertices[[triangle[i], 0]], vertices[[triangle[i], 1]]);
    let (ax, ay) = point(0);
    let (bx, by) = point(1);
    let (cx, cy) = point(2);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax) >= 0.0
}
