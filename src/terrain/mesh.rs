/// Renderable tile mesh construction from a height field
///
/// Produces plain vertex/index/normal/uv buffers; texture and bump-map
/// binding belong to the renderer, which treats the buffers as opaque
/// geometry input.
use super::height_field::HeightField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Normal3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UV {
    pub u: f32,
    pub v: f32,
}

/// Geometry buffers for one terrain tile, in tile-local coordinates
/// (x and z in `[0, block_size]`, y from the height field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMesh {
    pub vertices: Vec<Vertex3D>,
    pub indices: Vec<u32>,
    pub normals: Vec<Normal3D>,
    pub uvs: Vec<UV>,
}

/// Build a tile mesh with the height field baked into vertex Y coordinates.
///
/// The vertex grid is `density x density` with two triangles per cell.
/// Normals come from central differences on the height samples.
pub fn build_tile_mesh(field: &HeightField, block_size: f32) -> TileMesh {
    let d = field.density();
    let spacing = block_size / (d - 1) as f32;

    let mut vertices = Vec::with_capacity(d * d);
    let mut normals = Vec::with_capacity(d * d);
    let mut uvs = Vec::with_capacity(d * d);

    for row in 0..d {
        for col in 0..d {
            vertices.push(Vertex3D {
                x: col as f32 * spacing,
                y: field.get(col, row) as f32,
                z: row as f32 * spacing,
            });
            normals.push(vertex_normal(field, col, row, spacing));
            uvs.push(UV {
                u: col as f32 / (d - 1) as f32,
                v: row as f32 / (d - 1) as f32,
            });
        }
    }

    let mut indices = Vec::with_capacity((d - 1) * (d - 1) * 6);
    for row in 0..d - 1 {
        for col in 0..d - 1 {
            let i00 = (row * d + col) as u32;
            let i10 = i00 + 1;
            let i01 = i00 + d as u32;
            let i11 = i01 + 1;

            indices.extend_from_slice(&[i00, i01, i10]);
            indices.extend_from_slice(&[i10, i01, i11]);
        }
    }

    TileMesh {
        vertices,
        indices,
        normals,
        uvs,
    }
}

/// Normal from central height differences, clamped at the field borders
fn vertex_normal(field: &HeightField, col: usize, row: usize, spacing: f32) -> Normal3D {
    let d = field.density();
    let h = |c: usize, r: usize| field.get(c.min(d - 1), r.min(d - 1)) as f32;

    let left = h(col.saturating_sub(1), row);
    let right = h(col + 1, row);
    let up = h(col, row.saturating_sub(1));
    let down = h(col, row + 1);

    let nx = left - right;
    let nz = up - down;
    let ny = 2.0 * spacing;

    let length = (nx * nx + ny * ny + nz * nz).sqrt();
    Normal3D {
        x: nx / length,
        y: ny / length,
        z: nz / length,
    }
}
