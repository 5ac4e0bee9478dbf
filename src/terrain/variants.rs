/// Seam-compatible tile variant derivation
///
/// One generated height field yields three derived fields (two mirror flips
/// and a 180° reversal). The four together tile a 4x4 lattice with matching
/// edge values when placed per the pattern in `grid::VARIANT_PATTERN`. The
/// transforms are literal array-index permutations; their correctness
/// criterion is the seam-continuity tests, not their names.
use super::height_field::HeightField;
use serde::{Deserialize, Serialize};

/// Orientation variant of the canonical height field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileVariant {
    Normal,
    FlipX,
    FlipZ,
    Inverted,
}

/// The four canonical fields of one generation cycle.
///
/// Every tile in the assembled grid references one of these four; no fifth
/// field ever exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    pub normal: HeightField,
    pub flip_x: HeightField,
    pub flip_z: HeightField,
    pub inverted: HeightField,
}

impl VariantSet {
    /// Derive all three variants from a base field
    pub fn derive(base: HeightField) -> Self {
        Self {
            flip_x: derive_flip_x(&base),
            flip_z: derive_flip_z(&base),
            inverted: derive_inverted(&base),
            normal: base,
        }
    }

    pub fn field(&self, variant: TileVariant) -> &HeightField {
        match variant {
            TileVariant::Normal => &self.normal,
            TileVariant::FlipX => &self.flip_x,
            TileVariant::FlipZ => &self.flip_z,
            TileVariant::Inverted => &self.inverted,
        }
    }
}

/// Mirror the field by reversing the whole flat array, then reversing each
/// row chunk again. Net effect: rows swap with their mirror counterpart
/// while row contents stay in order.
pub fn derive_flip_x(field: &HeightField) -> HeightField {
    let density = field.density();
    let mut data = field.as_slice().to_vec();
    data.reverse();

    for chunk in data.chunks_mut(density) {
        chunk.reverse();
    }

    HeightField::from_raw(density, data)
}

/// Mirror the field by reversing the contents of each row, leaving row
/// order untouched.
pub fn derive_flip_z(field: &HeightField) -> HeightField {
    let density = field.density();
    let mut data = field.as_slice().to_vec();

    for chunk in data.chunks_mut(density) {
        chunk.reverse();
    }

    HeightField::from_raw(density, data)
}

/// Reverse the flat sample sequence (180° rotation of the grid).
pub fn derive_inverted(field: &HeightField) -> HeightField {
    let mut data = field.as_slice().to_vec();
    data.reverse();

    HeightField::from_raw(field.density(), data)
}
