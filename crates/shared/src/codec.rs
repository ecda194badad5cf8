//! JSON import/export for the voxel store.
//!
//! Export is plain serde serialization of the store. Import is deliberately
//! not a serde derive: the file comes from outside, and each malformed entry
//! must be reported with its index and the exact reason, stopping at the first
//! offender. Validation runs over a parsed `serde_json::Value` instead.

use serde_json::Value;
use thiserror::Error;

use crate::{Voxel, MAX_VOXELS};

/// Everything that can go wrong between picking a file and replacing the
/// store. Import is all-or-nothing: on any variant the store is untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read file: {0}")]
    Read(String),
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON array of voxels")]
    Shape,
    #[error("too many voxels: {0} (limit is {MAX_VOXELS})")]
    Limit(usize),
    #[error("voxel {index}: missing field `{field}`")]
    FieldMissing { index: usize, field: &'static str },
    #[error("voxel {index}: {value:?} is not a valid color")]
    ColorInvalid { index: usize, value: String },
    #[error("voxel {index}: `position` must be an array of three numbers")]
    PositionShape { index: usize },
}

/// Serialize a voxel list for export. Well-formed internal state cannot fail
/// to serialize, so this is infallible.
pub fn export_json(voxels: &[Voxel]) -> String {
    serde_json::to_string(voxels).unwrap_or_else(|_| "[]".to_string())
}

/// Parse and validate externally supplied text into a voxel list.
///
/// Fail-fast: the first offending element aborts the whole import.
pub fn import_json(text: &str) -> Result<Vec<Voxel>, ImportError> {
    let value: Value = serde_json::from_str(text)?;

    let entries = value.as_array().ok_or(ImportError::Shape)?;
    if entries.len() > MAX_VOXELS {
        return Err(ImportError::Limit(entries.len()));
    }

    let mut voxels = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        voxels.push(parse_entry(index, entry)?);
    }
    Ok(voxels)
}

fn parse_entry(index: usize, entry: &Value) -> Result<Voxel, ImportError> {
    let position = entry
        .get("position")
        .ok_or(ImportError::FieldMissing { index, field: "position" })?;
    let color = entry
        .get("color")
        .ok_or(ImportError::FieldMissing { index, field: "color" })?;

    let color = match color.as_str() {
        Some(s) if csscolorparser::parse(s).is_ok() => s,
        Some(s) => {
            return Err(ImportError::ColorInvalid { index, value: s.to_string() });
        }
        None => {
            return Err(ImportError::ColorInvalid { index, value: color.to_string() });
        }
    };

    let coords = position
        .as_array()
        .filter(|a| a.len() == 3)
        .ok_or(ImportError::PositionShape { index })?;
    let mut pos = [0.0_f32; 3];
    for (axis, coord) in coords.iter().enumerate() {
        pos[axis] = coord
            .as_f64()
            .ok_or(ImportError::PositionShape { index })? as f32;
    }

    Ok(Voxel::new(color, pos))
}

/// Resolve a voxel color spec to RGBA bytes, or `None` if it does not parse.
/// Shared by import validation and viewport rendering.
pub fn color_rgba8(spec: &str) -> Option<[u8; 4]> {
    csscolorparser::parse(spec).ok().map(|c| c.to_rgba8())
}
