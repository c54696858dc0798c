//! Road generation: per-segment face synthesis and the backtracking lattice
//! search that strings exactly one segment per unit of road length.
#![forbid(unsafe_code)]

mod face;
mod params;
mod path;

pub use face::{FaceError, Segment, build_face};
pub use params::GenParams;
pub use path::generate;

/// Flatten faces to the transport form consumed by viewers and writers: one
/// vertex list per face, three entries for a wedge and four for a quad, in
/// builder order.
pub fn to_transport(segments: &[Segment]) -> Vec<Vec<[i32; 3]>> {
    segments
        .iter()
        .map(|segment| {
            segment
                .face
                .vertices()
                .iter()
                .map(|v| [v.x, v.y, v.z])
                .collect()
        })
        .collect()
}
