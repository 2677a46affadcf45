//! Quad geometry fed to the vertex stages.
//!
//! Corners are listed in fan order starting bottom-left and going clockwise
//! (`(-1,-1), (-1,1), (1,1), (1,-1)`); [`QUAD_INDICES`] splits them into two
//! triangles for list topology.

mod fit;
mod vertex;

pub use fit::{fit_extent, fitted_quad};
pub use vertex::{CropVertex, QuadVertex, check_uniform, crop_vertices};

pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [-1.0, -1.0] },
    QuadVertex { position: [-1.0, 1.0] },
    QuadVertex { position: [1.0, 1.0] },
    QuadVertex { position: [1.0, -1.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
