//! GPU resource management.

mod mesh;

pub use mesh::{GpuMesh, MeshData, MeshHandle, MeshManager};
