//! Mesh resource management.
//!
//! Every shape of a given kind shares one GPU mesh: the manager caches a
//! single upload per [`GeometryKind`] and hands out copyable handles.

use std::collections::HashMap;

use shapelab_core::GeometryKind;

use crate::context::RenderContext;
use crate::primitives;
use crate::scene::BoundingBox;
use crate::vertex::MeshVertex;

/// Handle to a mesh stored in the MeshManager.
///
/// Handles are lightweight and can be copied freely; the actual data stays in
/// the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(u64);

/// GPU mesh data.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    /// Local bounding box of the mesh.
    pub bounds: BoundingBox,
}

/// CPU mesh data for uploading to the GPU (and for ray picking).
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub bounds: BoundingBox,
}

impl MeshData {
    /// Creates indexed mesh data, computing the bounding box.
    pub fn indexed(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        let bounds = Self::compute_bounds(&vertices);
        Self {
            vertices,
            indices,
            bounds,
        }
    }

    fn compute_bounds(vertices: &[MeshVertex]) -> BoundingBox {
        if vertices.is_empty() {
            return BoundingBox::empty();
        }

        let mut min = glam::Vec3::splat(f32::INFINITY);
        let mut max = glam::Vec3::splat(f32::NEG_INFINITY);
        for v in vertices {
            let pos = glam::Vec3::from(v.position);
            min = min.min(pos);
            max = max.max(pos);
        }
        BoundingBox::new(min, max)
    }
}

/// Manager for GPU mesh resources.
pub struct MeshManager {
    meshes: HashMap<MeshHandle, GpuMesh>,
    by_kind: HashMap<GeometryKind, MeshHandle>,
    next_handle: u64,
}

impl MeshManager {
    /// Creates a new mesh manager.
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            by_kind: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Returns the handle for a primitive kind, uploading it on first use.
    pub fn primitive(&mut self, ctx: &RenderContext, kind: GeometryKind) -> MeshHandle {
        if let Some(handle) = self.by_kind.get(&kind) {
            return *handle;
        }
        let data = primitives::primitive_mesh(kind);
        let handle = self.create(ctx, &data);
        self.by_kind.insert(kind, handle);
        handle
    }

    /// Uploads mesh data to the GPU and returns a handle.
    pub fn create(&mut self, ctx: &RenderContext, data: &MeshData) -> MeshHandle {
        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;

        let vertex_buffer = ctx.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = ctx.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        self.meshes.insert(
            handle,
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: data.indices.len() as u32,
                bounds: data.bounds,
            },
        );
        handle
    }

    /// Gets a mesh by handle.
    pub fn get(&self, handle: MeshHandle) -> Option<&GpuMesh> {
        self.meshes.get(&handle)
    }

    /// Returns the number of uploaded meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl Default for MeshManager {
    fn default() -> Self {
        Self::new()
    }
}
