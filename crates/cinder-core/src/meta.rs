//! Shared visual resource ("meta") arena.
//!
//! A meta bundle is the geometry/texture/shader set an entity is drawn
//! with. One bundle is shared by many entities: the store owns the
//! bundles, entities hold a non-owning [`MetaKey`]. Destroying entities
//! never touches the store.

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generation-tagged key into a [`MetaStore`].
    pub struct MetaKey;
}

/// Opaque handle returned by an external asset loader (mesh, texture,
/// or shader program). The simulation never dereferences these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle(pub u32);

/// Shared visual bundle referenced by entities.
#[derive(Debug, Clone)]
pub struct MetaBundle {
    /// Geometry handle from the mesh loader.
    pub mesh: AssetHandle,
    /// Shader program handle.
    pub shader: AssetHandle,
    /// Texture handles, in bind order.
    pub textures: Vec<AssetHandle>,
    /// Uniform model scale.
    pub scale: f32,
}

impl MetaBundle {
    pub fn new(mesh: AssetHandle, shader: AssetHandle) -> Self {
        Self {
            mesh,
            shader,
            textures: Vec::new(),
            scale: 1.0,
        }
    }
}

/// Arena of meta bundles, externally owned and long-lived.
#[derive(Debug, Default)]
pub struct MetaStore {
    bundles: SlotMap<MetaKey, MetaBundle>,
}

impl MetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle and return its key.
    pub fn insert(&mut self, bundle: MetaBundle) -> MetaKey {
        self.bundles.insert(bundle)
    }

    pub fn get(&self, key: MetaKey) -> Option<&MetaBundle> {
        self.bundles.get(key)
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
