//! Cluster-palette biome storage.

use lodestone_palette::Palette;
use serde::{Deserialize, Serialize};

/// Side length of a biome cluster cube; biomes are stored at 4x4x4-block
/// resolution, so each chunk carries one dim-4 palette.
pub const BIOME_CLUSTER_DIM: usize = 4;

/// A biome id in the vanilla registry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Biome(pub u32);

/// Per-chunk biome clusters for a column, bottom chunk first.
#[derive(Clone, Debug, Default)]
pub struct ClusterBiomes {
    clusters: Vec<Palette<Biome>>,
}

impl ClusterBiomes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cluster(&mut self, palette: Palette<Biome>) {
        assert_eq!(palette.dim(), BIOME_CLUSTER_DIM, "biome clusters are 4x4x4");
        self.clusters.push(palette);
    }

    pub fn clusters(&self) -> &[Palette<Biome>] {
        &self.clusters
    }

    /// Biome for a cluster cell of the given chunk, defaulting when unset.
    pub fn get(&self, chunk_index: usize, x: usize, y: usize, z: usize) -> Biome {
        self.clusters
            .get(chunk_index)
            .and_then(|p| p.get(x, y, z).copied())
            .unwrap_or_default()
    }
}
