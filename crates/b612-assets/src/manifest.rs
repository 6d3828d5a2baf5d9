//! The fixed asset manifest for the scene.

use serde::{Deserialize, Serialize};

/// Broad asset category, used to pick the right format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// Binary glTF model (.glb).
    Model,
    /// Image texture (PNG or JPEG).
    Texture,
}

/// One entry in the preload manifest.
#[derive(Debug, Clone)]
pub struct AssetSpec {
    /// Path relative to the asset root, also the key the frontend uses.
    pub path: &'static str,
    pub kind: AssetKind,
}

impl AssetSpec {
    const fn model(path: &'static str) -> Self {
        Self {
            path,
            kind: AssetKind::Model,
        }
    }

    const fn texture(path: &'static str) -> Self {
        Self {
            path,
            kind: AssetKind::Texture,
        }
    }
}

/// Everything the scene preloads before it starts: the moon and planet
/// models, all six character models, and the moon's texture maps.
pub fn scene_manifest() -> Vec<AssetSpec> {
    vec![
        AssetSpec::model("models/moon2.glb"),
        AssetSpec::model("models/planet1.glb"),
        AssetSpec::model("models/planet2.glb"),
        AssetSpec::model("models/character1.glb"),
        AssetSpec::model("models/character2.glb"),
        AssetSpec::model("models/character3.glb"),
        AssetSpec::model("models/character4.glb"),
        AssetSpec::model("models/character5.glb"),
        AssetSpec::model("models/character6.glb"),
        AssetSpec::texture("textures/moon_001_COLOR.jpg"),
        AssetSpec::texture("textures/moon_001_DISP.png"),
        AssetSpec::texture("textures/moon_001_NORM.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_manifest_composition() {
        let manifest = scene_manifest();
        let models = manifest
            .iter()
            .filter(|a| a.kind == AssetKind::Model)
            .count();
        let textures = manifest
            .iter()
            .filter(|a| a.kind == AssetKind::Texture)
            .count();
        assert_eq!(models, 9, "moon + two planets + six characters");
        assert_eq!(textures, 3, "moon color/displacement/normal maps");
    }

    #[test]
    fn test_manifest_paths_unique() {
        let manifest = scene_manifest();
        let unique: HashSet<_> = manifest.iter().map(|a| a.path).collect();
        assert_eq!(unique.len(), manifest.len());
    }

    #[test]
    fn test_manifest_paths_are_relative() {
        for spec in scene_manifest() {
            assert!(
                !spec.path.starts_with('/'),
                "{} must be relative to the asset root",
                spec.path
            );
        }
    }
}
