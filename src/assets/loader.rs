use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::gfx::geometry::GeometryData;
use crate::gfx::scene::{Appearance, Material};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load '{path}': {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
    #[error("'{0}' contains no triangles")]
    Empty(PathBuf),
}

/// Load every model of an OBJ file into one appearance
///
/// Meshes are merged into a single triangle list. The first diffuse colour
/// found in the companion MTL file becomes the material; a missing or broken
/// MTL file only costs the colour.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Appearance, AssetError> {
    let path = path.as_ref();
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| AssetError::Obj {
        path: path.to_path_buf(),
        source,
    })?;

    let mut geometry = GeometryData::new();
    let mut normals_complete = true;

    for model in &models {
        let mesh = &model.mesh;
        let offset = geometry.vertices.len() as u32;

        log::debug!(
            "Model '{}': {} vertices, {} triangles",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len() / 3
        );

        geometry
            .vertices
            .extend(mesh.positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]]));
        if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
            geometry
                .normals
                .extend(mesh.normals.chunks_exact(3).map(|n| [n[0], n[1], n[2]]));
        } else {
            normals_complete = false;
        }
        geometry.indices.extend(mesh.indices.iter().map(|i| i + offset));
    }

    if geometry.is_empty() {
        return Err(AssetError::Empty(path.to_path_buf()));
    }
    if !normals_complete {
        log::debug!("'{}' lacks normals, computing them", path.display());
        geometry.compute_vertex_normals();
    }

    let material = match materials {
        Ok(materials) => materials
            .iter()
            .find_map(|m| m.diffuse.map(|[r, g, b]| Material::new(&m.name, [r, g, b, 1.0])))
            .unwrap_or_default(),
        Err(err) => {
            log::warn!("No usable materials for '{}': {}", path.display(), err);
            Material::default()
        }
    };

    log::info!(
        "Loaded '{}' ({} models, {} triangles)",
        path.display(),
        models.len(),
        geometry.triangle_count()
    );
    Ok(Appearance::new(geometry, material))
}

/// Best-effort load: on failure the error is logged and an empty appearance
/// is returned, so the scene keeps running without the model
pub fn load_obj_or_empty(path: impl AsRef<Path>) -> Appearance {
    let path = path.as_ref();
    load_obj(path).unwrap_or_else(|err| {
        log::error!("{err}");
        Appearance::new(GeometryData::new(), Material::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("orrery-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_quad_and_computes_normals() {
        let path = write_temp(
            "quad.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        );
        let appearance = load_obj(&path).unwrap();
        fs::remove_file(&path).ok();

        let geometry = appearance.geometry();
        assert_eq!(geometry.vertex_count(), 4);
        assert_eq!(geometry.triangle_count(), 2);
        assert_eq!(geometry.normals.len(), 4);
        for normal in &geometry.normals {
            assert!((normal[2] - 1.0).abs() < 1e-6);
        }
        assert_eq!(appearance.material, Material::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_obj("/definitely/not/here.obj");
        assert!(matches!(result, Err(AssetError::Obj { .. })));
    }

    #[test]
    fn test_fallback_is_empty() {
        let appearance = load_obj_or_empty("/definitely/not/here.obj");
        assert!(appearance.geometry().is_empty());
    }

    #[test]
    fn test_file_without_faces_is_empty_error() {
        let path = write_temp("points.obj", "v 0 0 0\nv 1 0 0\n");
        let result = load_obj(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AssetError::Empty(_))));
    }
}
