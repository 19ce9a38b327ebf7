//! # Appearance
//!
//! The visual half of a drawable node: geometry plus a flat material. Motion
//! and appearance are independent, so a node keeps animating whether or not
//! it has anything to draw.

use crate::gfx::geometry::GeometryData;

/// Flat surface description used by the forward pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// RGBA base color
    pub base_color: [f32; 4],
    /// Skip lighting entirely (self-lit surfaces such as a star)
    pub unlit: bool,
}

impl Material {
    pub fn new(name: &str, base_color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            unlit: false,
        }
    }

    /// Convenience constructor from a `0xRRGGBB` hex value
    pub fn from_hex(name: &str, hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self::new(name, [r, g, b, 1.0])
    }

    pub fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default", [0.8, 0.8, 0.8, 1.0])
    }
}

/// Geometry and material bound to a node
#[derive(Debug, Clone)]
pub struct Appearance {
    geometry: GeometryData,
    pub material: Material,
    revision: u64,
}

impl Appearance {
    pub fn new(geometry: GeometryData, material: Material) -> Self {
        Self {
            geometry,
            material,
            revision: 0,
        }
    }

    pub fn geometry(&self) -> &GeometryData {
        &self.geometry
    }

    /// Mutable geometry access; bumps the revision so GPU copies are refreshed
    pub fn geometry_mut(&mut self) -> &mut GeometryData {
        self.revision += 1;
        &mut self.geometry
    }

    /// Incremented on every geometry mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_plane;

    #[test]
    fn test_from_hex() {
        let green = Material::from_hex("box", 0x00ff00);
        assert_eq!(green.base_color, [0.0, 1.0, 0.0, 1.0]);
        assert!(!green.unlit);
        assert!(Material::from_hex("sun", 0xffcc33).unlit().unlit);
    }

    #[test]
    fn test_geometry_mut_bumps_revision() {
        let mut appearance = Appearance::new(generate_plane(1.0, 1.0, 1, 1), Material::default());
        assert_eq!(appearance.revision(), 0);
        let _ = appearance.geometry();
        assert_eq!(appearance.revision(), 0);
        appearance.geometry_mut().vertices[0][2] = 1.0;
        assert_eq!(appearance.revision(), 1);
        assert_eq!(appearance.geometry().vertices[0][2], 1.0);
    }
}
