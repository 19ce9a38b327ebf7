//! Scene lighting and atmosphere settings

/// Uniform light applied to every lit surface
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 0.1,
        }
    }
}

/// Shape of the single positional light
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightKind {
    /// Radiates in every direction
    Point,
    /// Cone aimed at `target`; `angle` is the half-angle in radians and
    /// `penumbra` (0..1) the fraction of the cone that fades out
    Spot {
        target: [f32; 3],
        angle: f32,
        penumbra: f32,
    },
}

/// Positional light configuration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub kind: LightKind,
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

impl LightConfig {
    pub fn point(position: [f32; 3], intensity: f32) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            color: [1.0, 1.0, 1.0],
            intensity,
        }
    }

    pub fn spot(position: [f32; 3], target: [f32; 3], angle: f32, intensity: f32) -> Self {
        Self {
            kind: LightKind::Spot {
                target,
                angle,
                penumbra: 0.0,
            },
            position,
            color: [1.0, 1.0, 1.0],
            intensity,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::point([5.0, 10.0, 5.0], 1.0)
    }
}

/// Exponential-squared distance fog
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FogConfig {
    pub color: [f32; 3],
    pub density: f32,
}

impl FogConfig {
    /// Fraction of the surface color that survives at `distance`
    pub fn visibility(&self, distance: f32) -> f32 {
        let d = self.density * distance;
        (-(d * d)).exp().clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_visibility_falls_off_with_distance() {
        let fog = FogConfig {
            color: [0.0; 3],
            density: 0.005,
        };
        assert_eq!(fog.visibility(0.0), 1.0);
        assert!(fog.visibility(100.0) > fog.visibility(300.0));
        assert!((fog.visibility(200.0) - (-1.0f32).exp()).abs() < 1e-6);
    }
}
