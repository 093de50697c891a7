use bevy::pbr::{ExtendedMaterial, MaterialExtension};
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

const DESERT_SHADER: &str = "embedded://rendering/materials/shaders/desert.wgsl";

#[derive(Clone, Copy, Debug, ShaderType, Reflect)]
pub struct DesertUniform {
    pub sand_color: LinearRgba,
    pub rock_color: LinearRgba,
    /// Noise detail fades out with distance from this point.
    pub camera_position: Vec3,
    pub time: f32,
}

impl Default for DesertUniform {
    fn default() -> Self {
        Self {
            sand_color: Color::srgb(0.28, 0.24, 0.19).into(),
            rock_color: Color::srgb(0.22, 0.19, 0.15).into(),
            camera_position: Vec3::new(0.0, 2.0, 15.0),
            time: 0.0,
        }
    }
}

/// Procedural sand and rock floor on both sides of the road.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct DesertExtension {
    #[uniform(100)]
    pub uniform: DesertUniform,
}

impl MaterialExtension for DesertExtension {
    fn fragment_shader() -> ShaderRef {
        DESERT_SHADER.into()
    }

    fn deferred_fragment_shader() -> ShaderRef {
        DESERT_SHADER.into()
    }
}

pub type DesertMaterial = ExtendedMaterial<StandardMaterial, DesertExtension>;

pub fn desert_base() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.95,
        metallic: 0.0,
        ..default()
    }
}
