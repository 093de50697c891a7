use bevy::pbr::{ExtendedMaterial, MaterialExtension};
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

const ROAD_SHADER: &str = "embedded://rendering/materials/shaders/road.wgsl";

/// Speed at which lane dashes stream past the camera, in world units per second.
pub const ROAD_SCROLL_SPEED: f32 = 12.0;

/// Extra uniforms layered on top of the standard PBR road surface.
#[derive(Clone, Copy, Debug, ShaderType, Reflect)]
pub struct RoadUniform {
    pub lane_color: LinearRgba,
    /// Marking positions are measured from the camera's Z.
    pub camera_position: Vec3,
    pub time: f32,
    pub scroll_speed: f32,
}

impl Default for RoadUniform {
    fn default() -> Self {
        Self {
            lane_color: Color::srgb(0.75, 0.7, 0.45).into(),
            camera_position: Vec3::new(0.0, 2.0, 15.0),
            time: 0.0,
            scroll_speed: ROAD_SCROLL_SPEED,
        }
    }
}

/// Wet asphalt with scrolling lane markings.
///
/// The base `StandardMaterial` carries roughness (the ground wetness) and
/// metalness; the extension paints markings into the base color before
/// lighting.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct RoadExtension {
    #[uniform(100)]
    pub uniform: RoadUniform,
}

impl MaterialExtension for RoadExtension {
    fn fragment_shader() -> ShaderRef {
        ROAD_SHADER.into()
    }

    fn deferred_fragment_shader() -> ShaderRef {
        ROAD_SHADER.into()
    }
}

pub type RoadMaterial = ExtendedMaterial<StandardMaterial, RoadExtension>;

/// Base PBR surface of the road at the given wetness roughness.
pub fn road_base(roughness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0x1a, 0x1a, 0x1a),
        perceptual_roughness: roughness,
        metallic: 0.3,
        ..default()
    }
}
