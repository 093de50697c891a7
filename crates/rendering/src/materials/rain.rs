use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, MeshVertexBufferLayoutRef};
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
    VertexFormat,
};
use simulation::config::{FALL_DISTANCE, RAIN_Y_MIN};
use simulation::rain::{FADE_END, FADE_START, WIND_LEAN, WIND_SWAY};

const RAIN_SHADER: &str = "embedded://rendering/materials/shaders/rain.wgsl";

/// Spawn position of the drop a vertex belongs to.
pub const ATTRIBUTE_DROP_ORIGIN: MeshVertexAttribute =
    MeshVertexAttribute::new("DropOrigin", 988_540_917, VertexFormat::Float32x3);

/// `(speed_factor, phase)` of the drop a vertex belongs to.
pub const ATTRIBUTE_DROP_MOTION: MeshVertexAttribute =
    MeshVertexAttribute::new("DropMotion", 988_540_918, VertexFormat::Float32x2);

/// Frame uniforms of the rain program.
///
/// The motion constants travel with the uniforms so the vertex shader and
/// `simulation::rain::motion` read the same numbers.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct RainUniform {
    pub color: LinearRgba,
    pub camera_position: Vec3,
    pub time: f32,
    pub fall_speed: f32,
    pub wind_strength: f32,
    pub fade_start: f32,
    pub fade_end: f32,
    pub drop_width: f32,
    pub drop_length: f32,
    pub flash: f32,
    pub fall_distance: f32,
    pub y_min: f32,
    pub wind_lean: f32,
    pub wind_sway: f32,
}

impl Default for RainUniform {
    fn default() -> Self {
        Self {
            color: LinearRgba::new(0.55, 0.6, 0.7, 0.35),
            camera_position: Vec3::new(0.0, 2.0, 15.0),
            time: 0.0,
            fall_speed: 15.0,
            wind_strength: 2.0,
            fade_start: FADE_START,
            fade_end: FADE_END,
            drop_width: 0.02,
            drop_length: 0.5,
            flash: 0.0,
            fall_distance: FALL_DISTANCE,
            y_min: RAIN_Y_MIN,
            wind_lean: WIND_LEAN,
            wind_sway: WIND_SWAY,
        }
    }
}

/// Additive streaks animated entirely in the vertex shader.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone, Default)]
pub struct RainMaterial {
    #[uniform(0)]
    pub uniform: RainUniform,
}

impl Material for RainMaterial {
    fn vertex_shader() -> ShaderRef {
        RAIN_SHADER.into()
    }

    fn fragment_shader() -> ShaderRef {
        RAIN_SHADER.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_DROP_ORIGIN.at_shader_location(1),
            ATTRIBUTE_DROP_MOTION.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
