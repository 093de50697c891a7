use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};

const SKY_SHADER: &str = "embedded://rendering/materials/shaders/sky.wgsl";

/// Uniform block of the sky dome.
#[derive(Clone, Copy, Debug, ShaderType)]
pub struct SkyUniform {
    pub top_color: LinearRgba,
    pub horizon_color: LinearRgba,
    pub bottom_color: LinearRgba,
    pub fog_color: LinearRgba,
    pub time: f32,
    /// Current lightning intensity.
    pub flash: f32,
    pub brightness: f32,
    /// Sharpness of the fog band hugging the horizon.
    pub fog_height_scale: f32,
}

impl Default for SkyUniform {
    fn default() -> Self {
        Self {
            top_color: Color::srgb_u8(0x0a, 0x0d, 0x15).into(),
            horizon_color: Color::srgb_u8(0x1a, 0x20, 0x30).into(),
            bottom_color: Color::srgb_u8(0x15, 0x18, 0x20).into(),
            fog_color: Color::srgb(0.1, 0.12, 0.15).into(),
            time: 0.0,
            flash: 0.0,
            brightness: 0.3,
            fog_height_scale: 20.0,
        }
    }
}

/// Gradient dome seen from the inside.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone, Default)]
pub struct SkyMaterial {
    #[uniform(0)]
    pub uniform: SkyUniform,
}

impl Material for SkyMaterial {
    fn fragment_shader() -> ShaderRef {
        SKY_SHADER.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
