use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};

const CLOUD_SHADER: &str = "embedded://rendering/materials/shaders/clouds.wgsl";

pub const CLOUD_DENSITY: f32 = 0.4;
pub const CLOUD_SPEED: f32 = 0.03;

#[derive(Clone, Copy, Debug, ShaderType)]
pub struct CloudUniform {
    pub time: f32,
    /// Fraction of the sky covered, in `[0, 1]`.
    pub density: f32,
    /// Scroll speed of the noise field.
    pub speed: f32,
    pub flash: f32,
}

impl Default for CloudUniform {
    fn default() -> Self {
        Self {
            time: 0.0,
            density: CLOUD_DENSITY,
            speed: CLOUD_SPEED,
            flash: 0.0,
        }
    }
}

/// Translucent noise layer just inside the sky dome.
#[derive(Asset, AsBindGroup, TypePath, Debug, Clone, Default)]
pub struct CloudMaterial {
    #[uniform(0)]
    pub uniform: CloudUniform,
}

impl Material for CloudMaterial {
    fn fragment_shader() -> ShaderRef {
        CLOUD_SHADER.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
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
