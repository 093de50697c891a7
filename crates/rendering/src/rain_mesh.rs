//! Rain geometry: one camera-facing quad per drop record.
//!
//! Each quad's four vertices carry the same drop origin and motion record;
//! the position attribute holds the quad corner, which the rain vertex shader
//! expands into a streak around the animated drop centre. The mesh only
//! changes when the rain field generation does.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;
use simulation::rain::{RainField, RainFieldEvent, RainFieldState};
use simulation::{StormError, StormParams};

use crate::lighting::rain_visibility;
use crate::materials::{ATTRIBUTE_DROP_MOTION, ATTRIBUTE_DROP_ORIGIN};
use crate::scene::{RainVolume, StormMaterials};

/// Streak corners: x across the streak, y from head (0) to tail (1).
pub const CORNERS: [[f32; 3]; 4] = [
    [-0.5, 0.0, 0.0],
    [0.5, 0.0, 0.0],
    [0.5, 1.0, 0.0],
    [-0.5, 1.0, 0.0],
];
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

fn reserve<T>(len: usize, requested: u32) -> Result<Vec<T>, StormError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| StormError::Allocation { requested })?;
    Ok(v)
}

/// Build the rain mesh for `field`. Fails without side effects if any
/// vertex or index buffer cannot be reserved.
pub fn build_rain_mesh(field: &RainField) -> Result<Mesh, StormError> {
    let drops = field.drops();
    let requested = u32::try_from(drops.len()).unwrap_or(u32::MAX);
    let vertex_count = drops.len() * CORNERS.len();
    let index_count = drops.len() * QUAD_INDICES.len();

    let mut corners: Vec<[f32; 3]> = reserve(vertex_count, requested)?;
    let mut origins: Vec<[f32; 3]> = reserve(vertex_count, requested)?;
    let mut motion: Vec<[f32; 2]> = reserve(vertex_count, requested)?;
    let mut indices: Vec<u32> = reserve(index_count, requested)?;

    for (i, drop) in drops.iter().enumerate() {
        let base = (i * CORNERS.len()) as u32;
        for corner in CORNERS {
            corners.push(corner);
            origins.push(drop.origin.to_array());
            motion.push([drop.speed_factor, drop.phase]);
        }
        indices.extend(QUAD_INDICES.iter().map(|idx| base + idx));
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, corners);
    mesh.insert_attribute(ATTRIBUTE_DROP_ORIGIN, origins);
    mesh.insert_attribute(ATTRIBUTE_DROP_MOTION, motion);
    mesh.insert_indices(Indices::U32(indices));
    Ok(mesh)
}

/// Generation of the rain field the current mesh was built from.
#[derive(Resource, Default, Debug)]
pub struct RainMeshState {
    pub built_generation: u64,
    pub mesh: Option<Handle<Mesh>>,
}

/// Flag a mesh build failure on the rain state so it reaches the same
/// listeners as a failed drop allocation.
pub fn report_mesh_failure(rain: &mut RainFieldState, err: &StormError) -> RainFieldEvent {
    let requested = match err {
        StormError::Allocation { requested } => *requested,
        _ => u32::try_from(rain.field().len()).unwrap_or(u32::MAX),
    };
    rain.record_failure(requested)
}

/// System: rebuild the rain mesh whenever the field generation moves.
///
/// The rain entity is spawned on the first non-empty generation; later
/// generations replace the mesh asset in place.
pub fn rebuild_rain_mesh(
    mut commands: Commands,
    mut rain: ResMut<RainFieldState>,
    mut events: EventWriter<RainFieldEvent>,
    params: Res<StormParams>,
    materials: Option<Res<StormMaterials>>,
    mut state: ResMut<RainMeshState>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Some(materials) = materials else {
        return;
    };
    let generation = rain.generation();
    if generation == state.built_generation || rain.field().is_empty() {
        return;
    }

    let mesh = match build_rain_mesh(rain.field()) {
        Ok(mesh) => mesh,
        Err(err) => {
            error!("Rain mesh for generation {generation} not built: {err}");
            events.send(report_mesh_failure(&mut rain, &err));
            // Keep drawing the previous mesh; do not retry this generation.
            state.built_generation = generation;
            return;
        }
    };

    match &state.mesh {
        Some(handle) => {
            meshes.insert(handle, mesh);
        }
        None => {
            let handle = meshes.add(mesh);
            commands.spawn((
                Mesh3d(handle.clone()),
                MeshMaterial3d(materials.rain.clone()),
                Transform::default(),
                rain_visibility(&params),
                NoFrustumCulling,
                NotShadowCaster,
                RainVolume,
            ));
            state.mesh = Some(handle);
        }
    }
    state.built_generation = generation;
    debug!(
        "Rain mesh rebuilt: {} drops (generation {generation})",
        rain.field().len()
    );
}
