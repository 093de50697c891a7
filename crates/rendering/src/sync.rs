//! Shader parameter synchronizer.
//!
//! Once per frame, after the lightning and camera steps, every shading program
//! gets a fresh uniform block built from the parameter store and the frame
//! context. The builders are pure so they can be tested without a GPU; the
//! systems only look up the material asset and copy the block in.
//!
//! A material whose handle or asset is missing (not loaded yet, or the scene
//! was never spawned) is skipped for that frame.

use bevy::prelude::*;
use simulation::camera_rig::CameraRig;
use simulation::sim_clock::SimClock;
use simulation::StormParams;

use crate::materials::{
    CloudMaterial, CloudUniform, DesertMaterial, DesertUniform, RainMaterial, RainUniform,
    RoadMaterial, RoadUniform, SkyMaterial, SkyUniform,
};
use crate::scene::StormMaterials;

/// Per-frame values shared by every uniform block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Simulation time in seconds.
    pub elapsed: f32,
    /// Camera position after this frame's damped step.
    pub camera_position: Vec3,
}

impl FrameContext {
    pub fn capture(clock: &SimClock, rig: &CameraRig) -> Self {
        Self {
            elapsed: clock.elapsed,
            camera_position: rig.current,
        }
    }
}

// =============================================================================
// Uniform builders
// =============================================================================

pub fn sky_uniform(params: &StormParams, ctx: &FrameContext) -> SkyUniform {
    SkyUniform {
        time: ctx.elapsed,
        flash: params.lightning.intensity,
        brightness: params.scene.brightness,
        fog_color: params.fog.color().into(),
        fog_height_scale: params.fog.height_scale,
        ..default()
    }
}

pub fn cloud_uniform(params: &StormParams, ctx: &FrameContext) -> CloudUniform {
    CloudUniform {
        time: ctx.elapsed,
        flash: params.lightning.intensity,
        ..default()
    }
}

pub fn road_uniform(_params: &StormParams, ctx: &FrameContext) -> RoadUniform {
    RoadUniform {
        time: ctx.elapsed,
        camera_position: ctx.camera_position,
        ..default()
    }
}

/// Roughness of the road's base PBR surface: wetter means glossier.
pub fn road_roughness(params: &StormParams) -> f32 {
    params.ground.wetness_roughness
}

pub fn desert_uniform(_params: &StormParams, ctx: &FrameContext) -> DesertUniform {
    DesertUniform {
        time: ctx.elapsed,
        camera_position: ctx.camera_position,
        ..default()
    }
}

pub fn rain_uniform(params: &StormParams, ctx: &FrameContext) -> RainUniform {
    RainUniform {
        time: ctx.elapsed,
        fall_speed: params.rain.fall_speed,
        wind_strength: params.rain.wind_strength,
        camera_position: ctx.camera_position,
        flash: params.lightning.intensity,
        ..default()
    }
}

// =============================================================================
// Systems
// =============================================================================

fn write_material<M: Asset>(
    assets: &mut Assets<M>,
    handle: &Handle<M>,
    program: &str,
    write: impl FnOnce(&mut M),
) {
    match assets.get_mut(handle) {
        Some(material) => write(material),
        None => trace!("{program} material not available; skipping uniform sync"),
    }
}

pub fn sync_sky_material(
    params: Res<StormParams>,
    clock: Res<SimClock>,
    rig: Res<CameraRig>,
    handles: Option<Res<StormMaterials>>,
    mut assets: ResMut<Assets<SkyMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let ctx = FrameContext::capture(&clock, &rig);
    write_material(&mut assets, &handles.sky, "sky", |m| {
        m.uniform = sky_uniform(&params, &ctx);
    });
}

pub fn sync_cloud_material(
    params: Res<StormParams>,
    clock: Res<SimClock>,
    rig: Res<CameraRig>,
    handles: Option<Res<StormMaterials>>,
    mut assets: ResMut<Assets<CloudMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let ctx = FrameContext::capture(&clock, &rig);
    write_material(&mut assets, &handles.clouds, "cloud", |m| {
        m.uniform = cloud_uniform(&params, &ctx);
    });
}

pub fn sync_road_material(
    params: Res<StormParams>,
    clock: Res<SimClock>,
    rig: Res<CameraRig>,
    handles: Option<Res<StormMaterials>>,
    mut assets: ResMut<Assets<RoadMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let ctx = FrameContext::capture(&clock, &rig);
    write_material(&mut assets, &handles.road, "road", |m| {
        m.base.perceptual_roughness = road_roughness(&params);
        m.extension.uniform = road_uniform(&params, &ctx);
    });
}

pub fn sync_desert_material(
    params: Res<StormParams>,
    clock: Res<SimClock>,
    rig: Res<CameraRig>,
    handles: Option<Res<StormMaterials>>,
    mut assets: ResMut<Assets<DesertMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let ctx = FrameContext::capture(&clock, &rig);
    write_material(&mut assets, &handles.desert, "desert", |m| {
        m.extension.uniform = desert_uniform(&params, &ctx);
    });
}

pub fn sync_rain_material(
    params: Res<StormParams>,
    clock: Res<SimClock>,
    rig: Res<CameraRig>,
    handles: Option<Res<StormMaterials>>,
    mut assets: ResMut<Assets<RainMaterial>>,
) {
    let Some(handles) = handles else {
        return;
    };
    let ctx = FrameContext::capture(&clock, &rig);
    write_material(&mut assets, &handles.rain, "rain", |m| {
        m.uniform = rain_uniform(&params, &ctx);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FrameContext {
        FrameContext {
            elapsed: 12.5,
            camera_position: Vec3::new(1.5, 2.25, 15.0),
        }
    }

    #[test]
    fn test_road_receives_camera_position() {
        let params = StormParams::default();
        let u = road_uniform(&params, &ctx());
        assert_eq!(u.camera_position.z, 15.0);
        assert_eq!(u.camera_position, ctx().camera_position);
        assert_eq!(u.time, 12.5);
    }

    #[test]
    fn test_road_roughness_follows_wetness() {
        let mut params = StormParams::default();
        params.ground.wetness_roughness = 0.65;
        assert_eq!(road_roughness(&params), 0.65);
    }

    #[test]
    fn test_rain_receives_fall_speed_and_wind() {
        let mut params = StormParams::default();
        params.rain.fall_speed = 22.0;
        params.rain.wind_strength = 6.0;
        params.lightning.intensity = 4.0;
        let u = rain_uniform(&params, &ctx());
        assert_eq!(u.fall_speed, 22.0);
        assert_eq!(u.wind_strength, 6.0);
        assert_eq!(u.flash, 4.0);
        assert_eq!(u.camera_position, ctx().camera_position);
    }

    #[test]
    fn test_rain_motion_constants_match_cpu_mirror() {
        let u = RainUniform::default();
        assert_eq!(u.fall_distance, simulation::config::FALL_DISTANCE);
        assert_eq!(u.y_min, simulation::config::RAIN_Y_MIN);
        assert_eq!(u.wind_lean, simulation::rain::WIND_LEAN);
        assert_eq!(u.wind_sway, simulation::rain::WIND_SWAY);
        assert_eq!(u.fade_start, simulation::rain::FADE_START);
        assert_eq!(u.fade_end, simulation::rain::FADE_END);
    }

    #[test]
    fn test_sky_and_clouds_receive_flash() {
        let mut params = StormParams::default();
        params.lightning.intensity = 7.5;
        params.fog.height_scale = 42.0;
        assert_eq!(sky_uniform(&params, &ctx()).flash, 7.5);
        assert_eq!(sky_uniform(&params, &ctx()).fog_height_scale, 42.0);
        assert_eq!(cloud_uniform(&params, &ctx()).flash, 7.5);
    }

    #[test]
    fn test_cloud_constants() {
        let u = cloud_uniform(&StormParams::default(), &ctx());
        assert_eq!(u.density, 0.4);
        assert_eq!(u.speed, 0.03);
    }

    #[test]
    fn test_default_blocks_are_finite() {
        let params = StormParams::default();
        let c = FrameContext {
            elapsed: 0.0,
            camera_position: Vec3::ZERO,
        };
        let sky = sky_uniform(&params, &c);
        assert!(sky.brightness.is_finite() && sky.fog_height_scale.is_finite());
        let fog = sky.fog_color;
        assert!([fog.red, fog.green, fog.blue, fog.alpha].iter().all(|c| c.is_finite()));
        let rain = rain_uniform(&params, &c);
        assert!(rain.fall_speed.is_finite() && rain.wind_strength.is_finite());
        assert!(rain.camera_position.is_finite());
        let desert = desert_uniform(&params, &c);
        assert!(desert.camera_position.is_finite());
        let road = road_uniform(&params, &c);
        assert!(road.scroll_speed.is_finite() && road.scroll_speed > 0.0);
    }
}
