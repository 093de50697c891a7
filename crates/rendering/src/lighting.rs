//! Applies the storm state to the camera, lights, fog and bloom.
//!
//! All systems here run in `StormSet::Sync`, after this frame's lightning and
//! camera steps.

use bevy::core_pipeline::bloom::Bloom;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use simulation::camera_rig::CameraRig;
use simulation::StormParams;

use crate::scene::{FlashLight, KeyLight, RainVolume, StormCamera};

/// Illuminance of the key light per unit of brightness or flash intensity.
pub const KEY_LUX: f32 = 4_000.0;
/// Flash point light output per unit of flash intensity.
pub const FLASH_LUMENS: f32 = 1_500_000.0;
/// Fraction of the scene brightness given to ambient light.
pub const AMBIENT_FRACTION: f32 = 0.3;
/// Ambient brightness per unit of scene brightness after the fraction.
pub const AMBIENT_SCALE: f32 = 200.0;

pub const KEY_COLOR: Color = Color::srgb(0.816, 0.878, 1.0);
pub const AMBIENT_COLOR: Color = Color::srgb(0.502, 0.565, 0.627);

pub fn key_illuminance(params: &StormParams) -> f32 {
    (params.scene.brightness + params.lightning.intensity) * KEY_LUX
}

pub fn flash_lumens(params: &StormParams) -> f32 {
    params.lightning.intensity * FLASH_LUMENS
}

pub fn ambient_brightness(params: &StormParams) -> f32 {
    params.scene.brightness * AMBIENT_FRACTION * AMBIENT_SCALE
}

/// Camera fog for the current parameters, `None` when density is zero.
pub fn storm_fog(params: &StormParams) -> Option<DistanceFog> {
    if params.fog.density <= 0.0 {
        return None;
    }
    Some(DistanceFog {
        color: params.fog.color(),
        falloff: FogFalloff::Exponential {
            density: params.fog.density,
        },
        ..default()
    })
}

/// System: place the camera at the rig position, aimed at the origin.
pub fn apply_camera_rig(
    rig: Res<CameraRig>,
    mut cameras: Query<&mut Transform, With<StormCamera>>,
) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let target = Transform::from_translation(rig.current).looking_at(Vec3::ZERO, Vec3::Y);
    if *transform != target {
        *transform = target;
    }
}

/// System: key light, flash light and ambient from brightness and flash.
pub fn apply_storm_lighting(
    params: Res<StormParams>,
    mut keys: Query<&mut DirectionalLight, With<KeyLight>>,
    mut flashes: Query<(&mut PointLight, &mut Visibility), With<FlashLight>>,
    mut ambient: ResMut<AmbientLight>,
) {
    let illuminance = key_illuminance(&params);
    for mut key in &mut keys {
        if key.illuminance != illuminance {
            key.illuminance = illuminance;
        }
    }

    let lumens = flash_lumens(&params);
    let visibility = if lumens > 0.0 {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for (mut light, mut vis) in &mut flashes {
        if light.intensity != lumens {
            light.intensity = lumens;
        }
        if *vis != visibility {
            *vis = visibility;
        }
    }

    let brightness = ambient_brightness(&params);
    if ambient.brightness != brightness {
        ambient.brightness = brightness;
    }
}

/// System: add, update or remove `DistanceFog` on the storm camera.
pub fn update_storm_fog(
    params: Res<StormParams>,
    mut commands: Commands,
    cameras: Query<(Entity, Option<&DistanceFog>), With<StormCamera>>,
) {
    for (entity, existing_fog) in &cameras {
        match storm_fog(&params) {
            Some(fog) => {
                let unchanged = existing_fog.is_some_and(|current| {
                    current.color == fog.color
                        && matches!(
                            current.falloff,
                            FogFalloff::Exponential { density } if density == params.fog.density
                        )
                });
                if !unchanged {
                    commands.entity(entity).insert(fog);
                }
            }
            None => {
                if existing_fog.is_some() {
                    commands.entity(entity).remove::<DistanceFog>();
                }
            }
        }
    }
}

/// System: bloom on the storm camera iff post-processing is enabled.
pub fn update_bloom(
    params: Res<StormParams>,
    mut commands: Commands,
    cameras: Query<(Entity, Has<Bloom>), With<StormCamera>>,
) {
    let wanted = params.scene.post_processing_enabled;
    for (entity, has_bloom) in &cameras {
        if wanted && !has_bloom {
            commands.entity(entity).insert(Bloom {
                intensity: 0.2,
                ..Bloom::NATURAL
            });
        } else if !wanted && has_bloom {
            commands.entity(entity).remove::<Bloom>();
        }
    }
}

/// System: hide the rain volume when rain is disabled so no draw is issued.
pub fn apply_rain_visibility(
    params: Res<StormParams>,
    mut volumes: Query<&mut Visibility, With<RainVolume>>,
) {
    let wanted = rain_visibility(&params);
    for mut vis in &mut volumes {
        if *vis != wanted {
            *vis = wanted;
        }
    }
}

pub fn rain_visibility(params: &StormParams) -> Visibility {
    if params.rain.enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_light_adds_flash_to_baseline() {
        let mut params = StormParams::default();
        let resting = key_illuminance(&params);
        assert!((resting - 0.3 * KEY_LUX).abs() < 1e-2);
        params.lightning.intensity = 5.0;
        assert!((key_illuminance(&params) - 5.3 * KEY_LUX).abs() < 1e-2);
    }

    #[test]
    fn test_flash_light_dark_when_idle() {
        let params = StormParams::default();
        assert_eq!(flash_lumens(&params), 0.0);
    }

    #[test]
    fn test_ambient_is_thirty_percent_of_brightness() {
        let mut params = StormParams::default();
        params.scene.brightness = 1.0;
        assert!((ambient_brightness(&params) - 0.3 * AMBIENT_SCALE).abs() < 1e-4);
    }

    #[test]
    fn test_zero_density_removes_fog() {
        let mut params = StormParams::default();
        assert!(storm_fog(&params).is_some());
        params.fog.density = 0.0;
        assert!(storm_fog(&params).is_none());
    }

    #[test]
    fn test_fog_system_inserts_and_removes() {
        let mut app = App::new();
        app.init_resource::<StormParams>()
            .add_systems(Update, update_storm_fog);
        let camera = app.world_mut().spawn(StormCamera).id();

        app.update();
        assert!(app.world().get::<DistanceFog>(camera).is_some());

        app.world_mut().resource_mut::<StormParams>().fog.density = 0.0;
        app.update();
        assert!(app.world().get::<DistanceFog>(camera).is_none());
    }

    #[test]
    fn test_bloom_follows_post_processing_flag() {
        let mut app = App::new();
        app.init_resource::<StormParams>()
            .add_systems(Update, update_bloom);
        let camera = app.world_mut().spawn(StormCamera).id();

        app.update();
        assert!(app.world().get::<Bloom>(camera).is_some());

        app.world_mut()
            .resource_mut::<StormParams>()
            .scene
            .post_processing_enabled = false;
        app.update();
        assert!(app.world().get::<Bloom>(camera).is_none());
    }

    #[test]
    fn test_lighting_system_applies_flash() {
        let mut app = App::new();
        app.init_resource::<StormParams>()
            .insert_resource(AmbientLight::default())
            .add_systems(Update, apply_storm_lighting);
        let key = app
            .world_mut()
            .spawn((DirectionalLight::default(), KeyLight))
            .id();
        let flash = app
            .world_mut()
            .spawn((PointLight::default(), Visibility::Hidden, FlashLight))
            .id();

        app.world_mut()
            .resource_mut::<StormParams>()
            .lightning
            .intensity = 6.0;
        app.update();

        let world = app.world();
        let illuminance = world
            .get::<DirectionalLight>(key)
            .map(|l| l.illuminance)
            .unwrap_or_default();
        assert!((illuminance - 6.3 * KEY_LUX).abs() < 1e-2);
        assert_eq!(
            world.get::<PointLight>(flash).map(|l| l.intensity),
            Some(6.0 * FLASH_LUMENS)
        );
        assert_eq!(world.get::<Visibility>(flash), Some(&Visibility::Inherited));
    }

    #[test]
    fn test_rain_hidden_when_disabled() {
        let mut params = StormParams::default();
        assert_eq!(rain_visibility(&params), Visibility::Inherited);
        params.rain.enabled = false;
        assert_eq!(rain_visibility(&params), Visibility::Hidden);
    }
}
