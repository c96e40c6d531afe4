//! Camera follow and shake.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use carom_core::components::Camera;
use carom_core::constants::CAMERA_SHAKE_DECAY;

/// Ease the camera toward its target and advance any active shake.
pub fn run(camera: &mut Camera, target: Vec2, rng: &mut ChaCha8Rng, dt: f32) {
    camera.target = target;

    let blend = 1.0 - (-camera.follow_speed * dt).exp();
    camera.pos += (camera.target - camera.pos) * blend;

    if camera.shake_duration > 0.0 {
        camera.shake_duration -= dt;
        camera.shake_intensity *= (-CAMERA_SHAKE_DECAY * dt).exp();
        camera.shake_offset =
            Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)) * camera.shake_intensity;

        if camera.shake_duration <= 0.0 {
            camera.shake_duration = 0.0;
            camera.shake_intensity = 0.0;
            camera.shake_offset = Vec2::ZERO;
        }
    }
}
