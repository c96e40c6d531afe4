//! Frame timing, FPS accounting, and adaptive quality scaling.
//!
//! Raw unscaled frame gaps feed a rolling window. Once the window is
//! full and no cooldown is pending, the windowed average is compared
//! against the frame budget and quality steps one tier at a time. A
//! drop re-arms a short cooldown, a raise a longer one, so quality
//! sheds load quickly and recovers cautiously.

use carom_core::components::PerformanceState;
use carom_core::config::SimConfig;

/// Record one frame-time sample and run the adaptive quality check.
pub fn run(perf: &mut PerformanceState, config: &SimConfig, frame_ms: f32, debug: bool) {
    perf.frame_times.push_back(frame_ms);
    while perf.frame_times.len() > perf.window {
        perf.frame_times.pop_front();
    }
    let sum: f32 = perf.frame_times.iter().sum();
    perf.average_frame_time_ms = sum / perf.frame_times.len() as f32;

    perf.fps_counter += 1;
    perf.fps_timer += frame_ms as f64 / 1000.0;
    if perf.fps_timer >= 1.0 {
        perf.current_fps = perf.fps_counter as f32;
        if debug {
            log::debug!(
                "fps {} avg {:.2}ms quality {:?}",
                perf.current_fps,
                perf.average_frame_time_ms,
                perf.quality
            );
        }
        perf.fps_counter = 0;
        perf.fps_timer = 0.0;
    }

    if perf.cooldown > 0 {
        perf.cooldown -= 1;
    }
    if !perf.adaptive || perf.cooldown > 0 || perf.frame_times.len() < perf.window {
        return;
    }

    let average = perf.average_frame_time_ms;
    if average >= config.frame_budget_ms * config.degrade_factor {
        let lower = perf.quality.step_down();
        if lower != perf.quality {
            log::debug!("quality lowered to {lower:?} (avg {average:.2}ms)");
            perf.quality = lower;
            perf.cooldown = config.quality_drop_cooldown;
        }
    } else if average <= config.frame_budget_ms * config.upgrade_factor {
        let higher = perf.quality.step_up();
        if higher != perf.quality {
            log::debug!("quality raised to {higher:?} (avg {average:.2}ms)");
            perf.quality = higher;
            perf.cooldown = config.quality_raise_cooldown;
        }
    }
}
