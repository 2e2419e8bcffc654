//! Smoothed camera zoom with asymmetric ease rates.
//!
//! The controller keeps a target and a current field of view and eases
//! the current value toward the target every frame. Zooming in and
//! zooming out get *independent* ease rates, and the active rate is
//! re-picked each frame from the live sign of `target - current` — so a
//! reversal mid-ease immediately swaps which rate governs. Both rates
//! are user-tunable at runtime through modifier-qualified input.

use crate::host::{HeldControl, Host};
use crate::options::ZoomOptions;
use crate::util::angle::lerp;

/// How zoom input is gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// One-shot scroll notches; each notch steps the target once.
    Discrete,
    /// Press-and-hold controls; the target moves every held frame.
    Continuous,
}

impl ZoomMode {
    /// Human-readable mode name for notices and HUDs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discrete => "scroll",
            Self::Continuous => "hold",
        }
    }
}

/// Scalar ease controller for the camera's field of view.
#[derive(Debug, Clone)]
pub struct ZoomController {
    target_fov: f32,
    current_fov: f32,
    ease_in: f32,
    ease_out: f32,
    mode: ZoomMode,
    enabled: bool,
    /// Previous frame's scroll direction, for edge detection in
    /// discrete mode (-1, 0, or +1).
    last_scroll: i8,
}

impl ZoomController {
    /// Controller initialized from options, enabled, at the default FOV.
    #[must_use]
    pub fn new(opts: &ZoomOptions) -> Self {
        Self {
            target_fov: opts.default_fov,
            current_fov: opts.default_fov,
            ease_in: opts.clamp_ease(opts.ease_in),
            ease_out: opts.clamp_ease(opts.ease_out),
            mode: if opts.continuous {
                ZoomMode::Continuous
            } else {
                ZoomMode::Discrete
            },
            enabled: true,
            last_scroll: 0,
        }
    }

    /// Adopt the host camera's live FOV as both current and target.
    ///
    /// Called once when the rig attaches, so the first eased frame
    /// starts from whatever the camera is actually rendering.
    pub fn adopt_camera<H: Host + ?Sized>(&mut self, host: &H) {
        if let Some(cam) = host.camera() {
            self.current_fov = cam.fov;
            self.target_fov = cam.fov;
        }
    }

    /// The FOV the controller is easing toward.
    #[must_use]
    pub fn target_fov(&self) -> f32 {
        self.target_fov
    }

    /// The FOV currently written to the camera.
    #[must_use]
    pub fn current_fov(&self) -> f32 {
        self.current_fov
    }

    /// Ease rate applied while zooming in.
    #[must_use]
    pub fn ease_in(&self) -> f32 {
        self.ease_in
    }

    /// Ease rate applied while zooming out.
    #[must_use]
    pub fn ease_out(&self) -> f32 {
        self.ease_out
    }

    /// Current input mode.
    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    /// Whether the controller is processing input and easing.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the whole controller. Disabled means inert: no
    /// input, no easing, no camera writes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip between discrete and continuous input, returning the new
    /// mode.
    pub fn toggle_mode(&mut self) -> ZoomMode {
        self.mode = match self.mode {
            ZoomMode::Discrete => ZoomMode::Continuous,
            ZoomMode::Continuous => ZoomMode::Discrete,
        };
        self.mode
    }

    /// Apply one discrete scroll notch.
    ///
    /// `delta` is +1 toward zoom-in, -1 toward zoom-out. Plain notches
    /// step the target FOV; Shift-qualified notches tune the zoom-in
    /// ease rate and Ctrl-qualified notches the zoom-out rate, leaving
    /// the target untouched.
    pub fn scroll_step(
        &mut self,
        delta: f32,
        shift: bool,
        ctrl: bool,
        opts: &ZoomOptions,
    ) {
        if !self.enabled {
            return;
        }
        if shift && !ctrl {
            self.ease_in =
                opts.clamp_ease(self.ease_in + delta * opts.ease_step);
        } else if ctrl && !shift {
            self.ease_out =
                opts.clamp_ease(self.ease_out + delta * opts.ease_step);
        } else if !shift && !ctrl {
            self.target_fov =
                opts.clamp_fov(self.target_fov - delta * opts.step);
        }
    }

    /// Snap both target and current FOV to the default, bypassing
    /// easing.
    pub fn reset(&mut self, opts: &ZoomOptions) {
        self.target_fov = opts.default_fov;
        self.current_fov = opts.default_fov;
    }

    /// Per-frame update: gather input for the active mode, then ease the
    /// current FOV toward the target and write it to the camera.
    ///
    /// With no camera rendering this frame the controller pauses
    /// entirely; the ease resumes where it left off once a camera is
    /// back.
    pub fn update<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        opts: &ZoomOptions,
    ) {
        if !self.enabled || host.camera().is_none() {
            return;
        }

        let ctrl = host.control_held(HeldControl::Ctrl);
        let shift = host.control_held(HeldControl::Shift);

        if ctrl && host.control_held(HeldControl::ZoomReset) {
            self.reset(opts);
        }

        match self.mode {
            ZoomMode::Continuous => self.poll_held(host, ctrl, shift, opts),
            ZoomMode::Discrete => self.poll_scroll(host, shift, ctrl, opts),
        }

        let zooming_in = self.target_fov < self.current_fov;
        let active_ease = if zooming_in { self.ease_in } else { self.ease_out };
        self.current_fov = lerp(self.current_fov, self.target_fov, active_ease);
        host.set_camera_fov(self.current_fov);
    }

    /// Continuous mode: held controls move the target (or tune a rate)
    /// a little every frame.
    fn poll_held<H: Host + ?Sized>(
        &mut self,
        host: &H,
        ctrl: bool,
        shift: bool,
        opts: &ZoomOptions,
    ) {
        let zoom_in = host.control_held(HeldControl::ZoomIn);
        let zoom_out = host.control_held(HeldControl::ZoomOut);

        if zoom_in {
            if shift && !ctrl {
                self.ease_in =
                    opts.clamp_ease(self.ease_in + opts.ease_step_held);
            } else if ctrl && !shift {
                self.ease_out =
                    opts.clamp_ease(self.ease_out + opts.ease_step_held);
            } else if !shift && !ctrl {
                self.target_fov =
                    opts.clamp_fov(self.target_fov - opts.step * 0.5);
            }
        }
        if zoom_out {
            if shift && !ctrl {
                self.ease_in =
                    opts.clamp_ease(self.ease_in - opts.ease_step_held);
            } else if ctrl && !shift {
                self.ease_out =
                    opts.clamp_ease(self.ease_out - opts.ease_step_held);
            } else if !shift && !ctrl {
                self.target_fov =
                    opts.clamp_fov(self.target_fov + opts.step * 0.5);
            }
        }
    }

    /// Discrete mode: scroll direction is polled, edge-detected so a
    /// wheel held in one direction fires a single notch.
    fn poll_scroll<H: Host + ?Sized>(
        &mut self,
        host: &H,
        shift: bool,
        ctrl: bool,
        opts: &ZoomOptions,
    ) {
        let scroll: i8 = if host.control_held(HeldControl::ScrollUp) {
            1
        } else if host.control_held(HeldControl::ScrollDown) {
            -1
        } else {
            0
        };

        if scroll != 0 && scroll != self.last_scroll {
            self.scroll_step(f32::from(scroll), shift, ctrl, opts);
        }
        self.last_scroll = scroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockHost;

    fn opts() -> ZoomOptions {
        ZoomOptions::default()
    }

    #[test]
    fn continuous_zoom_in_tick_matches_expected_ease() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.mode = ZoomMode::Continuous;
        host.set_held(HeldControl::ZoomIn, true);

        zoom.update(&mut host, &o);

        // 68 target steps to 67, then current eases 15% of the way.
        assert!((zoom.target_fov() - 67.0).abs() < 1e-5);
        assert!((zoom.current_fov() - 67.85).abs() < 1e-4);
        assert_eq!(host.written_fov, Some(zoom.current_fov()));
    }

    #[test]
    fn fov_stays_in_bounds_under_any_input_sequence() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.mode = ZoomMode::Continuous;
        host.set_held(HeldControl::ZoomIn, true);
        for _ in 0..200 {
            zoom.update(&mut host, &o);
        }
        assert!((zoom.target_fov() - o.min_fov).abs() < 1e-5);
        assert!(zoom.current_fov() >= o.min_fov - 1e-4);

        host.set_held(HeldControl::ZoomIn, false);
        host.set_held(HeldControl::ZoomOut, true);
        for _ in 0..500 {
            zoom.update(&mut host, &o);
        }
        assert!((zoom.target_fov() - o.max_fov).abs() < 1e-5);
        assert!(zoom.current_fov() <= o.max_fov + 1e-4);
    }

    #[test]
    fn discrete_scroll_is_edge_detected() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        host.set_held(HeldControl::ScrollUp, true);

        // Wheel held "up" across three frames fires exactly one notch.
        zoom.update(&mut host, &o);
        zoom.update(&mut host, &o);
        zoom.update(&mut host, &o);
        assert!((zoom.target_fov() - 66.0).abs() < 1e-5);

        // Releasing and scrolling again fires the next notch.
        host.set_held(HeldControl::ScrollUp, false);
        zoom.update(&mut host, &o);
        host.set_held(HeldControl::ScrollUp, true);
        zoom.update(&mut host, &o);
        assert!((zoom.target_fov() - 64.0).abs() < 1e-5);
    }

    #[test]
    fn modifier_scroll_tunes_ease_not_target() {
        let o = opts();
        let mut zoom = ZoomController::new(&o);

        zoom.scroll_step(1.0, true, false, &o);
        assert!((zoom.ease_in() - 0.17).abs() < 1e-5);
        assert_eq!(zoom.target_fov(), o.default_fov);

        zoom.scroll_step(-1.0, false, true, &o);
        assert!((zoom.ease_out() - 0.13).abs() < 1e-5);
        assert_eq!(zoom.target_fov(), o.default_fov);

        // Ambiguous chord (both modifiers) does nothing.
        zoom.scroll_step(1.0, true, true, &o);
        assert!((zoom.ease_in() - 0.17).abs() < 1e-5);
        assert!((zoom.ease_out() - 0.13).abs() < 1e-5);
        assert_eq!(zoom.target_fov(), o.default_fov);
    }

    #[test]
    fn ease_rates_clamp_to_configured_range() {
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        for _ in 0..100 {
            zoom.scroll_step(-1.0, true, false, &o);
        }
        assert!((zoom.ease_in() - o.ease_min).abs() < 1e-6);
        for _ in 0..100 {
            zoom.scroll_step(1.0, false, true, &o);
        }
        assert!((zoom.ease_out() - o.ease_max).abs() < 1e-6);
    }

    #[test]
    fn direction_reversal_swaps_active_rate_immediately() {
        let mut host = MockHost::new();
        let o = ZoomOptions {
            ease_in: 0.5,
            ease_out: 0.1,
            ..ZoomOptions::default()
        };
        let mut zoom = ZoomController::new(&o);

        // Ease toward a lower target: ease_in (0.5) governs, so one
        // frame covers half the 68 -> 66 gap.
        zoom.scroll_step(1.0, false, false, &o);
        zoom.update(&mut host, &o);
        assert!((zoom.current_fov() - 67.0).abs() < 1e-4);

        // Reverse well above current: ease_out (0.1) governs at once.
        zoom.scroll_step(-4.0, false, false, &o);
        let before = zoom.current_fov();
        zoom.update(&mut host, &o);
        let moved = zoom.current_fov() - before;
        let expected = (zoom.target_fov() - before) * 0.1;
        assert!((moved - expected).abs() < 1e-4);
    }

    #[test]
    fn reset_chord_snaps_both_values() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.scroll_step(5.0, false, false, &o);
        zoom.update(&mut host, &o);
        assert!(zoom.current_fov() != o.default_fov);

        host.set_held(HeldControl::Ctrl, true);
        host.set_held(HeldControl::ZoomReset, true);
        zoom.update(&mut host, &o);
        assert_eq!(zoom.target_fov(), o.default_fov);
        assert_eq!(zoom.current_fov(), o.default_fov);
    }

    #[test]
    fn disabled_controller_is_inert() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.set_enabled(false);
        host.set_held(HeldControl::ScrollUp, true);
        zoom.update(&mut host, &o);
        assert_eq!(zoom.target_fov(), o.default_fov);
        assert_eq!(host.written_fov, None);
    }

    #[test]
    fn missing_camera_pauses_ease_and_input() {
        let mut host = MockHost::new();
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.scroll_step(1.0, false, false, &o);
        host.camera = None;
        host.set_held(HeldControl::ScrollUp, true);

        zoom.update(&mut host, &o);
        assert_eq!(zoom.current_fov(), o.default_fov);
        assert!((zoom.target_fov() - 66.0).abs() < 1e-5);
        assert_eq!(host.written_fov, None);

        // Camera back: the ease resumes from the pending target.
        host.camera = Some(crate::host::CameraSample {
            position: glam::Vec3::ZERO,
            rotation: glam::Vec3::ZERO,
            fov: o.default_fov,
        });
        host.set_held(HeldControl::ScrollUp, false);
        zoom.update(&mut host, &o);
        assert!(zoom.current_fov() < o.default_fov);
        assert_eq!(host.written_fov, Some(zoom.current_fov()));
    }

    #[test]
    fn adopt_camera_takes_live_fov() {
        let mut host = MockHost::new();
        if let Some(cam) = host.camera.as_mut() {
            cam.fov = 42.0;
        }
        let o = opts();
        let mut zoom = ZoomController::new(&o);
        zoom.adopt_camera(&host);
        assert_eq!(zoom.current_fov(), 42.0);
        assert_eq!(zoom.target_fov(), 42.0);
    }
}
