//! Kinematic AUV model (explicit Euler).
//!
//! State
//! - Planar `position`, `depth` (positive down), `heading` (radians, unwrapped),
//!   world-frame `speed = (vx, vy, vz)` and `angular_speed` about the vertical.
//!
//! Update rules (one step of size `dt`)
//! - heading += angular_speed·dt; x += vx·dt; y += vy·dt; depth += vz·dt.
//! - Speeds change only through `apply_acceleration` /
//!   `apply_angular_acceleration`. Heading does not rotate the speed vector.
//! - Any `dt` is accepted: zero is a no-op, negative runs time backwards.
//!   Nothing bounds or stabilizes the state.

use nalgebra::Vector3;

use crate::geom2::Point;

/// Named vehicle state.
#[derive(Clone, Debug, PartialEq)]
pub struct Auv {
    pub name: String,
    pub position: Point,
    pub depth: f64,
    pub heading: f64,
    pub speed: Vector3<f64>,
    pub angular_speed: f64,
}

impl Auv {
    pub fn new(
        name: impl Into<String>,
        position: Point,
        depth: f64,
        heading: f64,
        speed: Vector3<f64>,
        angular_speed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            depth,
            heading,
            speed,
            angular_speed,
        }
    }

    /// Advance heading, position and depth by one Euler step.
    pub fn step(&mut self, dt: f64) {
        self.heading += self.angular_speed * dt;
        self.position.x += self.speed.x * dt;
        self.position.y += self.speed.y * dt;
        self.depth += self.speed.z * dt;
    }

    /// `speed += accel·dt`, component-wise.
    pub fn apply_acceleration(&mut self, accel: Vector3<f64>, dt: f64) {
        self.speed += accel * dt;
    }

    pub fn apply_angular_acceleration(&mut self, angular_accel: f64, dt: f64) {
        self.angular_speed += angular_accel * dt;
    }

    /// State after `step(dt)`; `self` is left unchanged.
    #[must_use]
    pub fn stepped(&self, dt: f64) -> Self {
        let mut next = self.clone();
        next.step(dt);
        next
    }

    #[must_use]
    pub fn accelerated(&self, accel: Vector3<f64>, dt: f64) -> Self {
        let mut next = self.clone();
        next.apply_acceleration(accel, dt);
        next
    }

    #[must_use]
    pub fn angularly_accelerated(&self, angular_accel: f64, dt: f64) -> Self {
        let mut next = self.clone();
        next.apply_angular_acceleration(angular_accel, dt);
        next
    }
}

/// Constant control inputs held over a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub accel: Vector3<f64>,
    pub angular_accel: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            accel: Vector3::zeros(),
            angular_accel: 0.0,
        }
    }
}

/// Run `steps` iterations of accelerate → step with constant `controls`.
///
/// Lazily yields `steps + 1` states, starting with `initial`. Nothing is
/// allocated up front, so any `steps` (including `usize::MAX`) is accepted.
pub fn simulate(initial: &Auv, controls: Controls, dt: f64, steps: usize) -> Trajectory {
    Trajectory {
        state: initial.clone(),
        controls,
        dt,
        remaining: steps,
        started: false,
    }
}

/// Iterator over simulated states; see [`simulate`].
#[derive(Clone, Debug)]
pub struct Trajectory {
    state: Auv,
    controls: Controls,
    dt: f64,
    remaining: usize,
    started: bool,
}

impl Iterator for Trajectory {
    type Item = Auv;

    fn next(&mut self) -> Option<Auv> {
        if !self.started {
            self.started = true;
            return Some(self.state.clone());
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.state.apply_acceleration(self.controls.accel, self.dt);
        self.state
            .apply_angular_acceleration(self.controls.angular_accel, self.dt);
        self.state.step(self.dt);
        Some(self.state.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.started {
            Some(self.remaining)
        } else {
            self.remaining.checked_add(1)
        };
        (left.unwrap_or(usize::MAX), left)
    }
}
