use crate::constants::*;

/// Fraction of the document scrolled, clamped to [0, 1].
/// Documents that fit in the viewport report 0.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: PROGRESS_STIFFNESS,
            damping: PROGRESS_DAMPING,
            mass: PROGRESS_MASS,
            rest_delta: PROGRESS_REST_DELTA,
            rest_speed: PROGRESS_REST_SPEED,
        }
    }
}

/// Damped spring that eases the displayed progress toward the scroll target.
#[derive(Clone, Debug)]
pub struct ProgressSpring {
    params: SpringParams,
    value: f32,
    velocity: f32,
    target: f32,
}

impl ProgressSpring {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec`; returns the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() || !(dt_sec > 0.0) {
            return self.value;
        }
        let p = self.params;
        let mut remaining = dt_sec.min(SPRING_MAX_STEP_SEC);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            // semi-implicit Euler
            let spring_force = -p.stiffness * (self.value - self.target);
            let accel = (spring_force - p.damping * self.velocity) / p.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < p.rest_delta && self.velocity.abs() < p.rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

impl Default for ProgressSpring {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

/// Spring plus the last value applied to the bar. The first update always
/// yields a value so the bar is styled from mount, even at rest.
#[derive(Clone, Debug, Default)]
pub struct ProgressDisplay {
    spring: ProgressSpring,
    applied: Option<f32>,
}

impl ProgressDisplay {
    pub fn new(spring: ProgressSpring) -> Self {
        Self {
            spring,
            applied: None,
        }
    }

    pub fn spring(&self) -> &ProgressSpring {
        &self.spring
    }

    /// Retarget and advance the spring. Returns the value to apply when it
    /// differs from the one applied last.
    pub fn update(&mut self, target: f32, dt_sec: f32) -> Option<f32> {
        self.spring.set_target(target);
        let value = self.spring.step(dt_sec);
        if self.applied == Some(value) {
            return None;
        }
        self.applied = Some(value);
        Some(value)
    }
}
