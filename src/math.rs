/// How far an animation has advanced, from 0.0 (start) to 1.0 (end)
///
/// Stored as `step / steps`. `lerp` multiplies by `step` before dividing by
/// `steps`.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    step: f64,
    steps: f64,
}

impl Progress {
    pub const START: Self = Self {
        step: 0.0,
        steps: 1.0,
    };
    pub const END: Self = Self {
        step: 1.0,
        steps: 1.0,
    };

    /// Create progress from a fraction, saturating to 0.0-1.0
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::START;
        }
        Self {
            step: fraction.clamp(0.0, 1.0),
            steps: 1.0,
        }
    }

    /// Progress of `step` out of `steps`
    ///
    /// A zero step count is treated as a finished animation.
    pub fn from_step(step: u32, steps: u32) -> Self {
        if steps == 0 {
            return Self::END;
        }
        Self {
            step: f64::from(step.min(steps)),
            steps: f64::from(steps),
        }
    }

    /// Raw fraction (0.0-1.0)
    pub fn fraction(self) -> f64 {
        self.step / self.steps
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::START
    }
}

#[allow(clippy::float_cmp)]
impl PartialEq for Progress {
    fn eq(&self, other: &Self) -> bool {
        self.fraction() == other.fraction()
    }
}

impl PartialOrd for Progress {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.fraction().partial_cmp(&other.fraction())
    }
}

/// Saturate a channel value to 0-255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Linear interpolation between two channel values
///
/// The result is truncated toward zero and then clamped to 0-255.
#[allow(clippy::cast_possible_truncation)]
pub fn lerp(start: i32, end: i32, progress: Progress) -> u8 {
    let delta = f64::from(end) - f64::from(start);
    let value = libm::trunc(f64::from(start) + progress.step * delta / progress.steps);
    // `as` saturates out-of-range floats
    clamp(value as i32)
}

/// Scale a channel value by the progress fraction
#[allow(clippy::cast_possible_truncation)]
pub fn scale(value: i32, progress: Progress) -> u8 {
    let scaled = libm::trunc(f64::from(value) * progress.fraction());
    clamp(scaled as i32)
}

/// Map a configured step size to a usable iteration step
///
/// A zero step would never advance, so it is raised to one.
pub(crate) fn step_of(speed: u8) -> usize {
    usize::from(speed.max(1))
}
