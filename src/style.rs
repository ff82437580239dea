// Inline style/transform strings. Kept free of web-sys so host tests can include them.
use portfolio_core::{GeometryPose, ParticleDescriptor};

#[inline]
pub fn particle_style(p: &ParticleDescriptor) -> String {
    format!(
        "left: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s;",
        p.left_pct, p.delay_sec, p.duration_sec
    )
}

#[inline]
pub fn progress_transform(progress: f32) -> String {
    format!("scaleX({:.4})", progress.clamp(0.0, 1.0))
}

// CSS y grows downward, so positive lift moves the element up.
pub fn geometry_transform(pose: &GeometryPose, px_per_unit: f32) -> String {
    let lift_px = -pose.lift * px_per_unit;
    format!(
        "translate3d(0px, {:.2}px, 0px) rotateX({:.4}rad) rotateY({:.4}rad) rotateZ({:.4}rad)",
        lift_px, pose.rotation.x, pose.rotation.y, pose.rotation.z
    )
}

/// Inline `display` value for a banner; `None` removes the override so the
/// stylesheet decides.
#[inline]
pub fn display_value(visible: bool) -> Option<&'static str> {
    if visible {
        None
    } else {
        Some("none")
    }
}
