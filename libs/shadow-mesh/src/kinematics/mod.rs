//! Closed-form inverse kinematics of the five-joint manipulator.
//!
//! At rest the arm lies along -X: the shoulder pivots at `(0, DY, 0)`, the
//! elbow at `(-L1, DY, 0)`, the wrist rolls about the axis through
//! `(·, DY, -DZ)` and the hand pitches at `(-(L1 + L2), DY, ·)`. The tool tip
//! sits `L3` past the wrist, further along -X.

use ::config::constants::{ARM_DY, ARM_DZ, ARM_L1, ARM_L2, ARM_L3, LINK_COUNT};
use serde::{Deserialize, Serialize};

use crate::core::vec3::{Mat3, Mat4, Vec3};

/// Joint angles in radians: base yaw, shoulder, elbow, wrist roll, hand pitch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmAngles(pub [f32; 5]);

impl ArmAngles {
    /// World transform of every link, base first.
    ///
    /// Each joint rotates its link about the joint pivot and is composed
    /// onto the parent link.
    pub fn link_transforms(&self) -> [Mat4; LINK_COUNT] {
        let [a0, a1, a2, a3, a4] = self.0;
        let base = Mat4::IDENTITY;
        let turret = Mat4::from_rotation_y(a0);
        let upper = turret * about(Vec3::new(0.0, ARM_DY, 0.0), Mat4::from_rotation_z(a1));
        let fore = upper * about(Vec3::new(-ARM_L1, ARM_DY, 0.0), Mat4::from_rotation_z(a2));
        let wrist = fore * about(Vec3::new(0.0, ARM_DY, -ARM_DZ), Mat4::from_rotation_x(a3));
        let hand = wrist * about(Vec3::new(-(ARM_L1 + ARM_L2), ARM_DY, 0.0), Mat4::from_rotation_z(a4));
        [base, turret, upper, fore, wrist, hand]
    }

    /// Tool tip position and the unit direction from the tip back to the
    /// wrist, the `normal` that [`inverse_kinematics`] takes.
    pub fn end_effector(&self) -> (Vec3, Vec3) {
        let hand = self.link_transforms()[LINK_COUNT - 1];
        let tip = Vec3::new(-(ARM_L1 + ARM_L2 + ARM_L3), ARM_DY, -ARM_DZ);
        (hand.transform_point3(tip), hand.transform_vector3(Vec3::X))
    }
}

fn about(pivot: Vec3, rotation: Mat4) -> Mat4 {
    Mat4::from_translation(pivot) * rotation * Mat4::from_translation(-pivot)
}

/// Solves the joint angles that put the tool tip at `position`, with the
/// wrist behind it along `normal`.
///
/// Targets out of reach stretch the arm toward them instead of producing
/// NaN angles.
pub fn inverse_kinematics(position: Vec3, normal: Vec3) -> ArmAngles {
    let normal = normal.normalize_or_zero();
    let wrist = position + normal * ARM_L3;

    let e = (wrist.x * wrist.x + wrist.z * wrist.z - ARM_DZ * ARM_DZ).max(0.0).sqrt();
    let a0 = wrist.z.atan2(-wrist.x) + ARM_DZ.atan2(e);

    // Shoulder-to-wrist vector in the arm plane.
    let (px, py) = (e, wrist.y - ARM_DY);
    let cos_elbow = (px * px + py * py - ARM_L1 * ARM_L1 - ARM_L2 * ARM_L2) / (2.0 * ARM_L1 * ARM_L2);
    let a2 = -cos_elbow.clamp(-1.0, 1.0).acos();
    let a1 = -py.atan2(px) - (ARM_L2 * a2.sin()).atan2(ARM_L1 + ARM_L2 * a2.cos());

    let local = Mat3::from_rotation_z(-(a1 + a2)) * Mat3::from_rotation_y(-a0) * normal;
    let a4 = local.x.clamp(-1.0, 1.0).acos();
    let a3 = local.z.atan2(local.y);

    ArmAngles([a0, a1, a2, a3, a4])
}

/// Placement of the scene mirror.
pub fn default_mirror_transform() -> Mat4 {
    Mat4::from_translation(Vec3::new(-1.5, 0.25, -0.5))
        * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4)
        * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2)
}

/// Point on a circle of `radius` in the mirror plane at angle `t`, with the
/// mirror normal, both in world space.
///
/// The circle lies in the mirror's local XY plane. The approach normal is
/// the local -Z axis mapped by the inverse of the mirror transform, which
/// keeps the wrist on the arm's side of the mirror.
pub fn mirror_circle_target(t: f32, radius: f32, mirror: &Mat4) -> (Vec3, Vec3) {
    let (sin, cos) = t.sin_cos();
    let position = mirror.transform_point3(Vec3::new(radius * cos, radius * sin, 0.0));
    let normal = mirror
        .inverse()
        .transform_vector3(Vec3::NEG_Z)
        .normalize_or_zero();
    (position, normal)
}
