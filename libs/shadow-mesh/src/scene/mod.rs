//! Manipulator scene: the six arm links plus static props, each with its
//! own world transform and shadow volume.
//!
//! Every frame the caller updates the arm (directly or through
//! [`ManipulatorScene::animate`]), rebuilds the shadow volumes and submits
//! the lit pass and the shadow pass to a [`DrawTarget`].

use ::config::constants::{
    ANIMATION_RADIUS, DEFAULT_CYLINDER_SLICES, DEFAULT_CYLINDER_STACKS, LINK_COUNT,
};
use log::{debug, trace};
use rayon::prelude::*;

use crate::config::ShadowConfig;
use crate::core::vec3::{Mat4, Vec3};
use crate::error::{ShadowMeshError, ShadowMeshResult};
use crate::filesystem::FileSystem;
use crate::kinematics::{default_mirror_transform, inverse_kinematics, mirror_circle_target, ArmAngles};
use crate::mesh::SmMesh;
use crate::primitives::{cylinder, double_rect, room_box};
use crate::render::DrawTarget;
use crate::shadow_volume::VolumeStats;

/// A mesh placed in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Geometry and its current shadow volume.
    pub mesh: SmMesh,
    /// Model-to-world matrix.
    pub transform: Mat4,
    /// Whether a shadow volume is built for this object.
    pub casts_shadow: bool,
}

impl SceneObject {
    /// Creates a scene object.
    pub fn new(mesh: SmMesh, transform: Mat4, casts_shadow: bool) -> Self {
        Self {
            mesh,
            transform,
            casts_shadow,
        }
    }

    fn update_shadow_volume(&mut self, light: Vec3, extrusion: f32) -> ShadowMeshResult<VolumeStats> {
        if !self.casts_shadow {
            self.mesh.clear_shadow_volume();
            return Ok(VolumeStats::default());
        }
        self.mesh
            .generate_shadow_volume(light, &self.transform, extrusion)
            .map(|volume| volume.stats())
    }
}

/// The arm links followed by any props.
#[derive(Debug, Clone)]
pub struct ManipulatorScene {
    objects: Vec<SceneObject>,
    config: ShadowConfig,
    angles: ArmAngles,
    mirror: Mat4,
    mirror_object: Option<usize>,
    time: f32,
}

impl ManipulatorScene {
    /// Creates a scene from the arm link meshes, base first.
    pub fn new(links: Vec<SmMesh>, config: ShadowConfig) -> ShadowMeshResult<Self> {
        if links.len() != LINK_COUNT {
            return Err(ShadowMeshError::InvalidTopology(format!(
                "manipulator needs {LINK_COUNT} links, got {}",
                links.len()
            )));
        }
        let objects = links
            .into_iter()
            .map(|mesh| SceneObject::new(mesh, Mat4::IDENTITY, true))
            .collect();
        let mut scene = Self {
            objects,
            config,
            angles: ArmAngles::default(),
            mirror: default_mirror_transform(),
            mirror_object: None,
            time: 0.0,
        };
        scene.set_angles(ArmAngles::default());
        Ok(scene)
    }

    /// Loads `mesh1.txt` to `mesh6.txt` as the arm links.
    pub fn load<F: FileSystem + ?Sized>(fs: &F, config: ShadowConfig) -> ShadowMeshResult<Self> {
        let links = (1..=LINK_COUNT)
            .map(|i| SmMesh::load(fs, &format!("mesh{i}.txt")))
            .collect::<ShadowMeshResult<Vec<_>>>()?;
        debug!("loaded {} manipulator links", links.len());
        Self::new(links, config)
    }

    /// Adds the mirror, the cylinder and the room box.
    ///
    /// The room faces inward and is only drawn lit; the mirror and the
    /// cylinder cast shadows.
    pub fn add_default_props(&mut self) -> ShadowMeshResult<()> {
        let mirror = double_rect(1.5, 1.0)?;
        let pillar = cylinder(DEFAULT_CYLINDER_STACKS, DEFAULT_CYLINDER_SLICES, 3.0, 0.5)?;
        let room = room_box(5.0, 5.0, 5.0)?;

        self.mirror_object = Some(self.add_object(SceneObject::new(mirror, self.mirror, true)));
        self.add_object(SceneObject::new(
            pillar,
            Mat4::from_translation(Vec3::new(0.0, -1.0, -1.5))
                * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2),
            true,
        ));
        self.add_object(SceneObject::new(
            room,
            Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0)),
            false,
        ));
        Ok(())
    }

    /// Adds an object and returns its index.
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// All objects, links first.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// The arm links.
    pub fn links(&self) -> &[SceneObject] {
        &self.objects[..LINK_COUNT]
    }

    /// Current joint angles.
    pub fn angles(&self) -> ArmAngles {
        self.angles
    }

    /// Shadow configuration in use.
    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Moves the light.
    pub fn set_light_position(&mut self, light: Vec3) {
        self.config.light_position = light;
    }

    /// Placement of the mirror.
    pub fn mirror_transform(&self) -> Mat4 {
        self.mirror
    }

    /// Matrix reflecting world space through the mirror plane.
    pub fn reflection_transform(&self) -> Mat4 {
        self.mirror * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0)) * self.mirror.inverse()
    }

    /// Poses the arm.
    pub fn set_angles(&mut self, angles: ArmAngles) {
        self.angles = angles;
        for (link, transform) in self.objects.iter_mut().zip(angles.link_transforms()) {
            link.transform = transform;
        }
    }

    /// Advances the animation clock by `dt` seconds and points the arm at
    /// the next point of the circle drawn on the mirror.
    ///
    /// Returns the target point.
    pub fn animate(&mut self, dt: f32) -> Vec3 {
        self.time += dt;
        let (position, normal) = mirror_circle_target(self.time, ANIMATION_RADIUS, &self.mirror);
        self.set_angles(inverse_kinematics(position, normal));
        position
    }

    /// Rebuilds the shadow volume of every shadow-casting object.
    ///
    /// Runs on the rayon pool when the configuration asks for it. Returns
    /// the summed counts of all volumes.
    pub fn update_shadow_volumes(&mut self) -> ShadowMeshResult<VolumeStats> {
        let light = self.config.light_position;
        let extrusion = self.config.extrusion_distance;

        let stats: VolumeStats = if self.config.parallel {
            self.objects
                .par_iter_mut()
                .map(|object| object.update_shadow_volume(light, extrusion))
                .collect::<ShadowMeshResult<Vec<_>>>()?
                .into_iter()
                .sum()
        } else {
            self.objects
                .iter_mut()
                .map(|object| object.update_shadow_volume(light, extrusion))
                .collect::<ShadowMeshResult<Vec<_>>>()?
                .into_iter()
                .sum()
        };

        trace!(
            "scene shadow volumes: {} silhouette edges, {} triangles",
            stats.silhouette_edges,
            stats.triangle_count()
        );
        Ok(stats)
    }

    /// Submits every object in model space with its world transform.
    pub fn render_lit<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        for object in &self.objects {
            object.mesh.render(target, &object.transform);
        }
    }

    /// Submits every object except the mirror, reflected through the mirror.
    pub fn render_reflected<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        let reflection = self.reflection_transform();
        for (index, object) in self.objects.iter().enumerate() {
            if Some(index) != self.mirror_object {
                object.mesh.render(target, &(reflection * object.transform));
            }
        }
    }

    /// Submits the current shadow volumes.
    pub fn render_shadow_volumes<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        for object in &self.objects {
            object.mesh.render_shadow_volume(target);
        }
    }
}
