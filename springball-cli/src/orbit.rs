//! Orbit camera for projecting the 3D scene onto the egui canvas

use glam::{DMat4, DVec3, DVec4};

const NEAR: f64 = 0.1;
const FAR: f64 = 1000.0;
const MIN_PITCH: f64 = -1.5;
const MAX_PITCH: f64 = 1.5;

/// Camera circling a target point
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: DVec3,
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub fov_y: f64, // radians
}

impl OrbitCamera {
    /// Camera placed at `eye`, looking at `target`
    pub fn looking_at(eye: DVec3, target: DVec3, fov_y_degrees: f64) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        Self {
            target,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / distance).asin(),
            distance,
            fov_y: fov_y_degrees.to_radians(),
        }
    }

    pub fn eye(&self) -> DVec3 {
        let (sin_p, cos_p) = self.pitch.sin_cos();
        let (sin_y, cos_y) = self.yaw.sin_cos();
        self.target + DVec3::new(cos_p * cos_y, sin_p, cos_p * sin_y) * self.distance
    }

    /// Rotate by a mouse drag, in pixels
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.yaw += dx * 0.01;
        self.pitch = (self.pitch + dy * 0.01).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Zoom by a scroll amount, in pixels
    pub fn zoom(&mut self, scroll: f64) {
        self.distance = (self.distance * (-scroll * 0.002).exp()).clamp(1.0, 500.0);
    }

    fn view(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye(), self.target, DVec3::Y)
    }

    fn projection(&self, aspect: f64) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, aspect, NEAR, FAR)
    }

    /// Screen-space projector for a viewport of the given size
    pub fn projector(&self, width: f64, height: f64) -> Projector {
        Projector {
            view: self.view(),
            projection: self.projection(width.max(1.0) / height.max(1.0)),
            focal: 1.0 / (self.fov_y / 2.0).tan(),
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }
}

/// Maps world points to pixel offsets from the viewport center (y down)
pub struct Projector {
    view: DMat4,
    projection: DMat4,
    focal: f64,
    half_width: f64,
    half_height: f64,
}

impl Projector {
    fn to_view(&self, p: DVec3) -> DVec3 {
        self.view.transform_point3(p)
    }

    fn view_to_screen(&self, v: DVec3) -> Option<(f64, f64)> {
        if v.z > -NEAR {
            return None;
        }
        let clip: DVec4 = self.projection * v.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Some((ndc.x * self.half_width, -ndc.y * self.half_height))
    }

    /// Project a point; `None` when it's behind the near plane
    pub fn point(&self, p: DVec3) -> Option<(f64, f64)> {
        self.view_to_screen(self.to_view(p))
    }

    /// On-screen radius of a sphere of `radius` centered at `p`
    pub fn radius(&self, p: DVec3, radius: f64) -> Option<f64> {
        let depth = -self.to_view(p).z;
        if depth <= NEAR {
            return None;
        }
        Some(radius * self.focal / depth * self.half_height)
    }

    /// Project a segment, clipped against the near plane
    pub fn segment(&self, a: DVec3, b: DVec3) -> Option<[(f64, f64); 2]> {
        let mut va = self.to_view(a);
        let mut vb = self.to_view(b);
        let limit = -NEAR * 1.001;
        if va.z > limit && vb.z > limit {
            return None;
        }
        if va.z > limit {
            va = vb.lerp(va, (vb.z - limit) / (vb.z - va.z));
        } else if vb.z > limit {
            vb = va.lerp(vb, (va.z - limit) / (va.z - vb.z));
        }
        Some([self.view_to_screen(va)?, self.view_to_screen(vb)?])
    }
}
