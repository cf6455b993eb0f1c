//! The hero's 3D scene: a robot working at a holographic workstation above a
//! wireframe floor, inside a shell of stars. `Scene::frame` poses everything
//! at a point in time and projects it for a 2D canvas.

use std::f64::consts::{PI, TAU};

use glam::{DMat4, DQuat, DVec3};
use rand::Rng;

const NEAR_PLANE: f64 = 0.1;
const FAR_PLANE: f64 = 1_000.0;
/// OrbitControls `autoRotateSpeed = 0.5`: one full orbit every two minutes.
pub const AUTO_ROTATE_RATE: f64 = TAU / 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Cyan,
    Magenta,
    Steel,
    Grid,
    Star,
}

impl Tint {
    pub fn css(&self, alpha: f64) -> String {
        let (r, g, b) = match self {
            Tint::Cyan => (0, 255, 255),
            Tint::Magenta => (255, 0, 255),
            Tint::Steel => (136, 136, 136),
            Tint::Grid => (0, 160, 160),
            Tint::Star => (255, 255, 255),
        };
        format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub tint: Tint,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pub at: (f64, f64),
    pub radius: f64,
    pub tint: Tint,
    pub alpha: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub lines: Vec<Line2>,
    pub points: Vec<Point2>,
}

/// Perspective camera orbiting the origin on the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_y: f64,
    pub yaw: f64,
}

impl Camera {
    pub fn new(distance: f64, fov_degrees: f64) -> Self {
        Self {
            distance,
            fov_y: fov_degrees.to_radians(),
            yaw: 0.0,
        }
    }

    pub fn at_time(self, t: f64) -> Self {
        Self {
            yaw: (t * AUTO_ROTATE_RATE) % TAU,
            ..self
        }
    }

    pub fn eye(&self) -> DVec3 {
        DQuat::from_rotation_y(self.yaw) * DVec3::new(0.0, 0.0, self.distance)
    }

    /// View and projection for a `width`×`height` canvas.
    pub fn lens(&self, width: f64, height: f64) -> Lens {
        Lens {
            view: DMat4::look_at_rh(self.eye(), DVec3::ZERO, DVec3::Y),
            projection: DMat4::perspective_rh(self.fov_y, width / height, NEAR_PLANE, FAR_PLANE),
            width,
            height,
        }
    }
}

/// A camera fixed to one canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    view: DMat4,
    projection: DMat4,
    width: f64,
    height: f64,
}

impl Lens {
    // View space looks down -z, so depth in front of the lens is -z.
    fn depth(v: DVec3) -> f64 {
        -v.z
    }

    fn to_screen(&self, v: DVec3) -> (f64, f64) {
        let ndc = self.projection.project_point3(v);
        (
            (ndc.x + 1.0) * self.width / 2.0,
            (1.0 - ndc.y) * self.height / 2.0,
        )
    }

    /// Screen position and depth of a point, or `None` behind the near plane.
    pub fn project(&self, p: DVec3) -> Option<((f64, f64), f64)> {
        let v = self.view.transform_point3(p);
        let depth = Self::depth(v);
        if depth <= NEAR_PLANE {
            return None;
        }
        Some((self.to_screen(v), depth))
    }

    /// Project a segment, clipping the part behind the near plane.
    pub fn project_segment(&self, a: DVec3, b: DVec3) -> Option<((f64, f64), (f64, f64))> {
        let (mut va, mut vb) = (self.view.transform_point3(a), self.view.transform_point3(b));
        let (da, db) = (Self::depth(va), Self::depth(vb));
        if da <= NEAR_PLANE && db <= NEAR_PLANE {
            return None;
        }
        if da <= NEAR_PLANE {
            va = vb.lerp(va, (db - NEAR_PLANE) / (db - da));
        } else if db <= NEAR_PLANE {
            vb = va.lerp(vb, (da - NEAR_PLANE) / (da - db));
        }
        Some((self.to_screen(va), self.to_screen(vb)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    a: DVec3,
    b: DVec3,
    tint: Tint,
    alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Glow {
    at: DVec3,
    radius: f64,
    tint: Tint,
    alpha: f64,
}

fn box_edges(size: DVec3, place: impl Fn(DVec3) -> DVec3, tint: Tint, alpha: f64) -> Vec<Segment> {
    let half = size / 2.0;
    let corner = |i: usize| {
        half * DVec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        )
    };
    const EDGES: [(usize, usize); 12] = [
        (0, 1), (2, 3), (4, 5), (6, 7),
        (0, 2), (1, 3), (4, 6), (5, 7),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
    EDGES
        .iter()
        .map(|&(i, j)| Segment {
            a: place(corner(i)),
            b: place(corner(j)),
            tint,
            alpha,
        })
        .collect()
}

fn ring(radius: f64, sides: usize, place: impl Fn(DVec3) -> DVec3, tint: Tint, alpha: f64) -> Vec<Segment> {
    let point = |i: usize| {
        let angle = TAU * i as f64 / sides as f64;
        place(DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius))
    };
    (0..sides)
        .map(|i| Segment {
            a: point(i),
            b: point(i + 1),
            tint,
            alpha,
        })
        .collect()
}

/// Sway around the vertical axis and vertical bob of the robot at `t` seconds.
pub fn robot_pose(t: f64) -> (f64, f64) {
    ((t * 0.5).sin() * 0.2, (t * 2.0).sin() * 0.1 + 0.1)
}

/// Height of data stream `index` at `t`, between 0.5 and 1.5 on a two second
/// cycle, each stream 0.2s behind the previous one.
pub fn stream_scale(index: usize, t: f64) -> f64 {
    1.0 - 0.5 * (PI * (t - index as f64 * 0.2)).cos()
}

pub struct Scene {
    pub camera: Camera,
    stars: Vec<DVec3>,
}

impl Scene {
    pub const ROBOT_ORIGIN: DVec3 = DVec3::new(-2.0, -2.0, 0.0);
    pub const FLOOR_Y: f64 = -3.0;
    pub const CUBES: usize = 5;
    pub const STREAMS: usize = 8;

    pub fn hero<R: Rng + ?Sized>(rng: &mut R, star_count: usize) -> Self {
        Self {
            camera: Camera::new(15.0, 60.0),
            stars: star_shell(rng, star_count, 100.0, 50.0),
        }
    }

    pub fn stars(&self) -> &[DVec3] {
        &self.stars
    }

    fn robot(&self, t: f64, out: &mut Vec<Segment>, glows: &mut Vec<Glow>) {
        let (sway, bob) = robot_pose(t);
        let place = |offset: DVec3| {
            move |p: DVec3| {
                DQuat::from_rotation_y(sway) * ((p + offset) * 0.5) + DVec3::new(0.0, bob, 0.0) + Self::ROBOT_ORIGIN
            }
        };

        let head = DVec3::new(0.0, 1.5, 0.0);
        out.extend(box_edges(DVec3::new(0.8, 0.8, 0.8), place(head), Tint::Steel, 0.9));
        for x in [0.2, -0.2] {
            glows.push(Glow { at: place(head)(DVec3::new(x, 0.1, 0.41)), radius: 2.5, tint: Tint::Cyan, alpha: 1.0 });
        }
        out.push(Segment {
            a: place(head)(DVec3::new(0.0, 0.4, 0.0)),
            b: place(head)(DVec3::new(0.0, 0.65, 0.0)),
            tint: Tint::Steel,
            alpha: 0.9,
        });
        glows.push(Glow { at: place(head)(DVec3::new(0.0, 0.7, 0.0)), radius: 2.0, tint: Tint::Magenta, alpha: 1.0 });

        let body = DVec3::new(0.0, 0.6, 0.0);
        out.extend(box_edges(DVec3::new(1.0, 1.2, 0.6), place(body), Tint::Steel, 0.9));
        let chest = 0.6 + 0.4 * (t * 2.0).sin().abs();
        glows.push(Glow { at: place(body)(DVec3::new(0.0, 0.2, 0.31)), radius: 3.5, tint: Tint::Cyan, alpha: chest });

        // Left arm rests, right arm works the hologram.
        out.extend(box_edges(DVec3::new(0.8, 0.2, 0.2), place(DVec3::new(-0.75, 0.7, 0.0)), Tint::Steel, 0.8));
        out.extend(box_edges(DVec3::new(0.3, 0.15, 0.15), place(DVec3::new(-1.1, 0.7, 0.0)), Tint::Steel, 0.8));
        let reach = (PI * t).sin().powi(2) * 0.2;
        out.extend(box_edges(DVec3::new(0.8, 0.2, 0.2), place(DVec3::new(0.75, 0.7, 0.0)), Tint::Steel, 0.8));
        out.extend(box_edges(
            DVec3::new(0.3, 0.15, 0.15),
            place(DVec3::new(1.1, 0.7 + reach, reach)),
            Tint::Steel,
            0.8,
        ));

        for x in [-0.25, 0.25] {
            out.extend(box_edges(DVec3::new(0.25, 0.8, 0.3), place(DVec3::new(x, -0.3, 0.0)), Tint::Steel, 0.8));
        }
    }

    fn workstation(&self, t: f64, out: &mut Vec<Segment>) {
        let origin = Self::ROBOT_ORIGIN + DVec3::new(1.5, 0.8, 0.0);
        let at = move |offset: DVec3| move |p: DVec3| p + offset + origin;

        out.extend(ring(0.6, 16, at(DVec3::new(0.0, -0.15, 0.0)), Tint::Steel, 0.7));
        out.extend(ring(0.5, 16, at(DVec3::new(0.0, -0.05, 0.0)), Tint::Steel, 0.7));

        let float = (t * 2.0).sin() * 0.05;
        let spin = t * 0.8;
        let hologram = DVec3::new(0.0, 0.5 + float, 0.0);
        let upright = DQuat::from_rotation_x(PI / 2.0);
        for tilt in [0.0, PI / 3.0, 2.0 * PI / 3.0] {
            out.extend(ring(
                0.4,
                16,
                move |p: DVec3| DQuat::from_rotation_y(tilt + spin) * upright * p + hologram + origin,
                Tint::Cyan,
                0.6,
            ));
        }

        for i in 0..Self::CUBES {
            let angle = TAU / Self::CUBES as f64 * i as f64;
            let orbit = DQuat::from_rotation_y(angle + spin)
                * DVec3::new(angle.sin() * 0.8, 0.5 + (i as f64 * 0.5).cos() * 0.3, angle.cos() * 0.8);
            let bob = (t * 3.0 + i as f64).sin() * 0.05;
            let centre = orbit + DVec3::new(0.0, float + bob, 0.0) + origin;
            let tumble = t * 2.0 + i as f64;
            let turn = DQuat::from_rotation_y(tumble) * DQuat::from_rotation_x(tumble);
            let tint = if i % 2 == 0 { Tint::Magenta } else { Tint::Cyan };
            out.extend(box_edges(
                DVec3::new(0.1, 0.1, 0.1),
                move |p: DVec3| turn * p + centre,
                tint,
                0.7,
            ));
        }

        for i in 0..Self::STREAMS {
            let angle = TAU / Self::STREAMS as f64 * i as f64;
            let base = DVec3::new(angle.sin() * 0.3, 0.5, angle.cos() * 0.3) + origin;
            let scale = stream_scale(i, t);
            let half = 0.25 * scale;
            out.push(Segment {
                a: base + DVec3::new(0.0, -half, 0.0),
                b: base + DVec3::new(0.0, half, 0.0),
                tint: Tint::Cyan,
                alpha: 0.3 + 0.4 * (scale - 0.5),
            });
        }
    }

    fn floor(&self, out: &mut Vec<Segment>) {
        const HALF: f64 = 50.0;
        const STEP: f64 = 5.0;
        let lines = (2.0 * HALF / STEP) as usize;
        for i in 0..=lines {
            let offset = -HALF + i as f64 * STEP;
            out.push(Segment {
                a: DVec3::new(offset, Self::FLOOR_Y, -HALF),
                b: DVec3::new(offset, Self::FLOOR_Y, HALF),
                tint: Tint::Grid,
                alpha: 0.25,
            });
            out.push(Segment {
                a: DVec3::new(-HALF, Self::FLOOR_Y, offset),
                b: DVec3::new(HALF, Self::FLOOR_Y, offset),
                tint: Tint::Grid,
                alpha: 0.25,
            });
        }
    }

    /// Pose the scene at `t` seconds and project it onto a `width`×`height`
    /// canvas.
    pub fn frame(&self, t: f64, width: f64, height: f64) -> Frame {
        let camera = self.camera.at_time(t);
        let lens = camera.lens(width, height);
        let mut segments = Vec::new();
        let mut glows = Vec::new();
        self.floor(&mut segments);
        self.robot(t, &mut segments, &mut glows);
        self.workstation(t, &mut segments);

        let mut frame = Frame::default();
        for (i, star) in self.stars.iter().enumerate() {
            if let Some((at, _)) = lens.project(*star) {
                let twinkle = 0.55 + 0.45 * (t * 1.5 + i as f64).sin();
                frame.points.push(Point2 { at, radius: 0.8, tint: Tint::Star, alpha: twinkle });
            }
        }
        for glow in glows {
            if let Some((at, depth)) = lens.project(glow.at) {
                let radius = glow.radius * camera.distance / depth;
                frame.points.push(Point2 { at, radius, tint: glow.tint, alpha: glow.alpha });
            }
        }
        for segment in segments {
            if let Some((from, to)) = lens.project_segment(segment.a, segment.b) {
                frame.lines.push(Line2 { from, to, tint: segment.tint, alpha: segment.alpha });
            }
        }
        frame
    }
}

/// Points scattered over a spherical shell between `radius` and
/// `radius + depth`.
fn star_shell<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f64, depth: f64) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let r = radius + depth * rng.gen::<f64>();
            let polar = (1.0 - 2.0 * rng.gen::<f64>()).acos();
            let azimuth = TAU * rng.gen::<f64>();
            DVec3::new(
                r * polar.sin() * azimuth.cos(),
                r * polar.cos(),
                r * polar.sin() * azimuth.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_origin_projects_to_centre() {
        let camera = Camera::new(15.0, 60.0);
        let ((x, y), depth) = camera.lens(800.0, 600.0).project(DVec3::new(0.0, 0.0, 0.0)).unwrap();
        assert!(close(x, 400.0) && close(y, 300.0));
        assert!(close(depth, 15.0));
    }

    #[test]
    fn test_fov_edge_maps_to_canvas_edge() {
        let camera = Camera::new(15.0, 60.0);
        // At 15 units a 60° vertical fov spans ±15·tan(30°).
        let edge = 15.0 * (30.0f64).to_radians().tan();
        let ((_, y), _) = camera.lens(800.0, 600.0).project(DVec3::new(0.0, edge, 0.0)).unwrap();
        assert!(close(y, 0.0));
    }

    #[test]
    fn test_wide_canvas_keeps_square_pixels() {
        // Horizontal scale follows the vertical fov, not the canvas width.
        let lens = Camera::new(15.0, 60.0).lens(1600.0, 600.0);
        let ((x, _), _) = lens.project(DVec3::new(1.0, 0.0, 0.0)).unwrap();
        let ((_, y), _) = lens.project(DVec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(close(x - 800.0, 300.0 - y));
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = Camera::new(15.0, 60.0);
        assert!(camera.lens(800.0, 600.0).project(DVec3::new(0.0, 0.0, 15.0)).is_none());
        assert!(camera.lens(800.0, 600.0).project(DVec3::new(0.0, 0.0, 20.0)).is_none());
    }

    #[test]
    fn test_segment_crossing_near_plane_is_clipped() {
        let camera = Camera::new(15.0, 60.0);
        let a = DVec3::new(1.0, -3.0, 0.0);
        let b = DVec3::new(1.0, -3.0, 40.0);
        let (from, to) = camera.lens(800.0, 600.0).project_segment(a, b).unwrap();
        assert!(from.0.is_finite() && to.0.is_finite() && to.1.is_finite());
        // The clipped end sits far below the horizon.
        assert!(to.1 > from.1);
        assert!(camera
            .lens(800.0, 600.0)
            .project_segment(DVec3::new(0.0, 0.0, 16.0), DVec3::new(0.0, 0.0, 30.0))
            .is_none());
    }

    #[test]
    fn test_camera_orbits_over_time() {
        let camera = Camera::new(15.0, 60.0);
        assert_eq!(camera.at_time(0.0).yaw, 0.0);
        assert!(close(camera.at_time(30.0).yaw, PI / 2.0));
        assert!(camera.at_time(30.0).eye().abs_diff_eq(DVec3::new(15.0, 0.0, 0.0), 1e-9));
        // A point on the +x axis swings round to the centre of the view.
        let ((x, _), _) = camera.at_time(30.0).lens(800.0, 600.0).project(DVec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(close(x, 400.0));
    }

    #[test]
    fn test_robot_pose_and_streams() {
        let (sway, bob) = robot_pose(0.0);
        assert_eq!(sway, 0.0);
        assert!(close(bob, 0.1));
        for t in [0.0, 0.7, 3.3, 12.0] {
            let (sway, bob) = robot_pose(t);
            assert!(sway.abs() <= 0.2 && (0.0..=0.2).contains(&bob));
            for i in 0..Scene::STREAMS {
                assert!((0.5..=1.5).contains(&stream_scale(i, t)));
            }
        }
        assert!(close(stream_scale(0, 0.0), 0.5));
        assert!(close(stream_scale(0, 1.0), 1.5));
    }

    #[test]
    fn test_stars_fill_the_shell() {
        let mut rng = StdRng::seed_from_u64(3);
        let scene = Scene::hero(&mut rng, 500);
        assert_eq!(scene.stars().len(), 500);
        for star in scene.stars() {
            let r = star.length();
            assert!((100.0 - 1e-9..=150.0 + 1e-9).contains(&r));
        }
    }

    #[test]
    fn test_frame_is_finite() {
        let mut rng = StdRng::seed_from_u64(9);
        let scene = Scene::hero(&mut rng, 200);
        let frame = scene.frame(4.2, 1280.0, 720.0);
        assert!(!frame.lines.is_empty());
        assert!(!frame.points.is_empty());
        for line in &frame.lines {
            assert!(line.from.0.is_finite() && line.from.1.is_finite());
            assert!(line.to.0.is_finite() && line.to.1.is_finite());
        }
        for point in &frame.points {
            assert!(point.radius > 0.0 && point.at.0.is_finite());
        }
    }

    #[test]
    fn test_tint_css() {
        assert_eq!(Tint::Cyan.css(0.5), "rgba(0, 255, 255, 0.500)");
        assert_eq!(Tint::Magenta.css(2.0), "rgba(255, 0, 255, 1.000)");
    }
}
