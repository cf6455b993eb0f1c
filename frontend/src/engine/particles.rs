use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;
pub const CIRCUIT_COUNT: usize = 20;

/// A dot drifting up through the hero background.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub rise: f64,
    pub peak_scale: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            rise: -rng.gen_range(0.0..1000.0),
            peak_scale: rng.gen_range(0.5..2.5),
            duration: rng.gen_range(10.0..20.0),
            delay: rng.gen_range(0.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --rise: {:.0}px; --peak: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left, self.top, self.rise, self.peak_scale, self.duration, self.delay
        )
    }
}

/// A faint ring wandering around the hero and turning once per cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration: f64,
}

impl Circuit {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(50.0..150.0),
            drift_x: rng.gen_range(-50.0..50.0),
            drift_y: rng.gen_range(-50.0..50.0),
            duration: rng.gen_range(10.0..20.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; --dx: {:.0}px; --dy: {:.0}px; animation-duration: {:.2}s;",
            self.left, self.top, self.size, self.size, self.drift_x, self.drift_y, self.duration
        )
    }
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub circuits: Vec<Circuit>,
}

impl ParticleField {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            particles: (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect(),
            circuits: (0..CIRCUIT_COUNT).map(|_| Circuit::random(rng)).collect(),
        }
    }
}
