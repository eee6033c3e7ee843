use crate::V3;

#[derive(Clone)]
pub struct Mass {
	pub pos: V3,
	pub velocity: V3,
	pub force: V3,
	pub mass: f32,
	pub fixed: bool,
}

impl Mass {
	pub fn new(pos: V3) -> Self {
		Self {
			pos,
			velocity: V3::zeros(),
			force: V3::zeros(),
			mass: 1f32,
			fixed: false,
		}
	}

	// non-positive or non-finite values fall back to the 1.0 default,
	// acceleration divides by this
	pub fn with_mass(mut self, mass: f32) -> Self {
		if mass > 0f32 && mass.is_finite() {
			self.mass = mass;
		} else {
			log::warn!("bad mass {}, keeping {}", mass, self.mass);
		}
		self
	}

	pub fn with_fixed(mut self) -> Self {
		self.fixed = true;
		self
	}
}
