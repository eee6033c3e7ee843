use crate::V3;

// bounded horizontal resting plane, clamps vertical velocity only
#[derive(Clone, Copy)]
pub struct Plane {
	pub height: f32,
	pub half_extent: f32,
	pub epsilon: f32,
}

impl Default for Plane {
	fn default() -> Self {
		Self {
			height: 1f32,
			half_extent: 2f32,
			epsilon: 0.05,
		}
	}
}

impl Plane {
	pub fn with_height(mut self, height: f32) -> Self {
		self.height = height;
		self
	}

	// discrete band test per sub-step, a fast mass can tunnel through
	pub fn clamp(&self, pos: &V3, velocity: &mut V3) -> bool {
		if (pos[1] - self.height).abs() < self.epsilon
			&& pos[0].abs() <= self.half_extent + self.epsilon
			&& pos[2].abs() <= self.half_extent + self.epsilon
		{
			velocity[1] = 0f32;
			return true;
		}
		false
	}
}
