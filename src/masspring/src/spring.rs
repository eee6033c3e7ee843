use crate::mass::Mass;
use crate::V3;

// below this separation the direction is undefined, force degrades to zero
const MIN_LEN: f32 = 1e-6;

#[derive(Clone)]
pub struct Spring {
	pub m1: usize,
	pub m2: usize,
	pub rest_length: f32,
	pub constant: f32,
}

impl Spring {
	pub fn new(m1: usize, m2: usize, rest_length: f32) -> Self {
		Self {
			m1,
			m2,
			rest_length: rest_length.max(0f32),
			constant: 50f32,
		}
	}

	// rest length measured from the endpoints' current separation,
	// the spring starts relaxed
	pub fn between(masses: &[Mass], m1: usize, m2: usize) -> Self {
		let l0 = (masses[m1].pos - masses[m2].pos).magnitude();
		Self::new(m1, m2, l0)
	}

	pub fn with_constant(mut self, constant: f32) -> Self {
		self.constant = constant;
		self
	}

	// force on m1; m2 receives the exact negation
	pub fn force(&self, p1: V3, p2: V3) -> V3 {
		let dp = p1 - p2;
		let length = dp.magnitude();
		if length < MIN_LEN {
			return V3::zeros();
		}
		let magnitude = -self.constant * (length - self.rest_length);
		magnitude * (dp / length)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_restoring_sign() {
		let s = Spring::new(0, 1, 1f32).with_constant(10f32);
		// stretched, pulls m1 toward m2
		let f = s.force(V3::new(2., 0., 0.), V3::zeros());
		assert!((f[0] + 10f32).abs() < 1e-5);
		assert_eq!(f[1], 0f32);
		// compressed, pushes m1 away
		let f = s.force(V3::new(0.5, 0., 0.), V3::zeros());
		assert!((f[0] - 5f32).abs() < 1e-5);
	}

	#[test]
	fn test_coincident_endpoints_no_nan() {
		let s = Spring::new(0, 1, 1f32).with_constant(10f32);
		let p = V3::new(1., 2., 3.);
		let f = s.force(p, p + V3::new(0., MIN_LEN * 0.5, 0.));
		assert_eq!(f, V3::zeros());
	}

	#[test]
	fn test_relaxed_at_rest_length() {
		let s = Spring::new(0, 1, 2f32).with_constant(100f32);
		let f = s.force(V3::new(2., 0., 0.), V3::zeros());
		assert!(f.magnitude() < 1e-5);
	}
}
