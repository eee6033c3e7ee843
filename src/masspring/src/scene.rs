use crate::plane::Plane;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Scene {
	Single,
	Chain(usize),
	CubeLattice(usize),
	ClothHang(usize),
	ClothTable(usize),
}

impl Scene {
	// hanging scenes keep the plane below them, resting scenes sit on it
	pub fn plane(&self) -> Plane {
		match self {
			Scene::Single | Scene::Chain(_) | Scene::ClothHang(_) => {
				Plane::default().with_height(-1f32)
			}
			Scene::CubeLattice(_) | Scene::ClothTable(_) => {
				Plane::default().with_height(1f32)
			}
		}
	}
}
