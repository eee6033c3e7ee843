use crate::mass::Mass;
use crate::scene::Scene;
use crate::spring::Spring;
use crate::V3;

const ANCHOR_HEIGHT: f32 = 4f32;
const SINGLE_CONSTANT: f32 = 50f32;
const SINGLE_REST: f32 = 2f32;
const CHAIN_STEP: f32 = 0.4;
const CHAIN_CONSTANT: f32 = 2000f32;
const LATTICE_SPACING: f32 = 0.4;
const LATTICE_CONSTANT: f32 = 1000f32;
const LATTICE_FLOOR: f32 = 2f32;
const CLOTH_SPACING: f32 = 0.25;
const CLOTH_CONSTANT: f32 = 500f32;
const CLOTH_HEIGHT: f32 = 3f32;
// floating point slack on the cell-diagonal neighbor threshold
const NEIGHBOR_SLACK: f32 = 1e-4;

// generators only append, indices are offset by the containers' prior length
pub fn generate(
	scene: Scene,
	masses: &mut Vec<Mass>,
	springs: &mut Vec<Spring>,
) {
	let (m0, s0) = (masses.len(), springs.len());
	match scene {
		Scene::Single => single(masses, springs),
		Scene::Chain(n) => chain(n, masses, springs),
		Scene::CubeLattice(layers) => cube_lattice(layers, masses, springs),
		Scene::ClothHang(layers) => cloth(layers, true, masses, springs),
		Scene::ClothTable(layers) => cloth(layers, false, masses, springs),
	}
	log::info!(
		"generate {:?}: {} masses, {} springs",
		scene,
		masses.len() - m0,
		springs.len() - s0,
	);
}

// fixed anchor above a free weight, rest length below the initial
// separation so the spring starts under tension
fn single(masses: &mut Vec<Mass>, springs: &mut Vec<Spring>) {
	let base = masses.len();
	masses.push(Mass::new(V3::new(0., ANCHOR_HEIGHT, 0.)).with_fixed());
	masses.push(Mass::new(V3::new(0., 1., 0.)));
	springs.push(
		Spring::new(base, base + 1, SINGLE_REST)
			.with_constant(SINGLE_CONSTANT),
	);
}

fn chain(n: usize, masses: &mut Vec<Mass>, springs: &mut Vec<Spring>) {
	if n == 0 {
		return;
	}
	let base = masses.len();
	masses.push(Mass::new(V3::new(0., ANCHOR_HEIGHT, 0.)).with_fixed());
	for i in 0..n {
		// each link hangs off the previous one, progressively heavier
		let prev = masses[base + i].pos;
		masses.push(
			Mass::new(prev + V3::new(0., -CHAIN_STEP, 0.))
				.with_mass(1. + i as f32),
		);
		springs.push(
			Spring::new(base + i, base + i + 1, CHAIN_STEP)
				.with_constant(CHAIN_CONSTANT),
		);
	}
}

fn cube_lattice(
	layers: usize,
	masses: &mut Vec<Mass>,
	springs: &mut Vec<Spring>,
) {
	if layers == 0 {
		return;
	}
	let base = masses.len();
	let half = (layers - 1) as f32 * 0.5 * LATTICE_SPACING;
	for ix in 0..layers {
		for iy in 0..layers {
			for iz in 0..layers {
				masses.push(Mass::new(V3::new(
					ix as f32 * LATTICE_SPACING - half,
					LATTICE_FLOOR + iy as f32 * LATTICE_SPACING,
					iz as f32 * LATTICE_SPACING - half,
				)));
			}
		}
	}
	connect_neighbors(masses, base, LATTICE_SPACING, LATTICE_CONSTANT, springs);
}

fn cloth(
	layers: usize,
	pinned: bool,
	masses: &mut Vec<Mass>,
	springs: &mut Vec<Spring>,
) {
	if layers == 0 {
		return;
	}
	let base = masses.len();
	let half = (layers - 1) as f32 * 0.5 * CLOTH_SPACING;
	let center = (layers / 2) as i32;
	let clip = (layers / 8).max(1) as i32;
	for ix in 0..layers {
		for iz in 0..layers {
			let mut m = Mass::new(V3::new(
				ix as f32 * CLOTH_SPACING - half,
				CLOTH_HEIGHT,
				iz as f32 * CLOTH_SPACING - half,
			));
			// a square clip pins the middle of the hanging cloth
			if pinned
				&& (ix as i32 - center).abs() <= clip
				&& (iz as i32 - center).abs() <= clip
			{
				m = m.with_fixed();
			}
			masses.push(m);
		}
	}
	connect_neighbors(masses, base, CLOTH_SPACING, CLOTH_CONSTANT, springs);
}

// O(n^2) pairwise pass, threshold is one cell diagonal; rest length is the
// pair's actual distance so the grid starts in equilibrium
fn connect_neighbors(
	masses: &[Mass],
	base: usize,
	spacing: f32,
	constant: f32,
	springs: &mut Vec<Spring>,
) {
	let threshold = spacing * 3f32.sqrt() + NEIGHBOR_SLACK;
	for i in base..masses.len() {
		for j in (i + 1)..masses.len() {
			let d = (masses[i].pos - masses[j].pos).magnitude();
			if d < threshold {
				springs.push(
					Spring::between(masses, i, j).with_constant(constant),
				);
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn gen(scene: Scene) -> (Vec<Mass>, Vec<Spring>) {
		let mut masses = vec![];
		let mut springs = vec![];
		generate(scene, &mut masses, &mut springs);
		(masses, springs)
	}

	#[test]
	fn test_single_under_tension() {
		let (masses, springs) = gen(Scene::Single);
		assert_eq!(masses.len(), 2);
		assert_eq!(springs.len(), 1);
		assert!(masses[0].fixed);
		assert!(!masses[1].fixed);
		let sep = (masses[0].pos - masses[1].pos).magnitude();
		assert!(sep > springs[0].rest_length);
	}

	#[test]
	fn test_chain_cardinality() {
		for n in [1, 4, 10] {
			let (masses, springs) = gen(Scene::Chain(n));
			assert_eq!(masses.len(), n + 1);
			assert_eq!(springs.len(), n);
		}
	}

	#[test]
	fn test_chain_heavier_down() {
		let (masses, _) = gen(Scene::Chain(5));
		for w in masses[1..].windows(2) {
			assert!(w[1].mass > w[0].mass);
			assert!(w[1].pos[1] < w[0].pos[1]);
		}
	}

	#[test]
	fn test_lattice_cardinality() {
		for layers in [1, 2, 5] {
			let (masses, _) = gen(Scene::CubeLattice(layers));
			assert_eq!(masses.len(), layers * layers * layers);
		}
	}

	#[test]
	fn test_lattice_fully_connected_cell() {
		// one cell: edges, face and body diagonals all inside threshold
		let (_, springs) = gen(Scene::CubeLattice(2));
		assert_eq!(springs.len(), 28);
	}

	#[test]
	fn test_lattice_starts_in_equilibrium() {
		let (masses, springs) = gen(Scene::CubeLattice(3));
		assert!(!springs.is_empty());
		for s in springs.iter() {
			let d = (masses[s.m1].pos - masses[s.m2].pos).magnitude();
			assert!((d - s.rest_length).abs() < 1e-5);
			// nothing beyond one cell diagonal gets connected
			assert!(s.rest_length < 2. * LATTICE_SPACING);
		}
		assert!(masses.iter().all(|m| !m.fixed));
	}

	#[test]
	fn test_cloth_cardinality() {
		for layers in [1, 3, 8] {
			let (masses, _) = gen(Scene::ClothHang(layers));
			assert_eq!(masses.len(), layers * layers);
			let (masses, _) = gen(Scene::ClothTable(layers));
			assert_eq!(masses.len(), layers * layers);
		}
	}

	#[test]
	fn test_cloth_pinning() {
		let (masses, _) = gen(Scene::ClothHang(9));
		let fixed = masses.iter().filter(|m| m.fixed).count();
		assert!(fixed > 0);
		assert!(fixed < masses.len());
		// only the centered clip is pinned
		for m in masses.iter().filter(|m| m.fixed) {
			assert!(m.pos[0].abs() < 4. * CLOTH_SPACING);
			assert!(m.pos[2].abs() < 4. * CLOTH_SPACING);
		}
		let (masses, _) = gen(Scene::ClothTable(9));
		assert!(masses.iter().all(|m| !m.fixed));
	}

	#[test]
	fn test_zero_parameters_empty() {
		for scene in [
			Scene::Chain(0),
			Scene::CubeLattice(0),
			Scene::ClothHang(0),
			Scene::ClothTable(0),
		] {
			let (masses, springs) = gen(scene);
			assert!(masses.is_empty());
			assert!(springs.is_empty());
		}
	}

	#[test]
	fn test_append_only_offsets() {
		let mut masses = vec![Mass::new(V3::new(9., 9., 9.))];
		let mut springs = vec![];
		generate(Scene::Chain(3), &mut masses, &mut springs);
		assert_eq!(masses.len(), 5);
		// prior content untouched, new indices offset past it
		assert_eq!(masses[0].pos, V3::new(9., 9., 9.));
		for s in springs.iter() {
			assert!(s.m1 >= 1 && s.m2 >= 1);
			assert!(s.m1 != s.m2);
			assert!(s.m1 < masses.len() && s.m2 < masses.len());
		}
	}
}
