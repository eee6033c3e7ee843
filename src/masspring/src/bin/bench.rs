use std::time::SystemTime;

use masspring::scene::Scene;
use masspring::world::World;

fn main() {
	let start = SystemTime::now();
	let mut world = World::default().with_scene(Scene::CubeLattice(8));
	let rframes = 100;
	for _ in 0..rframes {
		world.tick();
	}
	let time = rframes as f32 * world.dt * world.spt as f32;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
