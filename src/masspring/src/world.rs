use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use crate::controller_message::ControllerMessage;
use crate::mass::Mass;
use crate::plane::Plane;
use crate::scene::Scene;
use crate::spring::Spring;
use crate::topology;
use crate::{GRAVITY, V3};
use protocol::render_model::{RenderModel, UpdateInfo};
use protocol::user_event::UserEvent;

pub struct World {
	pub dt: f32,
	pub spt: usize,
	pub damping: f32,
	gravity: f32,
	scene: Scene,
	dirty: bool,
	running: bool,
	plane: Plane,
	masses: Vec<Mass>,
	springs: Vec<Spring>,
}

impl Default for World {
	fn default() -> Self {
		Self {
			// 20 sub-steps per 60Hz tick
			dt: 1. / 1200.,
			spt: 20,
			damping: 1.,
			gravity: GRAVITY,
			scene: Scene::Single,
			dirty: true,
			running: true,
			plane: Scene::Single.plane(),
			masses: Vec::new(),
			springs: Vec::new(),
		}
	}
}

impl World {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_spt(mut self, spt: usize) -> Self {
		self.spt = spt;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_scene(mut self, scene: Scene) -> Self {
		self.set_scene(scene);
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.running = false;
		self
	}

	pub fn set_scene(&mut self, scene: Scene) {
		self.scene = scene;
		self.dirty = true;
	}

	pub fn scene(&self) -> Scene {
		self.scene
	}

	pub fn toggle_pause(&mut self) {
		self.running = !self.running;
	}

	pub fn running(&self) -> bool {
		self.running
	}

	// full rebuild, nothing survives a scene switch
	fn regenerate(&mut self) {
		self.masses.clear();
		self.springs.clear();
		topology::generate(self.scene, &mut self.masses, &mut self.springs);
		self.validate_springs();
		self.plane = self.scene.plane();
		self.dirty = false;
	}

	// endpoint indices are checked once here, never per step
	fn validate_springs(&mut self) {
		let n = self.masses.len();
		let before = self.springs.len();
		self.springs
			.retain(|s| s.m1 != s.m2 && s.m1 < n && s.m2 < n);
		if self.springs.len() != before {
			log::warn!(
				"dropped {} springs with bad endpoints",
				before - self.springs.len(),
			);
		}
	}

	// spring pass first, then gravity and damping on free masses
	fn accumulate_forces(&mut self) {
		for s in self.springs.iter() {
			let force = s.force(self.masses[s.m1].pos, self.masses[s.m2].pos);
			self.masses[s.m1].force += force;
			self.masses[s.m2].force -= force;
		}
		for m in self.masses.iter_mut() {
			if m.fixed {
				continue;
			}
			m.force[1] -= self.gravity * m.mass;
			m.force -= self.damping * m.velocity;
		}
	}

	fn advance(m: &mut Mass, plane: Plane, dt: f32) {
		if !m.fixed {
			let accel = m.force / m.mass;
			m.velocity += accel * dt;
			// clamp before the position commit of the same sub-step
			plane.clamp(&m.pos, &mut m.velocity);
			m.pos += m.velocity * dt;
		}
		m.force = V3::zeros();
	}

	#[cfg(not(debug_assertions))]
	fn integrate(&mut self, dt: f32) {
		use rayon::prelude::*;
		let plane = self.plane;
		self.masses
			.par_iter_mut()
			.for_each(|m| Self::advance(m, plane, dt));
	}

	#[cfg(debug_assertions)]
	fn integrate(&mut self, dt: f32) {
		let plane = self.plane;
		self.masses
			.iter_mut()
			.for_each(|m| Self::advance(m, plane, dt));
	}

	fn step(&mut self, dt: f32) {
		if dt == 0f32 {
			return;
		}
		self.accumulate_forces();
		self.integrate(dt);
	}

	pub fn tick(&mut self) {
		if self.dirty {
			self.regenerate();
		}
		if !self.running {
			return;
		}
		for _ in 0..self.spt {
			self.step(self.dt);
		}
	}

	// one tick regardless of the pause flag
	pub fn step_frame(&mut self) {
		if self.dirty {
			self.regenerate();
		}
		for _ in 0..self.spt {
			self.step(self.dt);
		}
	}

	pub fn render_model(&self) -> RenderModel {
		let masses = self
			.masses
			.iter()
			.map(|m| [m.pos[0], m.pos[1], m.pos[2]])
			.collect();
		let mut springs = Vec::with_capacity(self.springs.len() * 2);
		for s in self.springs.iter() {
			let p1 = self.masses[s.m1].pos;
			let p2 = self.masses[s.m2].pos;
			springs.push([p1[0], p1[1], p1[2]]);
			springs.push([p2[0], p2[1], p2[2]]);
		}
		RenderModel { masses, springs }
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let rtime: u64 = (self.dt * 1e6 * self.spt as f32) as u64;
		loop {
			let start_time = SystemTime::now();
			self.tick();
			let sim_time = SystemTime::now()
				.duration_since(start_time)
				.unwrap_or_default()
				.as_micros() as u64;
			let info = UpdateInfo {
				load: sim_time as f32 / rtime as f32,
				mass_len: self.masses.len(),
				spring_len: self.springs.len(),
			};
			if tx.send(UserEvent::Update(self.render_model(), info)).is_err()
			{
				return;
			}
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::TogglePause => self.toggle_pause(),
					ControllerMessage::FrameForward => {
						if !self.running {
							self.step_frame();
						}
					}
					ControllerMessage::SelectScene(scene) => {
						self.set_scene(scene)
					}
				}
			}
			if sim_time < rtime {
				std::thread::sleep(Duration::from_micros(rtime - sim_time));
			}
		}
	}
}
