// render_model: read-only simulation snapshot for a host renderer

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderModel {
	// ordered mass positions
	pub masses: Vec<[f32; 3]>,
	// two consecutive endpoint points per spring, line-list layout
	pub springs: Vec<[f32; 3]>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateInfo {
	// sim time over wall time for the last update
	pub load: f32,
	pub mass_len: usize,
	pub spring_len: usize,
}
