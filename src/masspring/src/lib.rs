pub mod controller_message;
pub mod mass;
pub mod plane;
pub mod scene;
pub mod spring;
pub mod topology;
pub mod world;

pub type V3 = nalgebra::Vector3<f32>;

pub const GRAVITY: f32 = 9.81;
