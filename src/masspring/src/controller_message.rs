use crate::scene::Scene;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	SelectScene(Scene),
}
