use crate::render_model::{RenderModel, UpdateInfo};

#[derive(Debug)]
pub enum UserEvent {
	Update(RenderModel, UpdateInfo),
}
