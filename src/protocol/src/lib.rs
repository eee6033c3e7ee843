pub mod render_model;
pub mod user_event;
