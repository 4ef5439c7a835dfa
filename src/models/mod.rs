pub mod light;
pub mod light_update;
pub mod user_info;
