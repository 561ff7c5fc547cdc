mod phong;
mod point_light;

pub use phong::Material;
pub use point_light::Light;
