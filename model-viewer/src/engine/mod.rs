pub mod camera;
pub mod core;
pub mod lifecycle;
pub mod loading;
pub mod scene;
pub mod systems;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
