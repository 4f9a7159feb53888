#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod core;

pub mod scene;

pub mod camera;
pub use camera::Camera;

pub mod renderer;

pub mod ppm;

pub mod obj;

pub mod description;

pub mod error;
