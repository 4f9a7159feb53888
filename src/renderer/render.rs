use super::*;
use crate::scene::World;

/// # Parameters
/// `show_progress`: set to `true` when using e.g. `cargo run` for real-time progress updates;
///                  set to `false` when running benchmarks, otherwise it'll cripple performance due to stdout locking
pub fn render(world: &World, camera: &Camera, show_progress: bool) -> Canvas {
    let mut canvas = Canvas::new(camera.width(), camera.height()).expect("Camera dimensions are too large");

    canvas.draw(show_progress, |x, y| world.colour_at(camera.ray_for_pixel(x, y)));

    canvas
}
