use criterion::{criterion_group, Criterion};
use ray_tracer::camera::Camera;
use ray_tracer::core::*;
use ray_tracer::obj;
use ray_tracer::renderer::render;
use ray_tracer::scene::{Light, World};
use std::f64::consts::FRAC_PI_3;
use std::num::NonZeroU16;

criterion_group! {
    benches,
    basic_triangle_meshes,
}

// a small triangular prism, flat-shaded and smooth-shaded variants of the same geometry.
fn flat_prism() -> &'static str {
    "v -1 -1 -1
v 1 -1 -1
v 0 1 -1
v -1 -1 1
v 1 -1 1
v 0 1 1

f 1 2 3
f 4 6 5
f 1 4 2
f 4 5 2
f 2 5 3
f 5 6 3
f 3 6 1
f 6 4 1"
}

fn smooth_prism() -> &'static str {
    "v -1 -1 -1
v 1 -1 -1
v 0 1 -1
v -1 -1 1
v 1 -1 1
v 0 1 1

vn 0 0 -1
vn 0 0 1
vn -0.8 0.3 0
vn 0.8 0.3 0
vn 0 -1 0

f 1//1 2//1 3//1
f 4//2 6//2 5//2
f 1//5 4//5 2//5
f 4//5 5//5 2//5
f 2//4 5//4 3//4
f 5//4 6//4 3//4
f 3//3 6//3 1//3
f 6//3 4//3 1//3"
}

fn basic_triangle_meshes(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic meshes (800x600)");

    for (name, obj_data) in [("prism flat", flat_prism()), ("prism smooth", smooth_prism())] {
        let prism = obj::parse_obj(obj_data).unwrap();

        group.bench_with_input(name, &prism, |b, _| {
            let mut world = World::empty();
            world.add(obj::parse_obj(obj_data).unwrap());
            world.lights.push(Light::point(Colour::WHITE, Point3D::new(10.0, 10.0, 0.0)));

            let camera = Camera::new(
                NonZeroU16::new(800).unwrap(),
                NonZeroU16::new(600).unwrap(),
                FRAC_PI_3,
                Transform::view_transform(Point3D::new(0.0, 0.0, 5.0), Point3D::ORIGIN, Normal3D::POSITIVE_Y),
            );

            b.iter(|| render(&world, &camera, false))
        });
    }
}
