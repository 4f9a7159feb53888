use criterion::{criterion_group, BenchmarkId, Criterion};
use ray_tracer::camera::Camera;
use ray_tracer::core::*;
use ray_tracer::renderer;
use ray_tracer::scene::{Light, Material, MaterialKind, Object, Pattern, World};
use std::f64::consts::PI;
use std::num::NonZeroU16;

criterion_group! {
    benches,
    empty_scene_full_render,
    single_sphere_single_ray,
    single_object_full_render,
}

fn single_sphere_single_ray(c: &mut Criterion) {
    let mut world = single_light_world();
    world.add(Object::sphere());

    c.bench_function("cast single ray at single sphere", |b| {
        b.iter(|| world.colour_at(Ray::new(Point3D::new(0.0, 0.0, -10.0), Normal3D::POSITIVE_Z)))
    });
}

// test loop overhead
fn empty_scene_full_render(c: &mut Criterion) {
    c.bench_function("render empty scene at 1920x1080", |b| {
        let world = World::empty();
        let camera = full_hd_camera();

        b.iter(|| {
            renderer::render(&world, &camera, false);
        })
    });
}

// compare primitives/actually render stuff
fn single_object_full_render(c: &mut Criterion) {
    fn checkers() -> Material {
        Material {
            kind: MaterialKind::Pattern(Pattern::checkers(Colour::BLACK, Colour::WHITE)),
            ..Default::default()
        }
    }

    let shapes: Vec<(&str, Box<dyn Fn() -> Object>)> = vec![
        ("sphere", Box::new(Object::sphere)),
        ("sphere (pattern)", Box::new(|| Object::sphere().with_material(checkers()))),
        ("plane", Box::new(Object::plane)),
        ("plane (pattern)", Box::new(|| Object::plane().with_material(checkers()))),
        ("cube", Box::new(Object::cube)),
        ("cube (pattern)", Box::new(|| Object::cube().with_material(checkers()))),
        ("cylinder", Box::new(|| Object::cylinder().build())),
        ("cone", Box::new(|| Object::cone().build())),
        (
            "triangle",
            Box::new(|| Object::triangle(Point3D::ORIGIN, Point3D::new(0.0, 1.0, 0.0), Point3D::new(1.0, 0.0, 0.0))),
        ),
    ];

    let mut group = c.benchmark_group("render scene with single object (1920x1080)");
    group.sample_size(50);

    for (name, shape) in shapes.into_iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &shape, |b, shape| {
            let mut world = single_light_world();
            world.add(shape());
            let camera = full_hd_camera();

            b.iter(|| {
                renderer::render(&world, &camera, false);
            })
        });
    }
}

fn full_hd_camera() -> Camera {
    Camera::new(
        NonZeroU16::new(1920).unwrap(),
        NonZeroU16::new(1080).unwrap(),
        PI / 3.0,
        Transform::view_transform(Point3D::new(0.0, 1.0, -5.0), Point3D::ORIGIN, Normal3D::POSITIVE_Y),
    )
}

#[inline(always)]
fn single_light_world() -> World {
    let mut world = World::empty();
    world.lights.push(Light::point(Colour::WHITE, Point3D::new(-10.0, 10.0, -10.0)));

    world
}
