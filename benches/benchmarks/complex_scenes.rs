use criterion::{criterion_group, BenchmarkId, Criterion};
use ray_tracer::camera::Camera;
use ray_tracer::core::*;
use ray_tracer::renderer;
use ray_tracer::scene::{Light, Material, MaterialKind, Object, Pattern, World};
use std::f64::consts::PI;
use std::num::NonZeroU16;

criterion_group! {
    benches,
    reflect_refract,
}

const RESOLUTIONS: [(u16, u16); 3] = [(200, 200), (400, 400), (600, 600)];

fn reflect_refract_world() -> World {
    let mut world = World::empty();
    world.lights.push(Light::point(Colour::WHITE, Point3D::new(-4.9, 4.9, -1.0)));

    world.add(Object::plane().with_material(Material {
        kind: MaterialKind::Pattern(Pattern::checkers(Colour::new(0.35, 0.35, 0.35), Colour::new(0.65, 0.65, 0.65))),
        ambient: 0.8,
        diffuse: 0.2,
        specular: 0.0,
        reflective: 0.1,
        ..Default::default()
    }));

    world.add(
        Object::sphere()
            .with_material(Material {
                kind: MaterialKind::Solid(Colour::new(0.373, 0.404, 0.550)),
                ambient: 0.0,
                diffuse: 0.4,
                specular: 0.9,
                shininess: 300.0,
                reflective: 0.9,
                transparency: 0.9,
                refractive: 1.5,
                ..Default::default()
            })
            .transformed(Transform::identity().translate_y(1.0)),
    );

    world.add(
        Object::sphere()
            .with_material(Material {
                kind: MaterialKind::Solid(Colour::new(0.5, 0.5, 0.0)),
                diffuse: 0.7,
                specular: 0.3,
                ..Default::default()
            })
            .transformed(Transform::identity().scale_all(0.5).translate_x(1.5).translate_y(0.5).translate_z(-0.5)),
    );

    world
}

fn reflect_refract(c: &mut Criterion) {
    let mut group = c.benchmark_group("render a scene with reflective and refractive spheres");
    group.sample_size(10);

    let world = reflect_refract_world();

    for (width, height) in RESOLUTIONS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", width, height)), &(*width, *height), |b, &(width, height)| {
            let camera = Camera::new(
                NonZeroU16::new(width).unwrap(),
                NonZeroU16::new(height).unwrap(),
                PI / 3.0,
                Transform::view_transform(Point3D::new(-2.6, 1.5, -3.9), Point3D::new(-0.6, 1.0, -0.8), Normal3D::POSITIVE_Y),
            );

            b.iter(|| {
                renderer::render(&world, &camera, false);
            })
        });
    }
}
