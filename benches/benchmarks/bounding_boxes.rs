use criterion::{black_box, criterion_group, Criterion};
use ray_tracer::camera::Camera;
use ray_tracer::core::*;
use ray_tracer::renderer::render;
use ray_tracer::scene::{Light, Material, MaterialKind, Object, World};
use std::f64::consts::PI;
use std::num::NonZeroU16;

criterion_group! {
    benches,
    single_ray_many_reflective_refractive_objects,
    many_objects_full_scene
}

fn sphere_cube(side: u32, spacing: f64, material: impl Fn(Colour) -> Material) -> (Object, f64) {
    let mut spheres = Vec::with_capacity((side as usize).pow(3));

    for x in 0..side {
        for y in 0..side {
            for z in 0..side {
                let (x, y, z) = (x as f64, y as f64, z as f64);
                let side = side as f64;

                let colour = Colour::new(x / side, y / side, z / side);
                let sphere = Object::sphere()
                    .transformed(Transform::identity().translate_z(z * spacing).translate_y(y * spacing).translate_x(x * spacing))
                    .with_material(material(colour));

                spheres.push(sphere);
            }
        }
    }

    let approx_centre = side as f64 * spacing / 2.0;
    (Object::group(spheres), approx_centre)
}

fn two_point_lights(approx_centre: f64) -> Vec<Light> {
    let intensity = Colour::new(0.95, 0.95, 0.95);
    vec![
        Light::point(intensity, Point3D::new(approx_centre * 2.8, approx_centre * 3.7, approx_centre * 3.7)),
        Light::point(intensity, Point3D::new(approx_centre * -2.8, approx_centre * 3.7, approx_centre * -3.7)),
    ]
}

fn many_objects_full_scene(c: &mut Criterion) {
    c.bench_function("render scene with lots of objects", |b| {
        let mut world = World::empty();

        let spacing = 2.7;
        let (group, approx_centre) = sphere_cube(10, spacing, |colour| Material {
            kind: MaterialKind::Solid(colour),
            ..Default::default()
        });
        world.add(group);
        world.lights = two_point_lights(approx_centre);

        let camera = Camera::new(
            NonZeroU16::new(200).unwrap(),
            NonZeroU16::new(200).unwrap(),
            PI / 3.0,
            Transform::view_transform(
                Point3D::new(-approx_centre * 2.2, approx_centre * 2.4, approx_centre * -3.2),
                Point3D::new(approx_centre, approx_centre - spacing, approx_centre),
                Normal3D::POSITIVE_Y,
            ),
        );

        b.iter(|| {
            black_box(render(&world, &camera, false));
        })
    });
}

fn single_ray_many_reflective_refractive_objects(c: &mut Criterion) {
    c.bench_function("cast single ray into scene with lots of reflective, transparent, and refractive objects", |b| {
        let mut world = World::empty();

        let spacing = 2.7;
        let (group, approx_centre) = sphere_cube(30, spacing, |colour| Material {
            kind: MaterialKind::Solid(colour),
            reflective: 0.5,
            transparency: 0.5,
            refractive: 1.2,
            ..Default::default()
        });
        world.add(group);
        world.lights = two_point_lights(approx_centre);

        let camera = Camera::new(
            NonZeroU16::new(800).unwrap(),
            NonZeroU16::new(800).unwrap(),
            PI / 3.0,
            Transform::view_transform(
                Point3D::new(-approx_centre * 2.2, approx_centre * 2.4, approx_centre * -3.2),
                Point3D::new(approx_centre, approx_centre - spacing, approx_centre),
                Normal3D::POSITIVE_Y,
            ),
        );

        b.iter(|| {
            black_box(world.colour_at(camera.ray_for_pixel(400, 400)));
        })
    });
}
