use crate::core::{Colour, F64Ext, Normal3D, Point3D, Ray, Vector3D, VectorMaths};
use crate::scene::{Light, Object};
use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub struct Intersection<'with> {
    pub t: f64,
    pub with: &'with Object,
    /// barycentric (u, v) coordinates of the hit, recorded for shapes (smooth triangles) whose
    /// normal depends on where within the primitive the ray landed, rather than just the point.
    pub uv: Option<(f64, f64)>,
}

impl<'with> Intersection<'with> {
    pub fn new(t: f64, with: &'with Object) -> Intersection {
        Intersection { t, with, uv: None }
    }

    pub fn with_uv(t: f64, with: &'with Object, uv: (f64, f64)) -> Intersection {
        Intersection {
            t,
            with,
            uv: Some(uv),
        }
    }
}

pub struct HitData<'obj> {
    pub object: &'obj Object,
    pub eye: Normal3D,
    pub normal: Normal3D,
    pub reflect: Normal3D,
    pub point: Point3D,
    /// `point` nudged along the normal, used to keep secondary rays (shadow, reflection) from
    /// re-intersecting the surface they just left.
    pub over_point: Point3D,
    /// `point` nudged against the normal, used to originate refracted rays from just inside the
    /// surface rather than on it.
    pub under_point: Point3D,
    pub inside: bool,
    pub entered_refractive: f64,
    pub exited_refractive: f64,
}

impl<'obj> HitData<'obj> {
    pub fn from(ray: &Ray, intersection: Intersection<'obj>, intersections: Intersections<'obj>) -> Self {
        let point = ray.position(intersection.t);
        let eye = -ray.direction.normalised();
        let normal = intersection.with.normal_at(point, Some(&intersection));

        let inside = normal.dot(eye) < 0.0;

        let normal = if inside { -normal } else { normal };
        let reflect = ray.direction.normalised().reflect_through(normal);

        // f64 epsilon isn't sufficient to compensate for rounding errors introduced by the
        // transform/inverse-transform round trip in `Object::normal_at`
        let offset = normal * (f32::EPSILON as f64);
        let over_point = point + offset;
        let under_point = point - offset;

        // calculate refraction changes from entering one material and exiting another (including the empty space)
        let mut entered_refractive = 1.0;
        let mut exited_refractive = 1.0;
        let mut containers: Vec<&Object> = vec![];

        for i in intersections.0.iter() {
            if i.t == intersection.t && i.with.id() == intersection.with.id() {
                // intersection from entering object
                if let Some(&last) = containers.last() {
                    entered_refractive = last.material.refractive;
                }
            }

            if let Some(index) = containers
                .iter()
                .cloned()
                .enumerate()
                .find(|(_, obj)| obj.id() == i.with.id())
                .map(|(idx, _)| idx)
            {
                containers.remove(index); // exiting transparent object
            } else {
                containers.push(i.with); // entering transparent object
            }

            if i.t == intersection.t && i.with.id() == intersection.with.id() {
                // intersection from exiting object
                if let Some(&last) = containers.last() {
                    exited_refractive = last.material.refractive;
                    break;
                }
            }
        }

        HitData {
            object: intersection.with,
            eye,
            normal,
            reflect,
            point,
            over_point,
            under_point,
            inside,
            entered_refractive,
            exited_refractive,
        }
    }

    pub fn colour(&self, direct_light: Colour, light_source: &Light) -> Colour {
        self.object
            .colour_at(self.over_point, direct_light, self.eye, self.normal, light_source)
    }

    pub fn reflection(&self) -> ReflectionData {
        let ratio = self.entered_refractive / self.exited_refractive;
        let cos_i = self.eye.dot(self.normal);
        let sin2_t = ratio.powi(2) * (1.0 - cos_i.powi(2));

        ReflectionData { cos_i, ratio, sin2_t }
    }
}

pub struct ReflectionData {
    pub cos_i: f64,
    pub ratio: f64,
    pub sin2_t: f64,
}

impl ReflectionData {
    pub fn is_total(&self) -> bool {
        self.sin2_t > 1.0
    }

    /// note: reflection must not be total (sin2_t must not be > 1.0)
    pub fn refraction_vector(&self, normal: Normal3D, eye: Normal3D) -> Vector3D {
        debug_assert!(self.sin2_t <= 1.0);

        normal * (self.ratio * self.cos_i - self.cos_t()) - (eye * self.ratio)
    }

    /// Schlick approximation of Fresnel reflectance.
    pub fn reflectance(&self, entered_refractive: f64, exited_refractive: f64) -> f64 {
        if self.is_total() {
            return 1.0;
        }

        let cos = if entered_refractive > exited_refractive {
            self.cos_t()
        } else {
            self.cos_i
        };

        let r0 = ((entered_refractive - exited_refractive) / (entered_refractive + exited_refractive)).powi(2);

        r0 + (1.0 - r0) * (1.0 - cos).powi(5)
    }

    /// note: reflection must not be total (sin2_t must not be > 1.0)
    fn cos_t(&self) -> f64 {
        debug_assert!(self.sin2_t <= 1.0);

        (1.0 - self.sin2_t).sqrt()
    }
}

/// Invariants:
///  - always sorted by ascending `t` values
#[derive(Clone, Debug)]
pub struct Intersections<'scene>(pub(super) SmallVec<[Intersection<'scene>; 4]>);

impl<'scene> Intersections<'scene> {
    pub fn empty() -> Self {
        Intersections(SmallVec::new())
    }

    pub fn single(intersection: Intersection<'scene>) -> Self {
        let mut underlying = SmallVec::new();
        underlying.push(intersection);

        Intersections(underlying)
    }

    pub fn pair(first: Intersection<'scene>, second: Intersection<'scene>) -> Self {
        let mut underlying = SmallVec::new();
        underlying.push(first);
        underlying.push(second);

        Intersections(underlying)
    }

    #[cfg(test)]
    pub fn of(intersections: Vec<Intersection<'scene>>) -> Self {
        let mut this = Intersections(SmallVec::from_vec(intersections));
        this.sort();
        this
    }

    pub fn push(&mut self, intersection: Intersection<'scene>) {
        self.0.push(intersection);
        self.sort();
    }

    pub fn join(mut self, mut other: Intersections<'scene>) -> Self {
        self.0.append(&mut other.0);
        self.sort();

        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn hit(&self, last: Option<u32>) -> Option<Intersection<'scene>> {
        self.0
            .iter()
            .filter(|&intersect| Some(intersect.with.id()) != last || intersect.t.is_not_roughly_zero())
            .find(|&intersect| intersect.t >= 0.0)
            .cloned()
    }

    pub fn append(&mut self, mut other: Intersections<'scene>) {
        self.0.append(&mut other.0);
        self.sort();
    }

    pub fn get(&self, index: usize) -> Option<&Intersection<'scene>> {
        self.0.get(index)
    }

    pub fn into_iter(self) -> impl Iterator<Item = Intersection<'scene>> {
        self.0.into_iter()
    }

    fn sort(&mut self) {
        self.0
            .sort_unstable_by(|first, second| f64::partial_cmp(&first.t, &second.t).expect("a `t` value should never be NaN"))
    }
}
