//! Builds a `World`/`Camera` pair from a parsed [`Description`], resolving named references
//! between shapes, groups, csgs and OBJ files. A reference may name any previously defined
//! entity (shape, group, csg or file), not only a primitive shape, and each reference produces
//! its own fresh `Object` subtree rather than a shared one - satisfying the deep-copy
//! requirement without needing `Object` itself to be cloneable.

use crate::camera::Camera;
use crate::core::{Colour, Point3D, Transform, Vector3D, VectorMaths};
use crate::description::model::*;
use crate::error::DescriptionError;
use crate::obj;
use crate::scene::{Light, Material, MaterialKind, Object, Pattern, World};
use anyhow::{anyhow, bail, Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::num::NonZeroU16;
use std::path::Path;

pub fn build(description: &Description, resource_dir: &Path) -> Result<(World, Camera)> {
    let camera = build_camera(&description.camera)?;

    let ctx = Ctx {
        shapes: description.shapes.iter().filter_map(|s| s.name.as_deref().map(|n| (n, s))).collect(),
        files: description.files.iter().filter_map(|f| f.name.as_deref().map(|n| (n, f))).collect(),
        groups: description.groups.iter().filter_map(|g| g.name.as_deref().map(|n| (n, g))).collect(),
        csgs: description.csgs.iter().filter_map(|c| c.name.as_deref().map(|n| (n, c))).collect(),
        resource_dir,
    };

    // every name referenced as a group child or csg left/right child is consumed, regardless of
    // how deeply nested the composite referencing it is or what order entities happen to be
    // declared in - computed up front so a later composite's reference can't retroactively
    // un-consume an entity already emitted as standalone by an earlier loop below.
    let mut consumed: HashSet<&str> = HashSet::new();
    for group in &description.groups {
        consumed.extend(group.children.iter().map(String::as_str));
    }
    for csg in &description.csgs {
        consumed.insert(csg.left_child.as_str());
        consumed.insert(csg.right_child.as_str());
    }

    let mut world = World::empty();
    world.lights = description.lights.iter().map(build_light).collect();

    for group in &description.groups {
        let object = ctx.build_group(group, &mut HashSet::new())?;
        let is_consumed = group.name.as_deref().map_or(false, |name| consumed.contains(name));
        if !is_consumed {
            world.add(object);
        }
    }

    for csg in &description.csgs {
        let object = ctx.build_csg(csg, &mut HashSet::new())?;
        let is_consumed = csg.name.as_deref().map_or(false, |name| consumed.contains(name));
        if !is_consumed {
            world.add(object);
        }
    }

    for shape in &description.shapes {
        let is_consumed = shape.name.as_deref().map_or(false, |name| consumed.contains(name));
        if !is_consumed {
            world.add(ctx.build_shape(shape, &mut HashSet::new())?);
        }
    }

    for file in &description.files {
        let is_consumed = file.name.as_deref().map_or(false, |name| consumed.contains(name));
        if !is_consumed {
            world.add(ctx.build_file(file)?);
        }
    }

    Ok((world, camera))
}

struct Ctx<'a> {
    shapes: HashMap<&'a str, &'a ShapeModel>,
    files: HashMap<&'a str, &'a FileModel>,
    groups: HashMap<&'a str, &'a GroupModel>,
    csgs: HashMap<&'a str, &'a CsgModel>,
    resource_dir: &'a Path,
}

impl<'a> Ctx<'a> {
    /// resolves a child/leftChild/rightChild reference. Which names are consumed (and therefore
    /// skipped when deciding what to add as a top-level object) is computed once up front in
    /// [`build`], not here - this only builds the referenced entity's `Object` subtree.
    fn build_named(&self, name: &str, visiting: &mut HashSet<String>) -> Result<Object> {
        if let Some(shape) = self.shapes.get(name) {
            self.build_shape(shape, visiting)
        } else if let Some(file) = self.files.get(name) {
            self.build_file(file)
        } else if let Some(group) = self.groups.get(name) {
            self.build_group(group, visiting)
        } else if let Some(csg) = self.csgs.get(name) {
            self.build_csg(csg, visiting)
        } else {
            Err(DescriptionError::UnknownReference(name.to_owned()).into())
        }
    }

    fn build_shape(&self, shape: &ShapeModel, visiting: &mut HashSet<String>) -> Result<Object> {
        let (material_model, transforms) = self.resolve_inherited(shape, visiting)?;
        let material = build_material(material_model.as_ref(), self.resource_dir)?;
        let transform = compose_transforms(&transforms)?;

        let object = match shape.shape_type.as_str() {
            "sphere" => Object::sphere(),
            "glassSphere" => Object::sphere().with_material(Material {
                transparency: 1.0,
                refractive: 1.5,
                ..Material::default()
            }),
            "plane" => Object::plane(),
            "cube" => Object::cube(),
            "cylinder" => {
                let mut builder = Object::cylinder();
                if let Some(min) = shape.minimum {
                    builder = builder.min_y(min);
                }
                if let Some(max) = shape.maximum {
                    builder = builder.max_y(max);
                }
                if shape.closed.unwrap_or(false) {
                    builder = builder.capped();
                }
                builder.build()
            }
            "cone" => {
                let mut builder = Object::cone();
                if let Some(min) = shape.minimum {
                    builder = builder.min_y(min);
                }
                if let Some(max) = shape.maximum {
                    builder = builder.max_y(max);
                }
                if shape.closed.unwrap_or(false) {
                    builder = builder.capped();
                }
                builder.build()
            }
            other => bail!("unknown shape type {:?} on shape {:?}", other, named(&shape.name)),
        };

        Ok(object.transformed(transform).with_material(material))
    }

    /// follows the `inherits` chain (if any), returning the shape's own material/transform
    /// merged over the inherited base, per "the inherited transform is prepended as the first
    /// element" - the base's transform list comes first, the shape's own entries follow.
    fn resolve_inherited(&self, shape: &ShapeModel, visiting: &mut HashSet<String>) -> Result<(Option<MaterialModel>, Vec<TransformModel>)> {
        let own_transforms = shape.transform.clone().unwrap_or_default();

        let base_name = match &shape.inherits {
            Some(base_name) => base_name,
            None => return Ok((shape.material.clone(), own_transforms)),
        };

        if !visiting.insert(format!("inherits:{}", named(&shape.name))) {
            bail!("cyclic `inherits` chain involving shape {:?}", named(&shape.name));
        }

        let base = self
            .shapes
            .get(base_name.as_str())
            .ok_or_else(|| DescriptionError::UnknownReference(base_name.clone()))
            .with_context(|| format!("shape {:?} inherits from an unknown shape", named(&shape.name)))?;

        let (base_material, base_transforms) = self.resolve_inherited(base, visiting)?;

        visiting.remove(&format!("inherits:{}", named(&shape.name)));

        let material = match (&shape.material, base_material) {
            (Some(own), Some(base)) => Some(own.extend(&base)),
            (Some(own), None) => Some(own.clone()),
            (None, base) => base,
        };

        let transforms = base_transforms.into_iter().chain(own_transforms.into_iter()).collect();

        Ok((material, transforms))
    }

    fn build_file(&self, file: &FileModel) -> Result<Object> {
        let path = self.resource_dir.join(&file.file);
        let contents = fs::read_to_string(&path).with_context(|| format!("reading OBJ file {:?}", path))?;
        let object = obj::parse_obj(&contents).with_context(|| format!("parsing OBJ file {:?}", path))?;

        let material = build_material(file.material.as_ref(), self.resource_dir)?;
        let transform = compose_transforms(file.transform.as_deref().unwrap_or(&[]))?;

        let object = object.transformed(transform);
        Ok(if file.material.is_some() { object.with_material(material) } else { object })
    }

    fn build_group(&self, group: &GroupModel, visiting: &mut HashSet<String>) -> Result<Object> {
        let children = group
            .children
            .iter()
            .map(|name| self.build_named(name, visiting))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("building group {:?}", named(&group.name)))?;

        let material = build_material(group.material.as_ref(), self.resource_dir)?;
        let transform = compose_transforms(group.transform.as_deref().unwrap_or(&[]))?;

        let object = Object::group(children).transformed(transform);
        Ok(if group.material.is_some() { object.with_material(material) } else { object })
    }

    fn build_csg(&self, csg: &CsgModel, visiting: &mut HashSet<String>) -> Result<Object> {
        let left = self
            .build_named(&csg.left_child, visiting)
            .with_context(|| format!("building csg's left child {:?}", csg.left_child))?;
        let right = self
            .build_named(&csg.right_child, visiting)
            .with_context(|| format!("building csg's right child {:?}", csg.right_child))?;

        let object = match csg.operation.as_str() {
            "union" => Object::csg_union(left, right),
            "intersection" => Object::csg_intersection(left, right),
            "difference" => Object::csg_difference(left, right),
            other => bail!("unknown csg operation {:?}", other),
        };

        let material = build_material(csg.material.as_ref(), self.resource_dir)?;
        let transform = compose_transforms(csg.transform.as_deref().unwrap_or(&[]))?;

        let object = object.transformed(transform);
        Ok(if csg.material.is_some() { object.with_material(material) } else { object })
    }
}

fn build_camera(camera: &CameraModel) -> Result<Camera> {
    let width = validate_dimension("width", camera.width)?;
    let height = validate_dimension("height", camera.height)?;

    let from = point(camera.from);
    let to = point(camera.to);
    let up = vector(camera.up);

    let transform = Transform::view_transform(from, to, up.normalised());
    let fov = camera.field_of_view.to_radians();

    Ok(Camera::new(width, height, fov, transform))
}

fn validate_dimension(name: &str, value: usize) -> Result<NonZeroU16> {
    if value > (u16::MAX as usize) {
        bail!("camera {} is too large: {}", name, value);
    }

    NonZeroU16::new(value as u16).ok_or_else(|| anyhow!("camera {} cannot be zero", name))
}

fn build_light(light: &LightModel) -> Light {
    Light::point(colour(light.intensity), point(light.at))
}

fn build_material(material: Option<&MaterialModel>, resource_dir: &Path) -> Result<Material> {
    let mut result = Material::default();

    let material = match material {
        Some(material) => material,
        None => return Ok(result),
    };

    if let Some(rgb) = material.color {
        result.kind = MaterialKind::Solid(colour(rgb));
    }
    if let Some(pattern) = &material.pattern {
        result.kind = MaterialKind::Pattern(build_pattern(pattern, resource_dir)?);
    }
    if let Some(ambient) = material.ambient {
        result.ambient = ambient;
    }
    if let Some(diffuse) = material.diffuse {
        result.diffuse = diffuse;
    }
    if let Some(specular) = material.specular {
        result.specular = specular;
    }
    if let Some(shininess) = material.shininess {
        result.shininess = shininess;
    }
    if let Some(reflective) = material.reflective {
        result.reflective = reflective;
    }
    // note: transparency must never fall back to writing `ambient` - a bug present in some
    // revisions of the source this schema was distilled from.
    if let Some(transparency) = material.transparency {
        result.transparency = transparency;
    }
    if let Some(refractive) = material.refractive_index {
        result.refractive = refractive;
    }
    if let Some(casts_shadow) = material.shadow {
        result.casts_shadow = casts_shadow;
    }

    Ok(result)
}

fn build_pattern(pattern: &PatternModel, _resource_dir: &Path) -> Result<Pattern> {
    let primary = colour(pattern.color1);
    let secondary = colour(pattern.color2);

    let built = match pattern.pattern_type.as_str() {
        "stripe" => Pattern::striped(primary, secondary),
        "checker" => Pattern::checkers(primary, secondary),
        "ring" => Pattern::ring(primary, secondary),
        "gradient" => Pattern::gradient(primary, secondary),
        other => bail!("unknown pattern type {:?}", other),
    };

    let transform = compose_transforms(pattern.transform.as_deref().unwrap_or(&[]))?;
    Ok(built.with_transform(transform))
}

fn compose_transforms(entries: &[TransformModel]) -> Result<Transform> {
    let transform = entries
        .iter()
        .map(transform_matrix)
        .try_fold(Transform::identity(), |acc, next| next.map(|next| next * acc))?;

    if !transform.is_invertible() {
        bail!("transform {:?} is degenerate and has no inverse", entries);
    }

    Ok(transform)
}

fn transform_matrix(entry: &TransformModel) -> Result<Transform> {
    let values = &entry.values;

    let component = |index: usize| -> Result<f64> { values.get(index).copied().ok_or_else(|| anyhow!("transform {:?} is missing component {}", entry.transform_type, index)) };

    match entry.transform_type.as_str() {
        "translate" => Ok(Transform::identity().translate_x(component(0)?).translate_y(component(1)?).translate_z(component(2)?)),
        "scale" => Ok(Transform::identity().scale_x(component(0)?).scale_y(component(1)?).scale_z(component(2)?)),
        "rotate" => {
            let (x, y, z) = (component(0)?, component(1)?, component(2)?);
            let mut transform = Transform::identity();
            if x != 0.0 {
                transform = transform.rotate_x(x.to_radians());
            }
            if y != 0.0 {
                transform = transform.rotate_y(y.to_radians());
            }
            if z != 0.0 {
                transform = transform.rotate_z(z.to_radians());
            }
            Ok(transform)
        }
        "shear" => Ok(Transform::identity().shear(component(0)?, component(1)?, component(2)?, component(3)?, component(4)?, component(5)?)),
        other => bail!("unknown transform type {:?}", other),
    }
}

fn point(values: [f64; 3]) -> Point3D {
    Point3D::new(values[0], values[1], values[2])
}

fn vector(values: [f64; 3]) -> Vector3D {
    Vector3D::new(values[0], values[1], values[2])
}

fn colour(values: [f64; 3]) -> Colour {
    Colour::new(values[0], values[1], values[2])
}

fn named(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<unnamed>")
}
