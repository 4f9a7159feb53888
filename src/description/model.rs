//! `serde`-derived mirror of the scene JSON document, named and shaped after
//! `RayTracerScene`/`Shape`/`Material`/`Pattern`/`Transform` in the distilled-from Go source's
//! `schema` package, with field names adapted to idiomatic Rust (`field_of_view`, `left_child`,
//! `right_child`) via `#[serde(rename = "...")]` where the JSON key differs.

use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Description {
    pub camera: CameraModel,
    pub lights: Vec<LightModel>,
    #[serde(default)]
    pub shapes: Vec<ShapeModel>,
    #[serde(default)]
    pub files: Vec<FileModel>,
    #[serde(default)]
    pub groups: Vec<GroupModel>,
    #[serde(default)]
    pub csgs: Vec<CsgModel>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct CameraModel {
    #[serde(rename = "field-of-view")]
    pub field_of_view: f64,
    pub from: [f64; 3],
    pub to: [f64; 3],
    pub up: [f64; 3],
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LightModel {
    pub at: [f64; 3],
    pub intensity: [f64; 3],
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ShapeModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub shape_type: String,
    pub material: Option<MaterialModel>,
    pub transform: Option<Vec<TransformModel>>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub closed: Option<bool>,
    pub inherits: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct FileModel {
    pub name: Option<String>,
    pub file: String,
    pub material: Option<MaterialModel>,
    pub transform: Option<Vec<TransformModel>>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct GroupModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    pub material: Option<MaterialModel>,
    pub transform: Option<Vec<TransformModel>>,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CsgModel {
    pub name: Option<String>,
    #[serde(rename = "leftChild")]
    pub left_child: String,
    #[serde(rename = "rightChild")]
    pub right_child: String,
    pub operation: String,
    pub material: Option<MaterialModel>,
    pub transform: Option<Vec<TransformModel>>,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct MaterialModel {
    pub ambient: Option<f64>,
    pub color: Option<[f64; 3]>,
    pub diffuse: Option<f64>,
    pub pattern: Option<PatternModel>,
    pub reflective: Option<f64>,
    #[serde(rename = "refractiveIndex")]
    pub refractive_index: Option<f64>,
    pub shadow: Option<bool>,
    pub shininess: Option<f64>,
    pub specular: Option<f64>,
    pub transparency: Option<f64>,
}

impl MaterialModel {
    /// fills in any field left unset here from `base`, the way a shape's own material extends
    /// the material it `inherits` from.
    pub fn extend(&self, base: &MaterialModel) -> MaterialModel {
        MaterialModel {
            ambient: self.ambient.or(base.ambient),
            color: self.color.or(base.color),
            diffuse: self.diffuse.or(base.diffuse),
            pattern: self.pattern.clone().or_else(|| base.pattern.clone()),
            reflective: self.reflective.or(base.reflective),
            refractive_index: self.refractive_index.or(base.refractive_index),
            shadow: self.shadow.or(base.shadow),
            shininess: self.shininess.or(base.shininess),
            specular: self.specular.or(base.specular),
            transparency: self.transparency.or(base.transparency),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PatternModel {
    pub color1: [f64; 3],
    pub color2: [f64; 3],
    pub transform: Option<Vec<TransformModel>>,
    #[serde(rename = "type")]
    pub pattern_type: String,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TransformModel {
    #[serde(rename = "type")]
    pub transform_type: String,
    pub values: Vec<f64>,
}
