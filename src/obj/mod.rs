//! Wavefront OBJ import, producing a single [`Object`] group from a `.obj` file's vertex,
//! normal and face data. Material (`.mtl`) references are ignored entirely; imported geometry
//! always starts out with `Material::default()` and is expected to be restyled by the scene
//! description that references it.

use crate::core::{Point3D, Vector3D, VectorMaths};
use crate::scene::Object;
use anyhow::{anyhow, bail, Context, Result};
use std::borrow::Borrow;
use std::str::SplitWhitespace;


/// Parses the text of a Wavefront `.obj` file into an [`Object`] group.
///
/// Each `g` statement starts a new child group; a file with a single (or no) `g` statement
/// collapses to one flat group rather than a group containing a single child group.
pub fn parse_obj(input: &str) -> Result<Object> {
    ObjData::parse(input)?.to_object()
}

fn parse_obj_data(input: &str) -> Result<ObjData> {
    let mut vertices = vec![];
    let mut normals = vec![];
    let mut polys = vec![];
    let mut groups = vec![];

    for (line_number, line) in input.lines().map(|line| line.trim()).enumerate() {
        let line_number = line_number + 1;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => vertices.push(parse_vertex(parts).with_context(|| format!("line {}", line_number))?),
            Some("vn") => normals.push(parse_normal(parts).with_context(|| format!("line {}", line_number))?),
            Some("f") => polys.push(parse_polygon(parts).with_context(|| format!("line {}", line_number))?),
            Some("g") => {
                if !polys.is_empty() {
                    groups.push(std::mem::take(&mut polys));
                }
            }
            _ => (),
        }
    }

    if !polys.is_empty() {
        groups.push(polys);
    }

    Ok(ObjData { vertices, normals, groups })
}

fn parse_vertex(mut line_parts: SplitWhitespace) -> Result<Point3D> {
    let mut next = || -> Result<f64> {
        let part = line_parts.next().ok_or_else(|| anyhow!("missing vertex component"))?;
        part.parse::<f64>().with_context(|| format!("unparseable vertex component {:?}", part))
    };

    Ok(Point3D::new(next()?, next()?, next()?))
}

fn parse_normal(mut line_parts: SplitWhitespace) -> Result<Vector3D> {
    let mut next = || -> Result<f64> {
        let part = line_parts.next().ok_or_else(|| anyhow!("missing normal component"))?;
        part.parse::<f64>().with_context(|| format!("unparseable normal component {:?}", part))
    };

    Ok(Vector3D::new(next()?, next()?, next()?))
}

fn parse_polygon(line_parts: SplitWhitespace) -> Result<Polygon> {
    fn parse_index(s: &str) -> Result<usize> {
        s.parse::<usize>().with_context(|| format!("unparseable face index {:?}", s))
    }

    line_parts
        .map(|part| {
            let mut parts = part.split('/');
            let vertex = parts.next().ok_or_else(|| anyhow!("invalid face element {:?}", part))?;
            let vertex = parse_index(vertex)?;

            let mut next = || parts.next().filter(|s| !s.is_empty()).map(parse_index).transpose();

            let texture_vertex = next()?;
            let normal = next()?;

            Ok(PolygonData { vertex, texture_vertex, normal })
        })
        .collect()
}

type Polygon = Vec<PolygonData>;
type Group = Vec<Polygon>;

#[derive(Debug, Eq, PartialEq)]
struct PolygonData {
    vertex: usize,
    #[allow(unused)]
    texture_vertex: Option<usize>,
    normal: Option<usize>,
}

#[derive(Debug, PartialEq)]
struct ObjData {
    vertices: Vec<Point3D>,
    normals: Vec<Vector3D>,
    groups: Vec<Group>,
}

impl ObjData {
    fn parse(input: &str) -> Result<Self> {
        parse_obj_data(input)
    }

    fn vertex(&self, index: usize) -> Option<Point3D> {
        index.checked_sub(1).and_then(|index| self.vertices.get(index)).copied()
    }

    fn normal(&self, index: usize) -> Option<Vector3D> {
        index.checked_sub(1).and_then(|index| self.normals.get(index)).copied()
    }

    fn to_object(&self) -> Result<Object> {
        let convert_group = |group: &Group| -> Result<Object> {
            let mut triangles = vec![];

            for polygon in group {
                for face in triangulate(polygon) {
                    let mut vertices = Vec::with_capacity(3);
                    let mut normals = Vec::with_capacity(3);

                    for &(vertex_index, normal_index) in face.iter() {
                        let vertex = self
                            .vertex(vertex_index)
                            .ok_or_else(|| anyhow!("invalid vertex reference {} in face {:?}", vertex_index, polygon))?;
                        vertices.push(vertex);

                        if let Some(normal_index) = normal_index {
                            let normal = self
                                .normal(normal_index)
                                .ok_or_else(|| anyhow!("invalid normal reference {} in face {:?}", normal_index, polygon))?;
                            normals.push(normal);
                        }
                    }

                    if normals.is_empty() {
                        triangles.push(Object::triangle(vertices[0], vertices[1], vertices[2]))
                    } else if normals.len() == 3 {
                        // floating point error may leave a normal non-normalised after parsing
                        triangles.push(Object::smooth_triangle(
                            vertices[0],
                            vertices[1],
                            vertices[2],
                            normals[0].normalised(),
                            normals[1].normalised(),
                            normals[2].normalised(),
                        ))
                    } else {
                        bail!("face {:?} must either have normals for all vertices or none", polygon);
                    }
                }
            }

            Ok(Object::group(triangles))
        };

        if self.groups.len() == 1 {
            convert_group(&self.groups[0])
        } else {
            let children = self.groups.iter().map(Borrow::borrow).map(convert_group).collect::<Result<Vec<_>>>()?;

            Ok(Object::group(children))
        }
    }
}

fn triangulate(face: &Polygon) -> Vec<[(usize, Option<usize>); 3]> {
    let mut out = vec![];

    for i in 2..face.len() {
        out.push([
            (face[0].vertex, face[0].normal),
            (face[i - 1].vertex, face[i - 1].normal),
            (face[i].vertex, face[i].normal),
        ]);
    }

    out
}
