//! Traversal of a [Document]'s default scene into a [DecodedScene].
//!
//! # Notes
//!
//! * Nodes are visited depth-first, pre-order, starting from each root of the default scene in
//!   declaration order.
//! * A node's world transform is `parent * T * R * S * matrix`, where `T`, `R`, `S`, and `matrix`
//!   come from the node's `translation`, `rotation`, `scale`, and `matrix`. `R` is the identity
//!   unless [LoadOptions::apply_rotation] is set.
//! * Only `TRIANGLES` primitives are supported.
//! * The first fatal error aborts the whole load.

mod camera;
mod material;

use std::collections::{BTreeMap, HashSet};

use nalgebra::{Matrix3, Matrix4, Point3, UnitQuaternion, Vector3};
use scenery_schema::{consts, Document, Id, Mesh, Node, Primitive};

use crate::{
    convert::{to_matrix4, to_quaternion, to_vector3},
    AccessorReader, DecodedNode, DecodedPrimitive, DecodedScene, Element, Error, ErrorKind,
    MaterialDescriptor, Unsupported,
};

/// What to do when a node omits part of its transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformDefaults {
    /// Substitute the glTF defaults: no translation, no rotation, unit scale, identity matrix.
    #[default]
    Identity,
    /// Fail with [Error::MissingField].
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoadOptions {
    pub transform_defaults: TransformDefaults,
    /// Whether node rotations are applied. Rotations are validated either way.
    pub apply_rotation: bool,
}

impl LoadOptions {
    #[inline]
    pub fn with_transform_defaults(mut self, defaults: TransformDefaults) -> Self {
        self.transform_defaults = defaults;
        self
    }

    #[inline]
    pub fn with_rotation(mut self, apply: bool) -> Self {
        self.apply_rotation = apply;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadState {
    Unstarted,
    Loading,
    Done,
    Failed(ErrorKind),
}

/// A node whose children are still being decoded.
struct OpenNode<'doc> {
    node: &'doc Node,
    next_child: usize,
    decoded: DecodedNode,
}

/// Decodes the default scene of a single document. Each loader may only be used once.
#[derive(Debug)]
pub struct SceneLoader<'doc> {
    doc: &'doc Document,
    options: LoadOptions,
    state: LoadState,
    materials: BTreeMap<Id, MaterialDescriptor>,
}

/// Decode the default scene of `doc` with [LoadOptions::default].
#[inline]
pub fn load(doc: &Document) -> Result<DecodedScene, Error> {
    SceneLoader::new(doc).load()
}

impl<'doc> SceneLoader<'doc> {
    #[inline]
    pub fn new(doc: &'doc Document) -> Self {
        Self::with_options(doc, LoadOptions::default())
    }

    pub fn with_options(doc: &'doc Document, options: LoadOptions) -> Self {
        Self {
            doc,
            options,
            state: LoadState::Unstarted,
            materials: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Decode the document's default scene.
    ///
    /// # Errors
    ///
    /// * this loader has already been used
    /// * any referenced record is missing or malformed; see [ErrorKind]
    #[tracing::instrument(skip_all)]
    pub fn load(&mut self) -> Result<DecodedScene, Error> {
        if self.state != LoadState::Unstarted {
            return Err(Error::Reentry(self.state));
        }
        self.state = LoadState::Loading;
        match self.load_scene() {
            Ok(scene) => {
                self.state = LoadState::Done;
                tracing::info!(
                    scene = %scene.id,
                    nodes = scene.nodes().count(),
                    primitives = scene.primitive_count(),
                    materials = scene.materials.len(),
                    "loaded scene"
                );
                Ok(scene)
            }
            Err(e) => {
                self.materials.clear();
                self.state = LoadState::Failed(e.kind());
                Err(e)
            }
        }
    }

    fn load_scene(&mut self) -> Result<DecodedScene, Error> {
        let doc = self.doc;
        let (id, scene) = doc.default_scene()?;
        tracing::debug!(scene = %id, roots = scene.nodes.len(), "loading scene");

        let mut roots = Vec::with_capacity(scene.nodes.len());
        for root in &scene.nodes {
            self.load_tree(root, &mut roots)?;
        }
        Ok(DecodedScene {
            id: id.clone(),
            name: scene.name.clone(),
            roots,
            materials: std::mem::take(&mut self.materials),
        })
    }

    /// Decode the subtree under `root`, depth-first, pre-order, and append it to `out`.
    ///
    /// Open nodes are kept on a heap-allocated stack, so hierarchy depth is bounded by memory
    /// rather than by the call stack. The ids on that stack are exactly the ancestor set.
    fn load_tree(&mut self, root: &'doc Id, out: &mut Vec<DecodedNode>) -> Result<(), Error> {
        let mut ancestors = HashSet::new();
        let mut open = vec![self.open_node(root, &Matrix4::identity(), &mut ancestors)?];
        while let Some(mut top) = open.pop() {
            let node = top.node;
            match node.children.get(top.next_child) {
                Some(child) => {
                    top.next_child += 1;
                    let frame = self.open_node(child, &top.decoded.transform, &mut ancestors)?;
                    open.push(top);
                    open.push(frame);
                }
                None => {
                    ancestors.remove(top.decoded.id.as_str());
                    match open.last_mut() {
                        Some(parent) => parent.decoded.children.push(top.decoded),
                        None => out.push(top.decoded),
                    }
                }
            }
        }
        Ok(())
    }

    /// Decode everything about node `id` except its children.
    fn open_node(
        &mut self,
        id: &'doc Id,
        parent: &Matrix4<f32>,
        ancestors: &mut HashSet<&'doc str>,
    ) -> Result<OpenNode<'doc>, Error> {
        let doc = self.doc;
        let node = doc.node(id)?;
        if !ancestors.insert(id.as_str()) {
            return Err(Error::CyclicGraph(id.clone()));
        }

        let transform = parent * self.local_transform(id, node)?;
        tracing::debug!(
            node = %id,
            depth = ancestors.len() - 1,
            meshes = node.meshes.len(),
            children = node.children.len(),
            "loading node"
        );

        let mut primitives = Vec::new();
        for mesh_id in &node.meshes {
            let mesh = doc.mesh(mesh_id)?;
            for prim in &mesh.primitives {
                primitives.push(self.load_primitive(mesh_id, mesh, prim, &transform)?);
            }
        }

        let camera = match &node.camera {
            Some(cam) => Some(camera::load_camera(doc, cam)?),
            None => None,
        };

        Ok(OpenNode {
            node,
            next_child: 0,
            decoded: DecodedNode {
                id: id.clone(),
                name: node.name.clone(),
                transform,
                primitives,
                camera,
                children: Vec::with_capacity(node.children.len()),
            },
        })
    }

    /// Resolve one part of a node's transform, subject to [LoadOptions::transform_defaults].
    fn transform_field<'n>(
        &self,
        id: &Id,
        value: &'n Option<Vec<f32>>,
        field: &'static str,
    ) -> Result<Option<&'n [f32]>, Error> {
        match (value, self.options.transform_defaults) {
            (Some(v), _) => Ok(Some(v.as_slice())),
            (None, TransformDefaults::Identity) => Ok(None),
            (None, TransformDefaults::Strict) => Err(Error::MissingField {
                kind: "node",
                id: id.clone(),
                field,
            }),
        }
    }

    /// Node space -> parent space
    fn local_transform(&self, id: &Id, node: &Node) -> Result<Matrix4<f32>, Error> {
        let translation = self
            .transform_field(id, &node.translation, "translation")?
            .map(to_vector3)
            .transpose()?
            .unwrap_or_else(Vector3::zeros);
        let rotation = self
            .transform_field(id, &node.rotation, "rotation")?
            .map(to_quaternion)
            .transpose()?;
        let scale = self
            .transform_field(id, &node.scale, "scale")?
            .map(to_vector3)
            .transpose()?
            .unwrap_or_else(|| Vector3::repeat(1.0));
        let matrix = self
            .transform_field(id, &node.matrix, "matrix")?
            .map(to_matrix4)
            .transpose()?
            .unwrap_or_else(Matrix4::identity);

        let mut res = Matrix4::new_translation(&translation);
        if let (true, Some(q)) = (self.options.apply_rotation, rotation) {
            match UnitQuaternion::try_new(q, f32::EPSILON) {
                Some(r) => res *= r.to_homogeneous(),
                None => tracing::warn!(node = %id, ?q, "ignoring degenerate rotation"),
            }
        }
        Ok(res * Matrix4::new_nonuniform_scaling(&scale) * matrix)
    }

    fn load_primitive(
        &mut self,
        mesh_id: &Id,
        mesh: &Mesh,
        prim: &Primitive,
        transform: &Matrix4<f32>,
    ) -> Result<DecodedPrimitive, Error> {
        if prim.mode != consts::TRIANGLES {
            return Err(Unsupported::PrimitiveMode(prim.mode).into());
        }
        let doc = self.doc;

        let position = prim
            .attributes
            .get("POSITION")
            .ok_or_else(|| Error::MissingField {
                kind: "mesh",
                id: mesh_id.clone(),
                field: "POSITION",
            })?;
        let positions: Vec<Point3<f32>> = AccessorReader::new(doc, position)?
            .read_vector3_array()?
            .into_iter()
            .map(|p| Point3::from((transform * Point3::from(p).to_homogeneous()).xyz()))
            .collect();

        let indices = match &prim.indices {
            Some(indices) => AccessorReader::new(doc, indices)?.read_int_array()?,
            None => (0..positions.len() as i32).collect(),
        };

        let uvs = optional_attribute(doc, mesh_id, prim, "TEXCOORD_0")?;
        let normals = optional_attribute::<Vector3<f32>>(doc, mesh_id, prim, "NORMAL")?.map(|ns| {
            let upper: Matrix3<f32> = transform.fixed_view::<3, 3>(0, 0).into_owned();
            let normal_matrix = upper.try_inverse().map_or(upper, |inv| inv.transpose());
            ns.into_iter()
                .map(|n| (normal_matrix * n).try_normalize(f32::EPSILON).unwrap_or(n))
                .collect()
        });

        let material = match &prim.material {
            Some(id) => {
                if !self.materials.contains_key(id.as_str()) {
                    let desc = material::load_material(doc, id)?;
                    self.materials.insert(id.clone(), desc);
                }
                Some(id.clone())
            }
            None => None,
        };

        tracing::trace!(
            mesh = %mesh_id,
            vertices = positions.len(),
            indices = indices.len(),
            "decoded primitive"
        );
        Ok(DecodedPrimitive {
            mesh: mesh_id.clone(),
            mesh_name: mesh.name.clone(),
            positions,
            indices,
            uvs,
            normals,
            material,
        })
    }
}

/// Read an attribute the primitive may do without. A structural type mismatch only drops the
/// attribute.
fn optional_attribute<T: Element>(
    doc: &Document,
    mesh_id: &Id,
    prim: &Primitive,
    name: &str,
) -> Result<Option<Vec<T>>, Error> {
    let Some(id) = prim.attributes.get(name) else {
        return Ok(None);
    };
    match AccessorReader::new(doc, id)?.read_array::<T>() {
        Ok(values) => Ok(Some(values)),
        Err(e @ Error::WrongType { .. }) => {
            tracing::warn!(mesh = %mesh_id, attribute = name, error = %e, "ignoring attribute");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
