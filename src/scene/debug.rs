use std::fmt::Display;

use super::{DecodedScene, Projection};

impl Display for DecodedScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene {:?} ({} roots, {} primitives, {} materials) {{",
            self.name.as_deref().unwrap_or(self.id.as_str()),
            self.roots.len(),
            self.primitive_count(),
            self.materials.len(),
        )?;
        for (node, depth) in self.nodes() {
            let indent = "  ".repeat(depth + 1);
            write!(f, "\n{indent}<N {:?}>", node.id)?;
            if let Some(name) = &node.name {
                write!(f, " {name:?}")?;
            }
            let t = &node.transform;
            write!(f, " @ [{}, {}, {}]", t[(0, 3)], t[(1, 3)], t[(2, 3)])?;
            if let Some(cam) = &node.camera {
                match cam.projection {
                    Projection::Perspective { yfov, znear, zfar, .. } => write!(
                        f,
                        "\n{indent}  <C {:?}> perspective (yfov: {yfov}, z: {znear}..{zfar})",
                        cam.id
                    )?,
                    Projection::Orthographic { xmag, ymag, znear, zfar } => write!(
                        f,
                        "\n{indent}  <C {:?}> orthographic ({xmag} x {ymag}, z: {znear}..{zfar})",
                        cam.id
                    )?,
                }
            }
            for prim in &node.primitives {
                write!(
                    f,
                    "\n{indent}  <P {:?}> {} vertices, {} triangles",
                    prim.mesh,
                    prim.positions.len(),
                    prim.triangle_count(),
                )?;
                if prim.uvs.is_some() {
                    f.write_str(", uv")?;
                }
                if prim.normals.is_some() {
                    f.write_str(", normals")?;
                }
                if let Some(mat) = &prim.material {
                    write!(f, ", material {mat:?}")?;
                }
            }
        }
        for (id, mat) in &self.materials {
            write!(f, "\n  <M {id:?}>")?;
            if let Some(name) = &mat.name {
                write!(f, " {name:?}")?;
            }
            if let Some(c) = mat.ambient {
                write!(f, " ambient: [{}, {}, {}, {}]", c.r, c.g, c.b, c.a)?;
            }
            if let Some(c) = mat.emission {
                write!(f, " emission: [{}, {}, {}, {}]", c.r, c.g, c.b, c.a)?;
            }
            if let Some(c) = mat.diffuse_color {
                write!(f, " diffuse: [{}, {}, {}, {}]", c.r, c.g, c.b, c.a)?;
            }
            if let Some(tex) = &mat.diffuse {
                write!(
                    f,
                    " diffuse: texture {:?} ({} bytes, {:?})",
                    tex.id,
                    tex.data.len(),
                    tex.wrap
                )?;
            }
        }
        write!(f, "\n}}")
    }
}
