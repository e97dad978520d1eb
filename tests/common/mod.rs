#![allow(dead_code)]

use scenery::Document;

/// Pack values into a little-endian byte buffer.
pub fn pack_f32(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn pack_u16(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// A document holding one accessor, `"acc"`, over the whole of `data`.
pub fn single_accessor(
    component_type: u32,
    ty: &str,
    count: usize,
    stride: usize,
    offset: usize,
    data: Vec<u8>,
) -> Document {
    let json = format!(
        r#"{{
            "buffers": {{ "buf": {{ "byteLength": {len}, "uri": "data.bin" }} }},
            "bufferViews": {{ "view": {{ "buffer": "buf", "byteOffset": 0, "byteLength": {len} }} }},
            "accessors": {{
                "acc": {{
                    "bufferView": "view",
                    "byteOffset": {offset},
                    "byteStride": {stride},
                    "componentType": {component_type},
                    "count": {count},
                    "type": "{ty}"
                }}
            }}
        }}"#,
        len = data.len()
    );
    let mut doc: Document = json.parse().unwrap();
    doc.attach_buffer("buf", data).unwrap();
    doc
}

pub const VERTEX_SOURCE: &str = "attribute vec3 a_position; void main() {}";
pub const FRAGMENT_SOURCE: &str = "void main() {}";
pub const IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

/// Two nodes, `root` and `child`, each holding the triangle mesh `tri`. `child` is translated by
/// `(1, 0, 0)` and also has a camera.
///
/// The triangle's material, `mat`, has every optional part: a technique, ambient and emission
/// colors, and a diffuse texture.
pub const TWO_NODES: &str = r#"{
    "asset": { "version": "1.0" },
    "scene": "main",
    "scenes": { "main": { "name": "Main", "nodes": ["root"] } },
    "nodes": {
        "root": {
            "name": "Root",
            "meshes": ["tri"],
            "children": ["child"],
            "translation": [0, 0, 0],
            "rotation": [0, 0, 0, 1],
            "scale": [1, 1, 1],
            "matrix": [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]
        },
        "child": {
            "name": "Child",
            "meshes": ["tri"],
            "camera": "eye",
            "translation": [1, 0, 0],
            "rotation": [0, 0, 0, 1],
            "scale": [1, 1, 1],
            "matrix": [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]
        }
    },
    "cameras": {
        "eye": { "type": "perspective", "perspective": { "aspectRatio": 1.5, "yfov": 0.8, "znear": 0.01, "zfar": 100 } }
    },
    "meshes": {
        "tri": {
            "name": "Triangle",
            "primitives": [{
                "attributes": { "POSITION": "pos", "TEXCOORD_0": "uv", "NORMAL": "nrm" },
                "indices": "idx",
                "material": "mat",
                "mode": 4
            }]
        }
    },
    "accessors": {
        "pos": { "bufferView": "vertices", "byteOffset": 0, "byteStride": 32, "componentType": 5126, "count": 3, "type": "VEC3" },
        "nrm": { "bufferView": "vertices", "byteOffset": 12, "byteStride": 32, "componentType": 5126, "count": 3, "type": "VEC3" },
        "uv": { "bufferView": "vertices", "byteOffset": 24, "byteStride": 32, "componentType": 5126, "count": 3, "type": "VEC2" },
        "idx": { "bufferView": "indices", "byteOffset": 0, "componentType": 5123, "count": 3, "type": "SCALAR" }
    },
    "bufferViews": {
        "vertices": { "buffer": "buf", "byteOffset": 0, "byteLength": 96, "target": 34962 },
        "indices": { "buffer": "buf", "byteOffset": 128, "byteLength": 6, "target": 34963 }
    },
    "buffers": { "buf": { "byteLength": 134, "uri": "tri.bin" } },
    "materials": {
        "mat": {
            "name": "Material",
            "technique": "tech",
            "values": { "ambient": [0.1, 0.2, 0.3, 1], "emission": [0, 0, 0], "diffuse": "tex" }
        }
    },
    "techniques": { "tech": { "program": "prog" } },
    "programs": { "prog": { "attributes": ["a_position"], "vertexShader": "vs", "fragmentShader": "fs" } },
    "shaders": {
        "vs": { "type": 35633, "uri": "tri.vert" },
        "fs": { "type": 35632, "uri": "tri.frag" }
    },
    "textures": { "tex": { "sampler": "smp", "source": "img" } },
    "samplers": { "smp": { "wrapS": 33071, "wrapT": 33071 } },
    "images": { "img": { "uri": "tri.png" } }
}"#;

/// Local-space triangle vertices, shared by both nodes of [TWO_NODES]
pub const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
pub const UVS: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];

/// Interleaved `position, normal, uv` vertices (32 bytes each), then `[0, 1, 2]` as u16 indices
/// at byte 128.
pub fn triangle_buffer() -> Vec<u8> {
    let mut res = Vec::with_capacity(134);
    for (pos, uv) in TRIANGLE.iter().zip(UVS) {
        res.extend(pack_f32(pos));
        res.extend(pack_f32(&[1.0, 0.0, 0.0]));
        res.extend(pack_f32(&uv));
    }
    res.resize(128, 0);
    res.extend(pack_u16(&[0, 1, 2]));
    res
}

/// [TWO_NODES], with every payload attached.
pub fn two_nodes() -> Document {
    let mut doc: Document = TWO_NODES.parse().unwrap();
    doc.attach_buffer("buf", triangle_buffer()).unwrap();
    doc.attach_shader("vs", VERTEX_SOURCE.to_owned()).unwrap();
    doc.attach_shader("fs", FRAGMENT_SOURCE.to_owned()).unwrap();
    doc.attach_image("img", IMAGE.to_vec()).unwrap();
    doc
}
