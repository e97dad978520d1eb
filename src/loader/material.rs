use scenery_schema::{consts, Document, Id, Value};

use crate::{
    convert::{to_color, Color},
    Error, Invalid, MaterialDescriptor, ShaderProgram, TextureDescriptor, Unsupported, WrapMode,
};

pub(crate) fn load_material(doc: &Document, id: &Id) -> Result<MaterialDescriptor, Error> {
    let material = doc.material(id)?;
    let shader = match &material.technique {
        Some(technique) => Some(load_program(doc, technique)?),
        None => None,
    };

    let mut res = MaterialDescriptor {
        id: id.clone(),
        name: material.name.clone(),
        shader,
        ..Default::default()
    };
    if let Some(v) = material.values.get("ambient") {
        res.ambient = Some(parse_color(id, "ambient", v)?);
    }
    if let Some(v) = material.values.get("emission") {
        res.emission = Some(parse_color(id, "emission", v)?);
    }
    match material.values.get("diffuse") {
        None => (),
        Some(Value::String(texture)) => {
            res.diffuse = Some(load_texture(doc, &Id::from(texture.as_str()))?)
        }
        Some(v) => res.diffuse_color = Some(parse_color(id, "diffuse", v)?),
    }

    tracing::debug!(
        material = %id,
        technique = ?material.technique,
        texture = ?res.diffuse.as_ref().map(|t| &t.id),
        "decoded material"
    );
    Ok(res)
}

/// Materials store colors as JSON arrays of 3 or 4 numbers.
fn parse_color(material: &Id, key: &'static str, value: &Value) -> Result<Color, Error> {
    let invalid = || {
        Error::from(Invalid::MaterialValue {
            material: material.clone(),
            key,
        })
    };
    let channels = value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|c| c.as_f64().ok_or_else(invalid))
        .collect::<Result<Vec<f64>, _>>()?;
    to_color(&channels)
}

fn load_program(doc: &Document, technique: &Id) -> Result<ShaderProgram, Error> {
    let program_id = &doc.technique(technique)?.program;
    let program = doc.program(program_id)?;
    Ok(ShaderProgram {
        program: program_id.clone(),
        vertex: shader_source(doc, &program.vertex_shader, consts::VERTEX_SHADER, "vertex")?
            .to_owned(),
        fragment: shader_source(
            doc,
            &program.fragment_shader,
            consts::FRAGMENT_SHADER,
            "fragment",
        )?
        .to_owned(),
    })
}

/// Resolve the source of a shader, which must belong to `stage`.
fn shader_source<'doc>(
    doc: &'doc Document,
    id: &Id,
    stage: u32,
    stage_name: &'static str,
) -> Result<&'doc str, Error> {
    let shader = doc.shader(id)?;
    if shader.ty != stage {
        return Err(Invalid::ShaderStage {
            shader: id.clone(),
            expected: stage_name,
            actual: shader.ty,
        }
        .into());
    }
    Ok(doc.shader_source(id)?)
}

fn load_texture(doc: &Document, id: &Id) -> Result<TextureDescriptor, Error> {
    let texture = doc.texture(id)?;
    let sampler = doc.sampler(&texture.sampler)?;
    let s = WrapMode::from_gl(sampler.wrap_s)?;
    let t = WrapMode::from_gl(sampler.wrap_t)?;
    if s != t {
        return Err(Unsupported::MixedWrapModes { s, t }.into());
    }
    Ok(TextureDescriptor {
        id: id.clone(),
        name: texture.name.clone(),
        image: texture.source.clone(),
        data: doc.image_data(&texture.source)?.to_vec(),
        wrap: s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn json(s: &str) -> Value {
        s.parse().unwrap()
    }

    #[test]
    fn colors() {
        let id = Id::from("m");
        let c = parse_color(&id, "ambient", &json("[0.5, 0.25, 1]")).unwrap();
        assert_eq!(c, Color::rgb(0.5, 0.25, 1.0));
        for bad in [
            json(r#""red""#),
            json(r#"[0.5, "x", 1]"#),
            json(r#"{ "r": 1 }"#),
        ] {
            assert_eq!(
                parse_color(&id, "ambient", &bad).unwrap_err().kind(),
                ErrorKind::InvalidFormat
            );
        }
        assert_eq!(
            parse_color(&id, "ambient", &json("[1, 1]"))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArity
        );
    }
}
