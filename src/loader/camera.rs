use scenery_schema::{Document, Id};

use crate::{CameraDescriptor, Error, Invalid, Projection, Unsupported};

pub(crate) fn load_camera(doc: &Document, id: &Id) -> Result<CameraDescriptor, Error> {
    let camera = doc.camera(id)?;
    let missing = |ty| Invalid::MissingProjection {
        camera: id.clone(),
        ty,
    };
    let projection = match camera.ty.as_str() {
        "perspective" => {
            let p = camera.perspective.ok_or_else(|| missing("perspective"))?;
            Projection::Perspective {
                yfov: p.yfov,
                znear: p.znear,
                zfar: p.zfar,
                aspect_ratio: p.aspect_ratio,
            }
        }
        "orthographic" => {
            let o = camera.orthographic.ok_or_else(|| missing("orthographic"))?;
            Projection::Orthographic {
                xmag: o.xmag,
                ymag: o.ymag,
                znear: o.znear,
                zfar: o.zfar,
            }
        }
        other => return Err(Unsupported::CameraType(other.to_owned()).into()),
    };
    tracing::debug!(camera = %id, ?projection, "decoded camera");
    Ok(CameraDescriptor {
        id: id.clone(),
        name: camera.name.clone(),
        projection,
    })
}
