//! Typed reads through [AccessorReader].

mod common;

use common::{pack_f32, pack_u16, single_accessor};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use scenery::{schema::consts, AccessorReader, AccessorType, ComponentType, Error, ErrorKind};

fn reader_error(doc: &scenery::Document) -> Error {
    AccessorReader::new(doc, "acc").unwrap_err()
}

#[quickcheck]
fn vec3_floats_are_bit_identical(values: Vec<(f32, f32, f32)>) -> bool {
    // NaN payloads needn't survive widening
    let flat: Vec<f32> = values
        .iter()
        .flat_map(|&(x, y, z)| [x, y, z])
        .map(|v| if v.is_nan() { 0.0 } else { v })
        .collect();
    let doc = single_accessor(consts::FLOAT, "VEC3", values.len(), 12, 0, pack_f32(&flat));
    let read = AccessorReader::new(&doc, "acc")
        .unwrap()
        .read_vector3_array()
        .unwrap();
    read.len() == values.len()
        && read
            .iter()
            .flat_map(|v| v.iter().copied())
            .zip(&flat)
            .all(|(a, b)| a.to_bits() == b.to_bits())
}

#[quickcheck]
fn one_byte_short(count: u8) -> TestResult {
    if count == 0 {
        return TestResult::discard();
    }
    let count = count as usize;
    let doc = single_accessor(consts::FLOAT, "VEC3", count, 12, 0, vec![0; 12 * count - 1]);
    TestResult::from_bool(reader_error(&doc).kind() == ErrorKind::OutOfRange)
}

#[test]
fn out_of_range_reports_extent() {
    let doc = single_accessor(consts::FLOAT, "VEC3", 4, 0, 4, vec![0; 48]);
    match reader_error(&doc) {
        Error::OutOfRange {
            accessor,
            offset,
            required,
            available,
        } => {
            assert_eq!(accessor.as_str(), "acc");
            assert_eq!(offset, 4);
            assert_eq!(required, 48);
            assert_eq!(available, 44);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn offset_past_end() {
    let doc = single_accessor(consts::UNSIGNED_BYTE, "SCALAR", 1, 0, 9, vec![0; 8]);
    assert_eq!(reader_error(&doc).kind(), ErrorKind::OutOfRange);

    // nothing to read, so nothing can be out of range
    let empty = single_accessor(consts::UNSIGNED_BYTE, "SCALAR", 0, 0, 9, vec![0; 8]);
    let reader = AccessorReader::new(&empty, "acc").unwrap();
    assert!(reader.is_empty());
    assert_eq!(reader.read_int_array().unwrap(), Vec::<i32>::new());
}

#[test]
fn declared_length_bounds_reads() {
    // 24 bytes attached, but only 12 declared
    let mut doc = single_accessor(consts::FLOAT, "VEC3", 2, 0, 0, vec![0; 24]);
    doc.buffers.get_mut("buf").unwrap().byte_length = Some(12);
    assert_eq!(reader_error(&doc).kind(), ErrorKind::OutOfRange);
}

#[quickcheck]
fn interleaved_stride(count: u8, base: u8) -> bool {
    let count = usize::from(count % 64);
    // a nonzero, component-aligned start for the interleaved block
    let base = 4 * (1 + usize::from(base % 16));

    // position (12 bytes) + uv (8 bytes)
    let mut data = vec![0xAB; base];
    for i in 0..count {
        let i = i as f32;
        data.extend(pack_f32(&[i, i + 0.5, -i]));
        data.extend(pack_f32(&[100.0 + i, 200.0 + i]));
    }
    let doc = single_accessor(consts::FLOAT, "VEC3", count, 20, base, data.clone());
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    let positions = reader.read_vector3_array().unwrap();

    // the uvs trail their positions, so their last stride must be padded out
    data.extend([0; 12]);
    let doc = single_accessor(consts::FLOAT, "VEC2", count, 20, base + 12, data);
    let uvs = AccessorReader::new(&doc, "acc")
        .unwrap()
        .read_vector2_array()
        .unwrap();

    reader.stride() == 20
        && positions.len() == count
        && uvs.len() == count
        && positions.iter().zip(&uvs).enumerate().all(|(i, (p, uv))| {
            let i = i as f32;
            *p == Vector3::new(i, i + 0.5, -i) && *uv == Vector2::new(100.0 + i, 200.0 + i)
        })
}

#[test]
fn unsigned_int_indices() {
    let data: Vec<u8> = [7u32, i32::MAX as u32]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let doc = single_accessor(consts::UNSIGNED_INT, "SCALAR", 2, 0, 0, data);
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    assert_eq!(reader.read_int_array().unwrap(), [7, i32::MAX]);

    // past i32::MAX, indices fail rather than saturate
    let data: Vec<u8> = [7u32, 3_000_000_000]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let doc = single_accessor(consts::UNSIGNED_INT, "SCALAR", 2, 0, 0, data);
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    match reader.read_int_array() {
        Err(e @ Error::Unrepresentable { index: 1, .. }) => {
            assert_eq!(e.kind(), ErrorKind::OutOfRange)
        }
        other => panic!("expected Unrepresentable, got {other:?}"),
    }
    // the same values still read as floats
    assert_eq!(reader.read_float_array().unwrap()[1], 3e9);
}

#[test]
fn wrong_type() {
    let doc = single_accessor(consts::FLOAT, "VEC3", 2, 0, 0, pack_f32(&[1.0; 6]));
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    match reader.read_int_array() {
        Err(Error::WrongType {
            expected, actual, ..
        }) => {
            assert_eq!(expected, AccessorType::Scalar);
            assert_eq!(actual, AccessorType::Vec3);
        }
        other => panic!("expected WrongType, got {other:?}"),
    }
    assert_eq!(reader.read_vector3_array().unwrap().len(), 2);
    // also as points, through the generic reader
    assert_eq!(
        reader.read_array::<Point3<f32>>().unwrap()[1],
        Point3::new(1.0, 1.0, 1.0)
    );
}

#[test]
fn reads_are_repeatable() {
    let doc = single_accessor(consts::UNSIGNED_SHORT, "SCALAR", 3, 0, 0, pack_u16(&[7, 8, 9]));
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    assert_eq!(reader.read_int_array().unwrap(), [7, 8, 9]);
    assert_eq!(reader.read_int_array().unwrap(), [7, 8, 9]);
    assert_eq!(reader.read_float_array().unwrap(), [7.0f32, 8.0, 9.0]);
}

#[test]
fn component_types() {
    let doc = single_accessor(consts::BYTE, "VEC2", 2, 0, 0, vec![0xFF, 0x7F, 0x80, 0x00]);
    let reader = AccessorReader::new(&doc, "acc").unwrap();
    assert_eq!(reader.component_type(), ComponentType::I8);
    assert_eq!(
        reader.read_vector2_array().unwrap(),
        [Vector2::new(-1.0f32, 127.0), Vector2::new(-128.0, 0.0)]
    );

    let doc = single_accessor(consts::SHORT, "SCALAR", 2, 0, 0, vec![0xFE, 0xFF, 0x00, 0x01]);
    assert_eq!(
        AccessorReader::new(&doc, "acc")
            .unwrap()
            .read_int_array()
            .unwrap(),
        [-2, 256]
    );

    let doc = single_accessor(
        consts::UNSIGNED_INT,
        "SCALAR",
        1,
        0,
        0,
        70000u32.to_le_bytes().to_vec(),
    );
    assert_eq!(
        AccessorReader::new(&doc, "acc")
            .unwrap()
            .read_int_array()
            .unwrap(),
        [70000]
    );

    // strided bytes: one index per 2 bytes, the second of each being padding
    let doc = single_accessor(consts::UNSIGNED_BYTE, "SCALAR", 3, 2, 0, vec![1, 9, 2, 9, 3, 9]);
    assert_eq!(
        AccessorReader::new(&doc, "acc")
            .unwrap()
            .read_int_array()
            .unwrap(),
        [1, 2, 3]
    );
}

#[test]
fn float_indices_truncate() {
    let doc = single_accessor(consts::FLOAT, "SCALAR", 3, 0, 0, pack_f32(&[1.9, -1.9, 2.0]));
    assert_eq!(
        AccessorReader::new(&doc, "acc")
            .unwrap()
            .read_int_array()
            .unwrap(),
        [1, -1, 2]
    );
}

#[test]
fn matrices_are_column_major() {
    let values: Vec<f32> = (0..32).map(|i| i as f32).collect();
    let doc = single_accessor(consts::FLOAT, "MAT4", 2, 0, 0, pack_f32(&values));
    let mats = AccessorReader::new(&doc, "acc")
        .unwrap()
        .read_matrix4_array()
        .unwrap();
    assert_eq!(mats[0], Matrix4::from_column_slice(&values[..16]));
    assert_eq!(mats[1][(1, 3)], 29.0);
}

#[test]
fn malformed_accessors() {
    let doc = single_accessor(5124, "SCALAR", 1, 0, 0, vec![0; 4]);
    assert_eq!(reader_error(&doc).kind(), ErrorKind::UnsupportedFormat);

    let doc = single_accessor(consts::FLOAT, "VEC5", 1, 0, 0, vec![0; 20]);
    assert_eq!(reader_error(&doc).kind(), ErrorKind::UnsupportedFormat);

    let doc = single_accessor(consts::FLOAT, "VEC3", 1, 8, 0, vec![0; 12]);
    assert_eq!(reader_error(&doc).kind(), ErrorKind::InvalidFormat);

    let doc = single_accessor(consts::FLOAT, "VEC3", 1, 0, 0, vec![0; 12]);
    assert_eq!(
        AccessorReader::new(&doc, "nope").unwrap_err().kind(),
        ErrorKind::UnresolvedReference
    );
}

#[test]
fn unattached_buffer() {
    let doc: scenery::Document = r#"{
        "buffers": { "buf": { "byteLength": 12, "uri": "data.bin" } },
        "bufferViews": { "view": { "buffer": "buf" } },
        "accessors": { "acc": { "bufferView": "view", "componentType": 5126, "count": 1, "type": "VEC3" } }
    }"#
    .parse()
    .unwrap();
    assert_eq!(reader_error(&doc).kind(), ErrorKind::UnresolvedReference);
}
