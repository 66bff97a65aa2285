use super::*;
use crate::error::EnlargeError;

#[test]
fn test_new_rejects_length_mismatch() {
    let result = Tensor::new(vec![1.0f32, 2.0, 3.0], vec![2, 2]);
    assert_eq!(
        result,
        Err(EnlargeError::TensorCreationError {
            data_len: 3,
            shape: vec![2, 2]
        })
    );
}

#[test]
fn test_new_rejects_overflowing_shape() {
    let result = Tensor::new(vec![1.0f64], vec![usize::MAX, 2]);
    assert_eq!(
        result,
        Err(EnlargeError::TensorCreationError {
            data_len: 1,
            shape: vec![usize::MAX, 2]
        })
    );
}

#[test]
fn test_new_zero_sized_with_huge_dims() {
    let t = Tensor::<f32>::new(vec![], vec![0, 1 << 40, 1 << 40]).unwrap();
    assert_eq!(t.numel(), 0);
}

#[test]
fn test_get_row_major() {
    let t = arange::<f32>(&[1, 2, 2, 3]).unwrap();
    assert_eq!(t.strides(), &[12, 6, 3, 1]);
    assert_eq!(t.get(&[0, 0, 0, 0]).unwrap(), 0.0);
    assert_eq!(t.get(&[0, 0, 1, 2]).unwrap(), 5.0);
    assert_eq!(t.get(&[0, 1, 1, 0]).unwrap(), 9.0);
}

#[test]
fn test_get_out_of_bounds() {
    let t = zeros::<f64>(&[2, 2]).unwrap();
    assert!(matches!(
        t.get(&[0, 2]),
        Err(EnlargeError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        t.get(&[0]),
        Err(EnlargeError::RankMismatch { expected: 2, actual: 1 })
    ));
}

#[test]
fn test_nchw() {
    let t = zeros::<f32>(&[3, 4, 5, 5]).unwrap();
    assert_eq!(t.nchw().unwrap(), Nchw::new(3, 4, 5, 5));
    let flat = zeros::<f32>(&[12]).unwrap();
    assert!(flat.nchw().is_err());
}

#[test]
fn test_dot() {
    let a = Tensor::new(vec![1.0f64, 2.0, 3.0], vec![3]).unwrap();
    let b = Tensor::new(vec![4.0f64, -1.0, 0.5], vec![3]).unwrap();
    assert_eq!(a.dot(&b).unwrap(), 3.5);

    let c = zeros::<f64>(&[1, 3]).unwrap();
    assert!(matches!(a.dot(&c), Err(EnlargeError::ShapeMismatch { .. })));
}
