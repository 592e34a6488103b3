use base::{Tensor, TensorError};

#[test]
fn test_tensor_new_checks_length() {
    let tensor = Tensor::new(vec![2, 3], vec![0u8; 6]).unwrap();
    assert_eq!(tensor.ndim(), 2);
    assert_eq!(tensor.len(), 6);

    let err = Tensor::new(vec![2, 3], vec![0u8; 5]).unwrap_err();
    assert_eq!(err, TensorError::ShapeMismatch { expected: 6, got: 5 });
}

#[test]
fn test_tensor_shape_overflow() {
    let err = Tensor::<u8>::filled(vec![usize::MAX, 2], 0).unwrap_err();
    assert_eq!(err, TensorError::ShapeOverflow);
}

#[test]
fn test_tensor_filled() {
    let tensor = Tensor::filled(vec![1, 3, 2, 2], 0.5f32).unwrap();
    assert_eq!(tensor.len(), 12);
    assert!(tensor.data.iter().all(|&v| v == 0.5));
}
