use super::*;

#[test]
fn test_configure_exact_blocks() {
    let geometry = EnlargeGeometry::new(Nchw::new(1, 4, 2, 2), 4).unwrap();
    assert_eq!(geometry.scale, 2);
    assert_eq!(geometry.group, 1);
    assert_eq!(geometry.extra, 0);
    assert_eq!(geometry.output_shape(), Nchw::new(1, 1, 4, 4));
    assert!(!geometry.is_averaged_group(0));
    assert_eq!(geometry.channels_in_group(0), 4);
}

#[test]
fn test_configure_with_remainder() {
    // 11 channels at scale 2: two full blocks and 3 leftovers.
    let geometry = EnlargeGeometry::new(Nchw::new(2, 11, 3, 3), 6).unwrap();
    assert_eq!(geometry.scale, 2);
    assert_eq!(geometry.group, 2);
    assert_eq!(geometry.extra, 3);
    assert_eq!(geometry.averaged_terms(), 4);
    assert!(!geometry.is_averaged_group(0));
    assert!(geometry.is_averaged_group(1));
    assert_eq!(geometry.channels_in_group(0), 4);
    assert_eq!(geometry.channels_in_group(1), 7);
    assert_eq!(geometry.in_plane(), 9);
    assert_eq!(geometry.out_plane(), 36);
}

#[test]
fn test_configure_output_shape() {
    assert_eq!(configure(&[3, 18, 4, 4], 12).unwrap(), vec![3, 2, 12, 12]);
    assert_eq!(configure(&[1, 16, 1, 1], 4).unwrap(), vec![1, 1, 4, 4]);
    assert_eq!(configure(&[0, 8, 2, 2], 4).unwrap(), vec![0, 2, 4, 4]);
}

#[test]
fn test_reject_non_positive_target() {
    assert_eq!(
        configure(&[1, 4, 2, 2], 0),
        Err(EnlargeError::NonPositiveTargetSize { target_size: 0 })
    );
}

#[test]
fn test_reject_target_not_multiple() {
    assert_eq!(
        configure(&[1, 16, 3, 3], 10),
        Err(EnlargeError::TargetNotMultiple {
            target_size: 10,
            input_size: 3
        })
    );
}

#[test]
fn test_reject_non_square() {
    assert_eq!(
        configure(&[1, 16, 5, 3], 10),
        Err(EnlargeError::NonSquareInput {
            height: 5,
            width: 3
        })
    );
}

#[test]
fn test_reject_target_not_larger() {
    let err = configure(&[1, 16, 4, 4], 4).unwrap_err();
    assert_eq!(
        err,
        EnlargeError::TargetNotLarger {
            target_size: 4,
            input_size: 4
        }
    );
    assert!(err.is_configuration_error());
}

#[test]
fn test_reject_smaller_target() {
    // 2 % 4 != 0 trips the multiple check first.
    assert!(matches!(
        configure(&[1, 16, 4, 4], 2),
        Err(EnlargeError::TargetNotMultiple { .. })
    ));
}

#[test]
fn test_reject_empty_spatial_extent() {
    assert_eq!(
        configure(&[1, 4, 0, 0], 4),
        Err(EnlargeError::EmptySpatialExtent {
            height: 0,
            width: 0
        })
    );
}

#[test]
fn test_reject_insufficient_channels() {
    assert_eq!(
        configure(&[1, 3, 2, 2], 4),
        Err(EnlargeError::InsufficientChannels {
            channels: 3,
            scale: 2,
            block: 4
        })
    );
}

#[test]
fn test_reject_wrong_rank() {
    let err = configure(&[4, 2, 2], 4).unwrap_err();
    assert_eq!(
        err,
        EnlargeError::RankMismatch {
            expected: 4,
            actual: 3
        }
    );
    assert!(err.is_configuration_error());
}

#[test]
fn test_reject_overflowing_scale() {
    // scale = 2^40 (and 2^38), so scale² does not fit in usize.
    assert_eq!(
        configure(&[1, 4, 1, 1], 1usize << 40),
        Err(EnlargeError::InsufficientChannels {
            channels: 4,
            scale: 1 << 40,
            block: usize::MAX
        })
    );
    let err = configure(&[1, 4, 4, 4], 1usize << 40).unwrap_err();
    assert!(matches!(
        err,
        EnlargeError::InsufficientChannels { scale, .. } if scale == 1 << 38
    ));
    assert!(err.is_configuration_error());
}

#[test]
fn test_reject_overflowing_input_shape() {
    let err = configure(&[1 << 40, 4, 1 << 20, 1 << 20], 1 << 21).unwrap_err();
    assert_eq!(
        err,
        EnlargeError::ShapeOverflow {
            shape: vec![1 << 40, 4, 1 << 20, 1 << 20]
        }
    );
    assert!(err.is_configuration_error());
}

#[test]
fn test_large_target_fits_plane() {
    // scale 2^16: scale² = 2^32 channels, S² = 2^34 output elements.
    let geometry = EnlargeGeometry::new(Nchw::new(1, 1 << 32, 2, 2), 1 << 17).unwrap();
    assert_eq!(geometry.group, 1);
    assert_eq!(geometry.out_plane(), 1 << 34);
}
