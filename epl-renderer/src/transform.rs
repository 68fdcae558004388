use tiny_skia::Transform;

/// Transform applied to the drawing context before a text field is measured
/// and drawn: translate to the field origin, rotate by the quadrant, then
/// scale the axes independently.
pub(crate) fn field_transform(
    x: i32,
    y: i32,
    quadrant: i32,
    scale_x: i32,
    scale_y: i32,
) -> Transform {
    let degrees = (quadrant.rem_euclid(4) * 90) as f32;
    Transform::from_translate(x as f32, y as f32)
        .pre_concat(Transform::from_rotate(degrees))
        .pre_concat(Transform::from_scale(scale_x as f32, scale_y as f32))
}

#[cfg(test)]
mod tests {
    use tiny_skia::Transform;

    use crate::transform::field_transform;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn quadrant_zero_is_translation_and_scale() {
        let ts = field_transform(10, 20, 0, 2, 3);
        assert_close(ts.sx, 2.0);
        assert_close(ts.sy, 3.0);
        assert_close(ts.kx, 0.0);
        assert_close(ts.ky, 0.0);
        assert_close(ts.tx, 10.0);
        assert_close(ts.ty, 20.0);
    }

    #[test]
    fn quadrant_one_rotates_ninety_degrees() {
        let ts = field_transform(0, 0, 1, 1, 1);
        assert_close(ts.sx, 0.0);
        assert_close(ts.sy, 0.0);
        assert_close(ts.ky, 1.0);
        assert_close(ts.kx, -1.0);
    }

    #[test]
    fn quadrants_wrap_modulo_four() {
        let wrapped = field_transform(5, 5, 6, 1, 1);
        let direct = field_transform(5, 5, 2, 1, 1);
        assert_close(wrapped.sx, direct.sx);
        assert_close(wrapped.sy, direct.sy);
        assert_close(wrapped.kx, direct.kx);
        assert_close(wrapped.ky, direct.ky);
    }

    #[test]
    fn identity_comparison() {
        let ts = field_transform(0, 0, 0, 1, 1);
        assert_eq!(ts, Transform::identity());
    }
}
