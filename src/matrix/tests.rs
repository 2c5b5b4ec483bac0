// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(any(feature = "std", feature = "libm"))]
use crate::{rotation::angle::Angle, vector::Vector4};
use crate::{
    error::{Axis, IndexOutOfRange},
    matrix::{
        Matrix, Matrix2, Matrix3, Matrix4,
        context::Context,
        dimension::{Dimension, SupportedDimension},
    },
    utils::num::Zero,
    vector::{Vector, Vector2, Vector3},
};

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix: Matrix<i32, 3, 4> = Matrix::from_rows([
        [01, 02, 03, 04],
        [05, 06, 07, 08],
        [09, 10, 11, 12],
    ]);

    assert_eq!(matrix.get(0, 0), Ok(1));
    assert_eq!(matrix.get(2, 3), Ok(12));
    assert_eq!(matrix[(1, 2)], 7);

    assert_eq!(matrix.row(1), Ok(Vector::new([5, 6, 7, 8])));
    assert_eq!(matrix.col(2), Ok(Vector::new([3, 7, 11])));

    matrix.set(0, 0, 99).unwrap().set(2, 3, -1).unwrap();
    *matrix.get_mut(1, 1).unwrap() = 42;
    matrix[(2, 0)] = 7;

    assert_eq!(matrix.get(0, 0), Ok(99));
    assert_eq!(matrix.get(2, 3), Ok(-1));
    assert_eq!(matrix.get_ref(1, 1), Ok(&42));
    assert_eq!(matrix.get(2, 0), Ok(7));

    let mut row = Vector::<i32, 4>::ZERO;
    matrix.row_into(2, &mut row).unwrap();
    assert_eq!(row, Vector::new([7, 10, 11, -1]));

    let mut col = Vector::<i32, 3>::ZERO;
    matrix.col_into(3, &mut col).unwrap();
    assert_eq!(col, Vector::new([4, 8, -1]));

    matrix.set_row(0, &Vector::<i32, 4>::splat(0)).unwrap();
    matrix.set_col(3, &Vector::<i32, 3>::new([1, 2, 3])).unwrap();

    #[rustfmt::skip]
    let expected: Matrix<i32, 3, 4> = Matrix::from_rows([
        [0, 00, 00, 1],
        [5, 42, 07, 2],
        [7, 10, 11, 3],
    ]);
    assert_eq!(matrix, expected);
}

fn assert_rejects_out_of_range<const N: usize>()
where
    Dimension<N>: SupportedDimension<N>,
{
    let mut matrix: Matrix<f32, N, N> = Matrix::identity();
    let before = matrix;

    assert_eq!(matrix.get(N, 0), Err(IndexOutOfRange::new(Axis::Row, N, N)));
    assert_eq!(
        matrix.get(usize::MAX, 0),
        Err(IndexOutOfRange::new(Axis::Row, usize::MAX, N)),
    );
    assert_eq!(matrix.get(0, N), Err(IndexOutOfRange::new(Axis::Column, N, N)));
    assert_eq!(
        matrix.get(0, usize::MAX),
        Err(IndexOutOfRange::new(Axis::Column, usize::MAX, N)),
    );

    assert!(matrix.set(N, 0, 5.0).is_err());
    assert!(matrix.set(0, usize::MAX, 5.0).is_err());
    assert!(matrix.get_mut(N, N).is_err());
    assert!(matrix.row(N).is_err());
    assert!(matrix.col(usize::MAX).is_err());
    assert!(matrix.minor(N, 0).is_err());
    assert!(matrix.cofactor(0, N).is_err());

    assert_eq!(matrix, before);
}

#[test]
fn test_out_of_range() {
    assert_rejects_out_of_range::<2>();
    assert_rejects_out_of_range::<3>();
    assert_rejects_out_of_range::<4>();
}

#[test]
#[should_panic = "row index 4 is out of range 0..4"]
fn test_index_operator_panics() {
    let matrix = Matrix4::<f32>::identity();
    let _ = matrix[(4, 0)];
}

#[test]
fn test_raw_buffer_is_column_major() {
    let matrix: Matrix4<f32> = Matrix::from_fn(|row, col| (row * 10 + col) as f32);
    let buffer = matrix.raw_buffer();

    assert_eq!(buffer.len(), Matrix4::<f32>::NUM_ELEMENTS);
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(buffer[col * 4 + row], matrix.get(row, col).unwrap());
        }
    }

    #[rustfmt::skip]
    let matrix: Matrix3<f64> = Matrix::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    assert_eq!(
        matrix.raw_buffer(),
        &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0],
    );
    assert_eq!(matrix.as_ptr(), matrix.raw_buffer().as_ptr());
    assert_eq!(matrix.as_columns()[1], [2.0, 5.0, 8.0]);
    assert_eq!(Matrix::<f64, 2, 3>::NUM_ELEMENTS, 6);
}

#[test]
fn test_factories() {
    let identity: Matrix3<f64> = Matrix::default();
    assert_eq!(identity, Matrix3::identity());
    assert_eq!(identity.diagonal(), [1.0; 3]);
    assert_eq!(identity.trace(), 3.0);

    let zero = Matrix3::<f64>::zero();
    assert!(zero.elems().all(|&elem| elem == 0.0));

    let mut copy = zero;
    copy.copy_from(&identity);
    assert_eq!(copy, identity);
    assert_eq!(zero, Matrix3::zero());
}

#[test]
fn test_debug() {
    #[rustfmt::skip]
    let matrix: Matrix2<i32> = Matrix::from_rows([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(format!("{matrix:?}"), "Matrix [[1, 2], [3, 4]]");
}

#[test]
fn test_identity_law() {
    #[rustfmt::skip]
    let matrix: Matrix4<f64> = Matrix::from_rows([
        [2.5, -1.0, 0.0, 7.0],
        [3.0, 4.25, -2.0, 1.0],
        [0.5, 9.0, 1.0, -3.0],
        [6.0, 0.0, 8.0, 2.0],
    ]);
    let identity = Matrix4::<f64>::identity();

    assert_eq!(matrix * identity, matrix);
    assert_eq!(identity * matrix, matrix);

    let matrix: Matrix2<i32> = Matrix::from_rows([[3, -1], [4, 2]]);
    assert_eq!(matrix * Matrix2::identity(), matrix);
    assert_eq!(Matrix2::identity() * matrix, matrix);
}

#[test]
fn test_matrix_multiply() {
    #[rustfmt::skip]
    let matrix: Matrix3<f64> = Matrix::from_rows([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    #[rustfmt::skip]
    let expected: Matrix3<f64> = Matrix::from_rows([
        [030.0, 036.0, 042.0],
        [066.0, 081.0, 096.0],
        [102.0, 126.0, 150.0],
    ]);

    assert_eq!(matrix * matrix, expected);

    let mut out = Matrix3::<f64>::zero();
    matrix.multiply_into(&matrix, &mut out);
    assert_eq!(out, expected);

    let mut in_place = matrix;
    in_place.multiply_in_place(&matrix);
    assert_eq!(in_place, expected);

    let mut ctx = Context::<f64, 3>::new();
    let mut with_ctx = matrix;
    with_ctx.multiply_in_place_with(&matrix, &mut ctx);
    assert_eq!(with_ctx, expected);

    #[rustfmt::skip]
    let lhs: Matrix<i32, 2, 3> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    #[rustfmt::skip]
    let rhs: Matrix<i32, 3, 2> = Matrix::from_rows([
        [07, 08],
        [09, 10],
        [11, 12],
    ]);

    #[rustfmt::skip]
    let expected: Matrix<i32, 2, 2> = Matrix::from_rows([
        [058, 064],
        [139, 154],
    ]);

    assert_eq!(lhs * rhs, expected);
}

#[test]
fn test_multiply_vector() {
    #[rustfmt::skip]
    let matrix: Matrix3<i32> = Matrix::from_rows([
        [1, 0, 2],
        [0, 3, 0],
        [4, 0, 5],
    ]);
    let v = Vector3::<i32>::new([1, 2, 3]);
    let expected = Vector3::<i32>::new([7, 6, 19]);

    assert_eq!(matrix * v, expected);
    assert_eq!(matrix.multiply_vector(&v), expected);

    let mut out = Vector3::<i32>::ZERO;
    matrix.multiply_vector_into(&v, &mut out);
    assert_eq!(out, expected);

    let mut in_place = v;
    matrix.transform_vector_in_place(&mut in_place);
    assert_eq!(in_place, expected);

    let mut ctx = Context::<i32, 3>::new();
    let mut with_ctx = v;
    matrix.transform_vector_in_place_with(&mut with_ctx, &mut ctx);
    assert_eq!(with_ctx, expected);

    #[rustfmt::skip]
    let projection: Matrix<i32, 2, 3> = Matrix::from_rows([
        [1, 0, 0],
        [0, 1, 0],
    ]);
    assert_eq!(projection * v, Vector2::new([1, 2]));
}

#[test]
fn test_matrix_add() {
    #[rustfmt::skip]
    let a: Matrix2<i32> = Matrix::from_rows([
        [1, 2],
        [3, 4],
    ]);

    #[rustfmt::skip]
    let b: Matrix2<i32> = Matrix::from_rows([
        [10, 20],
        [30, 40],
    ]);

    assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
    assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
    assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
    assert_eq!(a * 3, Matrix::from_rows([[3, 6], [9, 12]]));
    assert_eq!(b / 10, a);

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c, b);

    c *= 2;
    c /= 4;
    assert_eq!(c, Matrix::from_rows([[5, 10], [15, 20]]));

    let mut d = a;
    d.scale(2).scale(5);
    assert_eq!(d, b);
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let matrix: Matrix<i32, 2, 3> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    #[rustfmt::skip]
    let transposed: Matrix<i32, 3, 2> = Matrix::from_rows([
        [1, 4],
        [2, 5],
        [3, 6],
    ]);

    assert_eq!(matrix.transpose(), transposed);
    assert_eq!(matrix.transpose().transpose(), matrix);

    let square: Matrix4<i32> = Matrix::from_fn(|row, col| (row * 4 + col) as i32);
    let mut in_place = square;
    in_place.transpose_in_place();

    assert_eq!(in_place, square.transpose());
    in_place.transpose_in_place();
    assert_eq!(in_place, square);
}

#[test]
fn test_determinant() {
    #[rustfmt::skip]
    let mat: Matrix2<i32> = Matrix::from_rows([
        [3, 8],
        [4, 6],
    ]);

    assert_eq!(mat.determinant(), -14);

    #[rustfmt::skip]
    let mat: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 1],
        [0, 3, 0],
        [4, 1, 2],
    ]);

    assert_eq!(mat.determinant(), -6);

    #[rustfmt::skip]
    let mat: Matrix3<i32> = Matrix::from_rows([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]);

    assert_eq!(mat.determinant(), 26);

    #[rustfmt::skip]
    let mat: Matrix3<i32> = Matrix::from_rows([
        [00, -1, 2],
        [03, 02, 0],
        [-1, 03, 2],
    ]);

    assert_eq!(mat.determinant(), 28);

    #[rustfmt::skip]
    let mat: Matrix4<i32> = Matrix::from_rows([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    assert_eq!(mat.determinant(), 35);
    assert_eq!(mat.transpose().determinant(), 35);

    #[rustfmt::skip]
    let mat: Matrix4<i32> = Matrix::from_rows([
        [02, 01, 00, 3],
        [04, -1, 02, 0],
        [-3, 02, 01, 5],
        [01, 00, -2, 3],
    ]);

    assert_eq!(mat.determinant(), -85);

    assert_eq!(Matrix2::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix3::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix4::<f64>::identity().determinant(), 1.0);

    assert_eq!(Matrix2::<f64>::zero().determinant(), 0.0);
    assert_eq!(Matrix3::<f64>::zero().determinant(), 0.0);
    assert_eq!(Matrix4::<f64>::zero().determinant(), 0.0);
}

#[test]
fn test_minor_and_cofactor() {
    #[rustfmt::skip]
    let mat: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 10],
    ]);

    assert_eq!(mat.minor(0, 0), Ok(2));
    assert_eq!(mat.minor(0, 1), Ok(-2));
    assert_eq!(mat.cofactor(0, 1), Ok(2));
    assert_eq!(mat.minor(2, 2), Ok(-3));
    assert_eq!(mat.cofactor(1, 2), Ok(6));

    // Expanding along any row gives the determinant.
    for row in 0..3 {
        let expansion: i32 = (0..3)
            .map(|col| mat.get(row, col).unwrap() * mat.cofactor(row, col).unwrap())
            .sum();
        assert_eq!(expansion, mat.determinant());
    }
}

#[test]
fn test_adjugate() {
    #[rustfmt::skip]
    let mat: Matrix2<i32> = Matrix::from_rows([
        [03, 6],
        [-4, 8],
    ]);

    #[rustfmt::skip]
    let expected_adjugate: Matrix2<i32> = Matrix::from_rows([
        [8, -6],
        [4, 03],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let expected_adjugate: Matrix3<i32> = Matrix::from_rows([
        [-3, 006, -3],
        [06, -12, 06],
        [-3, 006, -3],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat: Matrix4<i32> = Matrix::from_rows([
        [05, -2, 02, 7],
        [01, 00, 00, 3],
        [-3, 01, 05, 0],
        [03, -1, -9, 4],
    ]);

    #[rustfmt::skip]
    let expected_adjugate: Matrix4<i32> = Matrix::from_rows([
        [-12, 076, -60, -36],
        [-56, 208, -82, -58],
        [004, 004, -02, -10],
        [004, 004, 020, 012],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);
    assert_eq!(mat.cofactor_matrix(), expected_adjugate.transpose());
}

#[rustfmt::skip]
fn non_symmetric_4x4() -> Matrix4<f64> {
    Matrix::from_rows([
        [05.0, -2.0, 02.0, 7.0],
        [01.0, 00.0, 00.0, 3.0],
        [-3.0, 01.0, 05.0, 0.0],
        [03.0, -1.0, -9.0, 4.0],
    ])
}

#[test]
fn test_inverse() {
    let matrix = non_symmetric_4x4();
    assert_eq!(matrix.determinant(), 88.0);

    let inverse = matrix.inverse().unwrap();
    approx::assert_relative_eq!(matrix * inverse, Matrix4::identity(), epsilon = 1e-12);
    approx::assert_relative_eq!(inverse * matrix, Matrix4::identity(), epsilon = 1e-12);
    approx::assert_relative_eq!(inverse, matrix.adjugate() / 88.0, epsilon = 1e-15);
    approx::assert_relative_eq!(inverse.inverse().unwrap(), matrix, epsilon = 1e-12);

    #[rustfmt::skip]
    let matrix: Matrix3<f64> = Matrix::from_rows([
        [4.0, 7.0, 2.0],
        [3.0, 6.0, 1.0],
        [2.0, 5.0, 3.0],
    ]);
    let inverse = matrix.inverse().unwrap();
    approx::assert_relative_eq!(matrix * inverse, Matrix3::identity(), epsilon = 1e-12);

    let matrix: Matrix2<f32> = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
    let inverse = matrix.inverse().unwrap();
    approx::assert_relative_eq!(
        inverse,
        Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]),
        epsilon = 1e-6,
    );
}

#[test]
fn test_inverse_in_single_precision() {
    let matrix: Matrix4<f32> = non_symmetric_4x4().map(|elem| elem as f32);
    let inverse = matrix.inverse().unwrap();

    approx::assert_relative_eq!(matrix * inverse, Matrix4::identity(), epsilon = 1e-5);
    approx::assert_relative_eq!(inverse * matrix, Matrix4::identity(), epsilon = 1e-5);
    approx::assert_relative_eq!(
        inverse.inverse().unwrap(),
        matrix,
        epsilon = 1e-5,
        max_relative = 1e-5,
    );

    #[rustfmt::skip]
    let matrix: Matrix3<f32> = Matrix::from_rows([
        [4.0, 7.0, 2.0],
        [3.0, 6.0, 1.0],
        [2.0, 5.0, 3.0],
    ]);
    let inverse = matrix.inverse().unwrap();
    approx::assert_relative_eq!(matrix * inverse, Matrix3::identity(), epsilon = 1e-5);
}

#[test]
fn test_inverse_of_nearly_singular_matrix() {
    // The determinant is subnormal, so its reciprocal is not representable.
    let matrix = Matrix3::<f64>::from_diagonal([1e-300, 1e-10, 1.0]);
    assert!(matrix.has_inverse());

    let inverse = matrix.inverse().unwrap();
    assert!(inverse.elems().all(|elem| elem.is_finite()));
    approx::assert_relative_eq!(
        inverse,
        Matrix3::from_diagonal([1e300, 1e10, 1.0]),
        max_relative = 1e-12,
    );
}

#[test]
fn test_inverse_of_diagonal() {
    let matrix = Matrix3::<f64>::from_diagonal([2.0, 2.0, 2.0]);
    let inverse = matrix.inverse().unwrap();

    assert_eq!(inverse, Matrix3::from_diagonal([0.5, 0.5, 0.5]));
    assert_eq!(inverse.inverse(), Some(matrix));
}

#[test]
fn test_inverse_transposes_cofactors() {
    let matrix = non_symmetric_4x4();
    let det = matrix.determinant();
    let inverse = matrix.inverse().unwrap();

    // Scaling the cofactor matrix without transposing it only inverts symmetric matrices.
    let untransposed = matrix.cofactor_matrix() * (1.0 / det);
    assert_ne!(untransposed, inverse);
    approx::assert_relative_ne!(matrix * untransposed, Matrix4::identity(), epsilon = 1e-6);

    approx::assert_relative_eq!(untransposed.transpose(), inverse, epsilon = 1e-15);
}

#[test]
fn test_singular_matrices() {
    assert_eq!(Matrix2::<f64>::zero().inverse(), None);
    assert_eq!(Matrix3::<f64>::zero().inverse(), None);
    assert_eq!(Matrix4::<f64>::zero().inverse(), None);
    assert!(!Matrix4::<f64>::zero().has_inverse());

    let matrix = non_symmetric_4x4();
    assert!(matrix.has_inverse());

    for row in 0..4 {
        let singular = matrix.scaled_row(row, 0.0).unwrap();
        assert_eq!(singular.inverse(), None);

        let mut in_place = singular;
        assert!(in_place.invert_in_place().is_none());
        assert_eq!(in_place, singular);

        let mut ctx = Context::<f64, 4>::new();
        assert!(in_place.invert_in_place_with(&mut ctx).is_none());
        assert_eq!(in_place, singular);
    }
}

#[test]
fn test_inverse_with_context() {
    let mut ctx = Context::<f64, 4>::new();
    let matrix = non_symmetric_4x4();

    assert_eq!(matrix.inverse_with(&mut ctx), matrix.inverse());

    let mut out = Matrix4::<f64>::zero();
    assert!(matrix.inverse_into(&mut out, &mut ctx).is_some());
    assert_eq!(Some(out), matrix.inverse());

    let mut in_place = matrix;
    in_place.invert_in_place_with(&mut ctx).unwrap();
    assert_eq!(Some(in_place), matrix.inverse());

    let mut in_place = matrix;
    in_place.invert_in_place().unwrap();
    assert_eq!(Some(in_place), matrix.inverse());

    let mut ctx = Context::<f64, 3>::new();
    let matrix = Matrix3::<f64>::from_diagonal([1.0, 2.0, 4.0]);
    assert_eq!(
        matrix.inverse_with(&mut ctx),
        Some(Matrix3::from_diagonal([1.0, 0.5, 0.25])),
    );
}

#[test]
fn test_row_operations() {
    #[rustfmt::skip]
    let matrix: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    let exchanged = matrix.exchanged_rows(0, 2).unwrap();
    assert_eq!(exchanged.row(0), matrix.row(2));
    assert_eq!(exchanged.row(2), matrix.row(0));
    assert_eq!(exchanged.exchanged_rows(0, 2), Ok(matrix));
    assert_eq!(matrix.exchanged_rows(1, 1), Ok(matrix));

    #[rustfmt::skip]
    let scaled: Matrix3<i32> = Matrix::from_rows([
        [01, 002, 003],
        [-8, -10, -12],
        [07, 008, 009],
    ]);
    assert_eq!(matrix.scaled_row(1, -2), Ok(scaled));

    #[rustfmt::skip]
    let eliminated: Matrix3<i32> = Matrix::from_rows([
        [1, 02, 003],
        [4, 05, 006],
        [0, -6, -12],
    ]);
    assert_eq!(matrix.added_row_scaled(2, 0, 2, -7), Ok(eliminated));

    #[rustfmt::skip]
    let summed: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 3],
        [5, 7, 9],
        [7, 8, 9],
    ]);
    assert_eq!(matrix.added_row_scaled(0, 1, 1, 1), Ok(summed));
}

#[test]
fn test_row_operations_reject_bad_indices() {
    let mut matrix: Matrix3<i32> = Matrix::from_fn(|row, col| (row * 3 + col) as i32);
    let before = matrix;
    let mut ctx = Context::<i32, 3>::new();

    assert_eq!(
        matrix.exchange_rows(0, 3).err(),
        Some(IndexOutOfRange::new(Axis::Row, 3, 3)),
    );
    assert!(matrix.exchange_rows(usize::MAX, 0).is_err());
    assert!(matrix.scale_row(3, 0).is_err());
    assert!(matrix.add_row_scaled(0, 1, 3, 1).is_err());
    assert!(matrix.add_row_scaled(0, 5, 1, 1).is_err());
    assert!(matrix.exchange_rows_with(0, 3, &mut ctx).is_err());
    assert!(matrix.scale_row_with(4, 2, &mut ctx).is_err());
    assert!(matrix.add_row_scaled_with(3, 0, 0, 2, &mut ctx).is_err());

    assert_eq!(matrix, before);
}

#[test]
fn test_row_operations_with_context() {
    let matrix: Matrix4<f64> = Matrix::from_fn(|row, col| (row * 4 + col) as f64 + 0.5);
    let mut ctx = Context::<f64, 4>::new();

    let mut plain = matrix;
    let mut with_ctx = matrix;

    plain.exchange_rows(1, 3).unwrap();
    with_ctx.exchange_rows_with(1, 3, &mut ctx).unwrap();
    assert_eq!(plain, with_ctx);

    plain.scale_row(2, 0.25).unwrap();
    with_ctx.scale_row_with(2, 0.25, &mut ctx).unwrap();
    assert_eq!(plain, with_ctx);

    plain.add_row_scaled(0, 2, 3, -1.5).unwrap();
    with_ctx.add_row_scaled_with(0, 2, 3, -1.5, &mut ctx).unwrap();
    assert_eq!(plain, with_ctx);

    // Swapping twice restores the original.
    let mut twice = matrix;
    twice.exchange_rows_with(0, 3, &mut ctx).unwrap();
    twice.exchange_rows_with(0, 3, &mut ctx).unwrap();
    assert_eq!(twice, matrix);
}

#[cfg(any(feature = "std", feature = "libm"))]
#[test]
fn test_rotation_by_zero_is_identity() {
    let axes = [
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 2.0, 3.0],
        [-0.3, 0.4, -12.0],
        [0.0, 0.0, 0.0],
    ];

    for axis in axes {
        let axis = Vector3::<f64>::new(axis);
        assert_eq!(
            Matrix4::<f64>::rotation(Angle::radians(0.0), axis),
            Matrix4::identity(),
        );
        assert_eq!(
            Matrix3::<f64>::rotation(Angle::degrees(0.0), axis),
            Matrix3::identity(),
        );
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
#[test]
fn test_rotation_matrices() {
    use approx::assert_abs_diff_eq;

    let x = Vector3::<f64>::new([1.0, 0.0, 0.0]);
    let y = Vector3::<f64>::new([0.0, 1.0, 0.0]);
    let z = Vector3::<f64>::new([0.0, 0.0, 1.0]);

    for degrees in [-135.0, -30.0, 10.0, 45.0, 90.0, 200.0] {
        let angle = Angle::<f64>::degrees(degrees);

        assert_abs_diff_eq!(
            Matrix4::rotation(angle, x),
            Matrix4::x_axis_rotation(angle),
            epsilon = 1e-12,
        );
        assert_abs_diff_eq!(
            Matrix4::rotation(angle, y),
            Matrix4::y_axis_rotation(angle),
            epsilon = 1e-12,
        );
        assert_abs_diff_eq!(
            Matrix4::rotation(angle, z),
            Matrix4::z_axis_rotation(angle),
            epsilon = 1e-12,
        );
        assert_abs_diff_eq!(
            Matrix3::rotation(angle, z * 5.0),
            Matrix3::z_axis_rotation(angle),
            epsilon = 1e-12,
        );

        // Rotations are orthonormal, so the inverse is the transpose.
        let rotation = Matrix4::<f64>::rotation(angle, Vector3::new([1.0, -2.0, 0.5]));
        assert_abs_diff_eq!(rotation.determinant(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotation.inverse().unwrap(), rotation.transpose(), epsilon = 1e-12);
    }

    let quarter_turn = Matrix4::<f64>::rotation(Angle::degrees(90.0), z);
    assert_abs_diff_eq!(
        quarter_turn * Vector4::new([1.0, 0.0, 0.0, 1.0]),
        Vector4::new([0.0, 1.0, 0.0, 1.0]),
        epsilon = 1e-12,
    );
    assert_abs_diff_eq!(
        quarter_turn * Vector4::new([0.0, 1.0, 0.0, 1.0]),
        Vector4::new([-1.0, 0.0, 0.0, 1.0]),
        epsilon = 1e-12,
    );

    let quarter_turn = Matrix3::<f64>::rotation(Angle::degrees(90.0), x);
    assert_abs_diff_eq!(quarter_turn * y, z, epsilon = 1e-12);
}

#[cfg(any(feature = "std", feature = "libm"))]
#[test]
fn test_translation_and_scaling() {
    let offset = Vector3::<f64>::new([1.0, 2.0, 3.0]);
    let translation = Matrix4::<f64>::translation(offset);

    assert_eq!(translation.col(3), Ok(Vector4::new([1.0, 2.0, 3.0, 1.0])));
    assert_eq!(
        translation * Vector4::new([4.0, 5.0, 6.0, 1.0]),
        Vector4::new([5.0, 7.0, 9.0, 1.0]),
    );
    // Directions are not translated.
    assert_eq!(
        translation * Vector4::new([4.0, 5.0, 6.0, 0.0]),
        Vector4::new([4.0, 5.0, 6.0, 0.0]),
    );
    assert_eq!(translation.inverse(), Some(Matrix4::translation(-offset)));

    let scaling = Matrix4::<f64>::scaling(Vector3::new([2.0, 4.0, 8.0]));
    assert_eq!(scaling.diagonal(), [2.0, 4.0, 8.0, 1.0]);
    assert_eq!(
        scaling.inverse(),
        Some(Matrix4::scaling(Vector3::new([0.5, 0.25, 0.125]))),
    );

    let translation_2d = Matrix3::<f64>::translation_2d(Vector2::new([-1.0, 3.0]));
    assert_eq!(
        translation_2d * Vector3::new([1.0, 1.0, 1.0]),
        Vector3::new([0.0, 4.0, 1.0]),
    );

    let scaling_2d = Matrix3::<f64>::scaling_2d(Vector2::new([3.0, 0.5]));
    assert_eq!(
        scaling_2d * Vector3::new([2.0, 2.0, 1.0]),
        Vector3::new([6.0, 1.0, 1.0]),
    );
}

#[cfg(any(feature = "std", feature = "libm"))]
#[test]
fn test_transform_composition() {
    let offset = Vector3::<f64>::new([1.0, -2.0, 0.5]);
    let axis = Vector3::<f64>::new([0.0, 1.0, 1.0]);
    let angle = Angle::<f64>::degrees(33.0);
    let base = Matrix4::<f64>::scaling(Vector3::new([2.0, 3.0, 4.0]));
    let mut ctx = Context::<f64, 4>::new();

    let translated = base.translate_by_vector(offset);
    assert_eq!(translated, base * Matrix4::translation(offset));

    let mut in_place = base;
    in_place.translate_by_vector_in_place(offset);
    assert_eq!(in_place, translated);

    let mut with_ctx = base;
    with_ctx.translate_by_vector_in_place_with(offset, &mut ctx);
    assert_eq!(with_ctx, translated);

    let rotated = base.rotate(angle, axis);
    assert_eq!(rotated, base * Matrix4::rotation(angle, axis));

    let mut in_place = base;
    in_place.rotate_in_place(angle, axis);
    assert_eq!(in_place, rotated);

    let mut with_ctx = base;
    with_ctx.rotate_in_place_with(angle, axis, &mut ctx);
    assert_eq!(with_ctx, rotated);

    // The translation is applied before the scaling.
    assert_eq!(
        translated * Vector4::new([0.0, 0.0, 0.0, 1.0]),
        Vector4::new([2.0, -6.0, 2.0, 1.0]),
    );
}

#[cfg(any(feature = "std", feature = "libm"))]
#[test]
fn test_typed_spaces() {
    struct Model;
    struct World;
    struct View;

    let translation: Matrix4<f64> = Matrix4::translation(Vector3::new([10.0, 0.0, 0.0]));
    let scaling: Matrix4<f64> = Matrix4::scaling(Vector3::splat(0.5));

    let model_to_world: Matrix4<f64, Model, World> = translation.cast_space();
    let world_to_view: Matrix4<f64, World, View> = scaling.cast_space();

    let model_to_view: Matrix4<f64, Model, View> = world_to_view * model_to_world;

    let point: Vector4<f64, Model> = Vector::new([2.0, 4.0, 6.0, 1.0]);
    let in_view: Vector4<f64, View> = model_to_view * point;
    assert_eq!(in_view, Vector::new([6.0, 2.0, 3.0, 1.0]));

    let view_to_model: Matrix4<f64, View, Model> = model_to_view.inverse().unwrap();
    let back: Vector4<f64, Model> = view_to_model * in_view;
    assert_eq!(back, point);

    let mut ctx = Context::<f64, 4>::new();
    let mut moved = model_to_world;
    moved.translate_by_vector_in_place_with(Vector::new([0.0, 1.0, 0.0]), &mut ctx);
    assert_eq!(moved.col(3), Ok(Vector::new([10.0, 1.0, 0.0, 1.0])));
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_as_bytes() {
    let matrix: Matrix2<u32> = Matrix::from_rows([[1, 2], [3, 4]]);
    let bytes = matrix.as_bytes();

    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[4..8], &3u32.to_ne_bytes());
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversions() {
    #[rustfmt::skip]
    let matrix: Matrix3<i32> = Matrix::from_rows([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    let mint_matrix: mint::ColumnMatrix3<i32> = matrix.into();
    assert_eq!(mint_matrix.x, mint::Vector3 { x: 1, y: 4, z: 7 });
    assert_eq!(mint_matrix.z, mint::Vector3 { x: 3, y: 6, z: 9 });

    let round_trip: Matrix3<i32> = mint_matrix.into();
    assert_eq!(round_trip, matrix);
}
