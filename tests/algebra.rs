use approx::assert_relative_eq;
use densemat::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rotation(theta: f64) -> Matrix<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix::from([[cos, -sin], [sin, cos]])
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
    let mut matrix = Matrix::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            matrix[(r, c)] = rng.random_range(-20..=20);
        }
    }
    matrix
}

#[test]
fn addition_commutes_and_associates() {
    let a = Matrix::from([[1, -2], [3, 4]]);
    let b = Matrix::from([[5, 6], [-7, 8]]);
    let c = Matrix::from([[9, 10], [11, -12]]);

    assert_eq!(a.try_add(&b).unwrap(), b.try_add(&a).unwrap());
    assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
}

#[test]
fn subtraction_inverts_addition() {
    let a = Matrix::from([[1, 2, 3], [4, 5, 6]]);
    let b = Matrix::from([[-9, 8, -7], [6, -5, 4]]);

    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(&a - &Matrix::new(2, 3), a);
}

#[test]
fn multiplication_associates_and_distributes() {
    let a = Matrix::from([[1, 0, -2], [3, 1, 4]]);
    let b = Matrix::from([[2, 1, 0, 1], [0, -1, 2, 0], [1, 1, 1, 1]]);
    let c = Matrix::from([[1, 2], [0, 1], [2, 0], [1, 1]]);
    let d = Matrix::from([[0, 2, 1, -1], [1, 1, 0, 0], [2, 0, 0, 3]]);

    assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    assert_eq!(&a * &(&b + &d), &(&a * &b) + &(&a * &d));
}

#[test]
fn identity_is_a_two_sided_unit() {
    let a = Matrix::from([[2, -1], [0, 3], [5, 4]]);
    assert_eq!(Matrix::identity(3).try_mul(&a).unwrap(), a);
    assert_eq!(a.try_mul(&Matrix::identity(2)).unwrap(), a);

    // A freshly loaded identity behaves the same as the constructor's.
    let mut loaded = Matrix::from([[7, 7], [7, 7]]);
    loaded.load_identity().unwrap();
    assert_eq!(loaded, Matrix::identity(2));
    assert_eq!(a.try_mul(&loaded).unwrap(), a);
}

#[test]
fn opposite_rotations_compose_to_the_identity() {
    let theta = 0.7;
    let product = rotation(theta).try_mul(&rotation(-theta)).unwrap();
    let identity = Matrix::<f64>::identity(2);
    for r in 0..2 {
        for c in 0..2 {
            assert_relative_eq!(product[(r, c)], identity[(r, c)], epsilon = 1e-12);
        }
    }
}

#[test]
fn dimension_mismatch_reports_expected_then_received() {
    let a = Matrix::<i64>::identity(3);
    let b = Matrix::<i64>::new(2, 2);

    let err = a.try_add(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected 3 rows and 3 columns. Received 2 rows and 2 columns."
    );

    // Multiplication keys on the inner dimension instead.
    let err = b.try_mul(&a).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected_rows: 2,
            received_rows: 3,
            ..
        }
    ));
}

#[test]
fn random_matrices_satisfy_the_ring_identities() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let a = random_matrix(&mut rng, 3, 3);
        let b = random_matrix(&mut rng, 3, 3);
        let c = random_matrix(&mut rng, 3, 3);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a - &b) + &b, a);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

#[test]
fn bookkeeping_pipeline_renders_canonically() {
    let mut totals = Matrix::<i64>::new(2, 3);
    totals.set_row(0, &[4, 0, 2]).unwrap();
    totals.set_row_from(1, &[9, 9, 1, 3, 0], 2, 3).unwrap();
    totals += Matrix::from([[1, 1, 1], [1, 1, 1]]);

    assert_eq!(totals.to_string(), "[5, 1, 3]\n[2, 4, 1]\n");
    assert_eq!(totals.col(2), vec![3, 1]);
}
