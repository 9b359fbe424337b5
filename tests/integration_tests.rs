// tests/integration_tests.rs
//! Integration tests across matrices, vectors and angles

use std::io;
use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use mathkit::prelude::*;

fn random_matrix(rng: &mut fastrand::Rng, rows: usize, columns: usize) -> Matrix<f64> {
    let data = (0..rows * columns).map(|_| rng.f64() * 20.0 - 10.0).collect();
    Matrix::from_vec(rows, columns, data).unwrap()
}

fn assert_close(actual: &Matrix<f64>, expected: &Matrix<f64>, epsilon: f64) {
    assert_eq!(actual.shape(), expected.shape());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}

#[test]
fn test_add_then_subtract_restores_operand() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..32 {
        let (rows, columns) = (rng.usize(1..6), rng.usize(1..6));
        let a = random_matrix(&mut rng, rows, columns);
        let b = random_matrix(&mut rng, rows, columns);

        let restored = a.try_add(&b).unwrap().try_sub(&b).unwrap();
        assert_close(&restored, &a, 1e-9);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..32 {
        let (rows, columns) = (rng.usize(1..7), rng.usize(1..7));
        let a = random_matrix(&mut rng, rows, columns);
        let mut b = a.clone();
        b.transpose();
        b.transpose();
        assert_eq!(b, a);
    }
}

#[test]
fn test_identity_is_neutral_for_product() {
    let mut rng = fastrand::Rng::with_seed(13);

    for n in 1..6 {
        let a = random_matrix(&mut rng, n, n);
        let mut id = Matrix::<f64>::zeros(n, n);
        id.make_identity().unwrap();

        assert_eq!(a.try_product(&id).unwrap(), a);
        assert_eq!(id.try_product(&a).unwrap(), a);
    }
}

#[test]
fn test_product_is_associative() {
    let mut rng = fastrand::Rng::with_seed(17);

    for _ in 0..16 {
        let (m, n, p, q) = (rng.usize(1..5), rng.usize(1..5), rng.usize(1..5), rng.usize(1..5));
        let a = random_matrix(&mut rng, m, n);
        let b = random_matrix(&mut rng, n, p);
        let c = random_matrix(&mut rng, p, q);

        let left = a.try_product(&b).unwrap().try_product(&c).unwrap();
        let right = a.try_product(&b.try_product(&c).unwrap()).unwrap();
        assert_close(&left, &right, 1e-8);
    }
}

#[test]
fn test_identity_times_ones() {
    let mut id = Matrix::<f32>::new(2, 2, 0.0);
    id.make_identity().unwrap();
    let ones = Matrix::<f32>::new(2, 2, 1.0);

    let product = &id * &ones;
    assert_eq!(product, ones);
    assert_eq!(product.trace(), Ok(2.0));
}

#[test]
fn test_product_shapes() {
    let a = Matrix::<f32>::new(2, 3, 1.0);
    let b = Matrix::<f32>::new(3, 2, 1.0);
    let incompatible = Matrix::<f32>::new(2, 2, 1.0);

    let c = &a * &b;
    assert_eq!(c.shape(), (2, 2));
    assert!(c.iter().all(|&v| v == 3.0));

    let unchanged = &a * &incompatible;
    assert_eq!(unchanged.shape(), (2, 3));
    assert_eq!(unchanged, a);

    assert_eq!(
        a.try_product(&incompatible),
        Err(NumericsError::ShapeMismatch {
            operation: "product",
            left: (2, 3),
            right: (2, 2),
        })
    );
}

#[test]
fn test_degrees_to_radians() {
    let right: Degrees = Degrees::new(90.0);
    let rad: Radians = right.into();
    assert_abs_diff_eq!(rad.value(), f32::HALF_PI, epsilon = 1e-6);
}

#[test]
fn test_angle_round_trips() {
    let mut rng = fastrand::Rng::with_seed(19);

    for _ in 0..64 {
        let raw = rng.f64() * 1440.0 - 720.0;
        let deg: Degrees<f64> = Degrees::new(raw);

        let rad: Radians<f64> = deg.into();
        assert_abs_diff_eq!(Degrees::<f64>::from(rad).value(), raw, epsilon = 1e-9);

        let rev: Revolutions<f64> = deg.into();
        assert_abs_diff_eq!(Degrees::<f64>::from(rev).value(), raw, epsilon = 1e-9);
    }
}

#[test]
fn test_cross_product_of_axes() {
    let x = Vector3::new(1.0_f32, 0.0, 0.0);
    let y = Vector3::new(0.0_f32, 1.0, 0.0);
    assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_vec2_magnitude() {
    assert_eq!(Vector2::new(3.0_f32, 4.0).magnitude(), 5.0);
}

#[test]
fn test_normalized_vectors_have_unit_length() {
    let mut rng = fastrand::Rng::with_seed(23);

    for _ in 0..64 {
        let v = Vector3::new(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5) * 100.0;
        if v.magnitude() == 0.0 {
            continue;
        }
        assert_abs_diff_eq!(v.normalized().unwrap().magnitude(), 1.0, epsilon = 1e-12);

        let w = Vector2::new(v.x, v.y);
        assert_abs_diff_eq!(w.normalized().unwrap().magnitude(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_rotation_with_converted_angles() {
    let quarter: Revolutions<f64> = Revolutions::new(0.25);

    let mut a = Vector3::new(1.0_f64, 0.0, 0.0);
    a.rotate_z(Radians::<f64>::from(quarter));

    let mut b = Vector3::new(1.0_f64, 0.0, 0.0);
    b.rotate_z(Degrees::<f64>::new(90.0));

    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
    assert_abs_diff_eq!(a.y, -1.0, epsilon = 1e-12);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_operator_fallback_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let a = Matrix::<f64>::new(2, 3, 1.0);
    let b = Matrix::<f64>::new(3, 3, 1.0);

    let sum = tracing::subscriber::with_default(subscriber, || &a + &b);
    assert_eq!(sum, a);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("WARN"));
    assert!(output.contains("returning left operand unchanged"));
    assert!(output.contains("Shape mismatch in add: left is 2x3, right is 3x3"));
}
