use std::fmt::{self, Display};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{Result, VectorError};

#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        Vector { data: data.into() }
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl Deref for Vector {
    type Target = Vec<f64>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::new(iter.into_iter().collect::<Vec<f64>>())
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format(self))
    }
}

/// Multiplies every element by `factor`.
pub fn scale<T>(vector: &[T], factor: f64) -> Vector
where
    T: Copy + Into<f64>,
{
    vector.iter().map(|&x| x.into() * factor).collect()
}

/// Element-wise sum of two vectors of the same dimension.
pub fn add<T, U>(v1: &[T], v2: &[U]) -> Result<Vector>
where
    T: Copy + Into<f64>,
    U: Copy + Into<f64>,
{
    check_dimension(v1.len(), v2.len())?;
    Ok(v1
        .iter()
        .zip(v2.iter())
        .map(|(&a, &b)| a.into() + b.into())
        .collect())
}

/// Scalar (dot) product of two vectors of the same dimension.
pub fn dot<T, U>(v1: &[T], v2: &[U]) -> Result<f64>
where
    T: Copy + Into<f64>,
    U: Copy + Into<f64>,
{
    check_dimension(v1.len(), v2.len())?;
    Ok(v1
        .iter()
        .zip(v2.iter())
        .map(|(&a, &b)| a.into() * b.into())
        .sum())
}

/// Space separated elements, each rendered as a floating value.
pub fn format<T>(vector: &[T]) -> String
where
    T: Copy + Into<f64>,
{
    vector
        .iter()
        .map(|&x| format!("{:?} ", x.into()))
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn check_dimension(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(VectorError::DimensionMismatch { left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_scale() {
        let v = scale(&[1, 2, 0], 2.0);
        assert_eq!(v, Vector::new([2.0, 4.0, 0.0]));
    }

    #[test]
    fn test_scale_keeps_length_and_multiplies_each_element() {
        let input = [1.5, -3.0, 0.25, 1e6];
        for k in [0.0, -1.0, 3.5] {
            let v = scale(&input, k);
            assert_eq!(v.len(), input.len());
            for (x, y) in input.iter().zip(v.iter()) {
                assert_eq!(*y, x * k);
            }
        }
    }

    #[test]
    fn test_scale_empty() {
        assert!(scale::<f64>(&[], 4.0).is_empty());
    }

    #[test]
    fn test_add() -> Result<()> {
        let v = add(&[1, 2, 0], &[1.2, -2.5, 10.0])?;
        assert_close(&v, &[2.2, -0.5, 10.0]);
        Ok(())
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let err = add(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            VectorError::DimensionMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_dot() -> Result<()> {
        assert_eq!(dot(&[1, 2, 3], &[4, 5, 6])?, 32.0);
        assert_eq!(dot::<f64, f64>(&[], &[])?, 0.0);
        Ok(())
    }

    #[test]
    fn test_dot_is_commutative() -> Result<()> {
        let pairs = [
            (vec![1.0, 2.0, 0.0], vec![1.2, -2.5, 10.0]),
            (vec![0.1, 0.2, 0.3, 0.4], vec![-7.0, 3.25, 1e-3, 42.0]),
            (vec![5.0], vec![-5.0]),
        ];
        for (a, b) in &pairs {
            assert_eq!(dot(a, b)?, dot(b, a)?);
        }
        Ok(())
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let err = dot(&[1, 2, 3], &[1, 2]).unwrap_err();
        assert!(err.to_string().contains("vectors must have the same dimension"));
    }

    #[test]
    fn test_format() {
        assert_eq!(format(&[1, 2, 0]), "1.0 2.0 0.0");
        assert_eq!(format(&[1.2, -2.5, 10.0]), "1.2 -2.5 10.0");
        assert_eq!(format::<f64>(&[]), "");
        assert_eq!(Vector::new([0.5]).to_string(), "0.5");
    }
}
