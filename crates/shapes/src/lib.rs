//! # Shapes Crate
//!
//! Area computation over polymorphic shapes.
//!
//! `Rectangle` and `Square` are separate types: a square is not a rectangle
//! with synchronized setters, and nothing here lets a caller change one
//! dimension of a square behind its back. Any `Shape` can stand in for any
//! other wherever the trait is expected.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    /// A dimension was negative, NaN, or infinite
    #[error("Invalid {what}: {value}")]
    InvalidDimension { what: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ShapeError>;

/// Something with a measurable area.
pub trait Shape {
    fn name(&self) -> &str;
    fn area(&self) -> f64;
}

fn check_dimension(what: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ShapeError::InvalidDimension { what, value });
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    pub fn new(side: f64) -> Result<Self> {
        Ok(Self {
            side: check_dimension("side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

/// Sum of areas over any mix of shapes.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        let rect = Rectangle::new(2.0, 3.0).unwrap();
        assert_eq!(rect.area(), 6.0);
    }

    #[test]
    fn test_square_area() {
        let square = Square::new(5.0).unwrap();
        assert_eq!(square.area(), 25.0);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(Rectangle::new(-1.0, 3.0).is_err());
        assert!(Rectangle::new(2.0, f64::NAN).is_err());
        assert!(Square::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_any_shape_substitutes_in_total_area() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(2.0, 3.0).unwrap()),
            Box::new(Square::new(5.0).unwrap()),
        ];

        assert_eq!(total_area(&shapes), 31.0);
    }

    #[test]
    fn test_total_area_of_nothing() {
        assert_eq!(total_area(&[]), 0.0);
    }
}
