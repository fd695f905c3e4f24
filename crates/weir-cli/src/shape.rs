//! Plane geometry for the menu driver.

use std::fmt;
use std::str::FromStr;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vertex {
    /// Create a vertex at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// A quadrilateral given by four vertices in boundary order.
///
/// The vertices are not checked to form an actual square; area and center
/// are computed for whatever polygon they describe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    /// Corners in boundary order, either orientation.
    pub vertices: [Vertex; 4],
}

impl Square {
    /// Create a square from its four corners.
    pub const fn new(a: Vertex, b: Vertex, c: Vertex, d: Vertex) -> Self {
        Self {
            vertices: [a, b, c, d],
        }
    }

    /// Build from eight coordinates `x0 y0 x1 y1 x2 y2 x3 y3`.
    pub fn from_coords(c: [f64; 8]) -> Self {
        Self::new(
            Vertex::new(c[0], c[1]),
            Vertex::new(c[2], c[3]),
            Vertex::new(c[4], c[5]),
            Vertex::new(c[6], c[7]),
        )
    }

    /// Enclosed area by the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice: f64 = (0..4)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % 4];
                p.x * q.y - q.x * p.y
            })
            .sum();
        twice.abs() / 2.0
    }

    /// Mean of the four vertices.
    pub fn center(&self) -> Vertex {
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Vertex::new(sx / 4.0, sy / 4.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.vertices;
        write!(f, "[{a}] [{b}] [{c}] [{d}]")
    }
}

/// A square could not be parsed from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseSquareError {
    /// A token was not a number.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// The input did not hold exactly eight numbers.
    WrongCount {
        /// How many tokens were found.
        found: usize,
    },
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { token } => write!(f, "'{token}' is not a number"),
            Self::WrongCount { found } => {
                write!(f, "a square needs 8 coordinates, got {found}")
            }
        }
    }
}

impl std::error::Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(ParseSquareError::WrongCount {
                found: tokens.len(),
            });
        }
        let mut coords = [0.0; 8];
        for (slot, token) in coords.iter_mut().zip(&tokens) {
            *slot = token
                .parse()
                .map_err(|_| ParseSquareError::InvalidNumber {
                    token: (*token).to_string(),
                })?;
        }
        Ok(Self::from_coords(coords))
    }
}
