use crate::convergence::Side;
use std::fmt;

/// A real function of one real variable.
pub trait Integrand {
    fn evaluate(&self, x: f64) -> f64;
    fn name(&self) -> &'static str;
}

/// Integrands that are bounded on any finite interval of their domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProperIntegrand {
    /// -x^3 - x^2 + x + 3
    Cubic,
    /// sin(x)
    Sine,
    /// e^x
    Exp,
    /// tan(x) cos(x) + x
    TanCosPlusX,
}

impl ProperIntegrand {
    pub const ALL: [ProperIntegrand; 4] = [
        ProperIntegrand::Cubic,
        ProperIntegrand::Sine,
        ProperIntegrand::Exp,
        ProperIntegrand::TanCosPlusX,
    ];

    /// Closed-form antiderivative.
    pub fn antiderivative(self, x: f64) -> f64 {
        match self {
            ProperIntegrand::Cubic => {
                -x.powi(4) / 4.0 - x.powi(3) / 3.0 + x * x / 2.0 + 3.0 * x
            }
            ProperIntegrand::Sine => -x.cos(),
            ProperIntegrand::Exp => x.exp(),
            ProperIntegrand::TanCosPlusX => -x.cos() + x * x / 2.0,
        }
    }

    /// Exact integral over `[a, b]`.
    pub fn exact(self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl Integrand for ProperIntegrand {
    fn evaluate(&self, x: f64) -> f64 {
        match *self {
            ProperIntegrand::Cubic => -x.powi(3) - x * x + x + 3.0,
            ProperIntegrand::Sine => x.sin(),
            ProperIntegrand::Exp => x.exp(),
            ProperIntegrand::TanCosPlusX => x.tan() * x.cos() + x,
        }
    }

    fn name(&self) -> &'static str {
        match *self {
            ProperIntegrand::Cubic => "-x^3-x^2+x+3",
            ProperIntegrand::Sine => "sin(x)",
            ProperIntegrand::Exp => "e^x",
            ProperIntegrand::TanCosPlusX => "tg(x)*cos(x)+x",
        }
    }
}

/// Integrands with a single singularity at a known point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImproperIntegrand {
    /// 1/sqrt(x), singular at 0
    InvSqrt,
    /// 1/(1-x)^2, singular at 1
    InvSquareOneMinusX,
    /// ln(x), singular at 0
    Ln,
    /// 1/x, singular at 0
    Reciprocal,
}

impl ImproperIntegrand {
    pub const ALL: [ImproperIntegrand; 4] = [
        ImproperIntegrand::InvSqrt,
        ImproperIntegrand::InvSquareOneMinusX,
        ImproperIntegrand::Ln,
        ImproperIntegrand::Reciprocal,
    ];

    /// Abscissa of the singularity.
    pub fn singular_point(self) -> f64 {
        match self {
            ImproperIntegrand::InvSquareOneMinusX => 1.0,
            ImproperIntegrand::InvSqrt | ImproperIntegrand::Ln | ImproperIntegrand::Reciprocal => {
                0.0
            }
        }
    }

    /// Side of the singular point the integration interval must lie on.
    pub fn admissible_side(self) -> Side {
        match self {
            ImproperIntegrand::InvSquareOneMinusX => Side::Below,
            _ => Side::Above,
        }
    }
}

impl Integrand for ImproperIntegrand {
    fn evaluate(&self, x: f64) -> f64 {
        match *self {
            ImproperIntegrand::InvSqrt => x.sqrt().recip(),
            ImproperIntegrand::InvSquareOneMinusX => (1.0 - x).powi(2).recip(),
            ImproperIntegrand::Ln => x.ln(),
            ImproperIntegrand::Reciprocal => x.recip(),
        }
    }

    fn name(&self) -> &'static str {
        match *self {
            ImproperIntegrand::InvSqrt => "1/sqrt(x)",
            ImproperIntegrand::InvSquareOneMinusX => "1/(1-x)^2",
            ImproperIntegrand::Ln => "ln(x)",
            ImproperIntegrand::Reciprocal => "1/x",
        }
    }
}

impl fmt::Display for ProperIntegrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for ImproperIntegrand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (singular at {})",
            self.name(),
            self.singular_point()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_proper_values() {
        assert_eq!(ProperIntegrand::Cubic.evaluate(1.0), 2.0);
        assert_eq!(ProperIntegrand::Exp.evaluate(0.0), 1.0);
        test_rel(ProperIntegrand::TanCosPlusX.evaluate(0.5), 0.5f64.sin() + 0.5, 1e-14);
        test_rel(ProperIntegrand::Cubic.exact(0.0, 1.0), 35.0 / 12.0, 1e-15);
        test_rel(ProperIntegrand::Sine.exact(0.0, std::f64::consts::PI), 2.0, 1e-15);
    }

    #[test]
    fn test_singular_at_declared_point() {
        for f in ImproperIntegrand::ALL.iter() {
            assert!(!f.evaluate(f.singular_point()).is_finite(), "{}", f);
        }
    }

    #[test]
    fn test_sides() {
        assert_eq!(ImproperIntegrand::InvSqrt.admissible_side(), Side::Above);
        assert_eq!(ImproperIntegrand::InvSquareOneMinusX.admissible_side(), Side::Below);
    }

    #[test]
    fn test_names() {
        assert_eq!(ProperIntegrand::Sine.to_string(), "sin(x)");
        assert_eq!(ImproperIntegrand::Reciprocal.to_string(), "1/x (singular at 0)");
    }
}
