use crate::expr::FilterExpr;
use std::fmt::{self, Display};

// Diagnostic rendering only; backends consume `to_canonical`.
impl Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq(c) => write!(f, "{} = {}", c.key(), c.value()),
            Self::Gt(c) => write!(f, "{} > {}", c.key(), c.value()),
            Self::Lt(c) => write!(f, "{} < {}", c.key(), c.value()),
            Self::In(m) => {
                write!(f, "{} IN [", m.key())?;
                for (i, v) in m.values().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Self::And(xs) if xs.is_empty() => f.write_str("TRUE"),
            Self::Or(xs) if xs.is_empty() => f.write_str("FALSE"),
            Self::And(xs) => write_joined(f, xs, " AND "),
            Self::Or(xs) => write_joined(f, xs, " OR "),
            Self::Not(x) => write!(f, "NOT {x}"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, xs: &[FilterExpr], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, x) in xs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{x}")?;
    }
    f.write_str(")")
}
