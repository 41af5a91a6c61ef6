use derive_more::Display;

///
/// Float64
///
/// Finite f64 only; the sign of zero is kept so `-0.0` serializes as given
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display)]
pub struct Float64(f64);

impl Float64 {
    /// Fallible constructor that rejects non-finite values.
    #[must_use]
    pub fn try_new(v: f64) -> Option<Self> {
        v.is_finite().then_some(Self(v))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
