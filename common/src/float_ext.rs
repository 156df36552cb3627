pub trait FloatExt {
    fn approximately_eq(self, other: Self) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON as f32
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        (self - other).abs() < crate::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_kernel_sums_compare_within_epsilon() {
        let weights = [1.0_f64 / 9.0; 9];
        let sum: f64 = weights.iter().sum();
        assert!(sum.approximately_eq(1.0));
        assert!(!sum.approximately_eq(1.00001));
    }

    #[test]
    fn f32_at_epsilon_boundary() {
        // EPSILON = 1e-6
        assert!(0.0_f32.approximately_eq(0.5e-6));
        assert!(!0.0_f32.approximately_eq(2e-6));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!f64::NAN.approximately_eq(f64::NAN));
        assert!(!f32::NAN.approximately_eq(0.0));
    }

    #[test]
    fn infinity_not_approximately_eq_to_finite() {
        assert!(!f64::INFINITY.approximately_eq(255.0));
        assert!(!255.0_f64.approximately_eq(f64::INFINITY));
    }
}
