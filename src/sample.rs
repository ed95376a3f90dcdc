/// A gray sample type the encoder accepts.
///
/// Samples are widened to `i64` before range checking, so grids built from
/// wider integer types can carry values the encoder must reject (`300`,
/// `-1`) instead of silently truncating them.
pub trait GraySample: Copy {
    fn to_i64(self) -> i64;
}

macro_rules! gray_sample {
    ($($t:ty),*) => {
        $(
            impl GraySample for $t {
                #[inline]
                fn to_i64(self) -> i64 {
                    i64::from(self)
                }
            }
        )*
    };
}

gray_sample!(u8, u16, u32, i16, i32, i64);
