/// Compare the output of a solution against an expected value.
///
/// Unlike [PartialEq] this only has one implementation per output type, so
/// integer literals in `expect = (..)` infer to whatever the solution returns.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

macro_rules! tuple {
    ($($a:ident $b:ident $n:tt),*) => {
        impl<$($a, $b,)*> OutputEq<($($b,)*)> for ($($a,)*)
        where
            $($a: OutputEq<$b>,)*
        {
            #[inline]
            fn output_eq(&self, other: &($($b,)*)) -> bool {
                true $(&& self.$n.output_eq(&other.$n))*
            }
        }
    };
}

tuple!(A X 0);
tuple!(A X 0, B Y 1);
tuple!(A X 0, B Y 1, C Z 2);

impl<A, B> OutputEq<Option<B>> for Option<A>
where
    A: OutputEq<B>,
{
    #[inline]
    fn output_eq(&self, other: &Option<B>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.output_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl OutputEq<&str> for String {
    #[inline]
    fn output_eq(&self, other: &&str) -> bool {
        self == other
    }
}

macro_rules! partial_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl OutputEq<$ty> for $ty {
                #[inline]
                fn output_eq(&self, other: &Self) -> bool {
                    other == self
                }
            }
        )*
    };
}

partial_eq!(usize, isize, u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, bool, ());
