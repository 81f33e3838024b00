use super::{Cons, Nil};

/// Member-wise conversion into a chain of compatible element types.
///
/// A chain of `(U0, ..., Un-1)` lifts into a chain of `(T0, ..., Tn-1)` exactly when the two
/// have the same arity and every `Ui: Into<Ti>` - the pairwise-constructibility rule, checked
/// entirely at compile time. The source is consumed and converted one element at a time.
///
/// # Examples
/// ```
/// # use bedrock::{hlist, HList};
/// # use bedrock::collections::product::LiftInto;
/// let wide: HList!(u32, String) = hlist!(5_u8, "hi").lift_into();
/// assert_eq!(wide, hlist!(5_u32, String::from("hi")));
/// ```
pub trait LiftInto<Target> {
    /// Converts every element of self into the corresponding element type of `Target`.
    fn lift_into(self) -> Target;
}

impl LiftInto<Nil> for Nil {
    fn lift_into(self) -> Nil {
        Nil
    }
}

impl<H, T, H2, T2> LiftInto<Cons<H2, T2>> for Cons<H, T>
where
    H: Into<H2>,
    T: LiftInto<T2>,
{
    fn lift_into(self) -> Cons<H2, T2> {
        Cons {
            head: self.head.into(),
            tail: self.tail.lift_into(),
        }
    }
}

/// Flattens a chain back into the native tuple of its element types.
///
/// This is the return road from [`From`]: native tuples convert into chains through `From`/
/// `Into` (implemented for arities 0 through 8), while chains convert back through this trait,
/// since a generic tuple can't be the self type of a `From` impl in this crate.
///
/// # Examples
/// ```
/// # use bedrock::hlist;
/// # use bedrock::collections::product::IntoTuple;
/// assert_eq!(hlist!(1, "two").into_tuple(), (1, "two"));
/// ```
pub trait IntoTuple {
    /// The native tuple with the same element types in the same order.
    type Tuple;

    /// Unpacks the chain into `Self::Tuple`.
    fn into_tuple(self) -> Self::Tuple;
}

/// Nests a flat list of types into the corresponding chain type.
macro_rules! chain_type {
    () => { Nil };
    ($head:ident $(, $rest:ident)*) => { Cons<$head, chain_type!($($rest),*)> };
}

/// Nests a flat list of expressions into the corresponding chain value.
macro_rules! chain_expr {
    () => { Nil };
    ($head:expr $(, $rest:expr)*) => {
        Cons {
            head: $head,
            tail: chain_expr!($($rest),*),
        }
    };
}

/// Nests a flat list of binding names into the corresponding chain pattern.
macro_rules! chain_pat {
    () => { Nil };
    ($head:ident $(, $rest:ident)*) => {
        Cons {
            head: $head,
            tail: chain_pat!($($rest),*),
        }
    };
}

/// Converts between a chain and the native tuple of the same element types, in both directions.
macro_rules! impl_tuple_conversions {
    ($($t:ident),*) => {
        impl<$($t),*> From<($($t,)*)> for chain_type!($($t),*) {
            #[allow(non_snake_case)]
            fn from(value: ($($t,)*)) -> Self {
                let ($($t,)*) = value;
                chain_expr!($($t),*)
            }
        }

        impl<$($t),*> IntoTuple for chain_type!($($t),*) {
            type Tuple = ($($t,)*);

            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::Tuple {
                let chain_pat!($($t),*) = self;
                ($($t,)*)
            }
        }
    };
}

impl_tuple_conversions!();
impl_tuple_conversions!(T0);
impl_tuple_conversions!(T0, T1);
impl_tuple_conversions!(T0, T1, T2);
impl_tuple_conversions!(T0, T1, T2, T3);
impl_tuple_conversions!(T0, T1, T2, T3, T4);
impl_tuple_conversions!(T0, T1, T2, T3, T4, T5);
impl_tuple_conversions!(T0, T1, T2, T3, T4, T5, T6);
impl_tuple_conversions!(T0, T1, T2, T3, T4, T5, T6, T7);
