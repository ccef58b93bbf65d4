// \file src/macros.rs
//! macros for operator impls

/// Implement owned-operand variants of a binop by forwarding to ref-ref
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

/// Implement `OpAssign` for owned and borrowed rhs by forwarding to ref-ref
macro_rules! forward_op_assign_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident, $binop:ident, $binmethod:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            #[inline]
            fn $method(&mut self, other: &$res) {
                *self = $binop::$binmethod(&*self, other);
            }
        }

        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                *self = $binop::$binmethod(&*self, &other);
            }
        }
    };
}
