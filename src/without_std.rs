#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        ops,
        str,
    };

    pub use alloc::string;
    pub use alloc::vec;
    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}
