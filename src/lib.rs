#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod error;
pub mod ops;
pub mod optional;

pub use error::BadOptionalAccess;
pub use ops::clear::Clear;
pub use optional::{
    IN_PLACE, InPlace, NULLOPT, NullOpt, Optional, make_optional, make_optional_in_place,
    make_optional_list, swap,
};
