pub mod clear;
pub mod opt_cmp;
