//! Word lists generated by the build script from `data/`

include!(concat!(env!("OUT_DIR"), "/common.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
