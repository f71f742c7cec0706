// Do this because numerics calls for a lot of non-standard names
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(uncommon_codepoints)]
pub mod array_factor;
pub mod helper;
pub mod polar_chart;
pub mod sweep;
pub mod taper;
