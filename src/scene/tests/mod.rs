use super::*;

mod bounding_box_tests;
