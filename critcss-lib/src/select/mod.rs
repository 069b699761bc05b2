pub mod selector_matcher;
pub mod wanted;
