pub mod prefix;
pub mod range;
pub mod resolution;
pub mod scope;
