mod hollow;
mod subtract;
mod union;

pub use hollow::Hollow;
pub use subtract::SubtractOpenings;
pub use union::{single_body, UnionAll};
