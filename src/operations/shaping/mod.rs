mod extrude;

pub use extrude::ExtrudeProfile;
