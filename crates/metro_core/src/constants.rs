/// Connection weight type (distance in km)
pub type Weight = f64;
/// Distance reported for stations that cannot be reached from the source
pub const UNREACHABLE: Weight = Weight::INFINITY;
