pub mod aliases;
pub mod normalize;
pub mod policy;
pub mod region;

pub use aliases::RegionalAliases;
pub use normalize::normalize;
pub use policy::{RegionScoped, RegionSource, Requester, VisibilityPolicy};
pub use region::{RegionalKey, Role};
