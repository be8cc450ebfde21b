pub mod activity;
pub mod goal;
pub mod institution;
pub mod member;

pub use activity::Activity;
pub use goal::Goal;
pub use institution::Institution;
pub use member::Member;
