pub mod activities;
pub mod goals;
pub mod institutions;
pub mod members;
pub mod whoami;
