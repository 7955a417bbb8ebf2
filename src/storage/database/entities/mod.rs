/// Team entity module
pub mod team;
/// User entity module
pub mod user;

pub use team::Entity as Team;
pub use user::Entity as User;
