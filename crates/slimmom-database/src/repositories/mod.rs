//! Database repositories, one per entity.

pub mod diary;
pub mod product;
pub mod profile;
pub mod session;
pub mod user;

pub use diary::DiaryRepository;
pub use product::ProductRepository;
pub use profile::ProfileRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
