pub mod password;
pub mod playground;
pub mod render;

pub use crate::domain::DomainError;
pub use password::{CharacterPool, PasswordOptions};
pub use playground::{CreationParameters, TemplateFile};
pub use render::RenderContext;
