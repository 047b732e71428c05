pub mod extract;
pub mod locate;
pub mod status;
pub mod template;
