pub mod footer;
pub mod hero;
pub mod nav;
pub mod philosophy;
pub mod project_index;
