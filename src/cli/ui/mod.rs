pub mod panels;
pub mod table_renderer;
