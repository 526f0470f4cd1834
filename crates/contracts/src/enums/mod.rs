pub mod category;
pub mod page_kind;
pub mod renderer;

pub use category::Category;
pub use page_kind::PageKind;
pub use renderer::Renderer;
