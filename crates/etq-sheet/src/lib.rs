pub mod html;

pub use html::{render_sheet, write_sheet};
