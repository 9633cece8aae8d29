pub mod detail;
pub mod error_state;
pub mod pagination;
pub mod shell;

pub use detail::*;
pub use error_state::*;
pub use pagination::*;
pub use shell::*;
