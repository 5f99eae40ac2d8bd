//! Application Layer - Use Cases
//!
//! One use case per exposed operation. Each is a single linear
//! validate -> store call -> respond sequence; no retries, no partial
//! completion states.

pub mod create_figure;
pub mod delete_figure;
pub mod get_figure;
pub mod list_figures;
pub mod update_figure;

pub use create_figure::CreateFigureUseCase;
pub use delete_figure::DeleteFigureUseCase;
pub use get_figure::GetFigureUseCase;
pub use list_figures::ListFiguresUseCase;
pub use update_figure::UpdateFigureUseCase;
