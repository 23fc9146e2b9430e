mod handlers;
mod routes;
mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use routes::create_router;
pub use types::{ApiError, CategoriesResponse, DeleteResponse, TemplateRecord};
