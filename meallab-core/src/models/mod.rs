mod meal;
mod summary;

pub use meal::Meal;
pub use summary::MealSummary;
