use super::user::UserId;

/// A unique ID that can be used to refer to a category.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct CategoryId(pub u64);

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Category {
    pub id: CategoryId,
    /// A short description of the category, e.g. "Grocery".
    pub title: String,
    /// Display glyph shown next to the title, e.g. "🍞".
    pub icon: String,
    /// The user who owns this category. Must refer to an existing user.
    pub owner_id: UserId,
}
