/// A unique ID that can be used to refer to a user.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct UserId(pub u64);

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct User {
    pub id: UserId,
    /// Display name, e.g. "Anna". A user-filter selection stores this name,
    /// so names must be distinct within one data set.
    pub name: String,
    pub sex: Sex,
}

/// Recorded sex of a user. Only drives the styling of the owner column.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Sex {
    Male,
    Female,
}
