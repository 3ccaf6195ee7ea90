use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Not checked against the author collection; may dangle.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}

impl Entity for Book {
    fn id(&self) -> i32 {
        self.id
    }
}
