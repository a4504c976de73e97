pub mod db;
pub mod document;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod sale {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
