pub mod change_feed;
pub mod db;
pub mod memory;
pub mod invitation {
    pub mod entity;
    pub mod repository;
}
pub mod list {
    pub mod entity;
    pub mod repository;
}
pub mod list_item {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
