pub mod context;
pub mod error;
pub mod response;
pub mod tags;
pub mod views;

pub mod auth {
    pub mod dto;
    pub mod error_mapper;
    pub mod pages;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod home {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod pages;
    pub mod routes;
}
pub mod report {
    pub mod error_mapper;
    pub mod pages;
    pub mod routes;
}
pub mod sale {
    pub mod dto;
    pub mod error_mapper;
    pub mod pages;
    pub mod routes;
}
