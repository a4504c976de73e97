pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod report {
        pub mod customer_total;
        pub mod inventory;
        pub mod receipt;
        pub mod sales_total;
        pub mod stock_total;
    }
    pub mod sale {
        pub mod create;
    }
    pub mod user {
        pub mod authenticate;
        pub mod register;
        pub mod request_password_reset;
        pub mod reset_password;
        pub mod set_password;
        pub mod verify_reset_token;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod photo;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod report {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod customer_total;
            pub mod inventory;
            pub mod receipt;
            pub mod sales_total;
            pub mod stock_total;
        }
    }
    pub mod sale {
        pub mod errors;
        pub mod item_input;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod authenticate;
            pub mod register;
            pub mod request_password_reset;
            pub mod reset_password;
            pub mod set_password;
            pub mod verify_reset_token;
        }
    }
}
