pub mod application {
    pub mod category {
        pub mod seed;
    }
    pub mod product {
        pub mod delete;
        pub mod service;
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod seed;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod photo;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod submit;
        }
    }
}
