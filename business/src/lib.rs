pub mod application {
    pub mod invitation {
        pub mod accept;
        pub mod create;
        pub mod delete;
        pub mod invite_by_email;
        pub mod subscribe;
        pub mod update_status;
    }
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod subscribe;
        pub mod toggle;
        pub mod update;
    }
    pub mod list {
        pub mod create;
        pub mod delete;
        pub mod subscribe;
        pub mod update;
    }
    pub mod suggestion {
        pub mod suggest;
    }
    pub mod user {
        pub mod find_by_email;
        pub mod sync_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod color;
        pub mod index;
        pub mod model;
    }
    pub mod invitation {
        pub mod enrichment;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod accept;
            pub mod create;
            pub mod delete;
            pub mod invite_by_email;
            pub mod subscribe;
            pub mod update_status;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod subscribe;
            pub mod toggle;
            pub mod update;
        }
    }
    pub mod list {
        pub mod errors;
        pub mod model;
        pub mod policy;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod subscribe;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod live;
        pub mod value_objects;
    }
    pub mod suggestion {
        pub mod engine;
        pub mod model;
        pub mod use_cases {
            pub mod suggest;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod find_by_email;
            pub mod sync_profile;
        }
    }
}

