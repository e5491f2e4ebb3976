pub mod modules {
    pub mod posts {
        pub mod core {
            pub mod errors;
            pub mod id_generator;
            pub mod ports;
            pub mod post;
            pub mod store;
        }
        pub mod use_cases {
            pub mod create_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_posts {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_post {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_post {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod responses;
                pub mod validation;
            }
            pub mod outbound {
                pub mod posts_in_memory;
            }
        }
    }
}

pub mod shell;
