pub mod core {
    pub mod config;
    pub mod error;
    pub mod pipeline;
    pub mod tracing_init;
}

pub mod models {
    pub mod company;
    pub mod user;
}

pub mod validation {
    pub mod record;
}

pub mod loader {
    pub mod dataset;
}

pub mod report {
    pub mod builder;
    pub mod render;
}

pub mod writer {
    pub mod output;
}

pub use crate::core::pipeline::run;
pub use crate::report::builder::process;
