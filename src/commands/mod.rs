mod context;
pub mod criteria;
pub mod generate;
pub mod init;
pub mod schema;

pub use context::{load_config, write_output};
pub use criteria::{format_criteria_text, run_criteria, run_criteria_impl};
pub use generate::{build_generator, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use schema::{render_schema, run_schema, run_schema_impl};
