//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{
    build_launch_args, resolve_config_path, resolve_host_override, resolve_port_override,
    ConfigSource, LaunchProfile,
};
