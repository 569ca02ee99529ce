//! Filesystem primitives shared by the deploy strategies.

pub mod overlay;

pub use overlay::{
    copy_entry_merge, create_entry_symlink, link_resolves_into, remove_path_if_exists,
    source_entries, unique_temp_path,
};
