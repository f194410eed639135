pub mod indexmap;
pub mod pretty_type_name;
