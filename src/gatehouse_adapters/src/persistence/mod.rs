pub mod hashmap_user_directory;
pub mod postgrest_user_directory;

pub use hashmap_user_directory::HashMapUserDirectory;
pub use postgrest_user_directory::PostgrestUserDirectory;
